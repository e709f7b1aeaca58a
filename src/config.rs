use std::env;

const DEFAULT_DATABASE: &str = "EcoTrackUser";
const CLUSTER_HOST: &str = "cluster0.9trptct.mongodb.net/?appName=Cluster0";

/// Configuração do servidor, lida uma vez na inicialização
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub mongodb_uri: String,
    pub database_name: String,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    Missing(&'static str),
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// `MONGODB_URI` tem precedência; sem ele a URI do cluster é montada
    /// com `DB_USER` e `DB_PASSWORD`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid("PORT", raw))?,
            None => 3000,
        };

        let mongodb_uri = match lookup("MONGODB_URI").filter(|u| !u.is_empty()) {
            Some(uri) => uri,
            None => {
                let user = lookup("DB_USER").ok_or(ConfigError::Missing("DB_USER"))?;
                let password = lookup("DB_PASSWORD").ok_or(ConfigError::Missing("DB_PASSWORD"))?;
                format!("mongodb+srv://{}:{}@{}", user, password, CLUSTER_HOST)
            }
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            mongodb_uri,
            database_name: lookup("MONGODB_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
        })
    }

    /// URI sem a senha, para log
    pub fn redacted_uri(&self) -> String {
        match (self.mongodb_uri.find("://"), self.mongodb_uri.rfind('@')) {
            (Some(scheme_end), Some(at)) if at > scheme_end => {
                let credentials = &self.mongodb_uri[scheme_end + 3..at];
                let user = credentials.split(':').next().unwrap_or("");
                format!(
                    "{}{}:****{}",
                    &self.mongodb_uri[..scheme_end + 3],
                    user,
                    &self.mongodb_uri[at..]
                )
            }
            _ => self.mongodb_uri.clone(),
        }
    }
}
