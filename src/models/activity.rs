use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status de participação de um usuário num desafio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActivityType {
    Ongoing,
    Completed,
}

impl ActivityType {
    /// 100 = concluído; qualquer outro valor continua em andamento
    pub fn from_progress(progress: i32) -> Self {
        if progress == 100 {
            ActivityType::Completed
        } else {
            ActivityType::Ongoing
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Ongoing => "Ongoing",
            ActivityType::Completed => "Completed",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registro de participação (coleção myActivities)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub challenge_id: String,
    pub user_email: String,
    pub user_name: Option<String>,
    pub title: Option<String>,
    pub image: Option<String>,
    pub join_at: DateTime,
    pub progress: i32,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
}

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct ProgressRequest {
    pub progress: i32,
}
