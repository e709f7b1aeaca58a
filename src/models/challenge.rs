use crate::utils::error::AppError;
use mongodb::bson::{doc, Bson, Document};
use serde::{Deserialize, Serialize};

pub const STATUS_ONGOING: &str = "Ongoing";

/// Query string de GET /challenges
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ChallengeQuery {
    /// Lista separada por vírgula
    pub category: Option<String>,
    /// Desafios que começam nesta data ou depois
    pub start_date: Option<String>,
    /// Desafios que terminam nesta data ou antes
    pub end_date: Option<String>,
    /// Limite inferior inclusivo
    pub min_participants: Option<String>,
    /// Limite superior inclusivo
    pub max_participants: Option<String>,
}

impl ChallengeQuery {
    /// Monta o filtro MongoDB. Parâmetros vazios são ignorados.
    pub fn to_filter(&self) -> Result<Document, AppError> {
        let mut filter = Document::new();

        if let Some(categories) = non_empty(&self.category) {
            let list: Vec<Bson> = categories
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(|c| Bson::String(c.to_string()))
                .collect();
            if !list.is_empty() {
                filter.insert("category", doc! { "$in": list });
            }
        }

        if let Some(start) = non_empty(&self.start_date) {
            filter.insert("startDate", doc! { "$gte": start });
        }
        if let Some(end) = non_empty(&self.end_date) {
            filter.insert("endDate", doc! { "$lte": end });
        }

        let min = parse_bound(&self.min_participants, "minParticipants")?;
        let max = parse_bound(&self.max_participants, "maxParticipants")?;
        if min.is_some() || max.is_some() {
            let mut range = Document::new();
            if let Some(min) = min {
                range.insert("$gte", min);
            }
            if let Some(max) = max {
                range.insert("$lte", max);
            }
            filter.insert("participants", range);
        }

        Ok(filter)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_bound(value: &Option<String>, name: &str) -> Result<Option<f64>, AppError> {
    match non_empty(value) {
        None => Ok(None),
        Some(raw) => raw
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(Some)
            .ok_or_else(|| AppError::InvalidRequest(format!("{} must be a number", name))),
    }
}

/// Corpo de PATCH /challenges/join/{id}
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JoinChallengeRequest {
    pub user_email: String,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, utoipa::ToSchema)]
pub struct JoinChallengeResponse {
    pub success: bool,
    pub joined: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, utoipa::ToSchema)]
pub struct IsJoinedResponse {
    pub joined: bool,
}

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmailQuery {
    /// Email exato do usuário
    pub email: Option<String>,
}
