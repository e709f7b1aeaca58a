use serde::{Deserialize, Serialize};

/// Snapshot de estatísticas da comunidade. Os valores são fixos,
/// não calculados; cada POST acrescenta um novo snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSnapshot {
    #[serde(rename = "totalCO2Saved")]
    pub total_co2_saved: i32,
    pub total_plastic_reduced: i32,
    pub total_challenges_joined: i32,
    pub total_users: i32,
}

impl StatisticsSnapshot {
    pub const fn seed() -> Self {
        StatisticsSnapshot {
            total_co2_saved: 3580,
            total_plastic_reduced: 1245,
            total_challenges_joined: 870,
            total_users: 415,
        }
    }
}
