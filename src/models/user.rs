use serde::{Deserialize, Serialize};

pub const USER_EXISTS_MESSAGE: &str = "User Already Exits. Do not need to insert again";

/// Corpo de PATCH /users. Campos ausentes são gravados como null.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, utoipa::ToSchema)]
pub struct UserExistsResponse {
    pub message: String,
}

impl Default for UserExistsResponse {
    fn default() -> Self {
        UserExistsResponse {
            message: USER_EXISTS_MESSAGE.to_string(),
        }
    }
}
