use serde::{Deserialize, Serialize};
use crate::structs::user_response::UserResponse;

/// Body of `/stats/user/{dni}`. A missing `respuestas` field reads as an
/// empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStatsResponse {
    #[serde(rename = "respuestas", default)]
    pub responses: Vec<UserResponse>,
}
