use serde::{Deserialize, Serialize};
use crate::enums::frequency::Frequency;

/// One food item a user reported in the survey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    #[serde(rename = "alimento")]
    pub food: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "frecuencia")]
    pub frequency: Frequency,
    #[serde(rename = "observaciones", default)]
    pub notes: String,
}
