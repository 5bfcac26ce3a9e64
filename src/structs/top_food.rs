use serde::{Deserialize, Serialize};

/// One row of the `/stats/top-foods` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopFood {
    #[serde(rename = "alimento")]
    pub food: String,
    pub total: u32,
}
