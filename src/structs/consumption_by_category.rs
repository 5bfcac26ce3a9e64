use serde::{Deserialize, Serialize};
use crate::enums::frequency::Frequency;

/// One (category, bucket) row of the `/stats/by-category` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumptionByCategory {
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "frecuencia")]
    pub frequency: Frequency,
    pub total: u32,
}
