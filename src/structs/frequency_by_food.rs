use serde::{Deserialize, Serialize};
use crate::enums::frequency::Frequency;

/// One (food, bucket) row of the `/stats/frequency-by-food` endpoint.
/// Buckets absent for a food are implicit zeros.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyByFood {
    #[serde(rename = "alimento")]
    pub food: String,
    #[serde(rename = "frecuencia")]
    pub frequency: Frequency,
    pub total: u32,
}
