use async_trait::async_trait;

use crate::errors::StatsResult;
use crate::structs::consumption_by_category::ConsumptionByCategory;
use crate::structs::frequency_by_food::FrequencyByFood;
use crate::structs::top_food::TopFood;
use crate::structs::user_stats_response::UserStatsResponse;

/// Gateway to the stats backend. One HTTP GET per call, no retries; a 404 on
/// the user endpoint surfaces as [`crate::errors::StatsError::UserNotFound`]
/// rather than a transport error.
#[async_trait]
pub trait StatsBackend: Send + Sync {
    async fn top_foods(&self) -> StatsResult<Vec<TopFood>>;

    async fn frequency_by_food(&self) -> StatsResult<Vec<FrequencyByFood>>;

    async fn consumption_by_category(&self) -> StatsResult<Vec<ConsumptionByCategory>>;

    async fn user_responses(&self, dni: &str) -> StatsResult<UserStatsResponse>;
}
