use crate::structs::consumption_by_category::ConsumptionByCategory;
use crate::structs::frequency_by_food::FrequencyByFood;
use crate::structs::top_food::TopFood;
use crate::structs::user_response::UserResponse;

/// Source of the bundled dataset shown when the backend is unreachable.
/// Injectable so tests can substitute alternate fixtures.
pub trait FallbackSource: Send + Sync {
    fn top_foods(&self) -> Vec<TopFood>;

    fn frequency_by_food(&self) -> Vec<FrequencyByFood>;

    fn consumption_by_category(&self) -> Vec<ConsumptionByCategory>;

    fn user_responses(&self, dni: &str) -> Option<Vec<UserResponse>>;

    /// Identifiers suggested to the operator when a lookup finds nothing.
    fn known_dnis(&self) -> Vec<String>;
}
