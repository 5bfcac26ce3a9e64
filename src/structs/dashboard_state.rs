use crate::enums::section_state::SectionState;
use crate::structs::consumption_by_category::ConsumptionByCategory;
use crate::structs::frequency_by_food::FrequencyByFood;
use crate::structs::top_food::TopFood;
use crate::structs::user_response::UserResponse;

/// The four independent section slices. Each is written only by its own
/// fetch; a failure in one never touches the others.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub top_foods: SectionState<Vec<TopFood>>,
    pub frequency: SectionState<Vec<FrequencyByFood>>,
    pub category: SectionState<Vec<ConsumptionByCategory>>,
    pub user: SectionState<Vec<UserResponse>>,
}
