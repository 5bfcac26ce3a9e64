use crate::enums::frequency::Frequency;

/// One row of the frequency pivot chart. `label` is the display name
/// (truncated with an ellipsis when long), `food` keeps the full name so no
/// reverse lookup from the label is ever needed. `counts` is indexed by
/// [`Frequency::index`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyRow {
    pub label: String,
    pub food: String,
    pub counts: [u32; 4],
    pub total: u32,
}

impl FrequencyRow {
    pub fn count(&self, frequency: Frequency) -> u32 {
        self.counts[frequency.index()]
    }
}
