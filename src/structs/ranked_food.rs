/// One bar of the top foods chart. `food` keeps the full name alongside the
/// truncated `label`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedFood {
    pub label: String,
    pub food: String,
    pub total: u32,
}
