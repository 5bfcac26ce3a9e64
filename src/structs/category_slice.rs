/// One slice of the category share chart: summed total across buckets plus
/// the share of the grand total, pre-formatted to one decimal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySlice {
    pub name: String,
    pub total: u32,
    pub percentage: String,
}
