use serde::{Deserialize, Serialize};
use std::fmt;

/// Consumption frequency bucket. The backend only ever emits these four
/// labels; anything else is a malformed response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frequency {
    Never,
    Monthly,
    Weekly,
    Daily,
}

impl Frequency {
    /// Pivot column order, least to most frequent.
    pub const ALL: [Frequency; 4] = [
        Frequency::Never,
        Frequency::Monthly,
        Frequency::Weekly,
        Frequency::Daily,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Never => "Never",
            Frequency::Monthly => "Monthly",
            Frequency::Weekly => "Weekly",
            Frequency::Daily => "Daily",
        }
    }

    /// Position in [`Frequency::ALL`], used to index pivot count arrays.
    pub fn index(&self) -> usize {
        match self {
            Frequency::Never => 0,
            Frequency::Monthly => 1,
            Frequency::Weekly => 2,
            Frequency::Daily => 3,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
