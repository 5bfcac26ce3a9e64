/// Result of one fetch attempt for a section, before it is applied to the
/// section's state. `Fallback` carries substitute data together with the
/// notice explaining why live data is not shown.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Loaded(T),
    Fallback { data: T, notice: String },
}

/// Per-section state machine. Exactly one source backs a section at any
/// time: applying an outcome replaces the previous state wholesale, live
/// and fallback data are never merged.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionState<T> {
    Idle,
    Loading,
    Loaded(T),
    Fallback { data: T, notice: String },
}

impl<T> SectionState<T> {
    pub fn begin_load(&mut self) {
        *self = SectionState::Loading;
    }

    pub fn apply(&mut self, outcome: FetchOutcome<T>) {
        *self = match outcome {
            FetchOutcome::Loaded(data) => SectionState::Loaded(data),
            FetchOutcome::Fallback { data, notice } => SectionState::Fallback { data, notice },
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SectionState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            SectionState::Loaded(data) | SectionState::Fallback { data, .. } => Some(data),
            SectionState::Idle | SectionState::Loading => None,
        }
    }

    /// Non-empty exactly when the section is showing fallback/demo data.
    pub fn notice(&self) -> Option<&str> {
        match self {
            SectionState::Fallback { notice, .. } => Some(notice.as_str()),
            _ => None,
        }
    }
}

impl<T> Default for SectionState<T> {
    fn default() -> Self {
        SectionState::Idle
    }
}
