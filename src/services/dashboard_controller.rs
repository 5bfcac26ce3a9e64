use crate::enums::section::Section;
use crate::enums::section_state::FetchOutcome;
use crate::errors::StatsResult;
use crate::structs::dashboard_state::DashboardState;
use crate::structs::user_response::UserResponse;
use crate::traits::fallback_source::FallbackSource;
use crate::traits::stats_backend::StatsBackend;

/// Orchestrates the four section fetches: the three whole-dataset sections
/// on load, the per-user lookup on demand. Every failure path degrades to
/// the fallback source instead of leaving a section empty, and always
/// leaves the section out of the loading state.
pub struct DashboardController<B, F> {
    backend: B,
    fallback: F,
    pub state: DashboardState,
}

impl<B: StatsBackend, F: FallbackSource> DashboardController<B, F> {
    pub fn new(backend: B, fallback: F) -> Self {
        Self {
            backend,
            fallback,
            state: DashboardState::default(),
        }
    }

    /// Fetch the three whole-dataset sections concurrently. Their states are
    /// isolated: one section falling back never affects the others, and no
    /// completion order is assumed.
    pub async fn refresh_overview(&mut self) {
        self.state.top_foods.begin_load();
        self.state.frequency.begin_load();
        self.state.category.begin_load();

        let (top_foods, frequency, category) = futures::join!(
            self.backend.top_foods(),
            self.backend.frequency_by_food(),
            self.backend.consumption_by_category(),
        );

        let top_outcome =
            Self::section_outcome(Section::TopFoods, top_foods, || self.fallback.top_foods());
        let frequency_outcome = Self::section_outcome(Section::Frequency, frequency, || {
            self.fallback.frequency_by_food()
        });
        let category_outcome = Self::section_outcome(Section::Category, category, || {
            self.fallback.consumption_by_category()
        });

        self.state.top_foods.apply(top_outcome);
        self.state.frequency.apply(frequency_outcome);
        self.state.category.apply(category_outcome);
    }

    fn section_outcome<T>(
        section: Section,
        result: StatsResult<T>,
        fallback: impl FnOnce() -> T,
    ) -> FetchOutcome<T> {
        match result {
            Ok(data) => FetchOutcome::Loaded(data),
            Err(error) => {
                log::warn!("⚠️ Fetch failed for {}: {}", section.as_str(), error);
                FetchOutcome::Fallback {
                    data: fallback(),
                    notice: format!(
                        "API unavailable - showing demo data. Backend error: {}",
                        error
                    ),
                }
            }
        }
    }

    /// Look up one user's responses. A blank or whitespace-only DNI is a
    /// no-op. Lookups are uncached and independent; whichever outcome is
    /// applied last wins (see [`Self::apply_user_outcome`]).
    pub async fn lookup_user(&mut self, dni: &str) {
        let dni = dni.trim();
        if dni.is_empty() {
            return;
        }
        self.state.user.begin_load();
        let outcome = self.user_outcome(dni).await;
        self.apply_user_outcome(outcome);
    }

    /// Run the per-user fetch without touching state. On 404 and on any
    /// transport failure the demo catalog is consulted before giving up.
    pub async fn user_outcome(&self, dni: &str) -> FetchOutcome<Vec<UserResponse>> {
        match self.backend.user_responses(dni).await {
            Ok(body) => FetchOutcome::Loaded(body.responses),
            Err(error) => {
                let not_found = error.is_user_not_found();
                if !not_found {
                    log::warn!(
                        "⚠️ Fetch failed for {} (DNI {}): {}",
                        Section::User.as_str(),
                        dni,
                        error
                    );
                }
                self.demo_or_missing(dni, not_found)
            }
        }
    }

    /// Apply a user-lookup outcome, replacing the section state wholesale.
    /// Known limitation: there is no request sequencing, so when lookups
    /// overlap the last outcome applied overwrites earlier ones regardless
    /// of issue order.
    pub fn apply_user_outcome(&mut self, outcome: FetchOutcome<Vec<UserResponse>>) {
        self.state.user.apply(outcome);
    }

    fn demo_or_missing(&self, dni: &str, not_found: bool) -> FetchOutcome<Vec<UserResponse>> {
        if let Some(records) = self.fallback.user_responses(dni) {
            return FetchOutcome::Fallback {
                data: records,
                notice: format!("API unavailable - showing demo data for DNI: {}", dni),
            };
        }

        let suggestions = self.fallback.known_dnis().join(" or ");
        let notice = if not_found {
            format!(
                "No data found for DNI: {}. Try demo DNIs: {}",
                dni, suggestions
            )
        } else {
            format!("Backend unavailable. Try demo DNIs: {}", suggestions)
        };
        FetchOutcome::Fallback {
            data: Vec::new(),
            notice,
        }
    }
}
