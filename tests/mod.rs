use std::time::Duration;

use async_trait::async_trait;
use futures::stream::{FuturesUnordered, StreamExt};

use nutristats::enums::frequency::Frequency;
use nutristats::enums::section_state::SectionState;
use nutristats::errors::{StatsError, StatsResult};
use nutristats::services::dashboard_controller::DashboardController;
use nutristats::services::demo_catalog::DemoCatalog;
use nutristats::structs::consumption_by_category::ConsumptionByCategory;
use nutristats::structs::frequency_by_food::FrequencyByFood;
use nutristats::structs::top_food::TopFood;
use nutristats::structs::user_response::UserResponse;
use nutristats::structs::user_stats_response::UserStatsResponse;
use nutristats::traits::fallback_source::FallbackSource;
use nutristats::traits::stats_backend::StatsBackend;

fn network_error() -> StatsError {
    StatsError::NetworkError {
        operation: "HTTP request".to_string(),
        url: None,
        reason: "connection refused".to_string(),
    }
}

/// Backend where every endpoint fails at the transport level.
struct FailingBackend;

#[async_trait]
impl StatsBackend for FailingBackend {
    async fn top_foods(&self) -> StatsResult<Vec<TopFood>> {
        Err(network_error())
    }

    async fn frequency_by_food(&self) -> StatsResult<Vec<FrequencyByFood>> {
        Err(network_error())
    }

    async fn consumption_by_category(&self) -> StatsResult<Vec<ConsumptionByCategory>> {
        Err(network_error())
    }

    async fn user_responses(&self, _dni: &str) -> StatsResult<UserStatsResponse> {
        Err(network_error())
    }
}

/// Backend that serves fixed live data; the user endpoint answers 404.
struct HealthyBackend;

#[async_trait]
impl StatsBackend for HealthyBackend {
    async fn top_foods(&self) -> StatsResult<Vec<TopFood>> {
        Ok(vec![
            TopFood { food: "Lentils".to_string(), total: 12 },
            TopFood { food: "Oats".to_string(), total: 7 },
        ])
    }

    async fn frequency_by_food(&self) -> StatsResult<Vec<FrequencyByFood>> {
        Ok(vec![FrequencyByFood {
            food: "Lentils".to_string(),
            frequency: Frequency::Weekly,
            total: 12,
        }])
    }

    async fn consumption_by_category(&self) -> StatsResult<Vec<ConsumptionByCategory>> {
        Ok(vec![ConsumptionByCategory {
            category: "Legumes".to_string(),
            frequency: Frequency::Weekly,
            total: 12,
        }])
    }

    async fn user_responses(&self, dni: &str) -> StatsResult<UserStatsResponse> {
        Err(StatsError::UserNotFound { dni: dni.to_string() })
    }
}

/// Backend whose bodies decode fine except for one malformed section.
struct MalformedCategoryBackend;

#[async_trait]
impl StatsBackend for MalformedCategoryBackend {
    async fn top_foods(&self) -> StatsResult<Vec<TopFood>> {
        HealthyBackend.top_foods().await
    }

    async fn frequency_by_food(&self) -> StatsResult<Vec<FrequencyByFood>> {
        HealthyBackend.frequency_by_food().await
    }

    async fn consumption_by_category(&self) -> StatsResult<Vec<ConsumptionByCategory>> {
        Err(StatsError::DecodeError {
            endpoint: "/stats/by-category".to_string(),
            reason: "expected value at line 1 column 1".to_string(),
        })
    }

    async fn user_responses(&self, _dni: &str) -> StatsResult<UserStatsResponse> {
        Err(network_error())
    }
}

/// User endpoint with a per-DNI delay, used to exercise overlapping lookups.
struct SlowUserBackend;

impl SlowUserBackend {
    fn response_for(dni: &str) -> UserStatsResponse {
        UserStatsResponse {
            responses: vec![UserResponse {
                food: format!("food-for-{}", dni),
                category: "Test".to_string(),
                frequency: Frequency::Daily,
                notes: String::new(),
            }],
        }
    }
}

#[async_trait]
impl StatsBackend for SlowUserBackend {
    async fn top_foods(&self) -> StatsResult<Vec<TopFood>> {
        Ok(Vec::new())
    }

    async fn frequency_by_food(&self) -> StatsResult<Vec<FrequencyByFood>> {
        Ok(Vec::new())
    }

    async fn consumption_by_category(&self) -> StatsResult<Vec<ConsumptionByCategory>> {
        Ok(Vec::new())
    }

    async fn user_responses(&self, dni: &str) -> StatsResult<UserStatsResponse> {
        let delay = if dni == "A" { 50 } else { 5 };
        tokio::time::sleep(Duration::from_millis(delay)).await;
        Ok(Self::response_for(dni))
    }
}

#[tokio::test]
async fn failing_backend_falls_back_to_demo_tables() {
    let mut controller = DashboardController::new(FailingBackend, DemoCatalog);
    controller.refresh_overview().await;

    let catalog = DemoCatalog;
    assert!(!controller.state.top_foods.is_loading());
    assert_eq!(controller.state.top_foods.data(), Some(&catalog.top_foods()));
    assert_eq!(controller.state.frequency.data(), Some(&catalog.frequency_by_food()));
    assert_eq!(
        controller.state.category.data(),
        Some(&catalog.consumption_by_category())
    );

    let notice = controller.state.top_foods.notice().unwrap();
    assert!(notice.contains("unavailable"));
    assert!(notice.contains("connection refused"));
}

#[tokio::test]
async fn healthy_backend_loads_live_data_without_notices() {
    let mut controller = DashboardController::new(HealthyBackend, DemoCatalog);
    controller.refresh_overview().await;

    match &controller.state.top_foods {
        SectionState::Loaded(data) => {
            assert_eq!(data.len(), 2);
            assert_eq!(data[0].food, "Lentils");
        }
        other => panic!("expected Loaded, got {:?}", other),
    }
    assert!(controller.state.top_foods.notice().is_none());
    assert!(controller.state.frequency.notice().is_none());
    assert!(controller.state.category.notice().is_none());
}

#[tokio::test]
async fn one_malformed_section_does_not_affect_the_others() {
    let mut controller = DashboardController::new(MalformedCategoryBackend, DemoCatalog);
    controller.refresh_overview().await;

    assert!(controller.state.top_foods.notice().is_none());
    assert!(controller.state.frequency.notice().is_none());

    let catalog = DemoCatalog;
    assert_eq!(
        controller.state.category.data(),
        Some(&catalog.consumption_by_category())
    );
    assert!(controller.state.category.notice().unwrap().contains("unavailable"));
}

#[tokio::test]
async fn known_demo_dni_against_failing_backend_serves_demo_records() {
    let mut controller = DashboardController::new(FailingBackend, DemoCatalog);
    controller.lookup_user("12345678").await;

    let expected = DemoCatalog.user_responses("12345678").unwrap();
    assert!(!controller.state.user.is_loading());
    assert_eq!(controller.state.user.data(), Some(&expected));
    assert_eq!(
        controller.state.user.notice(),
        Some("API unavailable - showing demo data for DNI: 12345678")
    );
}

#[tokio::test]
async fn unknown_dni_against_failing_backend_names_both_demo_dnis() {
    let mut controller = DashboardController::new(FailingBackend, DemoCatalog);
    controller.lookup_user("00000000").await;

    assert_eq!(controller.state.user.data(), Some(&Vec::new()));
    let notice = controller.state.user.notice().unwrap();
    assert!(notice.contains("12345678"));
    assert!(notice.contains("87654321"));
    assert!(notice.starts_with("Backend unavailable"));
}

#[tokio::test]
async fn not_found_dni_gets_the_no_data_message() {
    let mut controller = DashboardController::new(HealthyBackend, DemoCatalog);
    controller.lookup_user("00000000").await;

    assert_eq!(controller.state.user.data(), Some(&Vec::new()));
    let notice = controller.state.user.notice().unwrap();
    assert_eq!(
        notice,
        "No data found for DNI: 00000000. Try demo DNIs: 12345678 or 87654321"
    );
}

#[tokio::test]
async fn not_found_demo_dni_still_serves_demo_records() {
    // HealthyBackend answers 404 for every DNI; the demo catalog fills in.
    let mut controller = DashboardController::new(HealthyBackend, DemoCatalog);
    controller.lookup_user("87654321").await;

    let expected = DemoCatalog.user_responses("87654321").unwrap();
    assert_eq!(controller.state.user.data(), Some(&expected));
    assert_eq!(
        controller.state.user.notice(),
        Some("API unavailable - showing demo data for DNI: 87654321")
    );
}

#[tokio::test]
async fn blank_dni_is_a_no_op() {
    let mut controller = DashboardController::new(FailingBackend, DemoCatalog);
    controller.lookup_user("   ").await;

    assert!(!controller.state.user.is_loading());
    assert_eq!(controller.state.user, SectionState::Idle);
}

#[tokio::test]
async fn overlapping_lookups_last_resolved_wins() {
    // Known limitation: lookups are not sequenced, so the last response to
    // resolve overwrites the section even if it was issued first.
    let mut controller = DashboardController::new(SlowUserBackend, DemoCatalog);

    let mut pending = FuturesUnordered::new();
    pending.push(controller.user_outcome("A")); // slow, issued first
    pending.push(controller.user_outcome("B")); // fast, issued second

    let mut outcomes = Vec::new();
    while let Some(outcome) = pending.next().await {
        outcomes.push(outcome);
    }
    drop(pending);

    // resolution order: B first, A last
    for outcome in outcomes {
        controller.apply_user_outcome(outcome);
    }

    let data = controller.state.user.data().unwrap();
    assert_eq!(data[0].food, "food-for-A");
}

#[test]
fn user_stats_response_defaults_missing_respuestas_to_empty() {
    let parsed: UserStatsResponse = serde_json::from_str("{}").unwrap();
    assert!(parsed.responses.is_empty());
}

#[test]
fn wire_records_decode_the_backend_field_names() {
    let top: TopFood = serde_json::from_str(r#"{"alimento":"Rice","total":245}"#).unwrap();
    assert_eq!(top.food, "Rice");

    let row: FrequencyByFood =
        serde_json::from_str(r#"{"alimento":"Rice","frecuencia":"Daily","total":89}"#).unwrap();
    assert_eq!(row.frequency, Frequency::Daily);

    let user: UserResponse = serde_json::from_str(
        r#"{"alimento":"Rice","categoria":"Grains","frecuencia":"Daily","observaciones":"Main staple food"}"#,
    )
    .unwrap();
    assert_eq!(user.notes, "Main staple food");
}
