use once_cell::sync::Lazy;

use crate::enums::frequency::Frequency;
use crate::structs::consumption_by_category::ConsumptionByCategory;
use crate::structs::frequency_by_food::FrequencyByFood;
use crate::structs::top_food::TopFood;
use crate::structs::user_response::UserResponse;
use crate::traits::fallback_source::FallbackSource;

// The bundled demo dataset. These tables are the offline/demo contract:
// tests compare fallback output against them verbatim, so the values must
// not drift.

const TOP_FOODS: &[(&str, u32)] = &[
    ("Rice", 245),
    ("Chicken", 198),
    ("Bread", 187),
    ("Eggs", 156),
    ("Milk", 143),
    ("Potatoes", 132),
    ("Tomatoes", 121),
    ("Onions", 108),
    ("Bananas", 95),
    ("Apples", 87),
];

const FREQUENCY_BY_FOOD: &[(&str, Frequency, u32)] = &[
    ("Rice", Frequency::Daily, 89),
    ("Rice", Frequency::Weekly, 76),
    ("Rice", Frequency::Monthly, 45),
    ("Rice", Frequency::Never, 35),
    ("Chicken", Frequency::Daily, 45),
    ("Chicken", Frequency::Weekly, 87),
    ("Chicken", Frequency::Monthly, 43),
    ("Chicken", Frequency::Never, 23),
    ("Bread", Frequency::Daily, 67),
    ("Bread", Frequency::Weekly, 65),
    ("Bread", Frequency::Monthly, 32),
    ("Bread", Frequency::Never, 23),
    ("Eggs", Frequency::Daily, 34),
    ("Eggs", Frequency::Weekly, 67),
    ("Eggs", Frequency::Monthly, 35),
    ("Eggs", Frequency::Never, 20),
    ("Milk", Frequency::Daily, 56),
    ("Milk", Frequency::Weekly, 45),
    ("Milk", Frequency::Monthly, 25),
    ("Milk", Frequency::Never, 17),
];

const CONSUMPTION_BY_CATEGORY: &[(&str, Frequency, u32)] = &[
    ("Grains", Frequency::Daily, 156),
    ("Grains", Frequency::Weekly, 98),
    ("Grains", Frequency::Monthly, 45),
    ("Grains", Frequency::Never, 23),
    ("Proteins", Frequency::Daily, 89),
    ("Proteins", Frequency::Weekly, 134),
    ("Proteins", Frequency::Monthly, 67),
    ("Proteins", Frequency::Never, 34),
    ("Vegetables", Frequency::Daily, 78),
    ("Vegetables", Frequency::Weekly, 123),
    ("Vegetables", Frequency::Monthly, 56),
    ("Vegetables", Frequency::Never, 28),
    ("Fruits", Frequency::Daily, 45),
    ("Fruits", Frequency::Weekly, 87),
    ("Fruits", Frequency::Monthly, 43),
    ("Fruits", Frequency::Never, 21),
    ("Dairy", Frequency::Daily, 67),
    ("Dairy", Frequency::Weekly, 54),
    ("Dairy", Frequency::Monthly, 32),
    ("Dairy", Frequency::Never, 18),
];

const USER_RESPONSES: &[(&str, &[(&str, &str, Frequency, &str)])] = &[
    (
        "12345678",
        &[
            ("Rice", "Grains", Frequency::Daily, "Main staple food"),
            ("Chicken", "Proteins", Frequency::Weekly, "Usually on weekends"),
            ("Broccoli", "Vegetables", Frequency::Weekly, "Good source of vitamins"),
            ("Milk", "Dairy", Frequency::Daily, "With breakfast cereal"),
            ("Bananas", "Fruits", Frequency::Daily, "Post-workout snack"),
        ],
    ),
    (
        "87654321",
        &[
            ("Bread", "Grains", Frequency::Daily, "For breakfast and lunch"),
            ("Eggs", "Proteins", Frequency::Daily, "Scrambled or boiled"),
            ("Tomatoes", "Vegetables", Frequency::Weekly, "In salads mostly"),
            ("Apples", "Fruits", Frequency::Weekly, "Healthy snack option"),
        ],
    ),
];

static TOP_FOODS_TABLE: Lazy<Vec<TopFood>> = Lazy::new(|| {
    TOP_FOODS
        .iter()
        .map(|(food, total)| TopFood {
            food: (*food).to_string(),
            total: *total,
        })
        .collect()
});

static FREQUENCY_TABLE: Lazy<Vec<FrequencyByFood>> = Lazy::new(|| {
    FREQUENCY_BY_FOOD
        .iter()
        .map(|(food, frequency, total)| FrequencyByFood {
            food: (*food).to_string(),
            frequency: *frequency,
            total: *total,
        })
        .collect()
});

static CATEGORY_TABLE: Lazy<Vec<ConsumptionByCategory>> = Lazy::new(|| {
    CONSUMPTION_BY_CATEGORY
        .iter()
        .map(|(category, frequency, total)| ConsumptionByCategory {
            category: (*category).to_string(),
            frequency: *frequency,
            total: *total,
        })
        .collect()
});

/// The bundled [`FallbackSource`], backed by the constant tables above.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoCatalog;

impl FallbackSource for DemoCatalog {
    fn top_foods(&self) -> Vec<TopFood> {
        TOP_FOODS_TABLE.clone()
    }

    fn frequency_by_food(&self) -> Vec<FrequencyByFood> {
        FREQUENCY_TABLE.clone()
    }

    fn consumption_by_category(&self) -> Vec<ConsumptionByCategory> {
        CATEGORY_TABLE.clone()
    }

    fn user_responses(&self, dni: &str) -> Option<Vec<UserResponse>> {
        USER_RESPONSES
            .iter()
            .find(|(known, _)| *known == dni)
            .map(|(_, rows)| {
                rows.iter()
                    .map(|(food, category, frequency, notes)| UserResponse {
                        food: (*food).to_string(),
                        category: (*category).to_string(),
                        frequency: *frequency,
                        notes: (*notes).to_string(),
                    })
                    .collect()
            })
    }

    fn known_dnis(&self) -> Vec<String> {
        USER_RESPONSES
            .iter()
            .map(|(dni, _)| (*dni).to_string())
            .collect()
    }
}
