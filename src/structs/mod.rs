pub mod app_config;
pub mod category_slice;
pub mod cli;
pub mod consumption_by_category;
pub mod dashboard_state;
pub mod frequency_by_food;
pub mod frequency_row;
pub mod ranked_food;
pub mod top_food;
pub mod user_response;
pub mod user_stats_response;
