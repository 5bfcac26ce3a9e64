pub mod dashboard_renderer;
pub mod user_table;
