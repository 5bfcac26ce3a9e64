pub mod aggregator;
pub mod dashboard_controller;
pub mod demo_catalog;
pub mod stats_api;
