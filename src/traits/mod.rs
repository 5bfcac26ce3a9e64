pub mod fallback_source;
pub mod stats_backend;
