use serde::Deserialize;

/// Optional settings read from `~/nutristats/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    pub api_url: Option<String>,
}
