use std::env;
use std::fs;
use std::path::Path;

use crate::config::constants::{API_URL_ENV, CONFIG_FILE_RELATIVE, DEFAULT_API_BASE};
use crate::errors::{StatsError, StatsResult};
use crate::structs::app_config::AppConfig;

pub struct ConfigManager;

impl ConfigManager {
    pub fn load() -> StatsResult<AppConfig> {
        let config_location = dirs::home_dir()
            .map(|d| d.join(CONFIG_FILE_RELATIVE))
            .unwrap_or_default();

        if config_location.exists() {
            log::info!("📋 Loading config from: {}", config_location.display());
            return Self::load_from(&config_location);
        }

        Ok(AppConfig::default())
    }

    pub fn load_from(path: &Path) -> StatsResult<AppConfig> {
        let content = fs::read_to_string(path).map_err(|e| {
            StatsError::config_error(
                &format!("cannot read {}: {}", path.display(), e),
                Some("check the file exists and is readable"),
            )
        })?;
        toml::from_str(&content).map_err(|e| {
            StatsError::config_error(
                &format!("invalid TOML in {}: {}", path.display(), e.message()),
                Some("fix the syntax or delete the file to use defaults"),
            )
        })
    }

    /// Precedence: CLI flag, then environment, then config file, then the
    /// bundled default. Trailing slashes are stripped so endpoint paths can
    /// be appended verbatim.
    pub fn resolve_api_url(config: &AppConfig, cli_override: Option<&str>) -> String {
        let base = cli_override
            .map(|s| s.to_string())
            .or_else(|| env::var(API_URL_ENV).ok())
            .or_else(|| config.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        base.trim_end_matches('/').to_string()
    }
}
