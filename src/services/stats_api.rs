use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::constants::{
    CATEGORY_ENDPOINT, FREQUENCY_ENDPOINT, TOP_FOODS_ENDPOINT, USER_ENDPOINT_PREFIX,
};
use crate::errors::{StatsError, StatsResult};
use crate::structs::consumption_by_category::ConsumptionByCategory;
use crate::structs::frequency_by_food::FrequencyByFood;
use crate::structs::top_food::TopFood;
use crate::structs::user_stats_response::UserStatsResponse;
use crate::traits::stats_backend::StatsBackend;

/// Live [`StatsBackend`] over HTTP.
#[derive(Clone)]
pub struct StatsApi {
    base_url: String,
    client: Client,
}

impl StatsApi {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> StatsResult<T> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StatsError::HttpStatus {
                url,
                status: status.as_u16(),
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| StatsError::DecodeError {
            endpoint: path.to_string(),
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl StatsBackend for StatsApi {
    async fn top_foods(&self) -> StatsResult<Vec<TopFood>> {
        self.get_json(TOP_FOODS_ENDPOINT).await
    }

    async fn frequency_by_food(&self) -> StatsResult<Vec<FrequencyByFood>> {
        self.get_json(FREQUENCY_ENDPOINT).await
    }

    async fn consumption_by_category(&self) -> StatsResult<Vec<ConsumptionByCategory>> {
        self.get_json(CATEGORY_ENDPOINT).await
    }

    async fn user_responses(&self, dni: &str) -> StatsResult<UserStatsResponse> {
        let path = format!("{}/{}", USER_ENDPOINT_PREFIX, dni);
        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        // 404 on this endpoint is a defined "not found" outcome, not a
        // transport error.
        if status == StatusCode::NOT_FOUND {
            return Err(StatsError::UserNotFound {
                dni: dni.to_string(),
            });
        }
        if !status.is_success() {
            return Err(StatsError::HttpStatus {
                url,
                status: status.as_u16(),
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| StatsError::DecodeError {
            endpoint: path,
            reason: e.to_string(),
        })
    }
}
