// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The public menu API over HTTP.

use super::error::SourceError;
use super::{MenuPayload, MenuSource, SearchConfig};
use crate::types::RestaurantMenu;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Error bodies look like `{"error": "Restaurant not found"}`.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Reads menus from `GET {base}/api/public/restaurant/{id}/wines` and
/// alias overrides from `GET {base}/api/public/search-config`.
#[derive(Debug, Clone)]
pub struct HttpMenuSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpMenuSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SourceError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| SourceError::Http {
                url: base_url.clone(),
                source,
            })?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, SourceError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "fetching");

        let response = self.client.get(&url).send().await.map_err(|source| SourceError::Http {
            url: url.clone(),
            source,
        })?;
        let status = response.status();
        let body = response.text().await.map_err(|source| SourceError::Http {
            url: url.clone(),
            source,
        })?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
            return Err(SourceError::Status {
                url,
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|source| SourceError::Decode { origin: url, source })
    }
}

#[async_trait]
impl MenuSource for HttpMenuSource {
    async fn fetch_restaurant_wines(&self, restaurant_id: &str) -> Result<RestaurantMenu, SourceError> {
        let payload: MenuPayload = self
            .get_json(&format!("/api/public/restaurant/{}/wines", restaurant_id))
            .await?;
        Ok(payload.into())
    }

    async fn fetch_search_config(&self) -> Result<SearchConfig, SourceError> {
        self.get_json("/api/public/search-config").await
    }
}
