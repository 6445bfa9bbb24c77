// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Menus and alias overrides from JSON dumps on disk.
//!
//! Accepts the same shapes the HTTP API returns, plus a couple of looser
//! ones that are convenient for hand-written fixtures: a bare array of
//! wines, and a bare alias table without the `synonyms` wrapper.

use super::error::SourceError;
use super::{MenuPayload, MenuSource, SearchConfig};
use crate::synonyms::RawAliasTable;
use crate::types::RestaurantMenu;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
#[serde(untagged)]
enum ConfigFile {
    Wrapped { synonyms: RawAliasTable },
    Bare(RawAliasTable),
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, SourceError> {
    let text = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| SourceError::Decode {
        origin: path.display().to_string(),
        source,
    })
}

/// Read a menu dump: `{"restaurant": {...}, "wines": [...]}` or `[...]`.
pub fn read_menu_file(path: &Path) -> Result<RestaurantMenu, SourceError> {
    read_json::<MenuPayload>(path).map(RestaurantMenu::from)
}

/// Read alias overrides: `{"synonyms": {...}}` or the bare table.
pub fn read_config_file(path: &Path) -> Result<SearchConfig, SourceError> {
    let synonyms = match read_json::<ConfigFile>(path)? {
        ConfigFile::Wrapped { synonyms } | ConfigFile::Bare(synonyms) => synonyms,
    };
    Ok(SearchConfig { synonyms })
}

/// A [`MenuSource`] backed by files. The restaurant id is ignored.
#[derive(Debug, Clone)]
pub struct FileMenuSource {
    wines: PathBuf,
    config: Option<PathBuf>,
}

impl FileMenuSource {
    pub fn new(wines: impl Into<PathBuf>, config: Option<PathBuf>) -> Self {
        Self {
            wines: wines.into(),
            config,
        }
    }
}

#[async_trait]
impl MenuSource for FileMenuSource {
    async fn fetch_restaurant_wines(&self, _restaurant_id: &str) -> Result<RestaurantMenu, SourceError> {
        read_menu_file(&self.wines)
    }

    async fn fetch_search_config(&self) -> Result<SearchConfig, SourceError> {
        match &self.config {
            Some(path) => read_config_file(path),
            None => Ok(SearchConfig::default()),
        }
    }
}
