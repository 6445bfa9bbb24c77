// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where menus come from, and what happens when they don't.
//!
//! A view needs two things before it can rank: the restaurant's wine list
//! and the alias table. Both come from a [`MenuSource`], both are fetched
//! concurrently, and neither failure is allowed to break search:
//!
//! | Fetch          | On failure                        |
//! |----------------|-----------------------------------|
//! | wine list      | empty list, blank restaurant      |
//! | search config  | built-in [`default_alias_table`]  |
//!
//! A view can be torn down while its fetches are in flight. [`load_menu`]
//! takes the view's [`ViewLiveness`] and discards the results if the view
//! is gone by the time they land.

mod error;
mod file;
mod http;
mod view;

pub use error::SourceError;
pub use file::{read_config_file, read_menu_file, FileMenuSource};
pub use http::{HttpMenuSource, DEFAULT_TIMEOUT};
pub use view::MenuView;

use crate::synonyms::{default_alias_table, merge_alias_tables, AliasTable, RawAliasTable};
use crate::types::{RawWine, Restaurant, RestaurantMenu, WineRecord};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

// =============================================================================
// WIRE SHAPES
// =============================================================================

/// Body of the search-config endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub synonyms: RawAliasTable,
}

#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum MenuPayload {
    List(Vec<RawWine>),
    Menu {
        #[serde(default)]
        restaurant: Option<Restaurant>,
        #[serde(default)]
        wines: Vec<RawWine>,
    },
}

impl From<MenuPayload> for RestaurantMenu {
    fn from(payload: MenuPayload) -> Self {
        let (restaurant, wines) = match payload {
            MenuPayload::List(wines) => (Restaurant::default(), wines),
            MenuPayload::Menu { restaurant, wines } => (restaurant.unwrap_or_default(), wines),
        };
        RestaurantMenu {
            restaurant,
            wines: wines.into_iter().map(WineRecord::from).collect(),
        }
    }
}

// =============================================================================
// SOURCE TRAIT
// =============================================================================

/// The data layer, as far as search is concerned.
#[async_trait]
pub trait MenuSource: Send + Sync {
    async fn fetch_restaurant_wines(&self, restaurant_id: &str) -> Result<RestaurantMenu, SourceError>;

    /// Alias overrides. Optional: callers fall back to the defaults.
    async fn fetch_search_config(&self) -> Result<SearchConfig, SourceError>;
}

// =============================================================================
// LIVENESS
// =============================================================================

/// Shared "is the view still there?" flag.
///
/// Clone it into whatever runs the fetch; call [`revoke`](Self::revoke) when
/// the view goes away.
#[derive(Debug, Clone)]
pub struct ViewLiveness(Arc<AtomicBool>);

impl ViewLiveness {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn revoke(&self) {
        self.0.store(false, Ordering::Release);
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl Default for ViewLiveness {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// LOADING
// =============================================================================

/// Immutable inputs a view ranks against. Cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct MenuSnapshot {
    pub restaurant: Restaurant,
    pub wines: Arc<Vec<WineRecord>>,
    pub aliases: Arc<AliasTable>,
}

impl MenuSnapshot {
    pub fn new(restaurant: Restaurant, wines: Vec<WineRecord>, aliases: AliasTable) -> Self {
        Self {
            restaurant,
            wines: Arc::new(wines),
            aliases: Arc::new(aliases),
        }
    }
}

/// Fetch the wine list and alias overrides concurrently and build a snapshot.
///
/// Failures are logged and replaced by their fallbacks, so this only returns
/// `None` when `liveness` was revoked before the fetches completed.
pub async fn load_menu<S>(source: &S, restaurant_id: &str, liveness: &ViewLiveness) -> Option<MenuSnapshot>
where
    S: MenuSource + ?Sized,
{
    let (menu, config) = tokio::join!(
        source.fetch_restaurant_wines(restaurant_id),
        source.fetch_search_config()
    );

    if !liveness.is_alive() {
        debug!(restaurant_id, "view closed before menu arrived; dropping it");
        return None;
    }

    let menu = menu.unwrap_or_else(|err| {
        warn!(restaurant_id, error = %err, "failed to load wines; showing an empty list");
        RestaurantMenu::default()
    });
    let aliases = match config {
        Ok(config) => merge_alias_tables(&default_alias_table(), &AliasTable::from(config.synonyms)),
        Err(err) => {
            warn!(error = %err, "failed to load search config; using built-in synonyms");
            default_alias_table()
        }
    };

    debug!(
        restaurant_id,
        wines = menu.wines.len(),
        labels = aliases.label_count(),
        "menu loaded"
    );
    Some(MenuSnapshot::new(menu.restaurant, menu.wines, aliases))
}
