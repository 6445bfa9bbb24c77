// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a wine list.
//!
//! Records arrive from the data layer in whatever shape the caller produced:
//! grapes as a string, a list, or under three different keys; vintages and
//! prices as numbers or numeric strings. [`RawWine`] accepts all of that and
//! converts exactly once into the fixed-shape [`WineRecord`] the scorer reads.
//!
//! # Invariants
//!
//! - **WineRecord**: optional text fields are `None` or non-blank. A blank
//!   string from the wire never reaches the scorer as `Some("")`.
//! - **WineRecord**: `grapes` holds non-blank entries only.

use serde::{Deserialize, Serialize};

// =============================================================================
// CANONICAL RECORD
// =============================================================================

/// One wine on a restaurant's list, in the shape the ranking engine expects.
///
/// Read-only input to search. Build one with [`WineRecord::new`] and the
/// `with_*` setters, or convert from a [`RawWine`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WineRecord {
    pub id: String,
    pub name: String,
    pub producer: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub vintage: Option<u16>,
    /// Freeform style label, e.g. "Red" or "Sparkling".
    pub wine_type: Option<String>,
    /// Freeform body label, e.g. "Full".
    pub body: Option<String>,
    pub grapes: Vec<String>,
    pub price: Option<f64>,
    pub notes: Option<String>,
    pub image_url: Option<String>,
}

impl WineRecord {
    /// A record with only an id and a name; every other field absent.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            producer: None,
            country: None,
            region: None,
            vintage: None,
            wine_type: None,
            body: None,
            grapes: Vec::new(),
            price: None,
            notes: None,
            image_url: None,
        }
    }

    pub fn with_producer(mut self, producer: &str) -> Self {
        self.producer = non_blank(Some(producer.to_string()));
        self
    }

    pub fn with_country(mut self, country: &str) -> Self {
        self.country = non_blank(Some(country.to_string()));
        self
    }

    pub fn with_region(mut self, region: &str) -> Self {
        self.region = non_blank(Some(region.to_string()));
        self
    }

    pub fn with_vintage(mut self, vintage: u16) -> Self {
        self.vintage = Some(vintage);
        self
    }

    pub fn with_type(mut self, wine_type: &str) -> Self {
        self.wine_type = non_blank(Some(wine_type.to_string()));
        self
    }

    pub fn with_body(mut self, body: &str) -> Self {
        self.body = non_blank(Some(body.to_string()));
        self
    }

    pub fn with_grapes<I, S>(mut self, grapes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.grapes = grapes
            .into_iter()
            .filter_map(|g| non_blank(Some(g.into())))
            .collect();
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = non_blank(Some(notes.to_string()));
        self
    }

    /// Vintage as the string the year signals compare against ("" when absent).
    pub fn vintage_string(&self) -> String {
        self.vintage.map(|v| v.to_string()).unwrap_or_default()
    }

    /// All grapes joined by spaces, for whole-field comparison.
    pub fn grapes_joined(&self) -> Option<String> {
        if self.grapes.is_empty() {
            None
        } else {
            Some(self.grapes.join(" "))
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// =============================================================================
// WIRE SHAPE
// =============================================================================

/// A scalar that may be sent as a JSON number or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(f64),
    Text(String),
}

impl NumberOrString {
    fn as_f64(&self) -> Option<f64> {
        let value = match self {
            NumberOrString::Number(n) => Some(*n),
            NumberOrString::Text(s) => s.trim().parse::<f64>().ok(),
        };
        value.filter(|n| n.is_finite())
    }

    fn as_id(&self) -> String {
        match self {
            NumberOrString::Number(n) if n.fract() == 0.0 => format!("{}", *n as i64),
            NumberOrString::Number(n) => n.to_string(),
            NumberOrString::Text(s) => s.trim().to_string(),
        }
    }
}

/// Grapes arrive either as one string or as a list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GrapeValue {
    One(String),
    Many(Vec<String>),
}

/// A wine exactly as the data layer serializes it.
///
/// Every field is optional and loosely typed. Convert with `WineRecord::from`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawWine {
    #[serde(default)]
    pub id: Option<NumberOrString>,
    #[serde(default, alias = "name")]
    pub wine_name: Option<String>,
    #[serde(default, alias = "producer")]
    pub company: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub vintage: Option<NumberOrString>,
    #[serde(default, rename = "type")]
    pub wine_type: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub grape: Option<GrapeValue>,
    #[serde(default)]
    pub varietal: Option<GrapeValue>,
    #[serde(default)]
    pub variety: Option<GrapeValue>,
    #[serde(default)]
    pub grapes: Option<GrapeValue>,
    #[serde(default)]
    pub price: Option<NumberOrString>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, alias = "image_url")]
    pub wine_image_url: Option<String>,
}

impl From<RawWine> for WineRecord {
    fn from(raw: RawWine) -> Self {
        let grapes: Vec<String> = [raw.grape, raw.varietal, raw.variety, raw.grapes]
            .into_iter()
            .flatten()
            .flat_map(|value| match value {
                GrapeValue::One(g) => vec![g],
                GrapeValue::Many(gs) => gs,
            })
            .filter_map(|g| non_blank(Some(g)))
            .collect();

        let vintage = raw
            .vintage
            .as_ref()
            .and_then(NumberOrString::as_f64)
            .filter(|v| v.fract() == 0.0 && *v >= 0.0 && *v <= f64::from(u16::MAX))
            .map(|v| v as u16);

        Self {
            id: raw.id.as_ref().map(NumberOrString::as_id).unwrap_or_default(),
            name: non_blank(raw.wine_name).unwrap_or_default(),
            producer: non_blank(raw.company),
            country: non_blank(raw.country),
            region: non_blank(raw.region),
            vintage,
            wine_type: non_blank(raw.wine_type),
            body: non_blank(raw.body),
            grapes,
            price: raw.price.as_ref().and_then(NumberOrString::as_f64),
            notes: non_blank(raw.notes),
            image_url: non_blank(raw.wine_image_url),
        }
    }
}

// =============================================================================
// RESULTS AND MENUS
// =============================================================================

/// A wine paired with its relevance for the current query. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredWine {
    pub wine: WineRecord,
    pub score: f64,
}

/// Restaurant metadata that travels with its wine list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// A restaurant's wine list as fetched from the data layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestaurantMenu {
    pub restaurant: Restaurant,
    pub wines: Vec<WineRecord>,
}
