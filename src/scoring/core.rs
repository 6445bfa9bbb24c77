// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind wine relevance.
//!
//! A score is a weighted average of whatever signals the query carries:
//! facet intents, vintage years, free-text tokens, and a whole-phrase bonus.
//! Three things can force it to zero regardless of the average:
//!
//! - a **facet gate**: the query names a type/body/country and the wine isn't it
//! - the **coverage gate**: too few text tokens hit anything strongly, or none
//!   hit a key field (name, region, country)
//! - no signal at all (empty query); callers skip thresholding in that case
//!
//! Gates are conjunctive and checked before any averaging, so "red" can never
//! surface a white wine no matter how red its name sounds.
//!
//! # Constants
//!
//! The thresholds below were tuned by hand against real menus. They have no
//! derivation; keep them named so they can be recalibrated against labeled
//! query/relevance data.
//!
//! | Constant              | Value | Role |
//! |-----------------------|-------|------|
//! | `INTENT_MATCH`        | 0.82  | facet gate in scoring |
//! | `STRICT_INTENT_MATCH` | 0.85  | facet filter in the pipeline |
//! | `STRONG_MATCH`        | 0.78  | per-token "strong" hit |
//! | `TOKEN_COVERAGE`      | 0.6   | fraction of tokens that must hit strongly |
//! | `PHRASE_MIN`          | 0.75  | phrase bonus kicks in above this |
//! | `SCORE_THRESHOLD`     | 0.6   | minimum score kept when a query is present |

use crate::contracts::check_score_bounded;
use crate::fuzzy::{field_sim, token_sim};
use crate::synonyms::{aliases_for, find_intents, AliasTable, Facet};
use crate::types::WineRecord;
use crate::utils::{contains_word, is_year_token, normalize, tokenize};
use std::collections::HashSet;

// =============================================================================
// THRESHOLDS
// =============================================================================

/// Minimum similarity between a wine's facet field and a detected intent for
/// the wine to pass that facet's gate.
pub const INTENT_MATCH: f64 = 0.82;

/// Stricter facet match used by the pipeline's query-derived filter.
pub const STRICT_INTENT_MATCH: f64 = 0.85;

/// Per-token similarity that counts as a strong hit.
pub const STRONG_MATCH: f64 = 0.78;

/// Fraction of text tokens (rounded up) that must be strong hits.
pub const TOKEN_COVERAGE: f64 = 0.6;

/// The phrase bonus applies only when the phrase similarity exceeds this.
pub const PHRASE_MIN: f64 = 0.75;

/// Wines scoring below this are dropped when the query is non-empty.
pub const SCORE_THRESHOLD: f64 = 0.6;

// =============================================================================
// SIGNAL WEIGHTS
// =============================================================================

pub const TYPE_INTENT_WEIGHT: f64 = 1.2;
pub const BODY_INTENT_WEIGHT: f64 = 0.72;
/// Applied once per matched grape.
pub const GRAPE_INTENT_WEIGHT: f64 = 0.9;
pub const COUNTRY_INTENT_WEIGHT: f64 = 1.2;
/// Applied once per year token.
pub const VINTAGE_WEIGHT: f64 = 0.8;
pub const TEXT_WEIGHT: f64 = 2.4;
pub const PHRASE_WEIGHT: f64 = 0.6;

/// Year-signal value for an exact or leading match ("2015", "201").
pub const VINTAGE_PREFIX_SIM: f64 = 1.0;
/// Year-signal value for a two-digit suffix match ("15" for 2015).
pub const VINTAGE_SHORT_SIM: f64 = 0.85;

// =============================================================================
// FIELD WEIGHTS
// =============================================================================

/// Text fields a query token is compared against, and how much each counts.
/// Tasting notes are never compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    Region,
    Country,
    Producer,
    Type,
    Body,
}

impl TextField {
    pub const ALL: [TextField; 6] = [
        TextField::Name,
        TextField::Region,
        TextField::Country,
        TextField::Producer,
        TextField::Type,
        TextField::Body,
    ];

    /// Fields that can satisfy the key-hit requirement.
    pub const KEY: [TextField; 3] = [TextField::Name, TextField::Region, TextField::Country];

    pub fn weight(self) -> f64 {
        match self {
            TextField::Name => 1.25,
            TextField::Region => 1.0,
            TextField::Country => 0.9,
            TextField::Producer => 0.6,
            TextField::Type => 1.1,
            TextField::Body => 0.5,
        }
    }

    pub fn value(self, wine: &WineRecord) -> Option<&str> {
        match self {
            TextField::Name => Some(wine.name.as_str()),
            TextField::Region => wine.region.as_deref(),
            TextField::Country => wine.country.as_deref(),
            TextField::Producer => wine.producer.as_deref(),
            TextField::Type => wine.wine_type.as_deref(),
            TextField::Body => wine.body.as_deref(),
        }
    }
}

// =============================================================================
// EXPLANATION
// =============================================================================

/// Which rule zeroed a wine's score.
#[derive(Debug, Clone, PartialEq)]
pub enum Gate {
    Type,
    Body,
    Country,
    Coverage {
        strong_hits: usize,
        needed: usize,
        key_hits: usize,
    },
}

/// What kind of evidence a contribution came from.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    TypeIntent,
    BodyIntent,
    GrapeIntent(String),
    CountryIntent,
    Vintage(String),
    Text,
    Phrase,
}

/// One weighted term of the average.
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    pub signal: Signal,
    pub weight: f64,
    /// Similarity in [0, 1]; the term adds `weight * value` to the numerator.
    pub value: f64,
}

/// A score together with how it was reached.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoreExplanation {
    pub score: f64,
    pub gate: Option<Gate>,
    pub contributions: Vec<Contribution>,
}

impl ScoreExplanation {
    fn gated(gate: Gate) -> Self {
        Self {
            score: 0.0,
            gate: Some(gate),
            contributions: Vec::new(),
        }
    }

    fn push(&mut self, signal: Signal, weight: f64, value: f64) {
        self.contributions.push(Contribution {
            signal,
            weight,
            value,
        });
    }

    fn finish(mut self) -> Self {
        let weight: f64 = self.contributions.iter().map(|c| c.weight).sum();
        let total: f64 = self.contributions.iter().map(|c| c.weight * c.value).sum();
        self.score = if weight > 0.0 { total / weight } else { 0.0 };
        check_score_bounded(self.score);
        self
    }
}

// =============================================================================
// QUERY PLAN
// =============================================================================

/// Everything about a query that doesn't depend on the wine being scored.
///
/// Built once per recomputation and reused across the whole list.
#[derive(Debug, Clone, Default)]
pub struct QueryPlan {
    phrase: String,
    year_tokens: Vec<String>,
    text_tokens: Vec<String>,
    type_intents: Vec<String>,
    body_intents: Vec<String>,
    grape_intents: Vec<String>,
    country_intents: Vec<String>,
}

impl QueryPlan {
    pub fn new(query: &str, aliases: &AliasTable) -> Self {
        let phrase = normalize(query);
        if phrase.is_empty() {
            return Self::default();
        }

        let intents = |facet| find_intents(aliases.facet(facet), &phrase);
        let type_intents = intents(Facet::Type);
        let body_intents = intents(Facet::Body);
        let grape_intents = intents(Facet::Grape);
        let country_intents = intents(Facet::Country);

        // Tokens already captured by an intent would score the same signal twice.
        let mut captured: HashSet<String> = HashSet::new();
        for (facet, labels) in [
            (Facet::Type, &type_intents),
            (Facet::Body, &body_intents),
            (Facet::Grape, &grape_intents),
            (Facet::Country, &country_intents),
        ] {
            for label in labels {
                for alias in aliases_for(aliases.facet(facet), label) {
                    // words of a multi-word alias the query actually used
                    if tokenize(&alias).len() > 1 && contains_word(&phrase, &alias) {
                        captured.extend(tokenize(&alias));
                    }
                    captured.insert(alias);
                }
            }
        }

        let (year_tokens, other_tokens): (Vec<String>, Vec<String>) =
            tokenize(&phrase).into_iter().partition(|t| is_year_token(t));
        let text_tokens = other_tokens
            .into_iter()
            .filter(|t| !captured.contains(t))
            .collect();

        Self {
            phrase,
            year_tokens,
            text_tokens,
            type_intents,
            body_intents,
            grape_intents,
            country_intents,
        }
    }

    /// True when the query normalizes to nothing.
    pub fn is_empty(&self) -> bool {
        self.phrase.is_empty()
    }

    /// Does the query carry anything to score on?
    ///
    /// False for empty and punctuation-only queries, and for queries made
    /// entirely of stopwords. Every wine scores 0 against such a query.
    pub fn has_signal(&self) -> bool {
        !self.year_tokens.is_empty()
            || !self.text_tokens.is_empty()
            || Facet::ALL.iter().any(|f| !self.intents(*f).is_empty())
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn year_tokens(&self) -> &[String] {
        &self.year_tokens
    }

    pub fn text_tokens(&self) -> &[String] {
        &self.text_tokens
    }

    pub fn intents(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Type => &self.type_intents,
            Facet::Body => &self.body_intents,
            Facet::Grape => &self.grape_intents,
            Facet::Country => &self.country_intents,
        }
    }

    /// Relevance of `wine` in [0, 1]; 0 means excluded.
    pub fn score(&self, wine: &WineRecord) -> f64 {
        self.explain(wine).score
    }

    /// The full scoring pass, keeping every intermediate.
    pub fn explain(&self, wine: &WineRecord) -> ScoreExplanation {
        if let Some(gate) = self.failed_facet_gate(wine) {
            return ScoreExplanation::gated(gate);
        }

        let mut explanation = ScoreExplanation::default();

        // ---- facet intents (soft bonus) ----
        if !self.type_intents.is_empty() {
            let best = best_of(&self.type_intents, |t| type_sim(wine, t));
            explanation.push(Signal::TypeIntent, TYPE_INTENT_WEIGHT, best);
        }
        if !self.body_intents.is_empty() {
            let best = best_of(&self.body_intents, |b| body_sim(wine, b));
            explanation.push(Signal::BodyIntent, BODY_INTENT_WEIGHT, best);
        }
        for grape in &self.grape_intents {
            explanation.push(
                Signal::GrapeIntent(grape.clone()),
                GRAPE_INTENT_WEIGHT,
                grape_sim(wine, grape),
            );
        }
        if !self.country_intents.is_empty() {
            let best = best_of(&self.country_intents, |c| place_sim(wine, c));
            explanation.push(Signal::CountryIntent, COUNTRY_INTENT_WEIGHT, best);
        }

        // ---- vintage ----
        let vintage = wine.vintage_string();
        for year in &self.year_tokens {
            explanation.push(
                Signal::Vintage(year.clone()),
                VINTAGE_WEIGHT,
                vintage_signal(&vintage, year),
            );
        }

        // ---- free text across weighted fields ----
        if !self.text_tokens.is_empty() {
            let mut text_sum = 0.0;
            let mut strong_hits = 0;
            let mut key_hits = 0;

            for token in &self.text_tokens {
                let per_token = weighted_field_sim(wine, token);
                text_sum += per_token;
                if per_token >= STRONG_MATCH {
                    strong_hits += 1;
                }
                if TextField::KEY
                    .iter()
                    .any(|f| field_sim(f.value(wine), token) >= STRONG_MATCH)
                {
                    key_hits += 1;
                }
            }

            let needed = (self.text_tokens.len() as f64 * TOKEN_COVERAGE).ceil() as usize;
            if strong_hits < needed || key_hits < 1 {
                return ScoreExplanation::gated(Gate::Coverage {
                    strong_hits,
                    needed,
                    key_hits,
                });
            }

            let average = text_sum / self.text_tokens.len() as f64;
            explanation.push(Signal::Text, TEXT_WEIGHT, average);
        }

        // ---- whole phrase ----
        if self.phrase.contains(' ') {
            let place = format!(
                "{} {}",
                wine.region.as_deref().unwrap_or_default(),
                wine.country.as_deref().unwrap_or_default()
            );
            let value = token_sim(&wine.name, &self.phrase).max(token_sim(&place, &self.phrase));
            if value > PHRASE_MIN {
                explanation.push(Signal::Phrase, PHRASE_WEIGHT, value);
            }
        }

        explanation.finish()
    }

    /// First facet gate the wine fails, if any. Type, then body, then country.
    fn failed_facet_gate(&self, wine: &WineRecord) -> Option<Gate> {
        if !gate_passes(&self.type_intents, INTENT_MATCH, |t| type_sim(wine, t)) {
            return Some(Gate::Type);
        }
        if !gate_passes(&self.body_intents, INTENT_MATCH, |b| body_sim(wine, b)) {
            return Some(Gate::Body);
        }
        if !gate_passes(&self.country_intents, INTENT_MATCH, |c| place_sim(wine, c)) {
            return Some(Gate::Country);
        }
        None
    }
}

// =============================================================================
// PER-FIELD SIMILARITIES
// =============================================================================

pub(crate) fn type_sim(wine: &WineRecord, intent: &str) -> f64 {
    field_sim(wine.wine_type.as_deref(), intent)
}

pub(crate) fn body_sim(wine: &WineRecord, intent: &str) -> f64 {
    field_sim(wine.body.as_deref(), intent)
}

/// Countries match against either the country or the region field, so
/// "napa" (an alias of USA) still finds a wine whose region says Napa.
pub(crate) fn place_sim(wine: &WineRecord, intent: &str) -> f64 {
    field_sim(wine.country.as_deref(), intent).max(field_sim(wine.region.as_deref(), intent))
}

/// Grapes compare against each listed grape, the whole list, and the name.
pub(crate) fn grape_sim(wine: &WineRecord, intent: &str) -> f64 {
    let listed = wine
        .grapes
        .iter()
        .map(|g| token_sim(g, intent))
        .fold(0.0, f64::max);
    listed
        .max(field_sim(wine.grapes_joined().as_deref(), intent))
        .max(token_sim(&wine.name, intent))
}

/// Best field match for one token, weighted by field and capped at 1.0.
fn weighted_field_sim(wine: &WineRecord, token: &str) -> f64 {
    TextField::ALL
        .iter()
        .map(|f| field_sim(f.value(wine), token) * f.weight())
        .fold(0.0, f64::max)
        .min(1.0)
}

fn best_of(intents: &[String], sim: impl Fn(&str) -> f64) -> f64 {
    intents.iter().map(|i| sim(i.as_str())).fold(0.0, f64::max)
}

/// No intents, or at least one intent reaches `threshold`.
pub(crate) fn gate_passes(intents: &[String], threshold: f64, sim: impl Fn(&str) -> f64) -> bool {
    intents.is_empty() || intents.iter().any(|i| sim(i.as_str()) >= threshold)
}

/// How well a year token matches a vintage string.
///
/// - `1.0` when the vintage starts with the token ("2015", "201" → 2015)
/// - `0.85` for a two-digit token that ends the vintage ("15" → 2015)
/// - otherwise plain [`token_sim`], so "2016" still earns partial credit
///
/// An absent vintage is the empty string and scores 0.
pub fn vintage_signal(vintage: &str, year: &str) -> f64 {
    if vintage.is_empty() {
        return 0.0;
    }
    if vintage.starts_with(year) {
        VINTAGE_PREFIX_SIM
    } else if year.len() == 2 && vintage.ends_with(year) {
        VINTAGE_SHORT_SIM
    } else {
        token_sim(vintage, year)
    }
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Relevance of one wine for a raw query, in [0, 1]. 0 means excluded.
///
/// Pure: identical inputs give identical output. An empty query yields 0
/// because there is no signal; the pipeline treats that as "no threshold",
/// not as "exclude everything".
pub fn score(wine: &WineRecord, query: &str, aliases: &AliasTable) -> f64 {
    QueryPlan::new(query, aliases).score(wine)
}

/// [`score`] with the gates and weighted contributions that produced it.
pub fn explain(wine: &WineRecord, query: &str, aliases: &AliasTable) -> ScoreExplanation {
    QueryPlan::new(query, aliases).explain(wine)
}
