// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sommelier command-line interface.
//!
//! Two subcommands: `search` ranks a menu dump on disk, and `fetch` pulls a
//! restaurant's menu and search config from the public API first. Both
//! share the same query, filter, sort and paging flags.

pub mod display;

use clap::{Args, Parser, Subcommand};
use sommelier::{FacetFilters, SortKey};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sommelier",
    about = "Fuzzy search over restaurant wine lists",
    version
)]
pub struct Cli {
    /// More logging (repeat for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank a wine list stored as JSON
    Search {
        /// Menu dump: `{"restaurant": {...}, "wines": [...]}` or a bare array
        #[arg(short, long)]
        wines: PathBuf,

        /// Alias overrides merged onto the built-in synonyms
        #[arg(short, long)]
        synonyms: Option<PathBuf>,

        #[command(flatten)]
        query: QueryArgs,
    },

    /// Load a restaurant's menu from the API, then rank it
    Fetch {
        /// Restaurant id
        #[arg(short, long)]
        restaurant: String,

        /// API base URL
        #[arg(long, env = "SOMMELIER_API_URL", default_value = "http://localhost:5000")]
        api: String,

        /// Request timeout in seconds
        #[arg(long, env = "SOMMELIER_TIMEOUT_SECS", default_value = "10")]
        timeout: u64,

        #[command(flatten)]
        query: QueryArgs,
    },
}

/// Query, filters and paging, shared by every subcommand.
#[derive(Args)]
pub struct QueryArgs {
    /// Free-text query (empty lists everything)
    #[arg(default_value = "")]
    pub query: String,

    /// Only these types (repeatable, exact label)
    #[arg(long = "type", value_name = "TYPE")]
    pub types: Vec<String>,

    /// Only these bodies (repeatable, exact label)
    #[arg(long = "body", value_name = "BODY")]
    pub bodies: Vec<String>,

    /// Producer prefix
    #[arg(long, default_value = "")]
    pub company: String,

    /// Country prefix
    #[arg(long, default_value = "")]
    pub country: String,

    /// Region prefix
    #[arg(long, default_value = "")]
    pub region: String,

    /// Vintage prefix, e.g. 201
    #[arg(long, default_value = "")]
    pub vintage: String,

    /// Tiebreak among equal scores: vintage, price-desc, price-asc
    #[arg(long, default_value = "")]
    pub sort: SortKey,

    /// Page number, starting at 1
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Show why each wine scored what it did
    #[arg(long)]
    pub explain: bool,
}

impl QueryArgs {
    pub fn filters(&self) -> FacetFilters {
        FacetFilters {
            types: self.types.clone(),
            bodies: self.bodies.clone(),
            company: self.company.clone(),
            country: self.country.clone(),
            region: self.region.clone(),
            vintage: self.vintage.clone(),
        }
    }
}
