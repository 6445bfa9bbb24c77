// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use sommelier::source::{read_config_file, read_menu_file};
use sommelier::{
    default_alias_table, load_menu, merge_alias_tables, AliasTable, HttpMenuSource, MenuSnapshot,
    MenuView, QueryPlan, SearchState, ViewLiveness,
};
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::{print_results, ResultRow};
use cli::{Cli, Commands, QueryArgs};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Search {
            wines,
            synonyms,
            query,
        } => {
            let snapshot = load_files(&wines, synonyms.as_deref())?;
            show(snapshot, &query);
        }
        Commands::Fetch {
            restaurant,
            api,
            timeout,
            query,
        } => {
            let source = HttpMenuSource::new(&api, Duration::from_secs(timeout))
                .context("failed to build HTTP client")?;
            let snapshot = load_menu(&source, &restaurant, &ViewLiveness::new())
                .await
                .context("menu view closed before loading finished")?;
            show(snapshot, &query);
        }
    }
    Ok(())
}

/// Logs go to stderr so stdout stays clean for results. `RUST_LOG` wins over
/// the flags when set.
fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sommelier={}", default_level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Offline inputs are the user's own files, so errors here are reported
/// instead of falling back.
fn load_files(wines: &Path, synonyms: Option<&Path>) -> Result<MenuSnapshot> {
    let menu = read_menu_file(wines)
        .with_context(|| format!("failed to load wines from {}", wines.display()))?;
    let aliases = match synonyms {
        Some(path) => {
            let config = read_config_file(path)
                .with_context(|| format!("failed to load synonyms from {}", path.display()))?;
            merge_alias_tables(&default_alias_table(), &AliasTable::from(config.synonyms))
        }
        None => default_alias_table(),
    };
    Ok(MenuSnapshot::new(menu.restaurant, menu.wines, aliases))
}

fn show(snapshot: MenuSnapshot, args: &QueryArgs) {
    let state = SearchState::new()
        .type_draft(&args.query)
        .submit()
        .with_filters(args.filters())
        .with_sort(args.sort)
        .with_page(args.page.saturating_sub(1));

    let plan = QueryPlan::new(state.query(), &snapshot.aliases);
    let title = match snapshot.restaurant.name.trim() {
        "" => "Wine list".to_string(),
        name => name.to_string(),
    };

    let mut view = MenuView::new(snapshot);
    view.apply(state);
    let page = view.current_page();

    let rows: Vec<ResultRow<'_>> = page
        .wines
        .iter()
        .map(|wine| {
            let explanation = plan.explain(wine);
            ResultRow {
                wine,
                score: plan.has_signal().then_some(explanation.score),
                explanation: args.explain.then_some(explanation),
            }
        })
        .collect();

    print_results(&title, &rows, &page.page);
}
