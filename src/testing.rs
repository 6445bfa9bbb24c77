// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::types::WineRecord;

/// A wine with just an id and a name.
pub fn make_wine(id: usize, name: &str) -> WineRecord {
    WineRecord::new(id.to_string(), name)
}

/// A wine with the fields that facet filters and gates look at.
pub fn make_typed_wine(id: usize, name: &str, wine_type: &str, vintage: u16) -> WineRecord {
    make_wine(id, name).with_type(wine_type).with_vintage(vintage)
}

/// A small menu covering every facet, in a fixed order.
pub fn sample_menu() -> Vec<WineRecord> {
    vec![
        make_typed_wine(1, "Cloudy Bay Sauvignon Blanc", "White", 2021)
            .with_producer("Cloudy Bay")
            .with_country("New Zealand")
            .with_region("Marlborough")
            .with_body("Light")
            .with_grapes(["Sauvignon Blanc"])
            .with_price(55.0),
        make_typed_wine(2, "Château Margaux", "Red", 2015)
            .with_producer("Château Margaux")
            .with_country("France")
            .with_region("Bordeaux")
            .with_body("Full")
            .with_grapes(["Cabernet Sauvignon", "Merlot"])
            .with_price(650.0),
        make_typed_wine(3, "Red Mountain Chardonnay", "White", 2019)
            .with_producer("Red Mountain Cellars")
            .with_country("USA")
            .with_region("Washington")
            .with_body("Medium")
            .with_grapes(["Chardonnay"])
            .with_price(38.0),
        make_typed_wine(4, "Napa Cabernet", "Red", 2018)
            .with_producer("Valley Floor")
            .with_country("USA")
            .with_region("Napa Valley")
            .with_body("Full")
            .with_grapes(["Cabernet Sauvignon"])
            .with_price(90.0),
        make_typed_wine(5, "Barolo Riserva", "Red", 2013)
            .with_producer("Giacomo Conterno")
            .with_country("Italy")
            .with_region("Piedmont")
            .with_body("Full")
            .with_grapes(["Nebbiolo"])
            .with_price(240.0),
        make_typed_wine(6, "Whispering Angel", "Rosé", 2022)
            .with_producer("Château d'Esclans")
            .with_country("France")
            .with_region("Provence")
            .with_body("Light")
            .with_grapes(["Grenache", "Cinsault"])
            .with_price(48.0),
        make_typed_wine(7, "Kavaklıdere Yakut", "Red", 2020)
            .with_producer("Kavaklıdere")
            .with_country("Turkey")
            .with_region("Anatolia")
            .with_body("Medium")
            .with_price(24.0),
        make_wine(8, "Cava Brut Nature")
            .with_type("Sparkling")
            .with_country("Spain")
            .with_region("Penedès")
            .with_price(32.0),
    ]
}

/// `count` wines cycling through [`sample_menu`] with distinct ids.
pub fn synthetic_menu(count: usize) -> Vec<WineRecord> {
    let base = sample_menu();
    (0..count)
        .map(|i| {
            let mut wine = base[i % base.len()].clone();
            wine.id = format!("{}-{}", wine.id, i);
            wine
        })
        .collect()
}
