// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The built-in alias table used when the server supplies nothing.

use super::table::{AliasTable, Facet};

const TYPE_ALIASES: &[(&str, &[&str])] = &[
    ("Red", &["red", "kirmizi", "kırmızı", "rouge", "rosso", "tinto", "kırmizi"]),
    ("White", &["white", "beyaz", "blanc", "bianco"]),
    ("Rosé", &["rose", "rosé", "rosee", "rosado", "rosato", "blush", "pembe"]),
    (
        "Sparkling",
        &[
            "sparkling", "bubbly", "pet-nat", "pet nat", "pét-nat", "champagne", "cava",
            "prosecco", "spumante", "frizzante", "pét nat",
        ],
    ),
];

const COUNTRY_ALIASES: &[(&str, &[&str])] = &[
    ("France", &["france", "french", "français"]),
    ("Italy", &["italy", "italian", "italiano"]),
    ("Spain", &["spain", "spanish", "españa", "español", "espanol"]),
    ("USA", &["usa", "american", "us", "california", "sonoma", "napa", "north coast"]),
    ("Turkey", &["turkey", "turkish", "türk", "turkiye", "türkiye"]),
    ("New Zealand", &["new zealand", "nz", "kiwi", "marlborough"]),
    ("Austria", &["austria", "austrian", "kamptal", "wachau"]),
    ("Hungary", &["hungary", "hungarian", "tokaj"]),
];

/// The fallback table: styles and countries. Body and grape start empty and
/// are filled by server overrides.
pub fn default_alias_table() -> AliasTable {
    let mut table = AliasTable::new();
    for (label, aliases) in TYPE_ALIASES {
        table.facet_mut(Facet::Type).insert(*label, aliases.iter());
    }
    for (label, aliases) in COUNTRY_ALIASES {
        table.facet_mut(Facet::Country).insert(*label, aliases.iter());
    }
    table
}
