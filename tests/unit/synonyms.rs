//! Alias tables: merging, server wire format, and intent detection.

use crate::common::server_aliases;
use sommelier::synonyms::{aliases_for, RawAliasTable};
use sommelier::{default_alias_table, find_intents, merge_alias_tables, AliasTable, Facet};

#[test]
fn test_server_table_from_json() {
    let json = r#"{
        "type": {"Orange": ["orange", "amber", "skin contact"]},
        "grape": {"Öküzgözü": ["okuzgozu"], "Syrah": null},
        "sweetness": {"Dry": ["dry"]}
    }"#;
    let raw: RawAliasTable = serde_json::from_str(json).unwrap();
    let table = AliasTable::from(raw);

    assert_eq!(table.facet(Facet::Type).len(), 1);
    assert_eq!(table.facet(Facet::Grape).len(), 2);
    assert!(table.facet(Facet::Grape).get("Syrah").unwrap().aliases.is_empty());
    assert_eq!(table.label_count(), 3);
}

#[test]
fn test_merge_onto_defaults_keeps_every_default_label() {
    let defaults = default_alias_table();
    let merged = server_aliases();
    for facet in Facet::ALL {
        for entry in defaults.facet(facet).iter() {
            assert!(merged.facet(facet).get(&entry.label).is_some(), "{}", entry.label);
        }
    }
    assert_eq!(merged.label_count(), defaults.label_count() + 5);
}

#[test]
fn test_merge_is_a_union_not_a_replacement() {
    let base = default_alias_table();
    let extra = AliasTable::new().with(Facet::Type, "RED", ["negre"]);
    let merged = merge_alias_tables(&base, &extra);

    let red = merged.facet(Facet::Type).get("red").unwrap();
    assert_eq!(red.label, "RED");
    assert!(red.aliases.contains("negre"));
    assert!(red.aliases.contains("kirmizi"));
}

#[test]
fn test_merge_leaves_inputs_alone() {
    let base = default_alias_table();
    let before = base.clone();
    let _ = merge_alias_tables(&base, &AliasTable::new().with(Facet::Type, "Orange", ["amber"]));
    assert_eq!(base, before);
}

#[test]
fn test_intents_from_diacritic_free_queries() {
    let table = default_alias_table();
    assert_eq!(find_intents(table.facet(Facet::Type), "ROSÉ de provence"), vec!["Rosé"]);
    assert_eq!(find_intents(table.facet(Facet::Country), "espana"), vec!["Spain"]);
}

#[test]
fn test_server_grapes_are_detected() {
    let table = server_aliases();
    assert_eq!(find_intents(table.facet(Facet::Grape), "a cab sav please"), vec!["Cabernet Sauvignon"]);
    assert_eq!(find_intents(table.facet(Facet::Body), "something dolgun"), vec!["Full"]);
}

#[test]
fn test_aliases_for_unknown_label_is_empty() {
    assert!(aliases_for(default_alias_table().facet(Facet::Grape), "Merlot").is_empty());
}
