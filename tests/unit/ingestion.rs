//! Turning the data layer's loosely shaped JSON into fixed-shape records.

use sommelier::{RawWine, WineRecord};

fn ingest(json: &str) -> WineRecord {
    let raw: RawWine = serde_json::from_str(json).unwrap();
    WineRecord::from(raw)
}

#[test]
fn test_grape_list_and_aliases() {
    let wine = ingest(r#"{"id": "x1", "name": "GSM", "producer": "Domaine", "grapes": ["Grenache", "Syrah", " "]}"#);
    assert_eq!(wine.name, "GSM");
    assert_eq!(wine.producer.as_deref(), Some("Domaine"));
    assert_eq!(wine.grapes, vec!["Grenache", "Syrah"]);
}

#[test]
fn test_varietal_spelling() {
    let wine = ingest(r#"{"id": 3, "wine_name": "Sancerre", "varietal": "Sauvignon Blanc"}"#);
    assert_eq!(wine.grapes, vec!["Sauvignon Blanc"]);
}

#[test]
fn test_unparsable_numbers_become_absent() {
    let wine = ingest(r#"{"id": 4, "wine_name": "NV Brut", "vintage": "NV", "price": "market"}"#);
    assert_eq!(wine.vintage, None);
    assert_eq!(wine.price, None);
    assert_eq!(wine.vintage_string(), "");
}

#[test]
fn test_nulls_and_blanks_become_absent() {
    let wine = ingest(r#"{"id": 5, "wine_name": "Table", "region": null, "country": "  ", "type": ""}"#);
    assert_eq!(wine.region, None);
    assert_eq!(wine.country, None);
    assert_eq!(wine.wine_type, None);
}

#[test]
fn test_empty_object_still_ingests() {
    let wine = ingest("{}");
    assert_eq!(wine.name, "");
    assert!(wine.grapes.is_empty());
}
