//! Filter-panel facets: strict AND, independent of the score.

use crate::common::{ids, rank_filtered, sample_menu};
use sommelier::{facet_options, FacetFilters};

fn filters() -> FacetFilters {
    FacetFilters::default()
}

#[test]
fn test_multi_select_type_and_body() {
    let menu = sample_menu();
    let whites = FacetFilters {
        types: vec!["White".into()],
        ..filters()
    };
    assert_eq!(ids(&rank_filtered(&menu, "", whites)), ["1", "3"]);

    let bodies = FacetFilters {
        bodies: vec!["Full".into(), "Light".into()],
        ..filters()
    };
    assert_eq!(ids(&rank_filtered(&menu, "", bodies)), ["1", "2", "4", "5", "6"]);
}

#[test]
fn test_prefix_filters() {
    let menu = sample_menu();
    let by = |f: FacetFilters| ids(&rank_filtered(&menu, "", f));

    assert_eq!(by(FacetFilters { company: "chateau".into(), ..filters() }), ["2", "6"]);
    assert_eq!(by(FacetFilters { country: "Fr".into(), ..filters() }), ["2", "6"]);
    assert_eq!(by(FacetFilters { region: "napa".into(), ..filters() }), ["4"]);
    assert_eq!(by(FacetFilters { vintage: "202".into(), ..filters() }), ["1", "6", "7"]);
}

#[test]
fn test_filters_combine_with_query() {
    let menu = sample_menu();
    let italy = FacetFilters {
        country: "ita".into(),
        ..filters()
    };
    assert_eq!(ids(&rank_filtered(&menu, "rosso", italy)), ["5"]);
}

#[test]
fn test_conflicting_filter_and_query_give_nothing() {
    let menu = sample_menu();
    let whites = FacetFilters {
        types: vec!["White".into()],
        ..filters()
    };
    assert!(rank_filtered(&menu, "red", whites).is_empty());
}

#[test]
fn test_facet_options_list_menu_labels() {
    let options = facet_options(&sample_menu());
    assert_eq!(options.types, ["White", "Red", "Rosé", "Sparkling"]);
    assert_eq!(options.bodies, ["Light", "Full", "Medium"]);
}
