//! Pagination boundaries and page resets.

use crate::common::{synthetic_menu, server_aliases};
use sommelier::{rank_page, SearchState, PAGE_SIZE};

#[test]
fn test_first_and_last_page() {
    let menu = synthetic_menu(37);
    let aliases = server_aliases();

    let first = rank_page(&menu, &SearchState::new(), &aliases);
    assert_eq!(first.wines.len(), PAGE_SIZE);
    assert_eq!(first.page.summary(), "Pg 1/4 • 1-10 / 37");

    let last = rank_page(&menu, &SearchState::new().with_page(3), &aliases);
    assert_eq!(last.wines.len(), 7);
    assert_eq!(last.page.summary(), "Pg 4/4 • 31-37 / 37");
}

#[test]
fn test_past_the_end_clamps_to_last_page() {
    let menu = synthetic_menu(37);
    let clamped = rank_page(&menu, &SearchState::new().with_page(99), &server_aliases());
    assert_eq!(clamped.page.index, 3);
    assert_eq!(clamped.wines.len(), 7);
}

#[test]
fn test_exact_multiple_of_page_size() {
    let menu = synthetic_menu(20);
    let page = rank_page(&menu, &SearchState::new().with_page(5), &server_aliases()).page;
    assert_eq!(page.page_count, 2);
    assert_eq!(page.index, 1);
}

#[test]
fn test_no_wines_is_one_empty_page() {
    let page = rank_page(&[], &SearchState::new().with_page(2), &server_aliases());
    assert!(page.wines.is_empty());
    assert_eq!(page.page.page_count, 1);
    assert_eq!(page.page.index, 0);
    assert_eq!(page.page.summary(), "Pg 1/1 • 0-0 / 0");
}

#[test]
fn test_new_query_resets_to_first_page() {
    let state = SearchState::new().with_page(3).type_draft("rosso").submit();
    assert_eq!(state.page(), 0);
}

#[test]
fn test_pages_of_a_query() {
    // four reds in every eight wines
    let menu = synthetic_menu(40);
    let aliases = server_aliases();
    let second = rank_page(&menu, &SearchState::with_query("rosso").with_page(1), &aliases);

    assert_eq!(second.page.total, 20);
    assert_eq!(second.page.page_count, 2);
    assert_eq!(second.wines.len(), 10);
    assert!(second.wines.iter().all(|w| w.wine_type.as_deref() == Some("Red")));
}
