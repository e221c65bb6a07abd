use super::*;
use crate::net::types::Fee;

fn listing(id: usize, country: &str, category: VisaCategory) -> VisaListing {
    VisaListing {
        id: format!("v{id}"),
        country: country.to_owned(),
        category,
        fee: Fee::Amount(10.0),
        validity: None,
        processing_time: "7 days".to_owned(),
        description: String::new(),
        image_url: String::new(),
        application_method: None,
        added_by: None,
    }
}

/// Ten listings, three of them Work visas.
fn ten_listings() -> Vec<VisaListing> {
    vec![
        listing(0, "Japan", VisaCategory::Tourist),
        listing(1, "Canada", VisaCategory::Work),
        listing(2, "Germany", VisaCategory::Study),
        listing(3, "Brazil", VisaCategory::Business),
        listing(4, "New Zealand", VisaCategory::Work),
        listing(5, "Kenya", VisaCategory::Tourist),
        listing(6, "Spain", VisaCategory::Study),
        listing(7, "Ireland", VisaCategory::Work),
        listing(8, "Iceland", VisaCategory::Tourist),
        listing(9, "India", VisaCategory::Business),
    ]
}

fn ids(visas: &[&VisaListing]) -> Vec<String> {
    visas.iter().map(|v| v.id.clone()).collect()
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn empty_filter_keeps_everything_in_order() {
    let visas = ten_listings();
    let filtered = filter_visas(&visas, &VisaFilter::default());
    assert_eq!(filtered.len(), 10);
    assert_eq!(filtered[0].id, "v0");
    assert_eq!(filtered[9].id, "v9");
}

#[test]
fn query_is_case_insensitive_substring() {
    let visas = ten_listings();
    let filter = VisaFilter { query: "LAND".to_owned(), category: None };
    assert_eq!(ids(&filter_visas(&visas, &filter)), vec!["v4", "v7", "v8"]);
}

#[test]
fn query_is_trimmed() {
    let visas = ten_listings();
    let filter = VisaFilter { query: "  japan ".to_owned(), category: None };
    assert_eq!(ids(&filter_visas(&visas, &filter)), vec!["v0"]);
}

#[test]
fn category_is_equality_filter() {
    let visas = ten_listings();
    let filter = VisaFilter { query: String::new(), category: Some(VisaCategory::Study) };
    assert_eq!(ids(&filter_visas(&visas, &filter)), vec!["v2", "v6"]);
}

#[test]
fn query_and_category_combine() {
    let visas = ten_listings();
    let filter = VisaFilter { query: "i".to_owned(), category: Some(VisaCategory::Tourist) };
    assert_eq!(ids(&filter_visas(&visas, &filter)), vec!["v8"]);
}

#[test]
fn repeated_filter_input_is_idempotent() {
    let visas = ten_listings();
    let filter = VisaFilter { query: "an".to_owned(), category: Some(VisaCategory::Work) };
    let first = ids(&filter_visas(&visas, &filter));
    let second = ids(&filter_visas(&visas, &filter));
    assert_eq!(first, second);
}

#[test]
fn filtered_result_is_ordered_subsequence() {
    let visas = ten_listings();
    let filter = VisaFilter { query: "a".to_owned(), category: None };
    let filtered = filter_visas(&visas, &filter);
    let positions: Vec<usize> = filtered
        .iter()
        .map(|f| visas.iter().position(|v| v.id == f.id).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn page_count_is_ceiling() {
    assert_eq!(page_count(0, 8), 0);
    assert_eq!(page_count(1, 8), 1);
    assert_eq!(page_count(8, 8), 1);
    assert_eq!(page_count(9, 8), 2);
    assert_eq!(page_count(16, 8), 2);
    assert_eq!(page_count(17, 8), 3);
}

#[test]
fn page_count_zero_page_size_is_zero() {
    assert_eq!(page_count(5, 0), 0);
}

#[test]
fn pages_partition_the_collection() {
    for n in 0..=40 {
        let items: Vec<usize> = (0..n).collect();
        let pages = page_count(n, BROWSE_PAGE_SIZE);
        let mut rebuilt = Vec::new();
        for page in 1..=pages {
            let slice = page_slice(&items, page, BROWSE_PAGE_SIZE);
            assert!(!slice.is_empty());
            if page < pages {
                assert_eq!(slice.len(), BROWSE_PAGE_SIZE);
            }
            rebuilt.extend_from_slice(slice);
        }
        assert_eq!(rebuilt, items);
    }
}

#[test]
fn first_page_is_items_zero_to_eight() {
    let items: Vec<usize> = (0..20).collect();
    assert_eq!(page_slice(&items, 1, 8), &[0, 1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn last_page_holds_remainder() {
    let items: Vec<usize> = (0..20).collect();
    assert_eq!(page_slice(&items, 3, 8), &[16, 17, 18, 19]);
}

#[test]
fn out_of_range_pages_are_empty() {
    let items: Vec<usize> = (0..5).collect();
    assert!(page_slice(&items, 0, 8).is_empty());
    assert!(page_slice(&items, 2, 8).is_empty());
}

// =============================================================
// BrowseState
// =============================================================

#[test]
fn scenario_work_filter_yields_three_on_one_page() {
    let mut state = BrowseState::new(ten_listings());
    state.set_category(Some(VisaCategory::Work));

    assert_eq!(state.filtered().len(), 3);
    assert_eq!(state.total_pages(), 1);
    assert!(!state.show_pagination());
    assert_eq!(state.visible().len(), 3);
}

#[test]
fn unfiltered_ten_listings_span_two_pages() {
    let mut state = BrowseState::new(ten_listings());
    assert_eq!(state.total_pages(), 2);
    assert!(state.show_pagination());
    assert_eq!(state.visible().len(), 8);

    state.go_to(2);
    let second: Vec<String> = state.visible().into_iter().map(|v| v.id).collect();
    assert_eq!(second, vec!["v8", "v9"]);
}

#[test]
fn filter_change_resets_to_first_page() {
    let mut state = BrowseState::new(ten_listings());
    state.go_to(2);
    state.set_query("a");
    assert_eq!(state.page, 1);

    state.go_to(2);
    state.set_category(None);
    assert_eq!(state.page, 1);
}

#[test]
fn go_to_clamps_to_valid_range() {
    let mut state = BrowseState::new(ten_listings());
    state.go_to(99);
    assert_eq!(state.page, 2);
    state.go_to(0);
    assert_eq!(state.page, 1);
}

#[test]
fn go_to_on_empty_result_stays_on_first_page() {
    let mut state = BrowseState::new(ten_listings());
    state.set_query("atlantis");
    state.go_to(3);
    assert_eq!(state.page, 1);
    assert!(state.visible().is_empty());
}
