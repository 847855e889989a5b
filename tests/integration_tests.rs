//! Integration tests against the public API
//!
//! Drives the full flow a paginated HTTP endpoint would: query map →
//! typed actions → result page → next link, plus the dynamic registry
//! bridge and response-body serialization.

use pagewise::actions::{self, base_uri, page_request_from_query};
use pagewise::{
    Error, ItemFilter, PageRequest, PaginationActions, Source, StringMap, VecSource,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
struct Widget {
    id: u32,
}

fn widgets(count: u32) -> VecSource<Widget> {
    VecSource::new((1..=count).map(|id| Widget { id }).collect())
}

fn query_of(uri: &Url) -> StringMap {
    uri.query_pairs().into_owned().collect()
}

/// A registry source that never opted into pagination.
struct WidgetCatalog;

impl Source<Widget> for WidgetCatalog {
    type Filter = ItemFilter<Widget>;
}

// ============================================================================
// Link-Following Flow
// ============================================================================

#[tokio::test]
async fn test_client_can_walk_next_links_to_the_end() {
    let actions = PaginationActions::new(
        widgets(250),
        base_uri("http", "api.test", "/widgets").unwrap(),
    );

    let mut seen = Vec::new();
    let mut query = StringMap::from([("pagesize".to_string(), "100".to_string())]);
    let mut pages = 0;

    loop {
        let page = actions.get_page_from_query(&query, None).await.unwrap();
        seen.extend(page.results().iter().map(|widget| widget.id));
        pages += 1;

        match page.next() {
            // A client follows the link by parsing its query, exactly
            // like the inbound request was parsed.
            Some(next) => query = query_of(next),
            None => break,
        }
    }

    assert_eq!(pages, 3);
    assert_eq!(seen, (1..=250).collect::<Vec<u32>>());
}

#[tokio::test]
async fn test_exact_multiple_links_to_one_trailing_empty_page() {
    let actions = PaginationActions::new(
        widgets(200),
        base_uri("http", "api.test", "/widgets").unwrap(),
    );

    let page_two = actions
        .get_page(PageRequest::new(Some(2), Some(100)), None)
        .await
        .unwrap();
    assert_eq!(page_two.results().len(), 100);
    assert!(page_two.next().is_some());

    let page_three = actions
        .get_page_from_query(&query_of(page_two.next().unwrap()), None)
        .await
        .unwrap();
    assert!(page_three.results().is_empty());
    assert!(page_three.next().is_none());
}

#[tokio::test]
async fn test_filtered_paging_stays_consistent_with_count() {
    let actions = PaginationActions::new(
        widgets(37),
        base_uri("http", "api.test", "/widgets").unwrap(),
    );
    let even = |widget: &Widget| widget.id % 2 == 0;

    let total = actions.count(Some(&even)).await.unwrap();
    assert_eq!(total, 18);

    let mut seen = 0;
    let mut request = PageRequest::new(None, Some(5));
    loop {
        let page = actions.get_page(request, Some(&even)).await.unwrap();
        seen += page.results().len() as u64;
        assert!(page.results().iter().all(|widget| widget.id % 2 == 0));
        if page.next().is_none() {
            break;
        }
        request = request.next();
    }
    assert_eq!(seen, total);
}

// ============================================================================
// Dynamic Registry Flow
// ============================================================================

#[tokio::test]
async fn test_registry_mixes_pageable_and_plain_sources() {
    let registry: Vec<Box<dyn Source<Widget, Filter = ItemFilter<Widget>>>> =
        vec![Box::new(widgets(6)), Box::new(WidgetCatalog)];
    let base = base_uri("http", "api.test", "/widgets").unwrap();
    let request = PageRequest::new(Some(1), Some(4));

    let page = actions::get_page_with_next(registry[0].as_ref(), request, &base, None)
        .await
        .unwrap();
    assert_eq!(page.results().len(), 4);
    assert_eq!(
        page.next().map(Url::as_str),
        Some("http://api.test/widgets?page=2&pagesize=4")
    );

    let err = actions::get_page_with_next(registry[1].as_ref(), request, &base, None)
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Data source for entity 'Widget' does not support pagination"
    );
    assert!(matches!(err, Error::CapabilityNotSupported { .. }));
}

// ============================================================================
// Response-Body Shape
// ============================================================================

#[tokio::test]
async fn test_decorated_page_serializes_for_a_response_body() {
    let actions = PaginationActions::new(widgets(4), Url::parse("http://test.test").unwrap());

    let page = actions
        .get_page(PageRequest::new(Some(1), Some(2)), None)
        .await
        .unwrap();

    assert_eq!(
        serde_json::to_value(&page).unwrap(),
        json!({
            "request": { "page": 1, "page_size": 2 },
            "results": [{ "id": 1 }, { "id": 2 }],
            "next": "http://test.test/?page=2&pagesize=2",
        })
    );
}

#[tokio::test]
async fn test_last_page_serializes_a_null_next() {
    let actions = PaginationActions::new(widgets(1), Url::parse("http://test.test").unwrap());

    let page = actions
        .get_page(PageRequest::new(Some(1), Some(2)), None)
        .await
        .unwrap();

    assert_eq!(
        serde_json::to_value(&page).unwrap(),
        json!({
            "request": { "page": 1, "page_size": 2 },
            "results": [{ "id": 1 }],
            "next": null,
        })
    );
}

// ============================================================================
// Query Normalization at the Edge
// ============================================================================

#[tokio::test]
async fn test_malformed_paging_input_degrades_to_defaults() {
    let actions = PaginationActions::new(
        widgets(150),
        base_uri("http", "api.test", "/widgets").unwrap(),
    );
    let query = StringMap::from([
        ("page".to_string(), "not-a-number".to_string()),
        ("pagesize".to_string(), String::new()),
    ]);

    let page = actions.get_page_from_query(&query, None).await.unwrap();
    assert_eq!(page.request(), PageRequest::default());
    assert_eq!(page.results().len(), 100);
}

#[test]
fn test_parse_round_trips_a_next_link() {
    let next = Url::parse("http://api.test/widgets?page=124&pagesize=2").unwrap();
    let request = page_request_from_query(&query_of(&next));
    assert_eq!(request, PageRequest::new(Some(124), Some(2)));
}
