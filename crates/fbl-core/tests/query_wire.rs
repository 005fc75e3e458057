//! From a reviewer's query to the JSON body sent to `feedback/`.

use chrono::NaiveDate;
use fbl_core::enums::SortVariant;
use fbl_core::query::{FeedbackFilters, FeedbackQuery};
use fbl_core::watched::scope_to_watched;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

fn wire_body(mut query: FeedbackQuery, watched: &[u64]) -> serde_json::Value {
    if query.watch_content {
        scope_to_watched(&mut query.filters, watched);
    }
    serde_json::to_value(query.into_request(20).unwrap()).unwrap()
}

#[test]
fn watched_intersection_reaches_the_wire() {
    let query = FeedbackQuery {
        filters: FeedbackFilters {
            node_id: Some(vec![2, 5]),
            ..FeedbackFilters::default()
        },
        watch_content: true,
        ..FeedbackQuery::default()
    };

    assert_eq!(
        wire_body(query, &[1, 2, 3]),
        json!({
            "node_id": [2],
            "per_page": 20,
            "page": 1,
            "order_by": "submit_date",
            "desc": true,
        })
    );
}

#[test]
fn empty_intersection_sends_empty_node_filter() {
    let query = FeedbackQuery {
        filters: FeedbackFilters {
            node_id: Some(vec![9]),
            ..FeedbackFilters::default()
        },
        watch_content: true,
        ..FeedbackQuery::default()
    };
    assert_eq!(wire_body(query, &[1, 2])["node_id"], json!([]));
}

#[test]
fn watched_ids_replace_missing_node_filter_alongside_org() {
    let query = FeedbackQuery {
        filters: FeedbackFilters {
            org_id: Some(vec![40]),
            author_id: Some(7),
            ..FeedbackFilters::default()
        },
        watch_content: true,
        ..FeedbackQuery::default()
    };
    let body = wire_body(query, &[3, 1]);
    assert_eq!(body["node_id"], json!([3, 1]));
    assert_eq!(body["org_id"], json!([40]));
    assert_eq!(body["author_id"], json!(7));
}

#[test]
fn unscoped_query_is_forwarded_unchanged() {
    let query = FeedbackQuery {
        filters: FeedbackFilters {
            node_id: Some(vec![2, 5]),
            date_from: NaiveDate::from_ymd_opt(2024, 1, 1),
            tag_id: Some(3),
            info_found: Some(false),
            ..FeedbackFilters::default()
        },
        sort: SortVariant::OldestFirst,
        page: Some(4),
        watch_content: false,
    };

    assert_eq!(
        wire_body(query, &[1]),
        json!({
            "node_id": [2, 5],
            "date_from": "2024-01-01",
            "tag_id": 3,
            "info_found": false,
            "per_page": 20,
            "page": 5,
            "order_by": "submit_date",
            "desc": false,
        })
    );
}

#[rstest]
#[case(None, 1)]
#[case(Some(0), 1)]
#[case(Some(1), 2)]
#[case(Some(41), 42)]
fn ui_page_is_one_off_from_api_page(#[case] ui_page: Option<u32>, #[case] api_page: u64) {
    let query = FeedbackQuery {
        page: ui_page,
        ..FeedbackQuery::default()
    };
    assert_eq!(wire_body(query, &[])["page"], json!(api_page));
}

#[test]
fn wire_body_never_carries_watch_content() {
    let query = FeedbackQuery {
        watch_content: true,
        ..FeedbackQuery::default()
    };
    let body = wire_body(query, &[1]);
    assert!(body.get("watch_content").is_none());
}

#[test]
fn query_deserializes_from_link_parameters() {
    let query: FeedbackQuery = serde_json::from_value(json!({
        "node_id": [4],
        "sort": "oldest_first",
        "page": 2,
        "watch_content": true,
    }))
    .unwrap();
    assert_eq!(query.filters.node_id, Some(vec![4]));
    assert_eq!(query.sort, SortVariant::OldestFirst);
    assert_eq!(query.page, Some(2));
    assert!(query.watch_content);
}
