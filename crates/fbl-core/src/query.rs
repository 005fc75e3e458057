//! Feedback query parameters and their translation to the API's wire form.
//!
//! Reviewers page through results with a 0-based pager; the API counts pages
//! from 1. [`api_page`] is the only place that translation happens.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::SortVariant;
use crate::errors::CoreError;

/// Filters forwarded to `feedback/` unchanged.
///
/// `node_id: None` means "no node filter"; `Some(vec![])` is an explicit empty
/// filter, which is what an empty watched-content intersection produces.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedbackFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<Vec<u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<Vec<u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info_found: Option<bool>,
}

/// What a reviewer asks for when listing feedback.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedbackQuery {
    #[serde(flatten)]
    pub filters: FeedbackFilters,
    #[serde(default)]
    pub sort: SortVariant,
    /// 0-based pager page. `None` is the first page.
    #[serde(default)]
    pub page: Option<u32>,
    /// Scope results to content the reviewer watches.
    #[serde(default)]
    pub watch_content: bool,
}

/// Body of a `GET feedback/` request.
///
/// Built only through [`FeedbackQuery::into_request`]; it never carries the
/// `watch_content` switch, which is resolved locally.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FeedbackRequest {
    #[serde(flatten)]
    pub filters: FeedbackFilters,
    pub per_page: u32,
    /// 1-based API page.
    pub page: u32,
    pub order_by: &'static str,
    pub desc: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_type: Option<&'static str>,
}

impl FeedbackQuery {
    /// Translate into the wire request.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when `per_page` is zero.
    pub fn into_request(self, per_page: u32) -> Result<FeedbackRequest, CoreError> {
        if per_page == 0 {
            return Err(CoreError::Validation(
                "per_page must be a positive integer".to_string(),
            ));
        }
        Ok(FeedbackRequest {
            filters: self.filters,
            per_page,
            page: api_page(self.page),
            order_by: SortVariant::ORDER_BY,
            desc: self.sort.desc(),
            file_type: None,
        })
    }
}

impl FeedbackRequest {
    /// Ask the API for a CSV export instead of JSON.
    #[must_use]
    pub const fn as_csv(mut self) -> Self {
        self.file_type = Some("csv");
        self
    }
}

/// Map a 0-based pager page to the API's 1-based page.
#[must_use]
pub const fn api_page(ui_page: Option<u32>) -> u32 {
    match ui_page {
        Some(page) => page.saturating_add(1),
        None => 1,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case(None, 1)]
    #[case(Some(0), 1)]
    #[case(Some(1), 2)]
    #[case(Some(41), 42)]
    #[case(Some(u32::MAX), u32::MAX)]
    fn ui_page_is_zero_based(#[case] ui: Option<u32>, #[case] api: u32) {
        assert_eq!(api_page(ui), api);
    }

    #[test]
    fn request_wire_shape() {
        let query = FeedbackQuery {
            filters: FeedbackFilters {
                node_id: Some(vec![2]),
                info_found: Some(false),
                date_from: NaiveDate::from_ymd_opt(2024, 1, 31),
                ..FeedbackFilters::default()
            },
            sort: SortVariant::OldestFirst,
            page: Some(3),
            watch_content: true,
        };
        let body = serde_json::to_value(query.into_request(25).unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "node_id": [2],
                "date_from": "2024-01-31",
                "info_found": false,
                "per_page": 25,
                "page": 4,
                "order_by": "submit_date",
                "desc": false
            })
        );
    }

    #[test]
    fn csv_request_sets_file_type() {
        let request = FeedbackQuery::default().into_request(10).unwrap().as_csv();
        let body = serde_json::to_value(request).unwrap();
        assert_eq!(body["file_type"], "csv");
        assert_eq!(body["desc"], true);
    }

    #[test]
    fn zero_per_page_is_rejected() {
        assert!(matches!(
            FeedbackQuery::default().into_request(0),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn explicit_empty_node_filter_is_sent() {
        let query = FeedbackQuery {
            filters: FeedbackFilters {
                node_id: Some(Vec::new()),
                ..FeedbackFilters::default()
            },
            ..FeedbackQuery::default()
        };
        let body = serde_json::to_value(query.into_request(10).unwrap()).unwrap();
        assert_eq!(body["node_id"], json!([]));
    }
}
