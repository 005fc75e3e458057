//! Pager view model.
//!
//! Pages are 0-based here, as in the UI query string. Labels on numbered
//! items are 1-based.

use serde::Serialize;

/// Numbered pages shown around the current one.
pub const PAGER_QUANTITY: u64 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PagerItem {
    First,
    Previous,
    Page,
    Current,
    Next,
    Last,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagerLink {
    pub item: PagerItem,
    pub label: String,
    /// 0-based page this link points at.
    pub page: u64,
    /// Query string including the preserved parameters, e.g. `?tag_id=4&page=2`.
    pub href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Pager {
    pub total_items: u64,
    pub total_pages: u64,
    pub current_page: u64,
    /// Numbered pages exist before the window.
    pub ellipsis_before: bool,
    /// Numbered pages exist after the window.
    pub ellipsis_after: bool,
    pub links: Vec<PagerLink>,
}

impl Pager {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// Build the pager for `total` items shown `limit` per page.
///
/// `current_page` is clamped to the last page. `parameters` are carried on
/// every link ahead of `page`; an incoming `page` parameter is replaced.
#[must_use]
pub fn build_pager(
    total: u64,
    limit: u32,
    current_page: u64,
    parameters: &[(String, String)],
) -> Pager {
    let total_pages = if limit == 0 {
        0
    } else {
        total.div_ceil(u64::from(limit))
    };
    let current = current_page.min(total_pages.saturating_sub(1));

    let mut pager = Pager {
        total_items: total,
        total_pages,
        current_page: current,
        ..Pager::default()
    };
    if total_pages <= 1 {
        return pager;
    }

    let base = preserved_query(parameters);
    let link = |item: PagerItem, label: String, page: u64| PagerLink {
        item,
        label,
        page,
        href: format!("?{base}page={page}"),
    };

    let (first, last) = window(current, total_pages);
    pager.ellipsis_before = first > 0;
    pager.ellipsis_after = last + 1 < total_pages;

    if current > 0 {
        pager.links.push(link(PagerItem::First, "First".into(), 0));
        pager
            .links
            .push(link(PagerItem::Previous, "Previous".into(), current - 1));
    }
    for page in first..=last {
        let item = if page == current {
            PagerItem::Current
        } else {
            PagerItem::Page
        };
        pager.links.push(link(item, (page + 1).to_string(), page));
    }
    if current + 1 < total_pages {
        pager
            .links
            .push(link(PagerItem::Next, "Next".into(), current + 1));
        pager
            .links
            .push(link(PagerItem::Last, "Last".into(), total_pages - 1));
    }

    pager
}

/// First and last 0-based page of the numbered window around `current`.
fn window(current: u64, total_pages: u64) -> (u64, u64) {
    let quantity = PAGER_QUANTITY.min(total_pages);
    let before = PAGER_QUANTITY.div_ceil(2) - 1;
    let first = current
        .saturating_sub(before)
        .min(total_pages - quantity);
    (first, first + quantity - 1)
}

fn preserved_query(parameters: &[(String, String)]) -> String {
    parameters
        .iter()
        .filter(|(key, _)| key != "page")
        .map(|(key, value)| {
            format!(
                "{}={}&",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn labels(pager: &Pager) -> Vec<&str> {
        pager.links.iter().map(|l| l.label.as_str()).collect()
    }

    #[rstest]
    #[case(0, 20)]
    #[case(20, 20)]
    #[case(5, 0)]
    fn single_page_has_no_links(#[case] total: u64, #[case] limit: u32) {
        let pager = build_pager(total, limit, 0, &[]);
        assert!(pager.is_empty());
    }

    #[rstest]
    #[case(21, 20, 2)]
    #[case(40, 20, 2)]
    #[case(41, 20, 3)]
    #[case(1000, 20, 50)]
    fn total_pages_round_up(#[case] total: u64, #[case] limit: u32, #[case] pages: u64) {
        assert_eq!(build_pager(total, limit, 0, &[]).total_pages, pages);
    }

    #[test]
    fn first_page_has_no_backward_links() {
        let pager = build_pager(60, 20, 0, &[]);
        assert_eq!(labels(&pager), vec!["1", "2", "3", "Next", "Last"]);
        assert_eq!(pager.links[0].item, PagerItem::Current);
        assert_eq!(pager.links[4].page, 2);
    }

    #[test]
    fn last_page_has_no_forward_links() {
        let pager = build_pager(60, 20, 2, &[]);
        assert_eq!(labels(&pager), vec!["First", "Previous", "1", "2", "3"]);
        assert_eq!(pager.links[1].page, 1);
    }

    #[test]
    fn window_is_centered_and_clamped() {
        let pager = build_pager(1000, 20, 25, &[]);
        let numbers = pager
            .links
            .iter()
            .filter(|l| matches!(l.item, PagerItem::Page | PagerItem::Current))
            .map(|l| l.page)
            .collect::<Vec<_>>();
        assert_eq!(numbers, (21..=29).collect::<Vec<_>>());
        assert!(pager.ellipsis_before);
        assert!(pager.ellipsis_after);

        let pager = build_pager(1000, 20, 48, &[]);
        let first_number = pager
            .links
            .iter()
            .find(|l| l.item == PagerItem::Page)
            .map(|l| l.page);
        assert_eq!(first_number, Some(41));
        assert!(!pager.ellipsis_after);
    }

    #[test]
    fn current_page_clamped_to_last() {
        let pager = build_pager(45, 20, 10, &[]);
        assert_eq!(pager.current_page, 2);
        assert_eq!(labels(&pager), vec!["First", "Previous", "1", "2", "3"]);
    }

    #[test]
    fn links_preserve_parameters() {
        let params = vec![
            ("tag_id".to_string(), "4".to_string()),
            ("page".to_string(), "7".to_string()),
            ("search".to_string(), "a&b c".to_string()),
        ];
        let pager = build_pager(60, 20, 1, &params);
        let next = pager
            .links
            .iter()
            .find(|l| l.item == PagerItem::Next)
            .unwrap();
        assert_eq!(next.href, "?tag_id=4&search=a%26b%20c&page=2");
    }
}
