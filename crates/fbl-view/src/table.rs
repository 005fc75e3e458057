//! Feedback table view model.
//!
//! [`build_feedback_table`] turns one page of feedback into headers and rows
//! of typed [`Cell`]s. Cells carry data, not markup: text is escaped when it
//! is rendered, and actions (remove tag, add tag) are described by the ids
//! the tag form needs.

use std::collections::HashMap;

use fbl_core::entities::{FeedbackRecord, SurveyAnswers, TagCatalog};
use fbl_core::enums::RequestedResponse;
use serde::Serialize;

use crate::fields::LimitField;

/// DOM id of the rendered table.
pub const TABLE_ID: &str = "feedback-table";

/// Width of the survey details row.
pub const SURVEY_COLSPAN: u8 = 8;

/// Message shown when the page has no rows and the reviewer watches content.
pub const NO_FEEDBACK: &str = "No feedback available.";

/// Message shown when the reviewer watches nothing.
pub const NOT_WATCHING: &str = "You must be watching content to view related feedback.";

/// A node that feedback was left on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourcePage {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
    pub label: &'static str,
    /// Sort key for sortable columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<&'static str>,
}

impl HeaderCell {
    const fn new(label: &'static str) -> Self {
        Self {
            label,
            sort_by: None,
            class: None,
        }
    }

    const fn sortable(mut self, key: &'static str) -> Self {
        self.sort_by = Some(key);
        self
    }

    const fn class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }
}

/// What the table shows instead of rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EmptyMessage {
    Text { text: String },
    Link { text: String, url: String },
}

impl EmptyMessage {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Text { text } | Self::Link { text, .. } => text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    Feedback,
    SurveyDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    /// `feedback_<index>`, or `feedback_<index>_details` for survey rows.
    pub key: String,
    pub kind: RowKind,
    pub feedback_id: u64,
    pub cells: Vec<Cell>,
}

/// Ids the remove-tag form needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RemoveTagAction {
    pub comment_id: u64,
    pub tag_id: u64,
    pub tag_unique_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TagItem {
    Chip {
        dom_id: String,
        name: String,
        remove: RemoveTagAction,
    },
    /// Keeps the list element present so tags added later have a home.
    NotTagged { dom_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cell {
    Text {
        text: String,
    },
    Link {
        title: String,
        url: String,
    },
    /// Free-text feedback with an expand toggle.
    FeedbackText {
        text: String,
        toggle: &'static str,
    },
    RequiresResponse {
        response: RequestedResponse,
        contact: Vec<String>,
    },
    Survey {
        has_survey: bool,
    },
    Tags {
        list_class: String,
        items: Vec<TagItem>,
    },
    AddTag {
        comment_id: u64,
    },
    SurveyDetails {
        colspan: u8,
        answers: SurveyAnswers,
    },
}

impl Cell {
    fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// The cell flattened to one line of plain text, for terminal tables.
    #[must_use]
    pub fn plain_text(&self) -> String {
        match self {
            Self::Text { text } | Self::FeedbackText { text, .. } => text.clone(),
            Self::Link { title, .. } => title.clone(),
            Self::RequiresResponse { response, contact } => {
                let label = response_label(*response);
                if contact.is_empty() {
                    label.to_string()
                } else {
                    format!("{label} ({})", contact.join(", "))
                }
            }
            Self::Survey { has_survey } => yes_no(*has_survey).to_string(),
            Self::Tags { items, .. } => items
                .iter()
                .map(|item| match item {
                    TagItem::Chip { name, .. } => name.as_str(),
                    TagItem::NotTagged { .. } => "Not tagged",
                })
                .collect::<Vec<_>>()
                .join(", "),
            Self::AddTag { .. } => "Add tag".to_string(),
            Self::SurveyDetails { answers, .. } => survey_summary(answers),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackTable {
    pub id: &'static str,
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<TableRow>,
    pub empty: EmptyMessage,
}

impl FeedbackTable {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows of the main table, without survey details rows.
    pub fn feedback_rows(&self) -> impl Iterator<Item = &TableRow> {
        self.rows.iter().filter(|row| row.kind == RowKind::Feedback)
    }
}

/// Build the feedback table for one page of results.
///
/// `sources` maps node ids to their title and URL; records on unknown nodes
/// show the bare node id. Tag assignments whose id is not in `tags` are
/// skipped.
#[must_use]
pub fn build_feedback_table(
    results: &[FeedbackRecord],
    tags: &TagCatalog,
    is_watching_content: bool,
    limit_fields: &[LimitField],
    sources: &HashMap<u64, SourcePage>,
    watched_content_url: &str,
) -> FeedbackTable {
    let show = |field: LimitField| field.included_in(limit_fields);

    let empty = if is_watching_content {
        EmptyMessage::Text {
            text: NO_FEEDBACK.to_string(),
        }
    } else {
        EmptyMessage::Link {
            text: NOT_WATCHING.to_string(),
            url: watched_content_url.to_string(),
        }
    };

    let mut rows = Vec::with_capacity(results.len());
    for (index, feedback) in results.iter().enumerate() {
        let key = format!("feedback_{index}");
        let mut cells = Vec::new();

        if show(LimitField::SubmitDate) {
            cells.push(Cell::text(format_submit_date(feedback)));
        }
        if show(LimitField::InfoFound) {
            cells.push(Cell::text(yes_no(feedback.info_found)));
        }
        if show(LimitField::SourcePage) {
            cells.push(source_cell(feedback.node_id, sources));
        }
        if show(LimitField::Text) {
            cells.push(Cell::FeedbackText {
                text: feedback.text.clone().unwrap_or_default(),
                toggle: "Show More",
            });
        }
        if show(LimitField::RequestedResponse) {
            cells.push(requires_response_cell(feedback));
        }
        if show(LimitField::Survey) {
            cells.push(Cell::Survey {
                has_survey: feedback.survey_id.is_some(),
            });
        }
        if show(LimitField::Tags) {
            cells.push(tags_cell(feedback, tags));
            cells.push(Cell::AddTag {
                comment_id: feedback.id,
            });
        }

        rows.push(TableRow {
            key: key.clone(),
            kind: RowKind::Feedback,
            feedback_id: feedback.id,
            cells,
        });

        if show(LimitField::Survey)
            && let Some(answers) = feedback.survey()
        {
            rows.push(TableRow {
                key: format!("{key}_details"),
                kind: RowKind::SurveyDetails,
                feedback_id: feedback.id,
                cells: vec![Cell::SurveyDetails {
                    colspan: SURVEY_COLSPAN,
                    answers,
                }],
            });
        }
    }

    FeedbackTable {
        id: TABLE_ID,
        headers: headers(limit_fields),
        rows,
        empty,
    }
}

fn headers(limit_fields: &[LimitField]) -> Vec<HeaderCell> {
    let mut headers = Vec::new();
    for field in LimitField::ALL {
        if !field.included_in(limit_fields) {
            continue;
        }
        match field {
            LimitField::SubmitDate => {
                headers.push(HeaderCell::new("Date").sortable("submit_date"));
            }
            LimitField::InfoFound => {
                headers.push(HeaderCell::new("Did You Find?").sortable("info_found"));
            }
            LimitField::SourcePage => headers.push(
                HeaderCell::new("Source Page")
                    .sortable("source_page")
                    .class("feedback-medium"),
            ),
            LimitField::Text => {
                headers.push(HeaderCell::new("Feedback Text").class("feedback-wide"));
            }
            LimitField::RequestedResponse => {
                headers.push(HeaderCell::new("Requires Response").class("feedback-medium"));
            }
            LimitField::Survey => headers.push(HeaderCell::new("Survey")),
            LimitField::Tags => {
                headers.push(HeaderCell::new("Tags"));
                // Add Tag column.
                headers.push(HeaderCell::new(""));
            }
        }
    }
    headers
}

/// `n/j/Y`, e.g. `3/7/2024`. Unparseable dates are shown as sent.
fn format_submit_date(feedback: &FeedbackRecord) -> String {
    feedback.submit_day().map_or_else(
        || feedback.submit_date.clone(),
        |day| day.format("%-m/%-d/%Y").to_string(),
    )
}

const fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

const fn response_label(response: RequestedResponse) -> &'static str {
    match response {
        RequestedResponse::Yes => "Yes",
        RequestedResponse::No => "No",
        RequestedResponse::NotApplicable => "N/A",
    }
}

fn source_cell(node_id: Option<u64>, sources: &HashMap<u64, SourcePage>) -> Cell {
    match node_id {
        None => Cell::text(""),
        Some(nid) => sources.get(&nid).map_or_else(
            || Cell::text(nid.to_string()),
            |page| Cell::Link {
                title: page.title.clone(),
                url: page.url.clone(),
            },
        ),
    }
}

fn requires_response_cell(feedback: &FeedbackRecord) -> Cell {
    let contact = if feedback.requested_response == RequestedResponse::Yes {
        let name = [&feedback.first_name, &feedback.last_name]
            .into_iter()
            .filter_map(|part| non_empty(part.as_deref()))
            .collect::<Vec<_>>()
            .join(" ");
        [Some(name.as_str()), feedback.email.as_deref(), feedback.phone.as_deref()]
            .into_iter()
            .filter_map(non_empty)
            .map(str::to_string)
            .collect()
    } else {
        Vec::new()
    };

    Cell::RequiresResponse {
        response: feedback.requested_response,
        contact,
    }
}

fn tags_cell(feedback: &FeedbackRecord, tags: &TagCatalog) -> Cell {
    let mut items = Vec::new();
    for assignment in feedback.tag_assignments() {
        let Some(name) = tags.name(assignment.tag_id) else {
            tracing::warn!(
                feedback_id = feedback.id,
                tag_id = assignment.tag_id,
                "skipping tag missing from tag lookup"
            );
            continue;
        };
        items.push(TagItem::Chip {
            dom_id: format!("feedback-{}-tag-{}", feedback.id, assignment.tag_id),
            name: name.to_string(),
            remove: RemoveTagAction {
                comment_id: assignment.comment_id.unwrap_or(feedback.id),
                tag_id: assignment.tag_id,
                tag_unique_id: assignment.id,
            },
        });
    }

    if items.is_empty() {
        items.push(TagItem::NotTagged {
            dom_id: format!("feedback-{}-not-tagged", feedback.id),
        });
    }

    Cell::Tags {
        list_class: format!("feedback-{}-tags-list", feedback.id),
        items,
    }
}

fn survey_summary(answers: &SurveyAnswers) -> String {
    [
        ("helpful", &answers.helpful),
        ("easy", &answers.easy),
        ("findable", &answers.findable),
        ("reason", &answers.reason),
        ("email", &answers.email),
        ("purpose", &answers.purpose),
        ("other", &answers.other),
    ]
    .into_iter()
    .filter_map(|(label, value)| non_empty(value.as_deref()).map(|v| format!("{label}: {v}")))
    .collect::<Vec<_>>()
    .join("; ")
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use fbl_core::entities::{TagAssignment, TagLookupEntry};
    use pretty_assertions::assert_eq;

    use super::*;

    fn catalog() -> TagCatalog {
        TagCatalog::from_lookup([
            TagLookupEntry {
                tag_id: Some(4),
                tag_name: Some("Broken link".into()),
            },
            TagLookupEntry {
                tag_id: Some(9),
                tag_name: Some("Accessibility".into()),
            },
        ])
    }

    fn record(id: u64) -> FeedbackRecord {
        FeedbackRecord {
            id,
            submit_date: "2024-03-07 14:22:01".into(),
            info_found: true,
            node_id: Some(100),
            text: Some("Where is the <form>?".into()),
            ..FeedbackRecord::default()
        }
    }

    fn build(results: &[FeedbackRecord], limit_fields: &[LimitField]) -> FeedbackTable {
        let sources = HashMap::from([(
            100,
            SourcePage {
                title: "Renew a license".into(),
                url: "https://www.example.gov/node/100".into(),
            },
        )]);
        build_feedback_table(
            results,
            &catalog(),
            true,
            limit_fields,
            &sources,
            "https://www.example.gov/admin/watched-content",
        )
    }

    #[test]
    fn full_table_headers() {
        let table = build(&[], &[]);
        let labels = table.headers.iter().map(|h| h.label).collect::<Vec<_>>();
        assert_eq!(
            labels,
            vec![
                "Date",
                "Did You Find?",
                "Source Page",
                "Feedback Text",
                "Requires Response",
                "Survey",
                "Tags",
                "",
            ]
        );
        assert_eq!(table.headers[0].sort_by, Some("submit_date"));
        assert_eq!(table.headers[1].sort_by, Some("info_found"));
        assert_eq!(table.headers[2].sort_by, Some("source_page"));
        assert_eq!(table.headers[3].sort_by, None);
        let classes = table.headers.iter().map(|h| h.class).collect::<Vec<_>>();
        assert_eq!(
            classes,
            vec![
                None,
                None,
                Some("feedback-medium"),
                Some("feedback-wide"),
                Some("feedback-medium"),
                None,
                None,
                None,
            ]
        );
        assert_eq!(table.id, "feedback-table");
    }

    #[test]
    fn row_cells_in_column_order() {
        let table = build(&[record(17)], &[]);
        assert_eq!(table.rows.len(), 1);
        let row = &table.rows[0];
        assert_eq!(row.key, "feedback_0");
        assert_eq!(row.kind, RowKind::Feedback);
        assert_eq!(row.cells.len(), 8);
        assert_eq!(row.cells[0], Cell::text("3/7/2024"));
        assert_eq!(row.cells[1], Cell::text("Yes"));
        assert_eq!(
            row.cells[2],
            Cell::Link {
                title: "Renew a license".into(),
                url: "https://www.example.gov/node/100".into(),
            }
        );
        assert_eq!(
            row.cells[3],
            Cell::FeedbackText {
                text: "Where is the <form>?".into(),
                toggle: "Show More",
            }
        );
        assert_eq!(
            row.cells[4],
            Cell::RequiresResponse {
                response: RequestedResponse::NotApplicable,
                contact: vec![],
            }
        );
        assert_eq!(row.cells[5], Cell::Survey { has_survey: false });
        assert_eq!(row.cells[7], Cell::AddTag { comment_id: 17 });
    }

    #[test]
    fn limit_fields_drop_columns() {
        let table = build(&[record(1)], &[LimitField::SubmitDate, LimitField::Text]);
        let labels = table.headers.iter().map(|h| h.label).collect::<Vec<_>>();
        assert_eq!(labels, vec!["Date", "Feedback Text"]);
        assert_eq!(table.rows[0].cells.len(), 2);
    }

    #[test]
    fn unknown_source_shows_node_id() {
        let mut feedback = record(1);
        feedback.node_id = Some(555);
        let table = build(&[feedback], &[LimitField::SourcePage]);
        assert_eq!(table.rows[0].cells[0], Cell::text("555"));

        let mut feedback = record(2);
        feedback.node_id = None;
        let table = build(&[feedback], &[LimitField::SourcePage]);
        assert_eq!(table.rows[0].cells[0], Cell::text(""));
    }

    #[test]
    fn unparseable_date_is_shown_raw() {
        let mut feedback = record(1);
        feedback.submit_date = "last tuesday".into();
        let table = build(&[feedback], &[LimitField::SubmitDate]);
        assert_eq!(table.rows[0].cells[0], Cell::text("last tuesday"));
    }

    #[test]
    fn requested_response_lists_contact_details() {
        let mut feedback = record(1);
        feedback.requested_response = RequestedResponse::Yes;
        feedback.first_name = Some("Ada".into());
        feedback.last_name = Some("Lovelace".into());
        feedback.email = Some("ada@example.com".into());
        let table = build(&[feedback], &[LimitField::RequestedResponse]);
        let cell = &table.rows[0].cells[0];
        assert_eq!(
            cell,
            &Cell::RequiresResponse {
                response: RequestedResponse::Yes,
                contact: vec!["Ada Lovelace".into(), "ada@example.com".into()],
            }
        );
        assert_eq!(cell.plain_text(), "Yes (Ada Lovelace, ada@example.com)");

        let mut feedback = record(2);
        feedback.requested_response = RequestedResponse::No;
        feedback.email = Some("ignored@example.com".into());
        let table = build(&[feedback], &[LimitField::RequestedResponse]);
        assert_eq!(table.rows[0].cells[0].plain_text(), "No");
    }

    #[test]
    fn survey_adds_details_row() {
        let mut feedback = record(3);
        feedback.survey_id = Some("12".into());
        feedback.helpful = Some("Very".into());
        feedback.visit_purpose = Some("Work".into());
        let table = build(&[feedback, record(4)], &[]);

        let keys = table.rows.iter().map(|r| r.key.as_str()).collect::<Vec<_>>();
        assert_eq!(keys, vec!["feedback_0", "feedback_0_details", "feedback_1"]);
        assert_eq!(table.rows[0].cells[5], Cell::Survey { has_survey: true });

        let details = &table.rows[1];
        assert_eq!(details.kind, RowKind::SurveyDetails);
        let Cell::SurveyDetails { colspan, answers } = &details.cells[0] else {
            panic!("expected survey details, got {:?}", details.cells[0]);
        };
        assert_eq!(*colspan, 8);
        assert_eq!(answers.helpful.as_deref(), Some("Very"));
        assert_eq!(details.cells[0].plain_text(), "helpful: Very; purpose: Work");
        assert_eq!(table.feedback_rows().count(), 2);
    }

    #[test]
    fn survey_details_follow_survey_column() {
        let mut feedback = record(3);
        feedback.survey_id = Some("12".into());
        let table = build(&[feedback], &[LimitField::Text]);
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn tag_chips_and_unknown_tags() {
        let mut feedback = record(42);
        feedback.tags = vec![
            TagAssignment {
                id: 700,
                tag_id: 9,
                comment_id: None,
            },
            TagAssignment {
                id: 701,
                tag_id: 77,
                comment_id: None,
            },
        ];
        let table = build(&[feedback], &[LimitField::Tags]);
        assert_eq!(
            table.rows[0].cells[0],
            Cell::Tags {
                list_class: "feedback-42-tags-list".into(),
                items: vec![TagItem::Chip {
                    dom_id: "feedback-42-tag-9".into(),
                    name: "Accessibility".into(),
                    remove: RemoveTagAction {
                        comment_id: 42,
                        tag_id: 9,
                        tag_unique_id: 700,
                    },
                }],
            }
        );
    }

    #[test]
    fn untagged_feedback_gets_placeholder() {
        let table = build(&[record(8)], &[LimitField::Tags]);
        assert_eq!(
            table.rows[0].cells[0],
            Cell::Tags {
                list_class: "feedback-8-tags-list".into(),
                items: vec![TagItem::NotTagged {
                    dom_id: "feedback-8-not-tagged".into(),
                }],
            }
        );
        assert_eq!(table.rows[0].cells[0].plain_text(), "Not tagged");
    }

    #[test]
    fn empty_message_depends_on_watching() {
        let table = build(&[], &[]);
        assert!(table.is_empty());
        assert_eq!(
            table.empty,
            EmptyMessage::Text {
                text: "No feedback available.".into()
            }
        );

        let table = build_feedback_table(
            &[],
            &catalog(),
            false,
            &[],
            &HashMap::new(),
            "/admin/watched-content",
        );
        assert_eq!(
            table.empty,
            EmptyMessage::Link {
                text: "You must be watching content to view related feedback.".into(),
                url: "/admin/watched-content".into(),
            }
        );
    }

    #[test]
    fn cells_serialize_with_kind_tag() {
        let json = serde_json::to_value(Cell::AddTag { comment_id: 3 }).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "add_tag", "comment_id": 3}));
    }
}
