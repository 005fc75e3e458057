//! # fbl-view
//!
//! Pure view-model builders for the feedback triage screen: the feedback
//! table and its pager. Nothing here does I/O; rendering to HTML or text is
//! the caller's job.

pub mod fields;
pub mod pager;
pub mod table;

pub use fields::LimitField;
pub use pager::{Pager, PagerItem, PagerLink, build_pager};
pub use table::{
    Cell, EmptyMessage, FeedbackTable, HeaderCell, RemoveTagAction, RowKind, SourcePage,
    TableRow, TagItem, build_feedback_table,
};
