//! Records exchanged with the feedback API.

mod feedback;
mod label;
mod tag;

pub use feedback::{FeedbackRecord, SurveyAnswers, parse_timestamp};
pub use label::{Label, LabelLookupEntry, labels_from_lookup};
pub use tag::{Tag, TagAssignment, TagCatalog, TagLookupEntry};
