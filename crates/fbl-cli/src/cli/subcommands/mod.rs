mod feedback;
mod label;
mod tag;

pub use feedback::{FeedbackCommands, ListArgs, QueryArgs};
pub use label::LabelCommands;
pub use tag::TagCommands;
