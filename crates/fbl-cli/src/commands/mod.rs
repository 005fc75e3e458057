pub mod dispatch;
pub mod feedback;
pub mod label;
pub mod tag;
pub mod watched;
