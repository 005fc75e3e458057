//! # fbl-core
//!
//! Core types shared across the feedback-loop crates:
//! - Feedback, tag and label records as the feedback API returns them
//! - Lenient deserializers for the API's loosely typed JSON
//! - Query parameters and the 0-based pager to 1-based API page translation
//! - The watched-content seam and filter precedence rules
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod lenient;
pub mod query;
pub mod responses;
pub mod watched;
