//! Core domain types
//!
//! Typed views over what the grading server reports. Wire records are
//! converted into these types before anything is rendered, so an
//! unrecognized value surfaces as an error instead of a half-drawn row.

pub mod status;
pub mod submission;
