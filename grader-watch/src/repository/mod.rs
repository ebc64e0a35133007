//! Repository layer
//!
//! Repositories are thin HTTP adapters over the grading server. The poller
//! only sees the trait, so tests can script server responses.

mod status;

pub use status::{HttpStatusRepository, StatusRepository};
