//! Scheduler layer
//!
//! Drives the status poll loop: tracks pending submissions, requests their
//! status, and writes the answers into the board until nothing is left.

pub mod poller;
mod tracking;

pub use poller::{PollOutcome, RecordOutcome, StatusPoller};
pub use tracking::TrackingSet;
