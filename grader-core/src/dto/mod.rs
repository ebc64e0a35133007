//! Data Transfer Objects for the status-check endpoint
//!
//! These mirror the JSON exchanged with the grading server and stay as loose
//! as the server is: every field the server may omit is optional here.

pub mod status;
