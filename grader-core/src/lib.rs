//! Grader Core
//!
//! Core types shared by the grading status client and the watcher.
//!
//! This crate contains:
//! - Domain types: submission identifiers and the typed submission status
//! - DTOs: the wire shapes of the status-check endpoint

pub mod domain;
pub mod dto;
