//! Backend test support utilities
//!
//! Shared helpers for the bookshelf backend test binaries: unified logging
//! initialization and assertions over the problem-details error contract.

pub mod logging;
pub mod problem_details;
