//! Backend test support utilities
//!
//! Helpers shared by the bookshelf integration test binaries: unified logging
//! initialization, Problem Details assertions and unique test data.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;

pub use unique_helpers::{unique_email, unique_str};
