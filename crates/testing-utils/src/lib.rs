//! # Scheduler Testing Utils
//!
//! Shared testing utilities for the control-plane crates: recording mocks for
//! every collaborator trait and builders for test data.
//!
//! ```toml
//! [dev-dependencies]
//! scheduler-testing-utils = { path = "../testing-utils" }
//! ```

pub mod builders;
pub mod mocks;

// Re-export commonly used items
pub use builders::*;
pub use mocks::*;
