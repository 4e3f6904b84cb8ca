//! Shared utilities for hoist.
//!
//! Cross-cutting concerns used by every other hoist crate: the unified error
//! type, filesystem helpers, and Cargo-style status lines on stderr.

pub mod errors;
pub mod fs;
pub mod progress;
