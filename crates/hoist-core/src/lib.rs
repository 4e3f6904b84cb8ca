//! Core data types for hoist.
//!
//! This crate defines what a hoist invocation knows about a project: the
//! parsed `Hoist.toml`, the license enumeration, layered `hoist.properties`
//! values, the registry of applied components, and the immutable
//! [`snapshot::BuildSnapshot`] that bundles them.
//!
//! This crate is intentionally free of async code and network I/O.

/// Name of the project manifest file.
pub const MANIFEST_FILE: &str = "Hoist.toml";

pub mod components;
pub mod config;
pub mod license;
pub mod manifest;
pub mod properties;
pub mod snapshot;
