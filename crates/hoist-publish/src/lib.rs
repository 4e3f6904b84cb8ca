//! Publish planning for JVM libraries.
//!
//! Given a [`hoist_core::snapshot::BuildSnapshot`], this crate decides which
//! repositories artifacts go to ([`resolver`]), which publications exist and
//! what their POM says ([`publication`], [`pom`]), how signing and Sonatype
//! staging are set up ([`signing`], [`staging`]), and which properties each
//! task needs before it may run ([`requirement`]). [`plugin`] ties these
//! together in a configure/finalize lifecycle.
//!
//! Nothing here performs network I/O or signs anything.

pub mod keys;
pub mod plugin;
pub mod pom;
pub mod publication;
pub mod repository;
pub mod requirement;
pub mod resolver;
pub mod signing;
pub mod source;
pub mod staging;
pub mod structural;
pub mod tasks;
pub mod version;
