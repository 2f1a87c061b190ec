//! Shared test utilities for the schema-mirror workspace.
//!
//! This crate provides standardised test fixtures to eliminate
//! duplication across crate test suites. It is a dev-dependency only —
//! never published.
//!
//! # Modules
//!
//! - [`bundle`] — [`TestBundle`] builder for in-memory release archives
//! - [`mirror`] — [`TestMirror`] temp-directory mirror tree with
//!   assertion helpers

pub mod bundle;
pub mod mirror;

pub use bundle::TestBundle;
pub use mirror::TestMirror;
