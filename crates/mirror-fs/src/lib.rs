//! Filesystem layer for the schema mirror
//!
//! Owns the on-disk layout of the mirror tree and the raw directory,
//! file, and symlink operations the sync engine builds on. Nothing in
//! this crate knows about bundles, releases, or version ordering.

pub mod constants;
pub mod error;
pub mod io;
pub mod layout;

pub use error::{Error, Result};
pub use layout::MirrorLayout;
