//! Schema synchronization engine
//!
//! Maintains a local mirror of one release of an externally published
//! schema standard, and keeps the curated "installed" subset of that
//! mirror pinned across syncs via symlinks. One sync run is strictly
//! sequential:
//!
//! ```text
//! fetch -> classify -> index -> snapshot installed ->
//!     rebuild mirrors -> relink installed -> run generators
//! ```
//!
//! Only the [`BundleSource`] handed to the engine touches the network;
//! everything downstream of the fetch operates on in-memory bundles and
//! is testable without one.

pub mod bundle;
pub mod engine;
pub mod error;
pub mod fetch;
pub mod index;
pub mod installed;
pub mod version;
pub mod writer;

pub use bundle::{BundleEntry, BundleReader, EntryKind, RemoteBundle};
pub use engine::{Generator, SyncEngine, SyncReport};
pub use error::{Error, Result};
pub use fetch::{BundleSource, DEFAULT_RELEASE, DMTF_BASE_URL, DmtfSource};
pub use index::{FamilyIndex, SchemaFamily, family_name};
pub use installed::{InstalledSnapshot, RelinkOutcome};
pub use version::VersionKey;
pub use writer::MirrorWriter;
