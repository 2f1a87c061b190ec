//! Mirror tree layout
//!
//! Path arithmetic for the four managed directories and the relative
//! symlink targets that point from an installed directory back into its
//! mirror one level up.

use std::path::{Path, PathBuf};

use crate::constants::MirrorDir;

/// The on-disk layout of one mirror tree.
///
/// The tree is rooted at a single directory and always has the shape:
///
/// ```text
/// <root>/csdl/                    interface-definition mirror
/// <root>/installed/               symlinks into ../csdl/
/// <root>/json-schema/             JSON-schema mirror (newest per family)
/// <root>/json-schema-installed/   symlinks into ../json-schema/
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorLayout {
    root: PathBuf,
}

impl MirrorLayout {
    /// Create a layout rooted at the given directory.
    ///
    /// Nothing is created or checked on disk; the layout is pure path
    /// arithmetic.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The mirror root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The interface-definition mirror directory.
    pub fn interface_dir(&self) -> PathBuf {
        self.root.join(MirrorDir::Interface)
    }

    /// The installed directory for interface definitions.
    pub fn interface_installed_dir(&self) -> PathBuf {
        self.root.join(MirrorDir::InterfaceInstalled)
    }

    /// The JSON-schema mirror directory.
    pub fn schema_dir(&self) -> PathBuf {
        self.root.join(MirrorDir::Schema)
    }

    /// The installed directory for JSON schemas.
    pub fn schema_installed_dir(&self) -> PathBuf {
        self.root.join(MirrorDir::SchemaInstalled)
    }

    /// Relative symlink target for an installed interface definition.
    ///
    /// Links live in `installed/` and point one level up into `csdl/`,
    /// so the target is relative and stays valid if the root moves.
    pub fn interface_link_target(name: &str) -> PathBuf {
        Path::new("..").join(MirrorDir::Interface).join(name)
    }

    /// Relative symlink target for an installed JSON schema.
    pub fn schema_link_target(name: &str) -> PathBuf {
        Path::new("..").join(MirrorDir::Schema).join(name)
    }
}
