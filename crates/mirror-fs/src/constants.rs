//! Constants and enums for mirror filesystem paths.

use std::path::Path;

/// The four managed directories under the mirror root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorDir {
    /// The `csdl` directory (interface-definition mirror)
    Interface,
    /// The `installed` directory (interface-definition symlinks)
    InterfaceInstalled,
    /// The `json-schema` directory (JSON-schema mirror)
    Schema,
    /// The `json-schema-installed` directory (JSON-schema symlinks)
    SchemaInstalled,
}

impl MirrorDir {
    /// Get the string representation of the directory name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Interface => "csdl",
            Self::InterfaceInstalled => "installed",
            Self::Schema => "json-schema",
            Self::SchemaInstalled => "json-schema-installed",
        }
    }
}

impl AsRef<Path> for MirrorDir {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for MirrorDir {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for MirrorDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
