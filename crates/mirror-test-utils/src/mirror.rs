//! [`TestMirror`] temp-directory mirror tree with assertion helpers.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use mirror_fs::MirrorLayout;

/// A temporary mirror tree with helper methods for seeding prior state
/// and asserting on the result of a sync.
pub struct TestMirror {
    temp_dir: TempDir,
    layout: MirrorLayout,
}

impl Default for TestMirror {
    fn default() -> Self {
        Self::new()
    }
}

impl TestMirror {
    /// Create an empty mirror root in a temp directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let layout = MirrorLayout::new(temp_dir.path().join("dmtf"));
        Self { temp_dir, layout }
    }

    pub fn layout(&self) -> &MirrorLayout {
        &self.layout
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Seed an installed interface-definition symlink the way a prior
    /// sync would have left it. The link may dangle; snapshots only
    /// read names.
    #[cfg(unix)]
    pub fn seed_interface_installed(&self, name: &str) {
        let dir = self.layout.interface_installed_dir();
        fs::create_dir_all(&dir).unwrap();
        std::os::unix::fs::symlink(
            MirrorLayout::interface_link_target(name),
            dir.join(name),
        )
        .unwrap();
    }

    /// Seed an installed JSON-schema symlink under its versioned name.
    #[cfg(unix)]
    pub fn seed_schema_installed(&self, name: &str) {
        let dir = self.layout.schema_installed_dir();
        fs::create_dir_all(&dir).unwrap();
        std::os::unix::fs::symlink(MirrorLayout::schema_link_target(name), dir.join(name))
            .unwrap();
    }

    /// Sorted entry names of a directory under the mirror root; empty
    /// if the directory does not exist.
    pub fn list(&self, dir: &Path) -> Vec<String> {
        let Ok(entries) = fs::read_dir(dir) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Assert that `path` exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_exists(&self, path: &Path) {
        assert!(path.exists(), "Expected path to exist: {}", path.display());
    }

    /// Assert that `path` does **not** exist (following symlinks).
    pub fn assert_missing(&self, path: &Path) {
        assert!(
            !path.exists(),
            "Expected path to be absent: {}",
            path.display()
        );
    }

    /// Read a file's bytes, following symlinks.
    pub fn read(&self, path: &Path) -> Vec<u8> {
        fs::read(path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }
}
