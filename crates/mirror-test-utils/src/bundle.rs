//! [`TestBundle`] builder for in-memory release archives.

use std::io::{Cursor, Write};

use zip::write::{SimpleFileOptions, ZipWriter};

/// Builds a release zip in memory, shaped like a published bundle:
/// one top-level folder named after the release, with category folders
/// beneath it.
///
/// # Example
///
/// ```rust
/// use mirror_test_utils::TestBundle;
///
/// let bytes = TestBundle::new("DSP8010_2025.2")
///     .schema("Thing.v1_0_0.json", b"{}")
///     .interface("Thing_v1.xml", b"<xml/>")
///     .build();
/// assert!(!bytes.is_empty());
/// ```
pub struct TestBundle {
    release: String,
    directories: Vec<String>,
    files: Vec<(String, Vec<u8>)>,
}

impl TestBundle {
    pub fn new(release: &str) -> Self {
        Self {
            release: release.to_string(),
            directories: Vec::new(),
            files: Vec::new(),
        }
    }

    pub fn release(&self) -> &str {
        &self.release
    }

    /// Add a file under `<release>/csdl/`.
    pub fn interface(mut self, name: &str, content: &[u8]) -> Self {
        self.files
            .push((format!("{}/csdl/{}", self.release, name), content.to_vec()));
        self
    }

    /// Add a file under `<release>/json-schema/`.
    pub fn schema(mut self, name: &str, content: &[u8]) -> Self {
        self.files.push((
            format!("{}/json-schema/{}", self.release, name),
            content.to_vec(),
        ));
        self
    }

    /// Add a file at an arbitrary archive path (openapi, dictionaries,
    /// stray top-level files, ...).
    pub fn raw(mut self, path: &str, content: &[u8]) -> Self {
        self.files.push((path.to_string(), content.to_vec()));
        self
    }

    /// Add an explicit directory marker entry.
    pub fn directory(mut self, path: &str) -> Self {
        self.directories.push(path.to_string());
        self
    }

    /// Produce the zip bytes.
    pub fn build(&self) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();

        for dir in &self.directories {
            writer.add_directory(dir, options).unwrap();
        }
        for (path, content) in &self.files {
            writer.start_file(path, options).unwrap();
            writer.write_all(content).unwrap();
        }

        writer.finish().unwrap().into_inner()
    }
}
