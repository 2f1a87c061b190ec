//! Bundle reading and entry classification
//!
//! A fetched release archive has one top-level folder named after the
//! release, with `csdl/`, `json-schema/`, `openapi/`, and
//! `dictionaries/` beneath it. Only the first two are consumed; the
//! rest is deliberately dropped.

use std::io::{Cursor, Read};

use zip::ZipArchive;

use crate::Result;

/// The downloaded archive for one upstream release.
///
/// Opaque bytes; lives only for the duration of one sync run.
#[derive(Debug, Clone)]
pub struct RemoteBundle {
    bytes: Vec<u8>,
}

impl RemoteBundle {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Which collection a bundle entry belongs to.
///
/// A closed classification so that "which categories are consumed" is
/// checked exhaustively wherever entries are routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// `<release>/csdl/` — CSDL interface definitions
    InterfaceDefinition,
    /// `<release>/json-schema/` — per-family versioned JSON schemas
    JsonSchema,
    /// Everything else, including the published but unconsumed
    /// `openapi/` and `dictionaries/` folders
    Ignored,
}

impl EntryKind {
    /// Classify an archive path within the given release.
    pub fn classify(release: &str, path: &str) -> Self {
        let Some(rest) = path
            .strip_prefix(release)
            .and_then(|r| r.strip_prefix('/'))
        else {
            return Self::Ignored;
        };

        match rest.split_once('/') {
            Some(("csdl", _)) => Self::InterfaceDefinition,
            Some(("json-schema", _)) => Self::JsonSchema,
            // openapi and dictionaries are part of the published bundle
            // but have no mirror collection.
            Some(("openapi", _)) | Some(("dictionaries", _)) => Self::Ignored,
            _ => Self::Ignored,
        }
    }
}

/// One file inside the bundle, classified and normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleEntry {
    /// Base filename, exactly as named in the archive.
    pub name: String,
    /// File content with line endings normalized to `\n`.
    pub content: Vec<u8>,
    /// The collection this entry belongs to.
    pub kind: EntryKind,
}

/// Single-pass reader over a fetched bundle.
///
/// Yields consumable entries in archive order, skipping directory
/// markers and ignored categories. Restarting the pass means reopening
/// the bundle.
pub struct BundleReader {
    archive: ZipArchive<Cursor<Vec<u8>>>,
    release: String,
    cursor: usize,
}

impl BundleReader {
    /// Open a fetched bundle for one streaming pass.
    pub fn open(bundle: RemoteBundle, release: &str) -> Result<Self> {
        let archive = ZipArchive::new(Cursor::new(bundle.into_bytes()))?;
        Ok(Self {
            archive,
            release: release.to_string(),
            cursor: 0,
        })
    }

    /// Number of raw archive entries, ignored categories included.
    pub fn raw_len(&self) -> usize {
        self.archive.len()
    }

    /// Read the next consumable entry, or `None` once exhausted.
    pub fn next_entry(&mut self) -> Result<Option<BundleEntry>> {
        while self.cursor < self.archive.len() {
            let index = self.cursor;
            self.cursor += 1;

            let mut file = self.archive.by_index(index)?;
            if file.is_dir() {
                continue;
            }

            let path = file.name().to_string();
            let kind = EntryKind::classify(&self.release, &path);
            if kind == EntryKind::Ignored {
                continue;
            }

            let name = path.rsplit('/').next().unwrap_or(&path).to_string();
            let mut content = Vec::with_capacity(file.size() as usize);
            file.read_to_end(&mut content)?;

            return Ok(Some(BundleEntry {
                name,
                content: normalize_line_endings(content),
                kind,
            }));
        }
        Ok(None)
    }
}

/// Rewrite every `\r\n` to `\n`, leaving all other bytes untouched.
///
/// Keeps the mirror's line-ending convention stable regardless of the
/// platform the archive was produced on. A lone `\r` is not a line
/// terminator and passes through.
pub fn normalize_line_endings(bytes: Vec<u8>) -> Vec<u8> {
    if !bytes.contains(&b'\r') {
        return bytes;
    }

    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
            out.push(b'\n');
            i += 2;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    out
}
