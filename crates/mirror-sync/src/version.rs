//! Human-friendly version ordering for schema filenames
//!
//! Schema files are named `<Family>.v<major>_<minor>_<patch>.json`, and
//! "newest" must be decided numerically: `0_2_0` comes before `0_10_0`,
//! which naive string comparison gets backwards.

use tracing::debug;

/// A comparable key derived from a schema filename.
///
/// The key is `(base, numbers)`: the casefolded name segment before the
/// first `.`, then the parsed version tuple. Comparison is derived
/// lexicographically over the two fields, which reproduces the ordering
/// a human expects within a family and orders unversioned names before
/// versioned ones of the same base.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct VersionKey {
    base: String,
    numbers: Vec<u64>,
}

impl VersionKey {
    /// Parse a filename into a comparison key.
    ///
    /// The filename is casefolded, split on `.`, and the second segment
    /// (with a leading `v` stripped) is split on `_` into integers. A
    /// malformed version segment is a soft condition: the key degrades
    /// to base-name only and the run continues.
    pub fn parse(filename: &str) -> Self {
        let folded = filename.to_lowercase();
        let mut segments = folded.split('.');
        let base = segments.next().unwrap_or_default().to_string();

        let Some(version) = segments.next() else {
            return Self {
                base,
                numbers: Vec::new(),
            };
        };

        let version = version.strip_prefix('v').unwrap_or(version);
        if !version.chars().any(|c| c.is_ascii_digit()) {
            return Self {
                base,
                numbers: Vec::new(),
            };
        }

        let mut numbers = Vec::with_capacity(3);
        for piece in version.split('_') {
            match piece.parse::<u64>() {
                Ok(n) => numbers.push(n),
                Err(_) => {
                    debug!(filename, piece, "unparseable version piece, degrading to base-name key");
                    return Self {
                        base,
                        numbers: Vec::new(),
                    };
                }
            }
        }

        Self { base, numbers }
    }

    /// The casefolded base name the key was derived from.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The parsed numeric version tuple; empty for unversioned or
    /// malformed names.
    pub fn numbers(&self) -> &[u64] {
        &self.numbers
    }
}
