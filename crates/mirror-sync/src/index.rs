//! Grouping and ordering of JSON-schema entries by family
//!
//! A family is every versioned file sharing the base name before the
//! first `.`. Interface definitions have no family grouping; each file
//! is its own unit.

use std::collections::HashMap;

use crate::bundle::BundleEntry;
use crate::version::VersionKey;

/// The filename segment before the first `.`, which names the family.
///
/// Display names keep their original case; casefolding happens only
/// inside [`VersionKey`] comparisons.
pub fn family_name(filename: &str) -> &str {
    filename.split('.').next().unwrap_or(filename)
}

/// All versions of one schema family, newest first.
#[derive(Debug, Clone)]
pub struct SchemaFamily {
    name: String,
    entries: Vec<BundleEntry>,
}

impl SchemaFamily {
    /// Family display name, with original case.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The newest entry. Families are built with at least one entry,
    /// and index 0 is the selected version by invariant.
    pub fn newest(&self) -> &BundleEntry {
        &self.entries[0]
    }

    /// All entries, newest first.
    pub fn entries(&self) -> &[BundleEntry] {
        &self.entries
    }
}

/// Ordered mapping from family name to its entries.
///
/// Families are ordered by [`VersionKey`] comparison of the family name
/// alone, so listings are deterministic and human-sorted.
#[derive(Debug, Clone, Default)]
pub struct FamilyIndex {
    families: Vec<SchemaFamily>,
}

impl FamilyIndex {
    /// Group entries by family and order everything.
    ///
    /// Both sorts are stable: entries whose keys compare equal keep
    /// their original bundle order run-to-run. An empty input (a
    /// release with no json-schema folder) yields an empty index.
    pub fn build(entries: Vec<BundleEntry>) -> Self {
        let mut slot: HashMap<String, usize> = HashMap::new();
        let mut families: Vec<SchemaFamily> = Vec::new();

        for entry in entries {
            let name = family_name(&entry.name).to_string();
            match slot.get(&name) {
                Some(&i) => families[i].entries.push(entry),
                None => {
                    slot.insert(name.clone(), families.len());
                    families.push(SchemaFamily {
                        name,
                        entries: vec![entry],
                    });
                }
            }
        }

        for family in &mut families {
            family
                .entries
                .sort_by(|a, b| VersionKey::parse(&b.name).cmp(&VersionKey::parse(&a.name)));
        }
        families.sort_by(|a, b| VersionKey::parse(&a.name).cmp(&VersionKey::parse(&b.name)));

        Self { families }
    }

    /// Families in listing order.
    pub fn families(&self) -> &[SchemaFamily] {
        &self.families
    }

    /// Look up a family by its exact display name.
    pub fn get(&self, name: &str) -> Option<&SchemaFamily> {
        self.families.iter().find(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}
