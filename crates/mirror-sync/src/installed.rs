//! Installed-set snapshot and relink
//!
//! The installed directories hold only symlinks into the mirror one
//! level up. Their names are the single piece of state that survives a
//! full mirror wipe: snapshot before the rewrite, relink after it.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use mirror_fs::{MirrorLayout, io};

use crate::Result;
use crate::bundle::BundleEntry;
use crate::index::{FamilyIndex, family_name};

/// The pre-sync record of which entries were marked installed.
///
/// Interface definitions are tracked by exact filename; JSON schemas by
/// family base-name, because the installed link gets re-pointed at
/// whatever version the new bundle carries for that family.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstalledSnapshot {
    pub interface_files: BTreeSet<String>,
    pub schema_families: BTreeSet<String>,
}

impl InstalledSnapshot {
    /// Record the current installed symlink names for both collections.
    ///
    /// Must run before the mirror rewrite. A missing installed
    /// directory snapshots as an empty set.
    pub fn capture(layout: &MirrorLayout) -> Result<Self> {
        let interface_files: BTreeSet<String> =
            io::list_entry_names(&layout.interface_installed_dir())?
                .into_iter()
                .collect();
        let schema_families: BTreeSet<String> =
            io::list_entry_names(&layout.schema_installed_dir())?
                .iter()
                .map(|name| family_name(name).to_string())
                .collect();

        debug!(
            interface = interface_files.len(),
            schema = schema_families.len(),
            "captured installed snapshot"
        );
        Ok(Self {
            interface_files,
            schema_families,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.interface_files.is_empty() && self.schema_families.is_empty()
    }
}

/// What one relink phase did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelinkOutcome {
    pub interface_links: usize,
    pub schema_links: usize,
    /// Previously-installed names with no counterpart in the new
    /// bundle. Dropped, not fatal; re-curating them is manual.
    pub dropped: Vec<String>,
}

/// Recreate both installed directories from the snapshot, pointing each
/// link at what the refreshed mirror now contains.
///
/// Must run after the mirror rewrite: an interface link points at the
/// identical filename, a schema link at the family's newest version.
pub fn relink(
    layout: &MirrorLayout,
    snapshot: &InstalledSnapshot,
    interface_entries: &[BundleEntry],
    index: &FamilyIndex,
) -> Result<RelinkOutcome> {
    let mut outcome = RelinkOutcome::default();

    let installed = layout.interface_installed_dir();
    io::replace_dir(&installed)?;
    for name in &snapshot.interface_files {
        if interface_entries.iter().any(|e| &e.name == name) {
            io::create_symlink(
                &MirrorLayout::interface_link_target(name),
                &installed.join(name),
            )?;
            outcome.interface_links += 1;
        } else {
            warn!(
                name = name.as_str(),
                "installed interface definition absent from new bundle, dropping"
            );
            outcome.dropped.push(name.clone());
        }
    }

    let installed = layout.schema_installed_dir();
    io::replace_dir(&installed)?;
    for family in &snapshot.schema_families {
        match index.get(family) {
            Some(found) => {
                let newest = &found.newest().name;
                io::create_symlink(
                    &MirrorLayout::schema_link_target(newest),
                    &installed.join(newest),
                )?;
                outcome.schema_links += 1;
            }
            None => {
                warn!(
                    family = family.as_str(),
                    "installed schema family absent from new bundle, dropping"
                );
                outcome.dropped.push(family.clone());
            }
        }
    }

    Ok(outcome)
}
