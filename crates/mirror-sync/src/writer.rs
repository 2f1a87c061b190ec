//! Full-replace mirror population
//!
//! Each managed collection is rebuilt from scratch on every sync:
//! delete the directory, recreate it, write the selected entries. The
//! replace is not transactional — a failure partway through leaves the
//! directory partially populated, and the documented recovery is
//! re-running the sync.

use tracing::{debug, info};

use mirror_fs::{MirrorLayout, io};

use crate::Result;
use crate::bundle::BundleEntry;
use crate::index::FamilyIndex;

/// Rebuilds the two mirror directories from bundle content.
pub struct MirrorWriter<'a> {
    layout: &'a MirrorLayout,
}

impl<'a> MirrorWriter<'a> {
    pub fn new(layout: &'a MirrorLayout) -> Self {
        Self { layout }
    }

    /// Wipe the interface-definition mirror and write every entry
    /// under its bundle filename.
    pub fn write_interface_definitions(&self, entries: &[BundleEntry]) -> Result<()> {
        let dir = self.layout.interface_dir();
        io::replace_dir(&dir)?;
        for entry in entries {
            io::write_file(&dir.join(&entry.name), &entry.content)?;
        }
        info!(count = entries.len(), "interface-definition mirror rebuilt");
        Ok(())
    }

    /// Wipe the JSON-schema mirror and write the newest entry of each
    /// family. Older versions are not retained on disk.
    pub fn write_json_schemas(&self, index: &FamilyIndex) -> Result<()> {
        let dir = self.layout.schema_dir();
        io::replace_dir(&dir)?;
        for family in index.families() {
            let newest = family.newest();
            io::write_file(&dir.join(&newest.name), &newest.content)?;
            debug!(
                family = family.name(),
                file = newest.name.as_str(),
                "wrote newest schema version"
            );
        }
        info!(families = index.len(), "json-schema mirror rebuilt");
        Ok(())
    }
}
