//! Sync orchestration
//!
//! [`SyncEngine`] runs one full synchronization: fetch, classify,
//! index, snapshot the installed sets, rebuild both mirrors, relink,
//! then hand the finished layout to any registered generators. One run
//! per invocation; there is no incremental or partial mode.

use serde::Serialize;

use tracing::info;

use mirror_fs::MirrorLayout;

use crate::bundle::{BundleReader, EntryKind};
use crate::fetch::BundleSource;
use crate::index::FamilyIndex;
use crate::installed::{self, InstalledSnapshot};
use crate::writer::MirrorWriter;
use crate::{Error, Result};

/// Downstream consumer run after a successful sync.
///
/// Generators read only the finished mirror directories; whatever they
/// emit is outside this crate's concern.
pub trait Generator {
    /// Short name used in logs and failure messages.
    fn name(&self) -> &str;

    /// Run against the finished mirror layout.
    fn generate(&self, layout: &MirrorLayout) -> std::result::Result<(), String>;
}

/// Machine-readable summary of one sync run.
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    pub release: String,
    /// Interface-definition files written to the mirror.
    pub interface_files: usize,
    /// Schema families in the new index (one file written per family).
    pub schema_families: usize,
    /// Installed symlinks recreated, per collection.
    pub interface_links: usize,
    pub schema_links: usize,
    /// Previously-installed entries absent from the new bundle.
    pub dropped: Vec<String>,
}

/// Engine for one-shot mirror synchronization.
pub struct SyncEngine {
    layout: MirrorLayout,
    source: Box<dyn BundleSource>,
    generators: Vec<Box<dyn Generator>>,
}

impl SyncEngine {
    pub fn new(layout: MirrorLayout, source: Box<dyn BundleSource>) -> Self {
        Self {
            layout,
            source,
            generators: Vec::new(),
        }
    }

    /// Register a downstream generator; generators run in registration
    /// order after the relink phase.
    pub fn with_generator(mut self, generator: Box<dyn Generator>) -> Self {
        self.generators.push(generator);
        self
    }

    pub fn layout(&self) -> &MirrorLayout {
        &self.layout
    }

    /// Run one full sync for `release`.
    ///
    /// Fails fast on fetch errors before anything on disk is touched.
    /// Write errors after that point are fatal and may leave a mirror
    /// directory partially rewritten; re-running the sync repairs it.
    pub fn sync(&self, release: &str) -> Result<SyncReport> {
        let bundle = self.source.fetch(release)?;
        let mut reader = BundleReader::open(bundle, release)?;

        let mut interface_entries = Vec::new();
        let mut schema_entries = Vec::new();
        while let Some(entry) = reader.next_entry()? {
            match entry.kind {
                EntryKind::InterfaceDefinition => interface_entries.push(entry),
                EntryKind::JsonSchema => schema_entries.push(entry),
                EntryKind::Ignored => {}
            }
        }
        info!(
            release,
            interface = interface_entries.len(),
            schema = schema_entries.len(),
            "classified bundle entries"
        );

        let index = FamilyIndex::build(schema_entries);

        // Snapshot before the wipe; the installed names are the only
        // state that must survive it.
        let snapshot = InstalledSnapshot::capture(&self.layout)?;

        let writer = MirrorWriter::new(&self.layout);
        writer.write_interface_definitions(&interface_entries)?;
        writer.write_json_schemas(&index)?;

        let outcome = installed::relink(&self.layout, &snapshot, &interface_entries, &index)?;

        for generator in &self.generators {
            info!(generator = generator.name(), "running downstream generator");
            generator
                .generate(&self.layout)
                .map_err(|message| Error::Generator {
                    name: generator.name().to_string(),
                    message,
                })?;
        }

        Ok(SyncReport {
            release: release.to_string(),
            interface_files: interface_entries.len(),
            schema_families: index.len(),
            interface_links: outcome.interface_links,
            schema_links: outcome.schema_links,
            dropped: outcome.dropped,
        })
    }
}
