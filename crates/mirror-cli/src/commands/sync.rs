//! The `sync` command: one full mirror synchronization.

use std::path::Path;

use colored::Colorize;

use mirror_fs::MirrorLayout;
use mirror_sync::{DmtfSource, SyncEngine};

use crate::error::Result;

pub fn run_sync(root: &Path, release: &str, json: bool) -> Result<()> {
    let layout = MirrorLayout::new(root);
    let engine = SyncEngine::new(layout, Box::new(DmtfSource::new()));

    let report = engine.sync(release)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} synced release {}",
        "ok".green().bold(),
        report.release.bold()
    );
    println!(
        "  {} interface definitions, {} schema families",
        report.interface_files, report.schema_families
    );
    println!(
        "  {} interface links, {} schema links relinked",
        report.interface_links, report.schema_links
    );
    for name in &report.dropped {
        println!(
            "  {} {} no longer exists upstream, dropped from installed set",
            "warning:".yellow().bold(),
            name
        );
    }
    Ok(())
}
