//! The `status` command: report the installed sets and broken links.

use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use mirror_fs::{MirrorLayout, io};

use crate::error::Result;

/// One installed symlink and whether its target still resolves.
#[derive(Debug, Serialize)]
struct LinkStatus {
    name: String,
    broken: bool,
}

/// Machine-readable status of both installed sets.
#[derive(Debug, Serialize)]
struct StatusReport {
    interface: Vec<LinkStatus>,
    schema: Vec<LinkStatus>,
}

fn collect(dir: &Path) -> Result<Vec<LinkStatus>> {
    let mut links = Vec::new();
    for name in io::list_entry_names(dir)? {
        let broken = io::is_broken_link(&dir.join(&name));
        links.push(LinkStatus { name, broken });
    }
    Ok(links)
}

fn print_collection(label: &str, links: &[LinkStatus]) {
    println!("{} ({} installed)", label.bold(), links.len());
    for link in links {
        if link.broken {
            println!("  {} {} (broken link)", "!".red().bold(), link.name);
        } else {
            println!("  {} {}", "-".dimmed(), link.name);
        }
    }
}

pub fn run_status(root: &Path, json: bool) -> Result<()> {
    let layout = MirrorLayout::new(root);
    let report = StatusReport {
        interface: collect(&layout.interface_installed_dir())?,
        schema: collect(&layout.schema_installed_dir())?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_collection("interface definitions", &report.interface);
    print_collection("json schemas", &report.schema);
    Ok(())
}
