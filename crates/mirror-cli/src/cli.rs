//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use mirror_sync::DEFAULT_RELEASE;

/// Schema Mirror - Maintain a local mirror of a published schema standard
#[derive(Parser, Debug)]
#[command(name = "schema-mirror")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Synchronize the mirror with an upstream release
    ///
    /// Fetches the release archive, rebuilds both mirror directories
    /// from scratch, and relinks the previously installed entries.
    ///
    /// Examples:
    ///   schema-mirror sync                           # Default release
    ///   schema-mirror sync --release DSP8010_2024.4  # Pin a release
    Sync {
        /// Upstream release identifier
        #[arg(short, long, env = "SCHEMA_MIRROR_RELEASE", default_value = DEFAULT_RELEASE)]
        release: String,

        /// Mirror root directory
        #[arg(long, default_value = "schema/dmtf")]
        root: PathBuf,

        /// Output the sync report as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show the installed sets and flag broken links
    Status {
        /// Mirror root directory
        #[arg(long, default_value = "schema/dmtf")]
        root: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn sync_defaults_to_the_current_release() {
        let cli = Cli::parse_from(["schema-mirror", "sync"]);
        match cli.command {
            Some(Commands::Sync { release, root, .. }) => {
                assert_eq!(release, DEFAULT_RELEASE);
                assert_eq!(root, PathBuf::from("schema/dmtf"));
            }
            other => panic!("expected sync command, got {other:?}"),
        }
    }
}
