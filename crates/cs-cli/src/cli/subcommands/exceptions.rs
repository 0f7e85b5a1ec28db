use std::path::PathBuf;

use clap::Subcommand;

/// Exception list inspection.
#[derive(Clone, Debug, Subcommand)]
pub enum ExceptionsCommands {
    /// Show the merged exception list.
    List {
        /// Extra JSON array of exception substrings.
        #[arg(long)]
        exceptions: Option<PathBuf>,
    },
    /// Tell whether a DNS name would be filtered out.
    Check {
        /// DNS name to test.
        name: String,
        /// Extra JSON array of exception substrings.
        #[arg(long)]
        exceptions: Option<PathBuf>,
    },
}
