use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::ExceptionsCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Diff DNS inventories against a certificate scan.
    Reconcile(ReconcileArgs),
    /// Rank the certificates of a saved reconciliation by expiry.
    Classify(ClassifyArgs),
    /// Reconcile and classify in one pass.
    Run(RunArgs),
    /// Inspect the effective DNS exception list.
    Exceptions {
        #[command(subcommand)]
        action: ExceptionsCommands,
    },
    /// Dump JSON schema for an output type.
    Schema(SchemaArgs),
}

/// Inventory files shared by `reconcile` and `run`.
#[derive(Clone, Debug, Args)]
pub struct InputArgs {
    /// Public DNS export (tab-separated provider dump).
    #[arg(long)]
    pub public_dns: Option<PathBuf>,
    /// Private DNS export (tab-separated directory-server dump).
    #[arg(long)]
    pub private_dns: Option<PathBuf>,
    /// Certificate scan report (CSV with a header row).
    #[arg(long)]
    pub scan: PathBuf,
    /// Extra JSON array of exception substrings.
    #[arg(long)]
    pub exceptions: Option<PathBuf>,
}

/// Classification knobs shared by `classify` and `run`.
#[derive(Clone, Debug, Args)]
pub struct LifecycleArgs {
    /// Days ahead to report; defaults to lifecycle.threshold_days.
    #[arg(long)]
    pub threshold: Option<String>,
    /// Reference instant (RFC 3339); defaults to now.
    #[arg(long)]
    pub as_of: Option<String>,
}

/// Arguments for `certsync reconcile`.
#[derive(Clone, Debug, Args)]
pub struct ReconcileArgs {
    #[command(flatten)]
    pub inputs: InputArgs,
    /// Write the change list as CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Arguments for `certsync classify`.
#[derive(Clone, Debug, Args)]
pub struct ClassifyArgs {
    /// JSON output of `certsync reconcile`.
    #[arg(long)]
    pub input: PathBuf,
    #[command(flatten)]
    pub lifecycle: LifecycleArgs,
    /// Write the ranked certificates as CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Arguments for `certsync run`.
#[derive(Clone, Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub inputs: InputArgs,
    #[command(flatten)]
    pub lifecycle: LifecycleArgs,
    /// Write the change list as CSV.
    #[arg(long)]
    pub export_changes: Option<PathBuf>,
    /// Write the ranked certificates as CSV.
    #[arg(long)]
    pub export_expiring: Option<PathBuf>,
}

/// Output types with a published schema.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    Reconciliation,
    Classified,
}

/// Arguments for `certsync schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    pub type_name: SchemaType,
}
