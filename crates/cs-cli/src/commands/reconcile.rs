use anyhow::Context;
use cs_core::entities::ScanEntry;
use cs_core::responses::ReconciliationResult;
use cs_ingest::dns::{DnsInventory, read_inventory};
use cs_ingest::export::export_changes;
use cs_ingest::scan::read_scan_file;

use crate::cli::root_commands::{InputArgs, ReconcileArgs};
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, rows};
use crate::progress::Progress;

/// Parsed inventories ready for the reconciler.
pub struct Inputs {
    pub dns: DnsInventory,
    pub scans: Vec<ScanEntry>,
}

/// Handle `certsync reconcile`.
pub fn handle(args: &ReconcileArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let inputs = load_inputs(&args.inputs, ctx)?;
    let result = reconcile(&inputs, ctx)?;

    if let Some(path) = &args.export {
        export_changes(path, &result)
            .with_context(|| format!("failed to export changes to {}", path.display()))?;
    }

    print_result(&result, flags)
}

/// Read DNS exports, exceptions and the scan report behind a spinner.
pub fn load_inputs(args: &InputArgs, ctx: &AppContext) -> anyhow::Result<Inputs> {
    Progress::run("Loading exception list", "failed to load inputs", |progress| {
        read_inputs(args, ctx, progress)
    })
}

fn read_inputs(args: &InputArgs, ctx: &AppContext, progress: &Progress) -> anyhow::Result<Inputs> {
    let exceptions = ctx.exceptions(args.exceptions.as_deref())?;

    progress.step("Reading DNS exports");
    let dns = read_inventory(
        args.public_dns.as_deref(),
        args.private_dns.as_deref(),
        &exceptions,
    )
    .context("failed to read DNS exports")?;
    tracing::debug!(
        public = ?dns.public_stats,
        private = ?dns.private_stats,
        "dns inventory loaded"
    );

    progress.step("Reading certificate scan");
    let scans = read_scan_file(&args.scan)
        .with_context(|| format!("failed to read scan report {}", args.scan.display()))?;

    Ok(Inputs { dns, scans })
}

/// Run the reconciler over loaded inputs.
pub fn reconcile(inputs: &Inputs, ctx: &AppContext) -> anyhow::Result<ReconciliationResult> {
    let result = ctx
        .reconciler
        .reconcile(&inputs.dns.records, &inputs.scans)
        .context("reconciliation failed")?;

    let summary = result.summary();
    tracing::debug!(?summary, "reconciliation complete");
    Ok(result)
}

pub fn print_result(result: &ReconciliationResult, flags: &GlobalFlags) -> anyhow::Result<()> {
    match flags.format {
        OutputFormat::Table => {
            println!("{}", rows::change_table(result));
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(result, flags.format),
    }
}
