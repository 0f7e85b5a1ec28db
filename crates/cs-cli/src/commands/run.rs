use anyhow::Context;
use cs_core::responses::{ClassificationReport, ReconciliationResult};
use cs_ingest::export::export_changes;
use serde::Serialize;

use crate::cli::root_commands::RunArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::classify::{self, Lifecycle};
use crate::commands::reconcile;
use crate::context::AppContext;
use crate::output::output;

/// Both stages of a single pass.
#[derive(Debug, Serialize)]
struct RunReport {
    reconciliation: ReconciliationResult,
    classification: ClassificationReport,
}

/// Handle `certsync run`.
pub fn handle(args: &RunArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let lifecycle = Lifecycle::resolve(&args.lifecycle, ctx)?;

    let inputs = reconcile::load_inputs(&args.inputs, ctx)?;
    let reconciliation = reconcile::reconcile(&inputs, ctx)?;
    let classification = classify::classify(
        reconciliation.valid_certificates.clone(),
        lifecycle,
        ctx,
    )?;

    if let Some(path) = &args.export_changes {
        export_changes(path, &reconciliation)
            .with_context(|| format!("failed to export changes to {}", path.display()))?;
    }
    if let Some(path) = &args.export_expiring {
        classify::export_report(path, &classification, ctx)?;
    }

    match flags.format {
        OutputFormat::Table => {
            reconcile::print_result(&reconciliation, flags)?;
            println!();
            classify::print_report(&classification, ctx, flags)
        }
        OutputFormat::Json | OutputFormat::Raw => output(
            &RunReport {
                reconciliation,
                classification,
            },
            flags.format,
        ),
    }
}
