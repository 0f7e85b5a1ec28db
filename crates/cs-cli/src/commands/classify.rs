use anyhow::Context;
use chrono::{DateTime, Utc};
use cs_core::Scoped;
use cs_core::entities::Certificate;
use cs_core::responses::{ClassificationReport, ReconciliationResult};
use cs_ingest::export::export_expiring;

use crate::cli::root_commands::{ClassifyArgs, LifecycleArgs};
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::{AppContext, resolve_as_of};
use crate::output::{output, rows};

/// Threshold and reference instant, resolved before any work is done.
#[derive(Debug, Clone, Copy)]
pub struct Lifecycle {
    pub threshold_days: i64,
    pub as_of: DateTime<Utc>,
}

impl Lifecycle {
    pub fn resolve(args: &LifecycleArgs, ctx: &AppContext) -> anyhow::Result<Self> {
        Ok(Self {
            threshold_days: ctx.threshold(args.threshold.as_deref())?,
            as_of: resolve_as_of(args.as_of.as_deref())?,
        })
    }
}

/// Handle `certsync classify`.
pub fn handle(args: &ClassifyArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let lifecycle = Lifecycle::resolve(&args.lifecycle, ctx)?;

    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let result: ReconciliationResult = serde_json::from_str(&text).with_context(|| {
        format!(
            "{} is not a saved reconciliation result",
            args.input.display()
        )
    })?;

    let report = classify(result.valid_certificates, lifecycle, ctx)?;
    if let Some(path) = &args.export {
        export_report(path, &report, ctx)?;
    }

    print_report(&report, ctx, flags)
}

/// Merge public then private certificates and rank them.
pub fn classify(
    certificates: Scoped<Certificate>,
    lifecycle: Lifecycle,
    ctx: &AppContext,
) -> anyhow::Result<ClassificationReport> {
    let ranked = ctx
        .classifier
        .classify(
            certificates.into_merged(),
            lifecycle.threshold_days,
            lifecycle.as_of,
        )
        .context("classification failed")?;
    Ok(ClassificationReport::new(
        lifecycle.as_of,
        lifecycle.threshold_days,
        ranked,
    ))
}

pub fn export_report(
    path: &std::path::Path,
    report: &ClassificationReport,
    ctx: &AppContext,
) -> anyhow::Result<()> {
    export_expiring(
        path,
        &report.certificates,
        &ctx.config.export.dns_name_separator,
    )
    .with_context(|| format!("failed to export expiring certificates to {}", path.display()))
}

pub fn print_report(
    report: &ClassificationReport,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match flags.format {
        OutputFormat::Table => {
            println!(
                "{}",
                rows::expiry_table(&report.certificates, &ctx.config.export.dns_name_separator)
            );
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(report, flags.format),
    }
}
