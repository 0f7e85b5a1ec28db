//! DNS export parsing.
//!
//! Public zones arrive as provider exports with tab-separated
//! `id, zone_name, name, type, value, ttl` columns. Private zones arrive as
//! directory-server exports with `name, type[, value]` columns where the type
//! reads `Host (A)` or `Alias (CNAME)`. Only A and CNAME records are kept.

use std::collections::HashSet;
use std::path::Path;

use cs_core::Scoped;
use cs_core::entities::DnsRecord;
use cs_core::enums::{RecordType, Scope};
use serde::Serialize;

use crate::{ExceptionList, IngestError, read_text};

const HEADER_PREFIXES: [&str; 2] = ["id\t", "Name\t"];

/// One accepted line of a DNS export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRow {
    pub record: DnsRecord,
    pub record_type: RecordType,
    pub value: String,
    pub zone_name: Option<String>,
    pub ttl: Option<String>,
}

/// Line counts for one scope of a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScopeStats {
    pub accepted: usize,
    pub rejected: usize,
    pub excepted: usize,
    pub duplicate: usize,
}

/// A DNS inventory ready for reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsInventory {
    pub records: Scoped<DnsRecord>,
    pub public_stats: ScopeStats,
    pub private_stats: ScopeStats,
}

/// Parse one line of a public provider export.
#[must_use]
pub fn parse_public_line(line: &str) -> Option<DnsRow> {
    let parts: Vec<&str> = line.split('\t').collect();
    if parts.len() < 6 {
        return None;
    }

    let record_type = match parts[3].trim().to_uppercase().as_str() {
        "A" => RecordType::A,
        "CNAME" => RecordType::Cname,
        _ => return None,
    };
    let name = parts[2].trim().to_lowercase();
    if name.is_empty() {
        return None;
    }

    Some(DnsRow {
        record: DnsRecord::new(name, Scope::Public),
        record_type,
        value: parts[4].trim().to_string(),
        zone_name: Some(parts[1].trim().to_string()),
        ttl: Some(parts[5].trim().to_string()),
    })
}

/// Parse one line of a private directory-server export.
#[must_use]
pub fn parse_private_line(line: &str) -> Option<DnsRow> {
    let parts: Vec<&str> = line
        .split('\t')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    if parts.len() < 2 {
        return None;
    }

    let record_type = match parts[1].to_lowercase().as_str() {
        "host (a)" => RecordType::A,
        "alias (cname)" => RecordType::Cname,
        _ => return None,
    };

    Some(DnsRow {
        record: DnsRecord::new(parts[0].to_lowercase(), Scope::Private),
        record_type,
        value: parts.get(2).map_or_else(|| "N/A".to_string(), |v| (*v).to_string()),
        zone_name: None,
        ttl: None,
    })
}

/// Parse both exports into a scoped inventory, applying `exceptions`.
///
/// Header lines, blank lines and lines that fail to parse are skipped. A name
/// seen twice in one scope is kept once.
#[must_use]
pub fn load_inventory(
    public_text: &str,
    private_text: &str,
    exceptions: &ExceptionList,
) -> DnsInventory {
    let (public, public_stats) = load_scope(Scope::Public, public_text, exceptions);
    let (private, private_stats) = load_scope(Scope::Private, private_text, exceptions);
    DnsInventory {
        records: Scoped::new(public, private),
        public_stats,
        private_stats,
    }
}

/// Read DNS exports from disk. A missing path stands for an empty export.
///
/// # Errors
///
/// [`IngestError::Read`] when a given file cannot be read.
pub fn read_inventory(
    public: Option<&Path>,
    private: Option<&Path>,
    exceptions: &ExceptionList,
) -> Result<DnsInventory, IngestError> {
    let public_text = public.map(read_text).transpose()?.unwrap_or_default();
    let private_text = private.map(read_text).transpose()?.unwrap_or_default();
    Ok(load_inventory(&public_text, &private_text, exceptions))
}

fn load_scope(
    scope: Scope,
    text: &str,
    exceptions: &ExceptionList,
) -> (Vec<DnsRecord>, ScopeStats) {
    let parse = match scope {
        Scope::Public => parse_public_line,
        Scope::Private => parse_private_line,
    };

    let mut stats = ScopeStats::default();
    let mut seen = HashSet::new();
    let mut records = Vec::new();

    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if HEADER_PREFIXES.iter().any(|prefix| line.starts_with(prefix)) {
            continue;
        }

        let Some(row) = parse(line) else {
            stats.rejected += 1;
            continue;
        };

        if let Some(exception) = exceptions.matching(&row.record.name) {
            tracing::debug!(name = %row.record.name, exception, "dns: name excluded by exception");
            stats.excepted += 1;
            continue;
        }

        if !seen.insert(row.record.name.clone()) {
            stats.duplicate += 1;
            continue;
        }

        stats.accepted += 1;
        records.push(row.record);
    }

    if stats.rejected > 0 {
        tracing::warn!(
            %scope,
            rejected = stats.rejected,
            "dns: skipped lines that are not A/CNAME records"
        );
    }

    (records, stats)
}
