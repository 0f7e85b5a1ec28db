//! Matcher/Reconciler: diff expected DNS names against discovered certificates.
//!
//! Runs once per scope, public then private, using only same-scope scan
//! entries:
//! 1. every DNS name with no covering scan entry becomes an `ADD`; covering
//!    entries with a serial number are merged into certificates keyed by serial;
//! 2. every scan entry whose common name covers no DNS name becomes a `REMOVE`;
//! 3. the per-scope certificate set is emitted in first-seen order.

use cs_core::entities::{DiffEntry, DnsRecord, ScanEntry};
use cs_core::enums::Scope;
use cs_core::responses::ReconciliationResult;
use cs_core::{CoreError, Result, Scoped};

use crate::coverage::is_covered;
use crate::merge::CertificateSet;

/// Substrings of a scan name that assign a scan entry to a scope.
///
/// Matching is case-sensitive. A scan name carrying both markers belongs
/// to both scopes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeMarkers {
    pub public: String,
    pub private: String,
}

impl Default for ScopeMarkers {
    fn default() -> Self {
        Self {
            public: String::from("Public"),
            private: String::from("Internal"),
        }
    }
}

impl ScopeMarkers {
    #[must_use]
    pub fn new(public: impl Into<String>, private: impl Into<String>) -> Self {
        Self {
            public: public.into(),
            private: private.into(),
        }
    }

    /// Whether `scan_name` carries the marker of `scope`. An empty marker never matches.
    #[must_use]
    pub fn matches(&self, scope: Scope, scan_name: &str) -> bool {
        let marker = match scope {
            Scope::Public => &self.public,
            Scope::Private => &self.private,
        };
        !marker.is_empty() && scan_name.contains(marker.as_str())
    }

    /// Scopes a scan belongs to, public first. Empty for unclassified scans.
    pub fn scopes_of<'a>(&'a self, scan_name: &'a str) -> impl Iterator<Item = Scope> + 'a {
        Scope::ALL
            .into_iter()
            .filter(move |scope| self.matches(*scope, scan_name))
    }
}

/// Reconciler configured with scope markers and an unclassified-scan policy.
#[derive(Debug, Clone)]
pub struct Reconciler {
    markers: ScopeMarkers,
    warn_unclassified: bool,
}

impl Default for Reconciler {
    fn default() -> Self {
        Self::new(ScopeMarkers::default())
    }
}

struct ScopeOutcome {
    add: Vec<DiffEntry>,
    remove: Vec<DiffEntry>,
    certificates: CertificateSet,
}

impl Reconciler {
    #[must_use]
    pub const fn new(markers: ScopeMarkers) -> Self {
        Self {
            markers,
            warn_unclassified: true,
        }
    }

    /// Whether scan entries matching no scope marker are logged at `warn`.
    #[must_use]
    pub fn warn_unclassified(mut self, warn: bool) -> Self {
        self.warn_unclassified = warn;
        self
    }

    /// Reconcile a DNS inventory against a scan inventory.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InputShape`] when a DNS record has an empty name,
    /// or when a scan entry assigned to a scope lacks its common name or
    /// expiry. Nothing is returned in that case, so removals are never
    /// silently under-reported.
    pub fn reconcile(
        &self,
        dns: &Scoped<DnsRecord>,
        scans: &[ScanEntry],
    ) -> Result<ReconciliationResult> {
        validate_dns(dns)?;

        let mut partitioned: Scoped<&ScanEntry> = Scoped::default();
        let mut unclassified = Vec::new();
        for (index, entry) in scans.iter().enumerate() {
            let mut scopes = self.markers.scopes_of(&entry.scan_name).peekable();
            if scopes.peek().is_none() {
                if self.warn_unclassified {
                    tracing::warn!(
                        scan_name = %entry.scan_name,
                        common_name = %entry.common_name,
                        "reconcile: scan entry matches no scope marker; excluded"
                    );
                }
                unclassified.push(entry.clone());
                continue;
            }

            validate_scan(index, entry)?;
            for scope in scopes {
                partitioned.get_mut(scope).push(entry);
            }
        }

        let mut result = ReconciliationResult {
            unclassified,
            ..ReconciliationResult::default()
        };

        for scope in Scope::ALL {
            let outcome = reconcile_scope(scope, dns.get(scope), partitioned.get(scope));
            tracing::debug!(
                %scope,
                dns_names = dns.get(scope).len(),
                scans = partitioned.get(scope).len(),
                add = outcome.add.len(),
                remove = outcome.remove.len(),
                certificates = outcome.certificates.len(),
                "reconcile: scope done"
            );
            *result.add.get_mut(scope) = outcome.add;
            *result.remove.get_mut(scope) = outcome.remove;
            *result.valid_certificates.get_mut(scope) = outcome.certificates.into_vec();
        }

        Ok(result)
    }
}

/// Reconcile with the default `Public`/`Internal` scope markers.
///
/// # Errors
///
/// See [`Reconciler::reconcile`].
pub fn reconcile(dns: &Scoped<DnsRecord>, scans: &[ScanEntry]) -> Result<ReconciliationResult> {
    Reconciler::default().reconcile(dns, scans)
}

fn reconcile_scope(scope: Scope, dns: &[DnsRecord], scans: &[&ScanEntry]) -> ScopeOutcome {
    let mut add = Vec::new();
    let mut certificates = CertificateSet::new();
    let mut serial_less = 0usize;

    for record in dns {
        let covering: Vec<&ScanEntry> = scans
            .iter()
            .copied()
            .filter(|entry| is_covered(&record.name, &entry.common_name))
            .collect();

        if covering.is_empty() {
            add.push(DiffEntry::add(scope, record.name.clone()));
            continue;
        }

        for entry in covering {
            match entry.serial() {
                Some(serial) => certificates.upsert(entry, serial, &record.name),
                None => serial_less += 1,
            }
        }
    }

    if serial_less > 0 {
        tracing::debug!(
            %scope,
            serial_less,
            "reconcile: covering scan entries without a serial number produced no certificate"
        );
    }

    let remove = scans
        .iter()
        .filter(|entry| !dns.iter().any(|record| is_covered(&record.name, &entry.common_name)))
        .map(|entry| DiffEntry::remove(scope, entry))
        .collect();

    ScopeOutcome {
        add,
        remove,
        certificates,
    }
}

fn validate_dns(dns: &Scoped<DnsRecord>) -> Result<()> {
    for scope in Scope::ALL {
        if let Some(index) = dns.get(scope).iter().position(|r| r.name.trim().is_empty()) {
            return Err(CoreError::InputShape {
                record: "dns record",
                index,
                field: "name",
            });
        }
    }
    Ok(())
}

fn validate_scan(index: usize, entry: &ScanEntry) -> Result<()> {
    let field = if entry.common_name.trim().is_empty() {
        "common_name"
    } else if entry.expires_on.trim().is_empty() {
        "expires_on"
    } else {
        return Ok(());
    };
    Err(CoreError::InputShape {
        record: "scan entry",
        index,
        field,
    })
}
