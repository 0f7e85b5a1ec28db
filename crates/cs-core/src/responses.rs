//! Result types handed from the engine to renderers and exporters.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Certificate, ClassifiedCertificate, DiffEntry, ScanEntry};
use crate::scoped::Scoped;

/// Output of the matcher: the add/remove diff plus the certificates in use.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReconciliationResult {
    pub add: Scoped<DiffEntry>,
    pub remove: Scoped<DiffEntry>,
    pub valid_certificates: Scoped<Certificate>,
    /// Scan rows whose scan name carries neither scope marker. They take no
    /// part in the diff.
    #[serde(default)]
    pub unclassified: Vec<ScanEntry>,
}

impl ReconciliationResult {
    /// All diff entries in report order: adds (public, private) then removes
    /// (public, private).
    pub fn changes(&self) -> impl Iterator<Item = &DiffEntry> {
        self.add
            .public
            .iter()
            .chain(&self.add.private)
            .chain(&self.remove.public)
            .chain(&self.remove.private)
    }

    #[must_use]
    pub fn summary(&self) -> ReconciliationSummary {
        ReconciliationSummary {
            add_public: self.add.public.len(),
            add_private: self.add.private.len(),
            remove_public: self.remove.public.len(),
            remove_private: self.remove.private.len(),
            valid_public: self.valid_certificates.public.len(),
            valid_private: self.valid_certificates.private.len(),
            unclassified: self.unclassified.len(),
        }
    }
}

/// Per-scope counts of a [`ReconciliationResult`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReconciliationSummary {
    pub add_public: usize,
    pub add_private: usize,
    pub remove_public: usize,
    pub remove_private: usize,
    pub valid_public: usize,
    pub valid_private: usize,
    pub unclassified: usize,
}

/// Output of the lifecycle classifier together with the inputs that shaped it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ClassificationReport {
    pub as_of: DateTime<Utc>,
    pub threshold_days: i64,
    pub expired: usize,
    pub expiring_soon: usize,
    pub certificates: Vec<ClassifiedCertificate>,
}

impl ClassificationReport {
    #[must_use]
    pub fn new(
        as_of: DateTime<Utc>,
        threshold_days: i64,
        certificates: Vec<ClassifiedCertificate>,
    ) -> Self {
        let expired = certificates.iter().filter(|cert| cert.is_expired).count();
        let expiring_soon = certificates
            .iter()
            .filter(|cert| cert.is_expiring_soon)
            .count();
        Self {
            as_of,
            threshold_days,
            expired,
            expiring_soon,
            certificates,
        }
    }
}
