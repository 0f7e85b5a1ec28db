//! Serial-number deduplication of certificates.
//!
//! Entries are merged in arrival order: the first entry seen for a serial
//! number fixes every scalar field, later entries only contribute DNS names.

use std::collections::HashMap;

use cs_core::entities::{Certificate, ScanEntry};

/// Insertion-ordered set of certificates keyed by serial number.
#[derive(Debug, Default, Clone)]
pub struct CertificateSet {
    certificates: Vec<Certificate>,
    index: HashMap<String, usize>,
}

impl CertificateSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `entry`, carrying `serial_number`, covers `dns_name`.
    pub fn upsert(&mut self, entry: &ScanEntry, serial_number: &str, dns_name: &str) {
        let slot = self.slot_for(serial_number, || {
            Certificate::from_entry(entry, serial_number)
        });
        self.certificates[slot].add_dns_name(dns_name);
    }

    /// Fold an already-built certificate into the set.
    ///
    /// Certificates with an empty serial number cannot be keyed and are
    /// skipped; returns `false` for them.
    pub fn absorb(&mut self, certificate: &Certificate) -> bool {
        let serial_number = certificate.serial_number.trim().to_string();
        if serial_number.is_empty() {
            return false;
        }

        let slot = self.slot_for(&serial_number, || Certificate {
            serial_number: serial_number.clone(),
            dns_names: Vec::new(),
            ..certificate.clone()
        });
        for name in &certificate.dns_names {
            self.certificates[slot].add_dns_name(name);
        }
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.certificates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Certificate> {
        self.certificates
    }

    fn slot_for(&mut self, serial_number: &str, create: impl FnOnce() -> Certificate) -> usize {
        if let Some(&slot) = self.index.get(serial_number) {
            return slot;
        }
        let slot = self.certificates.len();
        self.certificates.push(create());
        self.index.insert(serial_number.to_string(), slot);
        slot
    }
}

/// Deduplicate certificates by serial number, first entry wins, DNS names union.
pub fn merge_certificates<I>(certificates: I) -> Vec<Certificate>
where
    I: IntoIterator<Item = Certificate>,
{
    let mut set = CertificateSet::new();
    let mut skipped = 0usize;
    for certificate in certificates {
        if !set.absorb(&certificate) {
            skipped += 1;
        }
    }
    if skipped > 0 {
        tracing::debug!(skipped, "merge: skipped certificates without a serial number");
    }
    set.into_vec()
}
