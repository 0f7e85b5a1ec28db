use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::ScanEntry;

/// A deduplicated certificate in use by at least one expected DNS name.
///
/// Scalar fields come from the first scan entry seen with this serial number;
/// only `dns_names` accumulates across entries.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Certificate {
    pub serial_number: String,
    pub common_name: String,
    pub scan_name: String,
    pub expires_on: String,
    pub status: String,
    pub ip_or_fqdn: String,
    /// Covered DNS names in first-seen order, without duplicates.
    pub dns_names: Vec<String>,
}

impl Certificate {
    /// Start a certificate from the first scan entry carrying `serial_number`.
    #[must_use]
    pub fn from_entry(entry: &ScanEntry, serial_number: &str) -> Self {
        Self {
            serial_number: serial_number.to_string(),
            common_name: entry.common_name.clone(),
            scan_name: entry.scan_name.clone(),
            expires_on: entry.expires_on.clone(),
            status: entry.status.clone(),
            ip_or_fqdn: entry.ip_or_fqdn.clone(),
            dns_names: Vec::new(),
        }
    }

    /// Record `name` as covered, ignoring repeats. Returns whether it was new.
    pub fn add_dns_name(&mut self, name: &str) -> bool {
        if self.dns_names.iter().any(|existing| existing == name) {
            return false;
        }
        self.dns_names.push(name.to_string());
        true
    }

    /// Flatten `dns_names` with a deterministic separator.
    #[must_use]
    pub fn joined_dns_names(&self, separator: &str) -> String {
        self.dns_names.join(separator)
    }
}
