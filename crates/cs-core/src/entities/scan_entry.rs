use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One row of a certificate-discovery scan report.
///
/// The scope is not stored: it is derived from `scan_name` by the reconciler,
/// whose scope markers are configurable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ScanEntry {
    pub common_name: String,
    pub serial_number: Option<String>,
    pub scan_name: String,
    pub expires_on: String,
    pub status: String,
    pub ip_or_fqdn: String,
}

impl ScanEntry {
    /// Serial number, treating an empty or blank value as absent.
    #[must_use]
    pub fn serial(&self) -> Option<&str> {
        self.serial_number
            .as_deref()
            .map(str::trim)
            .filter(|serial| !serial.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_serial_is_absent() {
        let mut entry = ScanEntry {
            serial_number: Some("  ".into()),
            ..ScanEntry::default()
        };
        assert_eq!(entry.serial(), None);

        entry.serial_number = None;
        assert_eq!(entry.serial(), None);

        entry.serial_number = Some("0A:1B".into());
        assert_eq!(entry.serial(), Some("0A:1B"));
    }
}
