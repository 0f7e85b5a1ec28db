//! Certificate scan report import.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use cs_core::entities::ScanEntry;
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;

use crate::IngestError;

/// One CSV row as the scanner writes it. Absent columns read as empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ScanRow {
    #[serde(rename = "Common name")]
    common_name: String,
    #[serde(rename = "Serial number")]
    serial_number: String,
    #[serde(rename = "Scan name")]
    scan_name: String,
    #[serde(rename = "Expires on")]
    expires_on: String,
    #[serde(rename = "Certificate Status")]
    status: String,
    #[serde(rename = "IP address/FQDN")]
    ip_or_fqdn: String,
}

impl From<ScanRow> for ScanEntry {
    fn from(row: ScanRow) -> Self {
        Self {
            common_name: row.common_name,
            serial_number: Some(row.serial_number).filter(|serial| !serial.is_empty()),
            scan_name: row.scan_name,
            expires_on: row.expires_on,
            status: row.status,
            ip_or_fqdn: row.ip_or_fqdn,
        }
    }
}

/// Parse a scan report with a header row.
///
/// # Errors
///
/// [`IngestError::Csv`] when the input is not readable as CSV.
pub fn parse_scan_csv<R: Read>(reader: R) -> Result<Vec<ScanEntry>, IngestError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let entries = reader
        .deserialize::<ScanRow>()
        .map(|row| row.map(ScanEntry::from))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(rows = entries.len(), "scan: report parsed");
    Ok(entries)
}

/// Read a scan report from disk.
///
/// # Errors
///
/// [`IngestError::Read`] when the file cannot be opened, otherwise as
/// [`parse_scan_csv`].
pub fn read_scan_file(path: &Path) -> Result<Vec<ScanEntry>, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_scan_csv(file)
}
