//! CSV renderings of the change list and the expiry report.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use cs_core::entities::ClassifiedCertificate;
use cs_core::responses::ReconciliationResult;
use csv::{QuoteStyle, Writer, WriterBuilder};

use crate::IngestError;

pub const CHANGES_HEADER: [&str; 6] = [
    "Action",
    "Category",
    "Name",
    "IP/FQDN",
    "Expires on",
    "Status",
];

pub const EXPIRING_HEADER: [&str; 7] = [
    "Serial number",
    "Common name",
    "Scan name",
    "Expires on",
    "Certificate Status",
    "Days Until Expiry",
    "DNS Names",
];

/// Write the add/remove list: adds before removes, public before private.
///
/// # Errors
///
/// [`IngestError::Csv`] when the underlying writer fails.
pub fn write_changes<W: Write>(out: W, result: &ReconciliationResult) -> Result<(), IngestError> {
    let mut wtr = Writer::from_writer(out);
    wtr.write_record(CHANGES_HEADER)?;

    for entry in result.changes() {
        let (ip_or_fqdn, expires_on, status) = entry.details.as_ref().map_or(("", "", ""), |d| {
            (
                d.ip_or_fqdn.as_str(),
                d.expires_on.as_str(),
                d.status.as_str(),
            )
        });
        wtr.write_record([
            entry.action.as_str(),
            entry.scope.label(),
            entry.name.as_str(),
            ip_or_fqdn,
            expires_on,
            status,
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the ranked expiry report with every field quoted.
///
/// # Errors
///
/// [`IngestError::Csv`] when the underlying writer fails.
pub fn write_expiring<W: Write>(
    out: W,
    certificates: &[ClassifiedCertificate],
    dns_name_separator: &str,
) -> Result<(), IngestError> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(out);
    wtr.write_record(EXPIRING_HEADER)?;

    for classified in certificates {
        let cert = &classified.certificate;
        let days = classified.days_until_expiry.to_string();
        let dns_names = cert.joined_dns_names(dns_name_separator);
        wtr.write_record([
            cert.serial_number.as_str(),
            cert.common_name.as_str(),
            cert.scan_name.as_str(),
            cert.expires_on.as_str(),
            cert.status.as_str(),
            days.as_str(),
            dns_names.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// [`write_changes`] into a new file at `path`.
///
/// # Errors
///
/// [`IngestError::Write`] when the file cannot be created.
pub fn export_changes(path: &Path, result: &ReconciliationResult) -> Result<(), IngestError> {
    write_changes(create(path)?, result)?;
    tracing::debug!(path = %path.display(), "export: change list written");
    Ok(())
}

/// [`write_expiring`] into a new file at `path`.
///
/// # Errors
///
/// [`IngestError::Write`] when the file cannot be created.
pub fn export_expiring(
    path: &Path,
    certificates: &[ClassifiedCertificate],
    dns_name_separator: &str,
) -> Result<(), IngestError> {
    write_expiring(create(path)?, certificates, dns_name_separator)?;
    tracing::debug!(path = %path.display(), rows = certificates.len(), "export: expiry report written");
    Ok(())
}

fn create(path: &Path) -> Result<File, IngestError> {
    File::create(path).map_err(|source| IngestError::Write {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use cs_core::Scoped;
    use cs_core::entities::{Certificate, DiffEntry, ScanEntry};
    use cs_core::enums::Scope;
    use pretty_assertions::assert_eq;

    use super::*;

    fn render<F>(write: F) -> Vec<String>
    where
        F: FnOnce(&mut Vec<u8>) -> Result<(), IngestError>,
    {
        let mut buf = Vec::new();
        write(&mut buf).unwrap();
        String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn changes_are_ordered_adds_then_removes() {
        let stale = ScanEntry {
            common_name: "old.corp".into(),
            serial_number: Some("S9".into()),
            scan_name: "Internal".into(),
            expires_on: "2026-01-01".into(),
            status: "Expired".into(),
            ip_or_fqdn: "10.0.0.9".into(),
        };
        let result = ReconciliationResult {
            add: Scoped::new(
                vec![DiffEntry::add(Scope::Public, "new.example.com")],
                vec![DiffEntry::add(Scope::Private, "new.corp")],
            ),
            remove: Scoped::new(Vec::new(), vec![DiffEntry::remove(Scope::Private, &stale)]),
            ..ReconciliationResult::default()
        };

        let lines = render(|buf| write_changes(buf, &result));
        assert_eq!(
            lines,
            vec![
                "Action,Category,Name,IP/FQDN,Expires on,Status",
                "ADD,Public,new.example.com,,,",
                "ADD,Private,new.corp,,,",
                "REMOVE,Private,old.corp,10.0.0.9,2026-01-01,Expired",
            ]
        );
    }

    #[test]
    fn expiring_report_quotes_every_field() {
        let entry = ScanEntry {
            common_name: "*.example.com".into(),
            scan_name: "Public".into(),
            expires_on: "2026-11-01".into(),
            status: "Valid".into(),
            ..ScanEntry::default()
        };
        let mut certificate = Certificate::from_entry(&entry, "S1");
        certificate.add_dns_name("a.example.com");
        certificate.add_dns_name("b.example.com");
        let classified = ClassifiedCertificate {
            certificate,
            expiry_date: Utc.with_ymd_and_hms(2026, 11, 1, 0, 0, 0).unwrap(),
            days_until_expiry: 14,
            is_expired: false,
            is_expiring_soon: false,
        };

        let lines = render(|buf| write_expiring(buf, &[classified], "; "));
        assert_eq!(
            lines[0],
            r#""Serial number","Common name","Scan name","Expires on","Certificate Status","Days Until Expiry","DNS Names""#
        );
        assert_eq!(
            lines[1],
            r#""S1","*.example.com","Public","2026-11-01","Valid","14","a.example.com; b.example.com""#
        );
    }

    #[test]
    fn export_to_missing_directory_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("changes.csv");
        let err = export_changes(&path, &ReconciliationResult::default()).unwrap_err();
        assert!(matches!(err, IngestError::Write { .. }));
        assert!(err.to_string().contains("changes.csv"));
    }
}
