//! Flat tables for `--format table`, with columns in report order.

use cs_core::entities::ClassifiedCertificate;
use cs_core::responses::ReconciliationResult;

use super::{table, table_options};

const CHANGE_HEADERS: [&str; 6] = ["action", "scope", "name", "ip_or_fqdn", "expires_on", "status"];
const EXPIRY_HEADERS: [&str; 6] = ["state", "days", "expires_on", "serial_number", "common_name", "dns_names"];

/// The add/remove list, one row per diff entry.
#[must_use]
pub fn change_table(result: &ReconciliationResult) -> String {
    let rows = result
        .changes()
        .map(|entry| {
            let details = entry.details.as_ref();
            vec![
                entry.action.to_string(),
                entry.scope.label().to_string(),
                entry.name.clone(),
                details.map_or_else(String::new, |d| d.ip_or_fqdn.clone()),
                details.map_or_else(String::new, |d| d.expires_on.clone()),
                details.map_or_else(String::new, |d| d.status.clone()),
            ]
        })
        .collect::<Vec<_>>();

    if rows.is_empty() {
        return String::from("(no changes)");
    }
    table::render_rows(&CHANGE_HEADERS, &rows, table_options())
}

/// The ranked certificates, most urgent first.
#[must_use]
pub fn expiry_table(certificates: &[ClassifiedCertificate], dns_name_separator: &str) -> String {
    if certificates.is_empty() {
        return String::from("(no certificates within threshold)");
    }

    let rows = certificates
        .iter()
        .map(|classified| {
            let cert = &classified.certificate;
            vec![
                state_label(classified).to_string(),
                classified.days_until_expiry.to_string(),
                cert.expires_on.clone(),
                cert.serial_number.clone(),
                cert.common_name.clone(),
                cert.joined_dns_names(dns_name_separator),
            ]
        })
        .collect::<Vec<_>>();
    table::render_rows(&EXPIRY_HEADERS, &rows, table_options())
}

const fn state_label(classified: &ClassifiedCertificate) -> &'static str {
    if classified.is_expired {
        "expired"
    } else if classified.is_expiring_soon {
        "expiring_soon"
    } else {
        "upcoming"
    }
}
