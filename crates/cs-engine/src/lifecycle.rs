//! Lifecycle Classifier: rank certificates by expiry urgency.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use cs_core::entities::{Certificate, ClassifiedCertificate};
use cs_core::{CoreError, Result};

use crate::merge::merge_certificates;

/// Days before expiry at which a certificate counts as expiring soon.
pub const DEFAULT_EXPIRING_SOON_DAYS: i64 = 3;

const MILLIS_PER_DAY: i64 = 86_400_000;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%b %d %H:%M:%S %Y",
    "%b %d %Y %H:%M:%S",
    "%d %b %Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%b %d %Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %b %Y",
];

/// Parse a day threshold as typed by a user.
///
/// # Errors
///
/// [`CoreError::InvalidThreshold`] for anything that is not a non-negative
/// integer.
pub fn parse_threshold(raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    match trimmed.parse::<i64>() {
        Ok(days) if days >= 0 => Ok(days),
        _ => Err(CoreError::InvalidThreshold(trimmed.to_string())),
    }
}

/// Interpret a scan report expiry string as a UTC instant.
///
/// Accepts RFC 3339, RFC 2822, and the common `date [time]` layouts found in
/// scan exports. Values without an offset, including a trailing `GMT`/`UTC`
/// label, are read as UTC. Date-only values mean midnight UTC.
#[must_use]
pub fn parse_expiry(raw: &str) -> Option<DateTime<Utc>> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    let value = value
        .strip_suffix(" GMT")
        .or_else(|| value.strip_suffix(" UTC"))
        .or_else(|| value.strip_suffix('Z'))
        .unwrap_or(value);

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        })
}

/// Whole days from `now` until `expiry`, rounded up.
#[must_use]
pub fn days_until(expiry: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (expiry - now).num_milliseconds();
    let days = millis / MILLIS_PER_DAY;
    if millis % MILLIS_PER_DAY > 0 {
        days + 1
    } else {
        days
    }
}

/// Classifier with a configurable "expiring soon" window.
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    expiring_soon_days: i64,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            expiring_soon_days: DEFAULT_EXPIRING_SOON_DAYS,
        }
    }
}

impl Classifier {
    #[must_use]
    pub const fn new(expiring_soon_days: i64) -> Self {
        Self { expiring_soon_days }
    }

    /// Deduplicate, annotate, filter and rank `certificates`.
    ///
    /// Certificates sharing a serial number are merged first-wins. Kept are
    /// those already expired or expiring within `threshold_days`. Expired ones
    /// come first in input order, the rest by ascending expiry; ties keep
    /// input order.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidThreshold`] for a negative threshold and
    /// [`CoreError::InvalidExpiry`] for an expiry that cannot be parsed. No
    /// partial result is produced.
    pub fn classify<I>(
        &self,
        certificates: I,
        threshold_days: i64,
        now: DateTime<Utc>,
    ) -> Result<Vec<ClassifiedCertificate>>
    where
        I: IntoIterator<Item = Certificate>,
    {
        if threshold_days < 0 {
            return Err(CoreError::InvalidThreshold(threshold_days.to_string()));
        }

        let unique = merge_certificates(certificates);
        let total = unique.len();

        let mut classified = unique
            .into_iter()
            .map(|certificate| self.annotate(certificate, now))
            .collect::<Result<Vec<_>>>()?;

        classified.retain(|cert| cert.is_expired || cert.days_until_expiry <= threshold_days);
        classified.sort_by(urgency_order);

        tracing::debug!(
            total,
            kept = classified.len(),
            threshold_days,
            "classify: certificates ranked"
        );
        Ok(classified)
    }

    fn annotate(&self, certificate: Certificate, now: DateTime<Utc>) -> Result<ClassifiedCertificate> {
        let Some(expiry_date) = parse_expiry(&certificate.expires_on) else {
            return Err(CoreError::InvalidExpiry {
                serial_number: certificate.serial_number,
                value: certificate.expires_on,
            });
        };

        let days_until_expiry = days_until(expiry_date, now);
        let is_expired = expiry_date < now;
        Ok(ClassifiedCertificate {
            certificate,
            expiry_date,
            days_until_expiry,
            is_expired,
            is_expiring_soon: !is_expired && days_until_expiry <= self.expiring_soon_days,
        })
    }
}

/// Classify with the default three-day "expiring soon" window.
///
/// # Errors
///
/// See [`Classifier::classify`].
pub fn classify<I>(
    certificates: I,
    threshold_days: i64,
    now: DateTime<Utc>,
) -> Result<Vec<ClassifiedCertificate>>
where
    I: IntoIterator<Item = Certificate>,
{
    Classifier::default().classify(certificates, threshold_days, now)
}

/// Expired before not expired; among the not expired, earlier expiry first.
fn urgency_order(a: &ClassifiedCertificate, b: &ClassifiedCertificate) -> Ordering {
    match (a.is_expired, b.is_expired) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => Ordering::Equal,
        (false, false) => a.expiry_date.cmp(&b.expiry_date),
    }
}
