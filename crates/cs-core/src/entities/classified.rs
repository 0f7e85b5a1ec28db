use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Certificate;

/// A certificate annotated with its expiry status at classification time.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ClassifiedCertificate {
    #[serde(flatten)]
    pub certificate: Certificate,
    pub expiry_date: DateTime<Utc>,
    /// Whole days left, rounded up. Zero or negative once expired.
    pub days_until_expiry: i64,
    pub is_expired: bool,
    pub is_expiring_soon: bool,
}
