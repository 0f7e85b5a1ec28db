use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::ScanEntry;
use crate::enums::{DiffAction, Scope};

/// Context copied from the scan entry behind a removal.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RemovalDetails {
    pub ip_or_fqdn: String,
    pub expires_on: String,
    pub status: String,
}

/// One line of the add/remove action list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DiffEntry {
    pub action: DiffAction,
    pub scope: Scope,
    pub name: String,
    /// Only present on removals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<RemovalDetails>,
}

impl DiffEntry {
    /// A DNS name with no covering certificate.
    #[must_use]
    pub fn add(scope: Scope, name: impl Into<String>) -> Self {
        Self {
            action: DiffAction::Add,
            scope,
            name: name.into(),
            details: None,
        }
    }

    /// A scan entry whose common name no expected DNS name needs.
    #[must_use]
    pub fn remove(scope: Scope, entry: &ScanEntry) -> Self {
        Self {
            action: DiffAction::Remove,
            scope,
            name: entry.common_name.clone(),
            details: Some(RemovalDetails {
                ip_or_fqdn: entry.ip_or_fqdn.clone(),
                expires_on: entry.expires_on.clone(),
                status: entry.status.clone(),
            }),
        }
    }
}
