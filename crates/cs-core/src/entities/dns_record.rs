use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Scope;

/// An expected DNS name. Identified by `(scope, name)`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct DnsRecord {
    /// Lowercase fully-qualified name.
    pub name: String,
    pub scope: Scope,
}

impl DnsRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, scope: Scope) -> Self {
        Self {
            name: name.into(),
            scope,
        }
    }
}
