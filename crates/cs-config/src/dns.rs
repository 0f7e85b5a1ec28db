//! DNS inventory settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Substrings; a DNS name containing any of them is left out of the inventory.
    #[serde(default)]
    pub exceptions: Vec<String>,

    /// JSON file holding an array of extra exception strings.
    #[serde(default)]
    pub exceptions_file: Option<String>,
}
