//! Report export settings.

use serde::{Deserialize, Serialize};

fn default_separator() -> String {
    String::from("; ")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Separator used to flatten a certificate's DNS names into one cell.
    #[serde(default = "default_separator")]
    pub dns_name_separator: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dns_name_separator: default_separator(),
        }
    }
}
