//! Scan import settings.

use serde::{Deserialize, Serialize};

fn default_public_marker() -> String {
    String::from("Public")
}

fn default_private_marker() -> String {
    String::from("Internal")
}

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Substring of a scan name marking a public scan (case-sensitive).
    #[serde(default = "default_public_marker")]
    pub public_marker: String,

    /// Substring of a scan name marking an internal scan (case-sensitive).
    #[serde(default = "default_private_marker")]
    pub private_marker: String,

    /// Log scan rows that carry neither marker.
    #[serde(default = "default_true")]
    pub warn_unclassified: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            public_marker: default_public_marker(),
            private_marker: default_private_marker(),
            warn_unclassified: true,
        }
    }
}
