//! Expiry classification settings.

use serde::{Deserialize, Serialize};

const fn default_threshold_days() -> i64 {
    30
}

const fn default_expiring_soon_days() -> i64 {
    3
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LifecycleConfig {
    /// Report certificates expiring within this many days.
    #[serde(default = "default_threshold_days")]
    pub threshold_days: i64,

    /// Flag certificates expiring within this many days as urgent.
    #[serde(default = "default_expiring_soon_days")]
    pub expiring_soon_days: i64,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            threshold_days: default_threshold_days(),
            expiring_soon_days: default_expiring_soon_days(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = LifecycleConfig::default();
        assert_eq!(config.threshold_days, 30);
        assert_eq!(config.expiring_soon_days, 3);
    }
}
