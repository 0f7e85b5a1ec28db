use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use cs_config::CertsyncConfig;
use cs_engine::{Classifier, Reconciler, ScopeMarkers, parse_threshold};
use cs_ingest::ExceptionList;

/// Configuration plus the engine components it shapes.
pub struct AppContext {
    pub config: CertsyncConfig,
    pub reconciler: Reconciler,
    pub classifier: Classifier,
}

impl AppContext {
    #[must_use]
    pub fn init(config: CertsyncConfig) -> Self {
        let markers = ScopeMarkers::new(
            config.scan.public_marker.clone(),
            config.scan.private_marker.clone(),
        );
        let reconciler = Reconciler::new(markers).warn_unclassified(config.scan.warn_unclassified);
        let classifier = Classifier::new(config.lifecycle.expiring_soon_days);
        Self {
            config,
            reconciler,
            classifier,
        }
    }

    /// Exceptions from config, the configured exceptions file, then `extra`.
    pub fn exceptions(&self, extra: Option<&Path>) -> anyhow::Result<ExceptionList> {
        let mut list = ExceptionList::new(&self.config.dns.exceptions);

        let configured = self.config.dns.exceptions_file.as_deref().map(Path::new);
        for path in configured.into_iter().chain(extra) {
            let imported = ExceptionList::load_json(path)
                .with_context(|| format!("failed to load exceptions from {}", path.display()))?;
            list.extend(imported.entries());
        }

        tracing::debug!(exceptions = list.len(), "exception list assembled");
        Ok(list)
    }

    /// `--threshold` when given, else `lifecycle.threshold_days`.
    pub fn threshold(&self, flag: Option<&str>) -> anyhow::Result<i64> {
        match flag {
            Some(raw) => Ok(parse_threshold(raw)?),
            None => Ok(self.config.lifecycle.threshold_days),
        }
    }
}

/// `--as-of` as an RFC 3339 instant, else the current time.
pub fn resolve_as_of(flag: Option<&str>) -> anyhow::Result<DateTime<Utc>> {
    flag.map_or_else(
        || Ok(Utc::now()),
        |raw| {
            DateTime::parse_from_rfc3339(raw.trim())
                .map(|instant| instant.with_timezone(&Utc))
                .with_context(|| format!("invalid --as-of '{raw}': expected an RFC 3339 timestamp"))
        },
    )
}

#[cfg(test)]
mod tests {
    use std::fs;

    use chrono::TimeZone;
    use cs_core::CoreError;
    use pretty_assertions::assert_eq;

    use super::*;

    fn context() -> AppContext {
        let mut config = CertsyncConfig::default();
        config.lifecycle.threshold_days = 45;
        config.dns.exceptions = vec!["Staging".into()];
        AppContext::init(config)
    }

    #[test]
    fn threshold_flag_overrides_config() {
        let ctx = context();
        assert_eq!(ctx.threshold(None).unwrap(), 45);
        assert_eq!(ctx.threshold(Some("7")).unwrap(), 7);
    }

    #[test]
    fn invalid_threshold_flag_is_a_core_error() {
        let err = context().threshold(Some("-1")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn exceptions_merge_config_and_extra_file() {
        let dir = tempfile::tempdir().unwrap();
        let extra = dir.path().join("extra.json");
        fs::write(&extra, r#"["legacy"]"#).unwrap();

        let list = context().exceptions(Some(&extra)).unwrap();
        assert_eq!(list.entries(), ["legacy", "staging"]);
    }

    #[test]
    fn missing_exceptions_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");

        let err = context().exceptions(Some(&missing)).unwrap_err();
        assert!(format!("{err:#}").contains("absent.json"));
    }

    #[test]
    fn as_of_parses_rfc3339_with_offset() {
        let instant = resolve_as_of(Some("2026-10-18T02:00:00+02:00")).unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2026, 10, 18, 0, 0, 0).unwrap());
        assert!(resolve_as_of(Some("yesterday")).is_err());
    }
}
