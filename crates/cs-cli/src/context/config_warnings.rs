use cs_config::ENV_PREFIX;

const SECTIONS: [&str; 4] = ["LIFECYCLE", "SCAN", "DNS", "EXPORT"];

/// Emit warnings for env var keys that look like config but are never read.
pub fn warn_misnamed_env() {
    for warning in collect_misnamed_env(std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_misnamed_env<I>(env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut keys = env
        .into_iter()
        .map(|(key, _)| key)
        .filter(|key| key.starts_with(ENV_PREFIX))
        .collect::<Vec<_>>();
    keys.sort();

    let mut warnings = Vec::new();
    for section in SECTIONS {
        let single = format!("{ENV_PREFIX}{section}_");
        let double = format!("{ENV_PREFIX}{section}__");
        for key in &keys {
            if let Some(field) = key.strip_prefix(&single)
                && !key.starts_with(&double)
            {
                warnings.push(format!(
                    "{key} is ignored. Use double underscores between section and key (example: {double}{field})."
                ));
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::collect_misnamed_env;

    fn env(keys: &[&str]) -> Vec<(String, String)> {
        keys.iter()
            .map(|key| ((*key).to_string(), "1".to_string()))
            .collect()
    }

    #[test]
    fn warns_for_single_underscore_sections() {
        let warnings = collect_misnamed_env(env(&[
            "CERTSYNC_LIFECYCLE_THRESHOLD_DAYS",
            "CERTSYNC_SCAN_PUBLIC_MARKER",
        ]));

        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("CERTSYNC_LIFECYCLE__THRESHOLD_DAYS"));
        assert!(warnings[1].contains("CERTSYNC_SCAN__PUBLIC_MARKER"));
    }

    #[test]
    fn does_not_warn_for_well_formed_or_unrelated_keys() {
        let warnings = collect_misnamed_env(env(&[
            "CERTSYNC_LIFECYCLE__THRESHOLD_DAYS",
            "CERTSYNC_LOG",
            "PATH",
            "DNS_SERVER",
        ]));

        assert!(warnings.is_empty());
    }
}
