use anyhow::Context;
use cs_config::CertsyncConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, then the layered configuration.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<CertsyncConfig> {
    load_dotenv(flags)?;

    let config = CertsyncConfig::load(flags.config.as_deref())
        .context("failed to load certsync configuration")?;
    tracing::debug!(
        threshold_days = config.lifecycle.threshold_days,
        public_marker = %config.scan.public_marker,
        private_marker = %config.scan.private_marker,
        exceptions = config.dns.exceptions.len(),
        "config loaded"
    );
    Ok(config)
}

/// Prefer a `.env` next to an explicit config file, else the working directory.
fn load_dotenv(flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(dir) = flags.config.as_deref().and_then(std::path::Path::parent) {
        let env_path = dir.join(".env");
        if env_path.exists() {
            dotenvy::from_path(&env_path)
                .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
            return Ok(());
        }
    }

    dotenvy::dotenv().ok();
    Ok(())
}
