use anyhow::Context;
use relay_dns_domain::{CliOverrides, Config};

/// Loads and validates the configuration. Any failure here is fatal.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    Ok(config)
}
