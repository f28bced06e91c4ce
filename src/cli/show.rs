//! Print the loaded configuration.

use super::LoadedConfig;
use crate::config::ConfigFormat;
use anyhow::Result;

/// Render the configuration in `format`, defaulting to the file's own format.
pub fn render(loaded: &LoadedConfig, format: Option<ConfigFormat>) -> Result<String> {
    let format = format.unwrap_or_else(|| ConfigFormat::from_path(&loaded.path));
    Ok(loaded.config.to_string_pretty(format)?)
}

/// Run `twconf show`.
pub fn run(loaded: &LoadedConfig, format: Option<ConfigFormat>) -> Result<()> {
    print!("{}", render(loaded, format)?);
    Ok(())
}
