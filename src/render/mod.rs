//! Output for the external compiler.
//!
//! - `js`: the `tailwind.config.js` CommonJS module

pub mod js;

use crate::config::BuildConfig;
use anyhow::{Context, Result};
use std::{fs, path::Path, path::PathBuf};

/// File name the compiler looks for next to the project root.
pub const JS_CONFIG_FILE: &str = "tailwind.config.js";

/// Default location of the emitted module: next to the config file.
pub fn default_output(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .map(|dir| dir.join(JS_CONFIG_FILE))
        .unwrap_or_else(|| PathBuf::from(JS_CONFIG_FILE))
}

/// Render `config` and write it to `output`, creating parent directories.
pub fn write_js(config: &BuildConfig, output: &Path) -> Result<()> {
    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }

    fs::write(output, js::render(config))
        .with_context(|| format!("Failed to write '{}'", output.display()))
}
