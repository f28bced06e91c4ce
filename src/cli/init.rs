//! Starter configuration file generation.

use crate::config::{BuildConfig, ConfigFormat};
use crate::log;
use anyhow::{Context, Result, bail};
use std::{
    fs,
    io::{self, Write},
    path::Path,
};

/// Generate the starter config content for `format`.
///
/// TOML output carries a short comment header; JSON has no comments.
pub fn generate_config_template(format: ConfigFormat) -> Result<String> {
    let body = BuildConfig::starter().to_string_pretty(format)?;
    Ok(match format {
        ConfigFormat::Toml => format!(
            "# twconf configuration (v{})\n# Run `twconf emit` to write tailwind.config.js.\n\n{body}",
            env!("CARGO_PKG_VERSION")
        ),
        ConfigFormat::Json => body,
    })
}

/// Write the starter config to `path`.
///
/// An existing file is only replaced with `force`.
pub fn write_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "'{}' already exists (use --force to overwrite)",
            path.display()
        );
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }

    let content = generate_config_template(ConfigFormat::from_path(path))?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))
}

/// Run `twconf init` in the current directory.
pub fn run(config: &Path, force: bool, dry: bool) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    run_in(&cwd, config, force, dry, &mut io::stdout().lock())
}

/// Write `config` (relative to `cwd`), or print it to `out` when `dry`.
pub fn run_in(
    cwd: &Path,
    config: &Path,
    force: bool,
    dry: bool,
    out: &mut impl Write,
) -> Result<()> {
    if dry {
        out.write_all(generate_config_template(ConfigFormat::from_path(config))?.as_bytes())?;
        return Ok(());
    }

    let path = cwd.join(config);
    write_config(&path, force)?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}
