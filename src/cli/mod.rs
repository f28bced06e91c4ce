//! Command implementations.
//!
//! | Module  | Command        | Purpose                                 |
//! |---------|----------------|-----------------------------------------|
//! | `args`  |                | clap definitions                        |
//! | `init`  | `twconf init`  | Write the starter config                |
//! | `show`  | `twconf show`  | Print the loaded config                 |
//! | `emit`  | `twconf emit`  | Write `tailwind.config.js`              |

mod args;
pub mod emit;
pub mod init;
pub mod show;

pub use args::{Cli, Commands};

use crate::config::{BuildConfig, ConfigError, find_config_file};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// A configuration together with the file it came from.
#[derive(Debug)]
pub struct LoadedConfig {
    pub path: PathBuf,
    pub config: BuildConfig,
}

/// Locate and load the configuration named by `--config`.
pub fn load_config(cli: &Cli) -> Result<LoadedConfig> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let path = resolve_config_path(&cwd, &cli.config)?;

    let config = BuildConfig::load(&path, cli.unknown_field_policy())?;
    crate::debug!(
        "config";
        "{} content globs, {} theme categories, {} plugins",
        config.content_sources().len(),
        config.theme_extension().categories().len(),
        config.plugins().len()
    );

    Ok(LoadedConfig { path, config })
}

/// Search upward from `cwd` for `config`.
fn resolve_config_path(cwd: &Path, config: &Path) -> Result<PathBuf> {
    find_config_file(cwd, config)
        .ok_or_else(|| ConfigError::NotFound(config.to_path_buf()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_config_path_found_upward() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("src");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join("tailwind.toml"), "").unwrap();

        let path = resolve_config_path(&nested, Path::new("tailwind.toml")).unwrap();
        assert_eq!(path, temp.path().join("tailwind.toml"));
    }

    #[test]
    fn test_resolve_config_path_missing() {
        let temp = TempDir::new().unwrap();
        let err = resolve_config_path(temp.path(), Path::new("missing-twconf.toml")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::NotFound(_))
        ));
        // One message carrying the hint, nothing logged alongside it
        let message = format!("{err}");
        assert!(message.contains("missing-twconf.toml"));
        assert!(message.contains("twconf init"));
    }
}
