//! Write `tailwind.config.js` for the CSS compiler.

use super::LoadedConfig;
use crate::log;
use crate::render::{self, js};
use anyhow::Result;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Where `emit` writes: the explicit `--output`, or next to the config file.
pub fn output_path(loaded: &LoadedConfig, output: Option<&Path>) -> PathBuf {
    output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| render::default_output(&loaded.path))
}

/// Run `twconf emit`.
pub fn run(loaded: &LoadedConfig, output: Option<&Path>, stdout: bool) -> Result<()> {
    run_to(loaded, output, stdout, &mut io::stdout().lock())
}

/// Emit the module to a file, or to `out` when `stdout` is set.
pub fn run_to(
    loaded: &LoadedConfig,
    output: Option<&Path>,
    stdout: bool,
    out: &mut impl Write,
) -> Result<()> {
    if loaded.config.content().is_empty() {
        log!("hint"; "`content.files` is empty, the compiler will not find any classes");
    }

    if stdout {
        out.write_all(js::render(&loaded.config).as_bytes())?;
        return Ok(());
    }

    let path = output_path(loaded, output);
    render::write_js(&loaded.config, &path)?;
    log!("emit"; "wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildConfig;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_output_path() {
        let loaded = LoadedConfig {
            path: PathBuf::from("/app/tailwind.toml"),
            config: BuildConfig::starter(),
        };
        assert_eq!(
            output_path(&loaded, None),
            PathBuf::from("/app/tailwind.config.js")
        );
        assert_eq!(
            output_path(&loaded, Some(Path::new("out/tw.js"))),
            PathBuf::from("out/tw.js")
        );
    }

    #[test]
    fn test_emit_writes_next_to_config() {
        let temp = TempDir::new().unwrap();
        let loaded = LoadedConfig {
            path: temp.path().join("tailwind.toml"),
            config: BuildConfig::starter(),
        };
        run(&loaded, None, false).unwrap();

        let written = fs::read_to_string(temp.path().join("tailwind.config.js")).unwrap();
        assert!(written.starts_with("/** @type {import('tailwindcss').Config} */"));
        assert!(written.contains(r#"files: ["*.html", "./src/**/*.rs"],"#));
    }

    #[test]
    fn test_emit_stdout_writes_no_file() {
        let temp = TempDir::new().unwrap();
        let loaded = LoadedConfig {
            path: temp.path().join("tailwind.toml"),
            config: BuildConfig::starter(),
        };
        let mut out = Vec::new();
        run_to(&loaded, None, true, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), js::render(&BuildConfig::starter()));
        assert!(!temp.path().join("tailwind.config.js").exists());
    }

    #[test]
    fn test_emit_to_explicit_output() {
        let temp = TempDir::new().unwrap();
        let loaded = LoadedConfig {
            path: temp.path().join("tailwind.toml"),
            config: BuildConfig::default(),
        };
        let output = temp.path().join("dist/tw.config.js");
        let mut out = Vec::new();
        run_to(&loaded, Some(output.as_path()), false, &mut out).unwrap();

        assert!(out.is_empty());
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            js::render(&BuildConfig::default())
        );
    }
}
