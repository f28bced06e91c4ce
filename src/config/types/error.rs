//! Configuration error types.

use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when accessing `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file `{0}` not found (run `twconf init` to create one)")]
    NotFound(PathBuf),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config serialization error")]
    TomlSer(#[from] toml::ser::Error),

    #[error("JSON config error")]
    Json(#[from] serde_json::Error),

    // NOTE: No #[from] here - the list is rendered by UnknownFields' Display
    #[error("{0}")]
    UnknownFields(UnknownFields),
}

// ============================================================================
// UnknownFields
// ============================================================================

/// Dotted paths of fields that are not part of the schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnknownFields(pub Vec<String>);

impl UnknownFields {
    pub fn paths(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for UnknownFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", "unknown config fields:".red().bold())?;
        for path in &self.0 {
            write!(f, "\n{} {}", "→".red(), format_args!("`{path}`").bright_blue())?;
        }
        write!(
            f,
            "\n  {} remove the fields or run without --strict",
            "hint:".yellow()
        )
    }
}

impl std::error::Error for UnknownFields {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("tailwind.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("tailwind.toml"));

        let missing = ConfigError::NotFound(PathBuf::from("tailwind.toml"));
        assert!(format!("{missing}").contains("not found"));
    }

    #[test]
    fn test_unknown_fields_display_lists_every_path() {
        let err = ConfigError::UnknownFields(UnknownFields(vec![
            "prefix".into(),
            "theme.colors".into(),
        ]));
        let display = format!("{err}");
        assert!(display.contains("unknown config fields"));
        assert!(display.contains("prefix"));
        assert!(display.contains("theme.colors"));
        assert!(display.contains("--strict"));
    }
}
