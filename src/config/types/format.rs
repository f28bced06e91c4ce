//! Serialization formats for the configuration file.

use clap::ValueEnum;
use std::path::Path;

/// On-disk format of a configuration file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    #[default]
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from a file extension.
    ///
    /// `.json` selects JSON; everything else (including no extension) is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(ConfigFormat::from_path(Path::new("tailwind.toml")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("tailwind.json")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("TAILWIND.JSON")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("tailwind")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("tailwind.cfg")), ConfigFormat::Toml);
    }
}
