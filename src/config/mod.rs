//! Build configuration management for `tailwind.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Field definitions
//! │   ├── content    # [content]
//! │   ├── theme      # [theme.extend]
//! │   └── plugins    # plugins = [...]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError
//! │   ├── format     # ConfigFormat (toml / json)
//! │   └── policy     # UnknownFieldPolicy
//! ├── util.rs        # Config file lookup
//! └── mod.rs         # BuildConfig (this file)
//! ```
//!
//! # Fields
//!
//! | Field             | Purpose                                          |
//! |-------------------|--------------------------------------------------|
//! | `[content]`       | Ordered glob patterns scanned for class names    |
//! | `[theme.extend]`  | Tokens merged over the compiler's default theme  |
//! | `plugins`         | Plugin specifiers, loaded in declared order      |
//!
//! The configuration is read once and never mutated afterwards: there are no
//! setters, only construction and read access.

pub mod section;
pub mod types;
mod util;

pub use util::find_config_file;

pub use section::{
    ContentConfig, PluginRef, Theme, ThemeConfig, ThemeExtension, TokenMap, resolve_theme,
};
pub use types::{ConfigError, ConfigFormat, UnknownFieldPolicy, UnknownFields};

use crate::log;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing `tailwind.toml`.
///
/// Missing fields read as empty: no content globs, no theme extension and no
/// plugins. [`BuildConfig::starter`] is the configuration `init` writes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Files scanned for class names
    content: ContentConfig,

    /// Theme settings (extend)
    theme: ThemeConfig,

    /// Plugin specifiers
    plugins: Vec<PluginRef>,
}

impl BuildConfig {
    pub fn new(content: ContentConfig, extend: ThemeExtension, plugins: Vec<PluginRef>) -> Self {
        Self {
            content,
            theme: ThemeConfig::new(extend),
            plugins,
        }
    }

    /// Configuration for a Rust web front end: HTML shells plus Rust sources,
    /// with an empty color palette extension and no plugins.
    pub fn starter() -> Self {
        Self::new(
            ContentConfig::new(["*.html", "./src/**/*.rs"]),
            ThemeExtension::with_empty_categories(["colors"]),
            Vec::new(),
        )
    }

    pub fn content(&self) -> &ContentConfig {
        &self.content
    }

    /// Glob patterns in declaration order.
    pub fn content_sources(&self) -> &[String] {
        self.content.files()
    }

    pub fn theme_extension(&self) -> &ThemeExtension {
        self.theme.extend()
    }

    pub fn plugins(&self) -> &[PluginRef] {
        &self.plugins
    }

    // ========================================================================
    // parsing
    // ========================================================================

    /// Parse configuration from a string, silently dropping unknown fields.
    pub fn from_str(content: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        let (config, _) = Self::parse_with_ignored(content, format)?;
        Ok(config)
    }

    /// Parse content, collecting the dotted paths of any unknown fields.
    pub fn parse_with_ignored(
        content: &str,
        format: ConfigFormat,
    ) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let on_ignored = |path: serde_ignored::Path| ignored.push(path.to_string());

        let config: Self = match format {
            ConfigFormat::Toml => {
                let deserializer = toml::Deserializer::new(content);
                serde_ignored::deserialize(deserializer, on_ignored)?
            }
            ConfigFormat::Json => {
                let mut deserializer = serde_json::Deserializer::from_str(content);
                let config = serde_ignored::deserialize(&mut deserializer, on_ignored)?;
                deserializer.end()?;
                config
            }
        };
        Ok((config, ignored))
    }

    /// Parse content and apply `policy` to unknown fields.
    pub fn parse(
        content: &str,
        format: ConfigFormat,
        policy: UnknownFieldPolicy,
    ) -> Result<Self, ConfigError> {
        let (config, ignored) = Self::parse_with_ignored(content, format)?;
        Self::check_unknown_fields(ignored, policy)?;
        Ok(config)
    }

    /// Load configuration from a file.
    ///
    /// The format follows the extension (`.json` or TOML).
    pub fn load(path: &Path, policy: UnknownFieldPolicy) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let format = ConfigFormat::from_path(path);
        crate::debug!("config"; "loading {} as {:?}", path.display(), format);
        Self::parse(&content, format, policy)
    }

    /// Report or reject unknown fields.
    fn check_unknown_fields(
        ignored: Vec<String>,
        policy: UnknownFieldPolicy,
    ) -> Result<(), ConfigError> {
        if ignored.is_empty() {
            return Ok(());
        }
        match policy {
            UnknownFieldPolicy::Reject => Err(ConfigError::UnknownFields(UnknownFields(ignored))),
            UnknownFieldPolicy::Warn => {
                Self::print_unknown_fields_warning(&ignored);
                Ok(())
            }
        }
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String]) {
        log!("warning"; "unknown config fields, ignoring:");
        for field in fields {
            eprintln!("- {field}");
        }
    }

    // ========================================================================
    // serialization
    // ========================================================================

    /// Serialize to a pretty string in `format`, ending with a newline.
    pub fn to_string_pretty(&self, format: ConfigFormat) -> Result<String, ConfigError> {
        match format {
            ConfigFormat::Toml => Ok(toml::to_string_pretty(self)?),
            ConfigFormat::Json => {
                let mut out = serde_json::to_string_pretty(self)?;
                out.push('\n');
                Ok(out)
            }
        }
    }

    /// Write the configuration to `path`, in the format its extension selects.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_string_pretty(ConfigFormat::from_path(path))?;
        fs::write(path, content).map_err(|err| ConfigError::Io(path.to_path_buf(), err))
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse TOML config.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> BuildConfig {
    let (parsed, ignored) = BuildConfig::parse_with_ignored(content, ConfigFormat::Toml).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
