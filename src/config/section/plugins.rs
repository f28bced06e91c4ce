//! `plugins` list configuration.
//!
//! ```toml
//! plugins = ["@tailwindcss/forms", "./plugins/brand.js"]
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque specifier of a compiler plugin, loaded in declared order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginRef(String);

impl PluginRef {
    pub fn new(specifier: impl Into<String>) -> Self {
        Self(specifier.into())
    }

    pub fn specifier(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PluginRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PluginRef {
    fn from(specifier: &str) -> Self {
        Self::new(specifier)
    }
}
