//! `[theme]` section configuration.
//!
//! Only `theme.extend` is recognized. Each category (`colors`, `spacing`, ...)
//! maps token names to opaque string values that are handed to the compiler
//! as written.
//!
//! # Example
//!
//! ```toml
//! [theme.extend.colors]
//! brand = "#0A465B"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Token name -> token value within one theme category.
pub type TokenMap = BTreeMap<String, String>;

/// Category name -> tokens. Shape of both the base theme and its extension.
pub type Theme = BTreeMap<String, TokenMap>;

/// Theme section configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Additions merged over the compiler's default theme.
    extend: ThemeExtension,
}

impl ThemeConfig {
    pub fn new(extend: ThemeExtension) -> Self {
        Self { extend }
    }

    pub fn extend(&self) -> &ThemeExtension {
        &self.extend
    }
}

/// Partial theme merged into (never replacing) a base theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeExtension(Theme);

impl ThemeExtension {
    pub fn new(categories: Theme) -> Self {
        Self(categories)
    }

    /// Extension with the given categories and no tokens in any of them.
    pub fn with_empty_categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            categories
                .into_iter()
                .map(|name| (name.into(), TokenMap::new()))
                .collect(),
        )
    }

    pub fn categories(&self) -> &Theme {
        &self.0
    }

    pub fn category(&self, name: &str) -> Option<&TokenMap> {
        self.0.get(name)
    }

    /// True when no category carries a token.
    ///
    /// `{ colors = {} }` has no tokens and merges like an absent extension.
    pub fn has_no_tokens(&self) -> bool {
        self.0.values().all(BTreeMap::is_empty)
    }

    /// Merge tokens over `base`.
    ///
    /// Categories are merged key by key; a token present in both takes the
    /// extension's value. Categories without tokens leave `base` untouched.
    pub fn merge_into(&self, base: &mut Theme) {
        for (category, tokens) in &self.0 {
            if tokens.is_empty() {
                continue;
            }
            let target = base.entry(category.clone()).or_default();
            for (name, value) in tokens {
                target.insert(name.clone(), value.clone());
            }
        }
    }
}

/// Resolve the effective theme: `base` with `extension` merged over it.
pub fn resolve_theme(base: &Theme, extension: Option<&ThemeExtension>) -> Theme {
    let mut theme = base.clone();
    if let Some(extension) = extension {
        extension.merge_into(&mut theme);
    }
    theme
}
