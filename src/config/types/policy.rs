//! Handling of fields outside the fixed schema.

/// What to do when a loaded file carries fields the schema does not know.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownFieldPolicy {
    /// Ignore unknown fields and print a warning listing them.
    #[default]
    Warn,
    /// Fail loading with `ConfigError::UnknownFields`.
    Reject,
}

impl UnknownFieldPolicy {
    /// `--strict` selects `Reject`.
    pub const fn from_strict(strict: bool) -> Self {
        if strict { Self::Reject } else { Self::Warn }
    }
}
