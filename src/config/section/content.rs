//! `[content]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [content]
//! files = ["*.html", "./src/**/*.rs"]
//! ```
//!
//! The bare list form `content = ["*.html"]` is accepted as well and reads
//! into the same ordered list. Saving always writes the `files` form.

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Glob patterns naming the files the compiler scans for class names.
///
/// Patterns are kept verbatim and in declaration order; nothing here checks
/// glob syntax.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentConfig {
    files: Vec<String>,
}

impl ContentConfig {
    pub fn new<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl<'de> Deserialize<'de> for ContentConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ContentVisitor)
    }
}

struct ContentVisitor;

impl<'de> Visitor<'de> for ContentVisitor {
    type Value = ContentConfig;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a list of glob patterns or a table with `files`")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut files = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(file) = seq.next_element::<String>()? {
            files.push(file);
        }
        Ok(ContentConfig { files })
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut files: Option<Vec<String>> = None;
        while let Some(key) = map.next_key::<String>()? {
            if key == "files" {
                if files.is_some() {
                    return Err(de::Error::duplicate_field("files"));
                }
                files = Some(map.next_value()?);
            } else {
                // Unknown keys are skipped; serde_ignored reports them.
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(ContentConfig {
            files: files.unwrap_or_default(),
        })
    }
}
