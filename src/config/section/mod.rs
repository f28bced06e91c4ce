//! Configuration section definitions.
//!
//! Each module corresponds to a top-level field of `tailwind.toml`:
//!
//! | Module    | TOML field      | Purpose                                  |
//! |-----------|-----------------|------------------------------------------|
//! | `content` | `[content]`     | Glob patterns scanned for class names    |
//! | `theme`   | `[theme]`       | `extend` tokens merged over the defaults |
//! | `plugins` | `plugins`       | Plugin specifiers, in load order         |

mod content;
mod plugins;
mod theme;

pub use content::ContentConfig;
pub use plugins::PluginRef;
pub use theme::{Theme, ThemeConfig, ThemeExtension, TokenMap, resolve_theme};
