//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration error types                    |
//! | `format` | TOML / JSON file format selection            |
//! | `policy` | Unknown field handling (warn or reject)      |

mod error;
mod format;
mod policy;

pub use error::{ConfigError, UnknownFields};
pub use format::ConfigFormat;
pub use policy::UnknownFieldPolicy;
