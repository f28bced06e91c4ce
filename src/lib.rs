//! twconf - typed tailwind configuration for Rust front ends.
//!
//! The configuration lives in `tailwind.toml` (or `.json`), is loaded once
//! into a read-only [`config::BuildConfig`], and is handed to the CSS compiler
//! as the `tailwind.config.js` module produced by [`render::js`].
//!
//! ```ignore
//! use twconf::config::{BuildConfig, UnknownFieldPolicy};
//!
//! let config = BuildConfig::load("tailwind.toml".as_ref(), UnknownFieldPolicy::Warn)?;
//! let module = twconf::render::js::render(&config);
//! ```

pub mod cli;
pub mod config;
pub mod logger;
pub mod render;
