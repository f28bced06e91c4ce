//! Command-line interface definitions.

use crate::config::{ConfigFormat, UnknownFieldPolicy};
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Typed tailwind configuration CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "tailwind.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Reject unknown config fields instead of ignoring them
    #[arg(long, global = true)]
    pub strict: bool,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a starter config file
    #[command(visible_alias = "i")]
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,

        /// Print the config to stdout instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Print the loaded configuration
    #[command(visible_alias = "s")]
    Show {
        /// Output format (default: format of the config file)
        #[arg(short, long, value_enum)]
        format: Option<ConfigFormat>,
    },

    /// Write tailwind.config.js for the CSS compiler
    #[command(visible_alias = "e")]
    Emit {
        /// Output path (default: tailwind.config.js next to the config file)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,

        /// Print the module to stdout instead of writing it
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },
}

impl Cli {
    pub const fn unknown_field_policy(&self) -> UnknownFieldPolicy {
        UnknownFieldPolicy::from_strict(self.strict)
    }
}
