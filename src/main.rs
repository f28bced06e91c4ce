use anyhow::Result;
use clap::{ColorChoice, Parser};
use twconf::cli::{self, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    twconf::logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { force, dry } => cli::init::run(&cli.config, *force, *dry),
        Commands::Show { format } => {
            let loaded = cli::load_config(&cli)?;
            cli::show::run(&loaded, *format)
        }
        Commands::Emit { output, stdout } => {
            let loaded = cli::load_config(&cli)?;
            cli::emit::run(&loaded, output.as_deref(), *stdout)
        }
    }
}
