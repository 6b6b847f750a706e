//! kaldi-opts CLI
//!
//! Resolves, validates and renders option sets for Kaldi feature-extraction
//! and decoding binaries.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use commands::ArgsOutput;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    if let Err(e) = kaldi_tools::logging::init(level) {
        eprintln!("{} failed to initialize logging: {}", "warning:".yellow().bold(), e);
    }
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} Kaldi tool option resolver", "kaldi-opts".green().bold());
            println!();
            println!("Run {} for available commands.", "kaldi-opts --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::ListTools { category, json } => {
            commands::run_list_tools(category.as_deref(), json)
        }
        Commands::Show { tool, json } => commands::run_show(&tool, json),
        Commands::Args {
            tool,
            set,
            file,
            command,
            changed,
            json,
        } => {
            let output = if json {
                ArgsOutput::Json
            } else if command {
                ArgsOutput::Command
            } else {
                ArgsOutput::Flags
            };
            commands::run_args(&tool, &set, file.as_deref(), output, changed)
        }
        Commands::Check { file } => commands::run_check(&file),
    }
}
