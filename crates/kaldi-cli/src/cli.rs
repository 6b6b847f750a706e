//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// kaldi-opts - Resolve and validate options for Kaldi feature and decoding tools
#[derive(Parser, Debug)]
#[command(name = "kaldi-opts")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List available tools
    ListTools {
        /// Filter by category (feature, decoder)
        #[arg(short, long)]
        category: Option<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show the option schema of a tool
    ///
    /// Examples:
    ///   kaldi-opts show compute_mfcc
    ///   kaldi-opts show latgen-faster-mapped --json
    Show {
        /// Tool name or binary name
        tool: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Build the resolved argument list for a tool
    ///
    /// Overrides from --file are applied first, then --set assignments.
    ///
    /// Examples:
    ///   kaldi-opts args compute_mfcc -s frame-length=30
    ///   kaldi-opts args decode_lattice -f overrides.toml --command
    Args {
        /// Tool name or binary name
        tool: String,

        /// Override one option (FLAG=VALUE, leading "--" optional)
        #[arg(short, long = "set", value_name = "FLAG=VALUE", allow_hyphen_values = true)]
        set: Vec<String>,

        /// Override file (.toml, .json, .yaml)
        #[arg(short, long, env = "KALDI_OPTS_FILE")]
        file: Option<PathBuf>,

        /// Print a single shell-quoted command line
        #[arg(long, conflicts_with = "json")]
        command: bool,

        /// Print only options that differ from their defaults
        #[arg(long, conflicts_with = "command")]
        changed: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Validate an override file against the tool schemas
    Check {
        /// Override file (.toml, .json, .yaml)
        file: PathBuf,
    },
}
