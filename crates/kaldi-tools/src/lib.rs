//! Option registry for Kaldi feature-extraction and decoding tools.
//!
//! The crate answers two questions for a caller about to run an external
//! Kaldi binary:
//!
//! 1. **Which options does this tool accept?** [`ToolConfigRegistry::resolve`]
//!    maps a tool name to its [`ToolConfig`] (flag, default, type).
//!
//! 2. **What exactly goes on the command line?** [`build_arguments`] merges
//!    caller overrides into the defaults, rejects unknown flags and values of
//!    the wrong type, and returns a sorted, deterministic flag list.
//!
//! ```rust,ignore
//! use kaldi_tools::{ToolConfigRegistry, OverrideSet};
//!
//! let registry = ToolConfigRegistry::global();
//! let config = registry.resolve("compute_mfcc")?;
//! let mut overrides = OverrideSet::new();
//! overrides.insert("--frame-length".into(), "30".into());
//! let args = kaldi_tools::build_arguments(config, &overrides)?;
//! println!("{}", args.command_line());
//! ```
//!
//! Nothing here spawns a process; executing the binary is the caller's job.

pub mod arguments;
pub mod error;
pub mod logging;
pub mod registry;

pub use arguments::{ToolArguments, build_arguments};
pub use error::{Error, Result};
pub use registry::{BUILTIN_COUNT, ToolConfigRegistry, builtin_configs};

pub use kaldi_meta::{
    OptionSpec, OptionType, OptionValue, OverrideFile, OverrideSet, ToolCategory, ToolConfig,
    ToolName, merge_overrides,
};
