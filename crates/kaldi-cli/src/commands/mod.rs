//! Command implementations for kaldi-cli

pub mod args;
pub mod check;
pub mod list;
pub mod show;

pub use args::{ArgsOutput, run_args};
pub use check::run_check;
pub use list::run_list_tools;
pub use show::run_show;
