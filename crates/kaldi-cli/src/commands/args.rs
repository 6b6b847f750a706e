//! Args command: build the resolved argument list for a tool

use std::path::Path;

use serde_json::json;

use kaldi_tools::{
    OptionValue, OverrideFile, OverrideSet, ToolConfigRegistry, build_arguments, merge_overrides,
};

use crate::error::{CliError, Result};

/// How the resolved arguments are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgsOutput {
    /// One `--flag=value` per line
    Flags,
    /// A single shell-quoted command line
    Command,
    /// JSON object with tool, binary and `[flag, value]` pairs
    Json,
}

/// Run the args command
pub fn run_args(
    tool: &str,
    assignments: &[String],
    file: Option<&Path>,
    output: ArgsOutput,
    changed: bool,
) -> Result<()> {
    println!("{}", render_args(tool, assignments, file, output, changed)?);
    Ok(())
}

/// Resolve `tool`, apply file then command-line overrides, and render.
pub fn render_args(
    tool: &str,
    assignments: &[String],
    file: Option<&Path>,
    output: ArgsOutput,
    changed: bool,
) -> Result<String> {
    let config = ToolConfigRegistry::global().resolve(tool)?;

    let file_layer = match file {
        Some(path) => OverrideFile::load(path)?.overrides_for(config.tool())?,
        None => OverrideSet::new(),
    };
    let cli_layer = assignments
        .iter()
        .map(|a| parse_assignment(a))
        .collect::<Result<OverrideSet>>()?;
    tracing::debug!(
        file = file_layer.len(),
        cli = cli_layer.len(),
        "Merging override layers"
    );

    let args = build_arguments(config, &merge_overrides(&file_layer, &cli_layer))?;

    let pairs: Vec<(&str, &str)> = if changed {
        args.changed(config)
    } else {
        args.pairs()
            .iter()
            .map(|(flag, value)| (flag.as_str(), value.as_str()))
            .collect()
    };

    let rendered = match output {
        ArgsOutput::Command => args.command_line(),
        ArgsOutput::Json => serde_json::to_string_pretty(&json!({
            "tool": args.tool(),
            "binary": args.binary(),
            "args": pairs,
        }))?,
        ArgsOutput::Flags => pairs
            .iter()
            .map(|(flag, value)| format!("{flag}={value}"))
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Ok(rendered)
}

/// Parse a `FLAG=VALUE` assignment. A missing leading `--` is added.
fn parse_assignment(raw: &str) -> Result<(String, OptionValue)> {
    let (flag, value) = raw.split_once('=').ok_or_else(|| {
        CliError::user(format!("Invalid override '{raw}': expected FLAG=VALUE"))
    })?;

    let flag = flag.trim();
    if flag.trim_start_matches('-').is_empty() {
        return Err(CliError::user(format!(
            "Invalid override '{raw}': missing flag name"
        )));
    }

    let flag = if flag.starts_with("--") {
        flag.to_string()
    } else {
        format!("--{}", flag.trim_start_matches('-'))
    };
    Ok((flag, OptionValue::Str(value.to_string())))
}
