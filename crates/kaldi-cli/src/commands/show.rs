//! Show command: print the option schema of one tool

use colored::Colorize;

use kaldi_tools::ToolConfigRegistry;

use crate::error::Result;

/// Run the show command
pub fn run_show(tool: &str, json: bool) -> Result<()> {
    let config = ToolConfigRegistry::global().resolve(tool)?;

    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }

    println!(
        "{} {} ({})",
        "Options for".bold(),
        config.tool().as_str().green().bold(),
        config.tool().binary()
    );
    println!();

    for spec in config.iter() {
        let default = spec.default_value().to_string();
        let default = if default.is_empty() {
            "\"\"".dimmed().to_string()
        } else {
            default
        };
        println!(
            "  {:<28} {:<8} {}",
            spec.name().cyan(),
            spec.option_type().to_string(),
            default
        );
    }

    println!();
    println!("{} {} options.", "Total:".dimmed(), config.len());

    Ok(())
}
