//! List command for tools

use colored::Colorize;
use serde::Serialize;

use kaldi_tools::{ToolCategory, ToolConfigRegistry, ToolName};

use crate::error::{CliError, Result};

#[derive(Debug, Serialize)]
struct ToolSummary {
    name: ToolName,
    binary: &'static str,
    category: ToolCategory,
    options: usize,
}

/// Run the list-tools command
pub fn run_list_tools(category_filter: Option<&str>, json: bool) -> Result<()> {
    let registry = ToolConfigRegistry::global();

    let filter: Option<ToolCategory> = category_filter
        .map(|raw| raw.parse::<ToolCategory>().map_err(CliError::user))
        .transpose()?;

    if json {
        let summaries: Vec<_> = registry
            .list()
            .into_iter()
            .filter(|t| filter.is_none_or(|f| t.category() == f))
            .filter_map(|t| registry.get(t))
            .map(|config| ToolSummary {
                name: config.tool(),
                binary: config.tool().binary(),
                category: config.tool().category(),
                options: config.len(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    println!("{}", "Available Tools".bold());
    println!();

    let categories = [
        (ToolCategory::Feature, "Feature Extractors"),
        (ToolCategory::Decoder, "Decoders"),
    ];

    for (cat, label) in categories {
        if filter.is_some_and(|f| f != cat) {
            continue;
        }

        let tools = registry.by_category(cat);
        if tools.is_empty() {
            continue;
        }

        println!("{}:", label.cyan().bold());
        for tool in tools {
            if let Some(config) = registry.get(tool) {
                println!(
                    "  {:<20} {:<28} ({} options)",
                    tool.as_str().green(),
                    tool.binary(),
                    config.len().to_string().dimmed()
                );
            }
        }
        println!();
    }

    println!(
        "{} {} tools available. Use {} to see their options.",
        "Total:".dimmed(),
        registry.len(),
        "kaldi-opts show <tool>".cyan()
    );

    Ok(())
}
