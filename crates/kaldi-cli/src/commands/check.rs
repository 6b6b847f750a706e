//! Check command: validate an override file

use std::path::Path;

use colored::Colorize;

use kaldi_tools::{OverrideFile, ToolConfigRegistry};

use crate::error::Result;

/// Run the check command
///
/// Fails on the first invalid section or entry.
pub fn run_check(path: &Path) -> Result<()> {
    println!(
        "{} Checking {}",
        "=>".blue().bold(),
        path.display().to_string().cyan()
    );

    let file = OverrideFile::load(path)?;
    ToolConfigRegistry::global().validate_file(&file)?;

    let mut sections = 0;
    for (section, overrides) in file.sections() {
        sections += 1;
        println!(
            "  {} {} ({} overrides)",
            "OK".green().bold(),
            section,
            overrides.len()
        );
    }

    if sections == 0 {
        println!("{} No tool sections found.", "WARN".yellow().bold());
    } else {
        println!("{} {} section(s) valid.", "OK".green().bold(), sections);
    }

    Ok(())
}
