//! Generate command - render the works document into the output page

use crate::cli::Cli;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use worklist_core::{generate, Config};

/// Build the config from file and flags, then generate the page
///
/// Precedence: flag > config file > built-in default.
pub fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(Path::new(""))?,
    };

    if let Some(data) = cli.data {
        config.paths.data = data;
    }
    if let Some(template) = cli.template {
        config.paths.template = template;
    }
    if let Some(output) = cli.output {
        config.paths.output = output;
    }

    if cli.verbose {
        println!(
            "{} Reading {} and {}",
            "→".cyan(),
            config.paths.data.display(),
            config.paths.template.display()
        );
    }

    let report = generate(&config)?;

    if cli.verbose {
        println!("{} Rendered {} work(s)", "→".cyan(), report.works);
    }
    println!("{} Generated: {}", "✓".green().bold(), report.output.display());

    Ok(())
}
