mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use colored::Colorize;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = commands::generate::run(cli) {
        eprintln!("{} Generation failed: {}", "✗".red().bold(), e);
        std::process::exit(1);
    }
}
