//! CLI argument structure using clap

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "worklist")]
#[command(version, about = "Render portfolio works into an HTML page", long_about = None)]
pub struct Cli {
    /// Works document, JSON with comments [default: ./works.jsonc]
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Page template containing the placeholder [default: ./template.html]
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Generated page [default: ./work.html]
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Config file [default: ./worklist.toml when present]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,
}
