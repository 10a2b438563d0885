//! CLI argument parsing for madlib

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "madlib")]
#[command(author, version, about = "Fill in the blanks of a story, one word at a time", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Template file with {label} placeholders
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Directory to save the completed story in
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}
