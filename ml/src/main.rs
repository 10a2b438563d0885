//! Madlib - fill-in-the-blanks story game
//!
//! CLI entry point for playing a single round.

use std::fs;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::{debug, info, warn};

use madlib::cli::Cli;
use madlib::config::Config;
use madlib::{BufReadReader, EditorReader, Game, MadlibError};

fn parse_level(level: &str) -> tracing::Level {
    match level.to_uppercase().as_str() {
        "TRACE" => tracing::Level::TRACE,
        "DEBUG" => tracing::Level::DEBUG,
        "INFO" => tracing::Level::INFO,
        "WARN" | "WARNING" => tracing::Level::WARN,
        "ERROR" => tracing::Level::ERROR,
        _ => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", level);
            tracing::Level::INFO
        }
    }
}

/// Log to a file so the terminal only shows the game
fn setup_logging(level: Option<&str>) -> Result<PathBuf> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("madlib")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let level = level.map(parse_level).unwrap_or(tracing::Level::INFO);
    let log_path = log_dir.join("madlib.log");
    let log_file = fs::File::create(&log_path).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(log_path)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_ref())
        .context("Failed to load configuration")?
        .with_overrides(cli.template, cli.output_dir);

    // Priority: CLI --log-level > config file > INFO
    let log_path = setup_logging(cli.log_level.as_deref().or(config.log_level.as_deref()))
        .context("Failed to setup logging")?;
    debug!(?config, log = %log_path.display(), "main: configuration loaded");

    let game = Game::from_config(&config);
    let mut out = io::stdout();

    let result = if io::stdin().is_terminal() {
        debug!("main: reading words with line editor");
        let mut reader = EditorReader::new()?;
        game.play(&mut reader, &mut out)
    } else {
        debug!("main: reading words from piped stdin");
        let mut reader = BufReadReader::new(io::stdin().lock(), io::stdout());
        game.play(&mut reader, &mut out)
    };

    match result {
        Ok(outcome) => {
            info!(path = %outcome.saved_to.display(), "madlib finished");
            Ok(())
        }
        Err(err @ MadlibError::TemplateNotFound { .. }) => {
            warn!(%err, "Template missing, nothing to play");
            println!("{}", err.to_string().red());
            Ok(())
        }
        Err(err) => Err(err).context("Failed to finish the story"),
    }
}
