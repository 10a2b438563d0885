//! One round of the game: template in, saved story out

use std::io::Write;
use std::path::PathBuf;

use chrono::Local;
use colored::Colorize;
use tracing::{debug, info};

use crate::collector::{LineReader, collect};
use crate::config::Config;
use crate::error::MadlibError;
use crate::story::save_story;
use crate::template::PositionalTemplate;

/// Printed before anything else
pub const INSTRUCTIONS: &str = "
Welcome to the MadLibs game!

In this game, you'll be asked to provide various words - nouns, verbs, adjectives, etc.
These words will be used to fill in the blanks in a story, creating often humorous or whimsical results.

How to play:
1. You will be prompted to enter different types of words (like a noun, a verb, or an adjective).
2. Enter any word that fits the requested type.
3. Type 'undo' to undo your last entered word.
4. Once all words are provided, the completed story will be revealed!

Ready to have some fun? Let's get started!
";

/// A finished round
#[derive(Debug, Clone)]
pub struct Outcome {
    pub story: String,
    pub saved_to: PathBuf,
}

pub struct Game {
    template_path: PathBuf,
    output_dir: PathBuf,
}

impl Game {
    pub fn new(template_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            template_path: template_path.into(),
            output_dir: output_dir.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.template_path, &config.output_dir)
    }

    /// Play one round, reading words from `reader` and writing to `out`
    pub fn play<R, W>(&self, reader: &mut R, out: &mut W) -> Result<Outcome, MadlibError>
    where
        R: LineReader,
        W: Write,
    {
        debug!(template = %self.template_path.display(), "Game::play: called");
        writeln!(out, "{}", INSTRUCTIONS)?;
        out.flush()?;

        let template = PositionalTemplate::load(&self.template_path)?;
        let words = collect(template.labels(), reader, out)?;
        let story = template.fill(&words)?;

        writeln!(out, "\n")?;
        writeln!(out, "{}", "Here is your completed MadLib:".bright_green().bold())?;
        writeln!(out, "{}", story)?;
        writeln!(out, "\n")?;
        out.flush()?;

        let saved_to = save_story(&self.output_dir, &story, &Local::now())?;
        info!(path = %saved_to.display(), "Round complete");
        Ok(Outcome { story, saved_to })
    }
}
