//! Madlib - fill-in-the-blanks story game
//!
//! A template is ordinary text with `{label}` placeholders such as `{noun}` or
//! `{adjective}`. The game asks the player for one word per placeholder, in
//! order, then prints the finished story and saves a copy.
//!
//! # Flow
//!
//! ```text
//! template file ──parse──▶ PositionalTemplate ──labels──▶ collect ──words──▶ fill ──▶ save_story
//! ```
//!
//! # Example
//!
//! ```
//! use madlib::PositionalTemplate;
//!
//! let template = PositionalTemplate::parse("The {adjective} {noun} jumped over the {noun}.")?;
//! assert_eq!(template.labels(), &["adjective", "noun", "noun"]);
//!
//! let story = template.fill(&["lazy", "fox", "fence"])?;
//! assert_eq!(story, "The lazy fox jumped over the fence.");
//! # Ok::<(), madlib::MadlibError>(())
//! ```

pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod game;
pub mod story;
pub mod template;

pub use collector::{BLANK_WORD, BufReadReader, Collector, EditorReader, LineReader, Step, UNDO_COMMAND, collect};
pub use config::Config;
pub use error::MadlibError;
pub use game::{Game, Outcome};
pub use story::{output_file_name, save_story};
pub use template::PositionalTemplate;

/// Template played when none is configured
pub const DEFAULT_TEMPLATE_PATH: &str = "assets/dark_and_stormy_night_template.txt";

/// Where completed stories go when no directory is configured
pub const DEFAULT_OUTPUT_DIR: &str = "assets";
