//! Madlib error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while playing a round
#[derive(Debug, Error)]
pub enum MadlibError {
    #[error("The file '{}' was not found.", .path.display())]
    TemplateNotFound { path: PathBuf },

    #[error("Failed to read template {}", .path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid placeholder pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Template has {expected} blanks but only {actual} words were given")]
    MissingWords { expected: usize, actual: usize },

    #[error("Input closed before all words were entered")]
    InputClosed,

    #[error("Interrupted")]
    Interrupted,

    #[error("Readline error: {0}")]
    Readline(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
