//! Template parsing and substitution
//!
//! A template is plain text with `{label}` placeholders, where a label is one
//! or more ASCII letters. Parsing splits the text into literal runs around the
//! placeholders; filling joins those runs back together with the player's
//! words in placeholder order.
//!
//! Anything that does not match the placeholder grammar (`{}`, `{123}`, a lone
//! `{`) is ordinary text and passes through untouched. There is no escape for
//! a literal `{word}`.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use regex::Regex;
use tracing::{debug, info};

use crate::error::MadlibError;

/// Matches one well-formed placeholder
pub const PLACEHOLDER_PATTERN: &str = r"\{[a-zA-Z]+\}";

/// A template with its placeholders replaced by ordered slots
///
/// `literals` always holds one more entry than `labels`: slot `i` sits between
/// `literals[i]` and `literals[i + 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionalTemplate {
    literals: Vec<String>,
    labels: Vec<String>,
}

impl PositionalTemplate {
    /// Parse a raw template in one left-to-right pass
    pub fn parse(raw: &str) -> Result<Self, MadlibError> {
        debug!(len = raw.len(), "PositionalTemplate::parse: called");
        let regex = Regex::new(PLACEHOLDER_PATTERN)?;

        let mut literals = Vec::new();
        let mut labels = Vec::new();
        let mut last = 0;

        for m in regex.find_iter(raw) {
            literals.push(raw[last..m.start()].to_string());
            // Strip the surrounding braces; both are single-byte
            labels.push(raw[m.start() + 1..m.end() - 1].to_string());
            last = m.end();
        }
        literals.push(raw[last..].to_string());

        debug!(slots = labels.len(), "PositionalTemplate::parse: done");
        Ok(Self { literals, labels })
    }

    /// Read and parse a template file
    pub fn load(path: &Path) -> Result<Self, MadlibError> {
        debug!(path = %path.display(), "PositionalTemplate::load: called");
        let raw = fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => MadlibError::TemplateNotFound {
                path: path.to_path_buf(),
            },
            _ => MadlibError::TemplateRead {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let template = Self::parse(&raw)?;
        info!(path = %path.display(), slots = template.slot_count(), "Loaded template");
        Ok(template)
    }

    /// Placeholder labels in order of appearance, duplicates included
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn slot_count(&self) -> usize {
        self.labels.len()
    }

    /// Fill every slot in order
    ///
    /// Words beyond the slot count are ignored. Fewer words than slots is an
    /// error.
    pub fn fill<S: AsRef<str>>(&self, words: &[S]) -> Result<String, MadlibError> {
        debug!(slots = self.slot_count(), words = words.len(), "PositionalTemplate::fill: called");
        if words.len() < self.slot_count() {
            return Err(MadlibError::MissingWords {
                expected: self.slot_count(),
                actual: words.len(),
            });
        }

        let mut story = String::new();
        for (literal, word) in self.literals.iter().zip(&words[..self.slot_count()]) {
            story.push_str(literal);
            story.push_str(word.as_ref());
        }
        if let Some(tail) = self.literals.last() {
            story.push_str(tail);
        }
        Ok(story)
    }
}

impl fmt::Display for PositionalTemplate {
    /// Renders each slot as `{}`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.literals.join("{}"))
    }
}
