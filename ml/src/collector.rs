//! Word collection
//!
//! [`Collector`] is the prompt loop's state machine: a cursor into the label
//! sequence plus the words entered so far. [`collect`] drives it with a
//! [`LineReader`], which is either a `rustyline` editor for interactive use or
//! any `BufRead` for piped input and tests.

use std::io::{BufRead, Write};

use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{debug, info};

use crate::error::MadlibError;

/// Recorded in place of empty input
pub const BLANK_WORD: &str = "blank";

/// Removes the previous word, once at least one word exists
pub const UNDO_COMMAND: &str = "undo";

/// Source of input lines
pub trait LineReader {
    /// Show `prompt` and read one line, without its line terminator
    fn read_line(&mut self, prompt: &str) -> Result<String, MadlibError>;
}

/// Interactive reader backed by a `rustyline` editor
pub struct EditorReader {
    editor: DefaultEditor,
}

impl EditorReader {
    pub fn new() -> Result<Self, MadlibError> {
        let editor = DefaultEditor::new().map_err(|e| MadlibError::Readline(e.to_string()))?;
        Ok(Self { editor })
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> Result<String, MadlibError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(line)
            }
            Err(ReadlineError::Interrupted) => Err(MadlibError::Interrupted),
            Err(ReadlineError::Eof) => Err(MadlibError::InputClosed),
            Err(err) => Err(MadlibError::Readline(err.to_string())),
        }
    }
}

/// Plain reader that writes prompts to `output` and reads lines from `input`
pub struct BufReadReader<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> BufReadReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> LineReader for BufReadReader<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String, MadlibError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(MadlibError::InputClosed);
        }
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(line)
    }
}

/// Result of submitting one line to the collector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A word was stored for `label`
    Recorded { label: String, word: String },
    /// The previous word was dropped and its label will be asked again
    Undone { label: String, word: String },
}

/// Prompt-loop state: the label cursor and the words entered so far
#[derive(Debug, Clone)]
pub struct Collector {
    labels: Vec<String>,
    cursor: usize,
    words: Vec<String>,
}

impl Collector {
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            labels,
            cursor: 0,
            words: Vec::new(),
        }
    }

    /// Label of the word being asked for, or `None` once every label is filled
    pub fn current_label(&self) -> Option<&str> {
        self.labels.get(self.cursor).map(String::as_str)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.labels.len()
    }

    /// Apply one line of input
    ///
    /// Returns `None` when the collector is already complete.
    pub fn submit(&mut self, line: &str) -> Option<Step> {
        let label = self.current_label()?.to_string();
        let trimmed = line.trim();

        // "undo" only counts as a command when there is something to undo
        if trimmed.eq_ignore_ascii_case(UNDO_COMMAND)
            && let Some(word) = self.words.pop()
        {
            self.cursor = self.cursor.saturating_sub(1);
            let label = self.labels[self.cursor].clone();
            debug!(cursor = self.cursor, %label, "Collector::submit: undone");
            return Some(Step::Undone { label, word });
        }

        let word = if trimmed.is_empty() {
            BLANK_WORD.to_string()
        } else {
            line.to_string()
        };
        self.words.push(word.clone());
        self.cursor += 1;
        debug!(cursor = self.cursor, %label, "Collector::submit: recorded");
        Some(Step::Recorded { label, word })
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

/// Text shown when asking for a word of type `label`
pub fn prompt_for(label: &str) -> String {
    format!("Enter a {}: ", label)
}

/// Ask for one word per label, honoring undo, and return the words in order
pub fn collect<R, W>(labels: &[String], reader: &mut R, out: &mut W) -> Result<Vec<String>, MadlibError>
where
    R: LineReader,
    W: Write,
{
    debug!(count = labels.len(), "collect: called");
    let mut collector = Collector::new(labels.to_vec());

    while let Some(label) = collector.current_label() {
        let prompt = prompt_for(label);

        if !collector.words().is_empty() {
            writeln!(out)?;
            writeln!(
                out,
                "{} {}",
                "Words you have entered so far:".bright_cyan(),
                collector.words().join(", ")
            )?;
            writeln!(out, "Type '{}' to change your last input.", UNDO_COMMAND)?;
            out.flush()?;
        }

        let line = reader.read_line(&prompt)?;
        if let Some(Step::Undone { label, word }) = collector.submit(&line) {
            debug!(%label, %word, "collect: asking again after undo");
        }
    }

    info!(count = collector.words().len(), "Collected all words");
    Ok(collector.into_words())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn scripted(lines: &str) -> BufReadReader<Cursor<Vec<u8>>, Vec<u8>> {
        BufReadReader::new(Cursor::new(lines.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_collector_records_in_order() {
        let mut collector = Collector::new(labels(&["adjective", "noun"]));
        assert_eq!(collector.current_label(), Some("adjective"));

        let step = collector.submit("lazy");
        assert_eq!(
            step,
            Some(Step::Recorded {
                label: "adjective".to_string(),
                word: "lazy".to_string()
            })
        );
        collector.submit("fox");

        assert!(collector.is_complete());
        assert_eq!(collector.current_label(), None);
        assert_eq!(collector.into_words(), vec!["lazy", "fox"]);
    }

    #[test]
    fn test_collector_blank_input() {
        let mut collector = Collector::new(labels(&["name", "place"]));
        collector.submit("");
        collector.submit("   \t");

        assert_eq!(collector.words(), &["blank", "blank"]);
    }

    #[test]
    fn test_collector_keeps_surrounding_whitespace() {
        let mut collector = Collector::new(labels(&["noun"]));
        collector.submit("  a cat ");
        assert_eq!(collector.words(), &["  a cat "]);
    }

    #[test]
    fn test_collector_undo_removes_last_word() {
        let mut collector = Collector::new(labels(&["a", "b", "c"]));
        collector.submit("one");
        collector.submit("two");
        assert_eq!(collector.cursor(), 2);

        let step = collector.submit("undo");
        assert_eq!(
            step,
            Some(Step::Undone {
                label: "b".to_string(),
                word: "two".to_string()
            })
        );
        assert_eq!(collector.cursor(), 1);
        assert_eq!(collector.words(), &["one"]);
        assert_eq!(collector.current_label(), Some("b"));
    }

    #[test]
    fn test_collector_undo_is_case_insensitive_and_trimmed() {
        let mut collector = Collector::new(labels(&["a", "b"]));
        collector.submit("one");
        collector.submit("  UnDo  ");

        assert_eq!(collector.cursor(), 0);
        assert!(collector.words().is_empty());
    }

    #[test]
    fn test_collector_first_undo_is_a_word() {
        let mut collector = Collector::new(labels(&["verb", "noun"]));
        let step = collector.submit("undo");

        assert!(matches!(step, Some(Step::Recorded { .. })));
        assert_eq!(collector.words(), &["undo"]);
        assert_eq!(collector.cursor(), 1);
    }

    #[test]
    fn test_collector_undo_back_to_start_then_literal() {
        let mut collector = Collector::new(labels(&["a", "b"]));
        collector.submit("one");
        collector.submit("undo");
        assert_eq!(collector.cursor(), 0);

        // Nothing left to undo, so this one is kept as a word
        collector.submit("undo");
        assert_eq!(collector.words(), &["undo"]);
        assert_eq!(collector.cursor(), 1);
    }

    #[test]
    fn test_collector_submit_after_complete() {
        let mut collector = Collector::new(labels(&["a"]));
        collector.submit("x");
        assert_eq!(collector.submit("y"), None);
        assert_eq!(collector.words(), &["x"]);
    }

    #[test]
    fn test_collector_no_labels() {
        let collector = Collector::new(Vec::new());
        assert!(collector.is_complete());
    }

    #[test]
    fn test_collect_with_undo() {
        let mut reader = scripted("lazy\nfox\nundo\ncat\nfence\n");
        let mut out = Vec::new();

        let words = collect(&labels(&["adjective", "noun", "noun"]), &mut reader, &mut out).unwrap();
        assert_eq!(words, vec!["lazy", "cat", "fence"]);

        let prompts = String::from_utf8(reader.output).unwrap();
        assert_eq!(prompts.matches("Enter a noun: ").count(), 4);
        assert_eq!(prompts.matches("Enter a adjective: ").count(), 1);

        let progress = String::from_utf8(out).unwrap();
        assert!(progress.contains("lazy, fox"));
        assert!(progress.contains("Type 'undo' to change your last input."));
    }

    #[test]
    fn test_collect_no_progress_before_first_word() {
        let mut reader = scripted("Ann\n");
        let mut out = Vec::new();

        let words = collect(&labels(&["name"]), &mut reader, &mut out).unwrap();
        assert_eq!(words, vec!["Ann"]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_collect_strips_crlf() {
        let mut reader = scripted("red\r\n\r\n");
        let mut out = Vec::new();

        let words = collect(&labels(&["color", "thing"]), &mut reader, &mut out).unwrap();
        assert_eq!(words, vec!["red", "blank"]);
    }

    #[test]
    fn test_collect_input_closed() {
        let mut reader = scripted("one\n");
        let mut out = Vec::new();

        let err = collect(&labels(&["a", "b"]), &mut reader, &mut out).unwrap_err();
        assert!(matches!(err, MadlibError::InputClosed));
    }

    #[test]
    fn test_prompt_for() {
        assert_eq!(prompt_for("noun"), "Enter a noun: ");
    }
}
