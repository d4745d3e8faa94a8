//! Parser module
//!
//! The journal and the price database are read line by line. Each line is classified as
//! blank, comment, transaction header, posting or price, and parsed with the pest grammar.
//!
//! Lines that do not parse are either skipped with a warning or turned into an error,
//! depending on the [`ParseMode`](crate::config::ParseMode).

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use log::warn;

use crate::config::ParseMode;
use crate::error::FileKind;
use crate::Error;

mod tokenizers;
mod utils;

#[derive(Parser)]
#[grammar = "grammar/grammar.pest"]
pub struct GrammarParser;

/// Characters that start a comment line
const COMMENT_CHARS: [char; 5] = [';', '#', '%', '|', '*'];

/// A struct for holding data about the string being parsed
#[derive(Debug, Clone)]
pub struct Tokenizer {
    file: Option<PathBuf>,
    content: String,
}

impl From<String> for Tokenizer {
    fn from(content: String) -> Self {
        Tokenizer {
            file: None,
            content,
        }
    }
}

impl Tokenizer {
    /// Reads the whole file, `kind` is only used to build the error
    pub fn from_file(file: &Path, kind: FileKind) -> Result<Self, Error> {
        match read_to_string(file) {
            Ok(content) => Ok(Tokenizer {
                file: Some(file.to_path_buf()),
                content,
            }),
            Err(err) => Err(Error::missing_file(kind, file, err)),
        }
    }

    fn name(&self) -> String {
        match &self.file {
            Some(file) => file.display().to_string(),
            None => "<input>".to_string(),
        }
    }

    /// Lines that are neither blank nor comments, with their one-based line number
    ///
    /// Trailing whitespace is removed, leading whitespace is kept because it tells postings
    /// apart from headers.
    fn lines(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.content
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim_end()))
            .filter(|(_, line)| !is_comment(line))
    }

    /// Deals with a line that could not be parsed
    fn reject(
        &self,
        mode: ParseMode,
        line: usize,
        content: &str,
        reason: String,
    ) -> Result<(), Error> {
        match mode {
            ParseMode::Strict => Err(Error::MalformedRecord {
                line,
                content: content.to_string(),
                reason,
            }),
            ParseMode::Lenient => {
                warn!(
                    "{}:{}: skipping malformed line ({}): {}",
                    self.name(),
                    line,
                    reason,
                    content.trim()
                );
                Ok(())
            }
        }
    }
}

/// Blank lines, `;` lines at any indentation and column-0 lines starting with a comment char
fn is_comment(line: &str) -> bool {
    let trimmed = line.trim_start();
    match trimmed.chars().next() {
        None | Some(';') => true,
        Some(c) => trimmed.len() == line.len() && COMMENT_CHARS.contains(&c),
    }
}
