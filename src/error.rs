use colored::Colorize;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Which of the two input files an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Journal,
    PriceDb,
}

impl Display for FileKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FileKind::Journal => write!(f, "Journal"),
            FileKind::PriceDb => write!(f, "Price database"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{kind} file could not be read: {} ({source})", highlight(.path))]
    MissingFile {
        kind: FileKind,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed record at line {line}: {reason}\n{content}")]
    MalformedRecord {
        line: usize,
        content: String,
        reason: String,
    },

    #[error("No command specified")]
    NoCommand,

    #[error("Unrecognized command: {}", .0.bold())]
    UnknownCommand(String),

    #[error("Unrecognized argument: {}", .0.bold())]
    UnrecognizedArgument(String),

    #[error("{0}")]
    InvalidOption(String),

    #[error("Invalid date {}", .0.bold().bright_red())]
    InvalidDate(String),

    #[error("Amount out of range for account {account}")]
    AmountOverflow { account: String },
}

impl Error {
    pub(crate) fn missing_file(kind: FileKind, path: &Path, source: io::Error) -> Self {
        Error::MissingFile {
            kind,
            path: path.to_path_buf(),
            source,
        }
    }
}

fn highlight(path: &Path) -> String {
    format!("{}", path.display().to_string().red().bold())
}
