use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Default {key:?} = {value:?} cannot be written back as an ini line")]
    InvalidDefault { key: String, value: String },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("Regex compilation error: {0}")]
    RegexCompilationError(#[from] regex::Error),
    #[error("The group {0} was not found in the provided regex")]
    RegexCaptureGroupNotFound(&'static str),
}

/// Grammar violations. Only raised when strict mode is enabled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: entry appears before any section header: {text}")]
    EntryOutsideSection { line: usize, text: String },
    #[error("line {line}: expected a section header or key = value: {text}")]
    MalformedLine { line: usize, text: String },
    #[error("line {line}: section name cannot be empty: {text}")]
    EmptySectionName { line: usize, text: String },
}

impl ParseError {
    /// 1-based line number of the offending line.
    pub fn line(&self) -> usize {
        match self {
            Self::EntryOutsideSection { line, .. } | Self::MalformedLine { line, .. } | Self::EmptySectionName { line, .. } => {
                *line
            }
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::EntryOutsideSection { text, .. } | Self::MalformedLine { text, .. } | Self::EmptySectionName { text, .. } => {
                text
            }
        }
    }
}
