//! Error types returned by the compiler.

use std::fmt::{self, Display};
use std::io;
use thiserror::Error;

pub use crate::scanner::{ScanError, ScanErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    Read,
    Write,
}

impl Display for OpenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OpenMode::Read => "reading",
            OpenMode::Write => "writing",
        })
    }
}

/// A fatal error aborting a compile unit and every unit that includes it.
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Failed to open `{path}` for {mode}: {source}")]
    FileOpen {
        path: String,
        mode: OpenMode,
        #[source]
        source: io::Error,
    },
    #[error("`{0}` is not a regular file.")]
    NotAFile(String),
    #[error("Syntax error in `{path}`: {source}")]
    Syntax {
        path: String,
        #[source]
        source: ScanError,
    },
    #[error("Include cycle through `{path}`.")]
    Recursion { path: String },
    #[error("Failed to write `{path}`: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("`{path}` is not valid UTF-8.")]
    InvalidUtf8 { path: String },
}

impl CompileError {
    /// The scan error behind a syntax failure, if any.
    pub fn scan_error(&self) -> Option<&ScanError> {
        match self {
            CompileError::Syntax { source, .. } => Some(source),
            _ => None,
        }
    }
}
