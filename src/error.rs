use crate::config::EmitterConfigBuilderError;
use std::io;
use thiserror::Error;

/// Error definition for possible errors in this crate
#[derive(Debug, Error)]
pub enum Error {
    /// Represents a failed write to the output
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Returned when a cycle with this threshold would overflow i32
    #[error("Threshold {threshold} overflows the sequence")]
    Overflow { threshold: i32 },
    /// Returned when the config builder fails
    #[error("Config error: {0}")]
    Config(#[from] EmitterConfigBuilderError),
}

impl Error {
    /// True when the reader on the other side of the output went away
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

/// Alias for Result<T, fibcycle::Error>
pub type Result<T> = std::result::Result<T, Error>;
