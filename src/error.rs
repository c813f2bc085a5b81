//! Errors reported by the command-line front end.
//!
//! Conversion itself never fails; every variant here comes from argument
//! parsing or file I/O.

use std::io;
use std::path::PathBuf;

/// Command-line error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Wrong arguments. Displays clap's message and usage text.
    #[error("{0}")]
    Usage(#[from] clap::Error),

    /// Input path is not a regular file.
    #[error("Missing {}", path.display())]
    MissingInputFile { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl Error {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) => 2,
            Self::MissingInputFile { .. } | Self::Read { .. } | Self::Write { .. } => 1,
        }
    }
}
