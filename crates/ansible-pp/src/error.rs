//! Error types for input acquisition.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while opening the listing to read.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The input file couldn't be opened.
    #[error("failed to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl InputError {
    pub fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }
}
