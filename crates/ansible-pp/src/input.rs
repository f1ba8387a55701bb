//! Selecting and opening the listing to read.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use crate::env::StdinReader;
use crate::InputError;

/// Where the listing comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum InputSource {
    /// Nothing to read; the caller prints usage instead.
    #[default]
    None,
    Stdin,
    File(PathBuf),
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::None => f.write_str("<none>"),
            InputSource::Stdin => f.write_str("<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl InputSource {
    /// Opens the source for reading.
    ///
    /// Returns `Ok(None)` for [`InputSource::None`]. The returned reader owns
    /// the file handle or stdin lock and releases it when dropped.
    pub fn open<'a>(
        &self,
        stdin: &'a dyn StdinReader,
    ) -> Result<Option<Box<dyn BufRead + 'a>>, InputError> {
        match self {
            InputSource::None => Ok(None),
            InputSource::Stdin => {
                if stdin.is_terminal() {
                    tracing::debug!("reading listing from an interactive terminal");
                }
                Ok(Some(stdin.lock()))
            }
            InputSource::File(path) => {
                let file = File::open(path).map_err(|e| InputError::open(path, e))?;
                tracing::debug!(path = %path.display(), "reading listing from file");
                Ok(Some(Box::new(BufReader::new(file))))
            }
        }
    }
}
