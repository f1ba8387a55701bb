//! Line-at-a-time output with a configurable line terminator.

use std::fmt;
use std::io;
use std::str::FromStr;

/// End-of-line marker written after every output line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Eol {
    #[default]
    Lf,
    CrLf,
}

impl Eol {
    pub fn as_str(self) -> &'static str {
        match self {
            Eol::Lf => "\n",
            Eol::CrLf => "\r\n",
        }
    }

    /// The name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Eol::Lf => "lf",
            Eol::CrLf => "crlf",
        }
    }
}

impl fmt::Display for Eol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown end-of-line name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown line ending `{0}` (expected lf or crlf)")]
pub struct UnknownEol(pub String);

impl FromStr for Eol {
    type Err = UnknownEol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lf" | "unix" => Ok(Eol::Lf),
            "crlf" | "dos" | "windows" => Ok(Eol::CrLf),
            _ => Err(UnknownEol(s.to_string())),
        }
    }
}

/// Writes whole lines to `W`, each followed by the configured [`Eol`].
#[derive(Debug)]
pub struct LineWriter<W> {
    inner: W,
    eol: Eol,
}

impl<W: io::Write> LineWriter<W> {
    pub fn new(inner: W, eol: Eol) -> Self {
        LineWriter { inner, eol }
    }

    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.inner.write_all(line.as_bytes())?;
        self.inner.write_all(self.eol.as_str().as_bytes())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
