//! Environment abstractions for testability.
//!
//! Stdin and the terminal are reached through these traits so tests can run
//! without a real terminal or piped input.

use std::io::{self, BufRead, IsTerminal};

/// Abstraction over standard input.
pub trait StdinReader {
    /// Returns `true` if stdin is interactive, `false` if piped.
    fn is_terminal(&self) -> bool;

    /// Locks stdin for line-by-line reading.
    ///
    /// The lock is released when the returned reader is dropped.
    fn lock(&self) -> Box<dyn BufRead + '_>;
}

/// Abstraction over the terminal the report is written to.
pub trait TerminalSize {
    /// Width in columns, or `None` if it can't be determined.
    fn width(&self) -> Option<usize>;
}

// === Real implementations ===

#[derive(Debug, Default, Clone, Copy)]
pub struct RealStdin;

impl StdinReader for RealStdin {
    fn is_terminal(&self) -> bool {
        io::stdin().is_terminal()
    }

    fn lock(&self) -> Box<dyn BufRead + '_> {
        Box::new(io::stdin().lock())
    }
}

/// Queries the size of the terminal attached to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealTerminal;

impl TerminalSize for RealTerminal {
    fn width(&self) -> Option<usize> {
        terminal_size::terminal_size().map(|(w, _)| w.0 as usize)
    }
}

// === Mock implementations for testing ===

/// Mock stdin reader for testing.
#[derive(Debug, Clone)]
pub struct MockStdin {
    is_terminal: bool,
    content: String,
}

impl MockStdin {
    /// A mock that simulates a terminal with nothing typed.
    pub fn terminal() -> Self {
        Self {
            is_terminal: true,
            content: String::new(),
        }
    }

    /// A mock that simulates piped input.
    pub fn piped(content: impl Into<String>) -> Self {
        Self {
            is_terminal: false,
            content: content.into(),
        }
    }
}

impl StdinReader for MockStdin {
    fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    fn lock(&self) -> Box<dyn BufRead + '_> {
        Box::new(self.content.as_bytes())
    }
}

/// Mock terminal with a fixed (or unknown) width.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockTerminal {
    width: Option<usize>,
}

impl MockTerminal {
    pub fn with_width(width: usize) -> Self {
        Self { width: Some(width) }
    }

    /// A terminal whose size can't be queried, e.g. output redirected to a file.
    pub fn unknown() -> Self {
        Self { width: None }
    }
}

impl TerminalSize for MockTerminal {
    fn width(&self) -> Option<usize> {
        self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_stdin_terminal() {
        let stdin = MockStdin::terminal();
        assert!(stdin.is_terminal());
        assert_eq!(stdin.lock().lines().count(), 0);
    }

    #[test]
    fn mock_stdin_piped() {
        let stdin = MockStdin::piped("one\ntwo\n");
        assert!(!stdin.is_terminal());
        let lines: Vec<String> = stdin.lock().lines().map(Result::unwrap).collect();
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn mock_terminal() {
        assert_eq!(MockTerminal::with_width(120).width(), Some(120));
        assert_eq!(MockTerminal::unknown().width(), None);
    }
}
