//! Resolving command-line flags into a run configuration.

use std::io::{self, Write};

use ansible_pp_render::{BoxStyle, ColumnPrinter, Eol, Layout, Measure, MsgBox, TablePrinter};

use crate::cli::Cli;
use crate::env::TerminalSize;
use crate::input::InputSource;

/// Line width used when none is given and the terminal can't be queried.
pub const DEFAULT_WIDTH: usize = 80;

/// Everything a run needs, with defaults and terminal detection applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub input: InputSource,
    pub measure: Measure,
    pub chop: bool,
    pub indent: bool,
    pub table: bool,
    pub box_style: BoxStyle,
    pub eol: Eol,
    pub stats: bool,
    pub width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: InputSource::None,
            measure: Measure::default(),
            chop: false,
            indent: false,
            table: false,
            box_style: BoxStyle::default(),
            eol: Eol::default(),
            stats: false,
            width: DEFAULT_WIDTH,
        }
    }
}

impl Config {
    /// Builds the configuration for `cli`.
    ///
    /// The line width is `--width` when given. Otherwise, if chopping or table
    /// output needs a width, the terminal is asked; when that fails a warning
    /// goes to `err` and [`DEFAULT_WIDTH`] is used.
    ///
    /// # Errors
    ///
    /// Only fails if writing the warning to `err` fails.
    pub fn from_cli<E: Write>(
        cli: &Cli,
        terminal: &dyn TerminalSize,
        err: &mut E,
    ) -> io::Result<Self> {
        let input = if cli.stdin {
            InputSource::Stdin
        } else if let Some(path) = &cli.file {
            InputSource::File(path.clone())
        } else {
            InputSource::None
        };

        let measure = if cli.mono {
            Measure::Monospace
        } else {
            cli.measure.unwrap_or_default()
        };

        let width = match cli.width {
            Some(width) => width,
            None if cli.chop || cli.table => match terminal.width() {
                Some(width) => width,
                None => {
                    tracing::debug!(fallback = DEFAULT_WIDTH, "terminal width unavailable");
                    writeln!(
                        err,
                        "warning: can't determine the terminal width, using {DEFAULT_WIDTH} columns"
                    )?;
                    writeln!(err, "         pass --width to set it, e.g. --width $(tput cols)")?;
                    DEFAULT_WIDTH
                }
            },
            None => DEFAULT_WIDTH,
        };

        let config = Config {
            input,
            measure,
            chop: cli.chop,
            indent: cli.indent,
            table: cli.table,
            box_style: if cli.dos { BoxStyle::Dos } else { BoxStyle::Ascii },
            eol: cli.eol,
            stats: cli.stats,
            width,
        };
        tracing::debug!(?config, "resolved configuration");
        Ok(config)
    }

    /// The layout selected by `--table`, configured from this run.
    pub fn layout(&self) -> Layout {
        if self.table {
            TablePrinter::new()
                .measure(self.measure)
                .max_width(self.width)
                .box_style(self.box_style)
                .into()
        } else {
            ColumnPrinter::new()
                .measure(self.measure)
                .chop_lines(self.chop)
                .indent_block(self.indent)
                .max_width(self.width)
                .into()
        }
    }

    /// The box the `--stats` summary is drawn in.
    pub fn msgbox(&self) -> MsgBox {
        MsgBox::new(self.box_style, self.measure)
    }
}
