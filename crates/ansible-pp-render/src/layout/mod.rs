//! Layout engines that turn a [`Parsed`] listing into output lines.
//!
//! | Layout | Tasks rendered as | Line width |
//! |--------|-------------------|------------|
//! | [`ColumnPrinter`] | `description    TAGS: tags`, aligned | chopped only when asked |
//! | [`TablePrinter`] | one bordered table per play | always chopped |
//!
//! Both write through a [`LineWriter`] and fail with [`RenderError`].

mod boxes;
mod column;
mod msgbox;
mod table;

use std::io;

use crate::error::RenderError;
use crate::parser::Parsed;
use crate::sink::LineWriter;
use crate::text::ChopError;

pub use boxes::{BoxChars, BoxStyle};
pub use column::{ColumnPrinter, COLUMN_SEPARATOR};
pub use msgbox::MsgBox;
pub use table::{TablePrinter, TableWidths};

/// Separator between a task's block and name.
pub const BLOCK_SEPARATOR: &str = ": ";
/// Indentation of play lines.
pub const PLAY_INDENT: usize = 2;
/// Indentation of task lines and tables.
pub const TASK_INDENT: usize = 6;

/// The layout selected for a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Layout {
    Columns(ColumnPrinter),
    Table(TablePrinter),
}

impl Default for Layout {
    fn default() -> Self {
        Layout::Columns(ColumnPrinter::default())
    }
}

impl Layout {
    /// Fails if the layout's width settings can't hold the chop marker.
    pub fn check(&self) -> Result<(), ChopError> {
        match self {
            Layout::Columns(printer) => printer.check(),
            Layout::Table(printer) => printer.check(),
        }
    }

    pub fn render<W: io::Write>(
        &self,
        out: &mut LineWriter<W>,
        parsed: &Parsed,
    ) -> Result<(), RenderError> {
        match self {
            Layout::Columns(printer) => printer.render(out, parsed),
            Layout::Table(printer) => printer.render(out, parsed),
        }
    }
}

impl From<ColumnPrinter> for Layout {
    fn from(printer: ColumnPrinter) -> Self {
        Layout::Columns(printer)
    }
}

impl From<TablePrinter> for Layout {
    fn from(printer: TablePrinter) -> Self {
        Layout::Table(printer)
    }
}
