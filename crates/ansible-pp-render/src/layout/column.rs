//! Two-column report: descriptions on the left, tags on the right.
//!
//! ```text
//! playbook: site.yml
//!
//!   play #1 (web): Deploy                TAGS: [deploy]
//!     tasks:
//!       common: Ping                     TAGS: [ping]
//!       Restart nginx                    TAGS: []
//! ```
//!
//! The first column is as wide as the widest play or task description recorded
//! in [`Stats`], so every `TAGS:` lines up regardless of input order.

use std::io;

use super::{BLOCK_SEPARATOR, PLAY_INDENT, TASK_INDENT};
use crate::error::RenderError;
use crate::measure::Measure;
use crate::model::{RowKind, Task};
use crate::parser::Parsed;
use crate::sink::LineWriter;
use crate::stats::Stats;
use crate::text::{check_mark, chop, pad_left, pad_right, ChopError, CHOP_MARK};

/// Gap between the description and tags columns.
pub const COLUMN_SEPARATOR: &str = "    ";

/// Renders a listing as an aligned two-column report.
///
/// # Example
///
/// ```rust
/// use ansible_pp_render::{parse_str, ColumnPrinter, Eol, LineWriter, Measure};
///
/// let parsed = parse_str("  play #1: Demo\tTAGS: [x]\n", Measure::Chars).unwrap();
/// let mut out = LineWriter::new(Vec::new(), Eol::Lf);
/// ColumnPrinter::new().render(&mut out, &parsed).unwrap();
///
/// assert_eq!(out.into_inner(), b"  play #1: Demo    TAGS: [x]\n");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnPrinter {
    measure: Measure,
    chop_lines: bool,
    indent_block: bool,
    max_width: usize,
}

impl ColumnPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the width measure used for padding and chopping.
    pub fn measure(mut self, measure: Measure) -> Self {
        self.measure = measure;
        self
    }

    /// Chop every line to [`max_width`](Self::max_width).
    pub fn chop_lines(mut self, chop_lines: bool) -> Self {
        self.chop_lines = chop_lines;
        self
    }

    /// Right-align block names so the `: ` separators line up.
    pub fn indent_block(mut self, indent_block: bool) -> Self {
        self.indent_block = indent_block;
        self
    }

    /// Line width used when chopping. Ignored unless chopping is enabled.
    pub fn max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width;
        self
    }

    /// Width of the first column for a listing with these statistics.
    pub fn column1_width(&self, stats: &Stats) -> usize {
        let play = PLAY_INDENT + stats.play_description.width;
        let task = if self.indent_block {
            TASK_INDENT
                + stats.task_block.width
                + self.measure.width(BLOCK_SEPARATOR)
                + stats.task_name.width
        } else {
            TASK_INDENT + stats.task_description.width
        };
        play.max(task)
    }

    /// Fails if chopping is on and the chop marker can't fit in `max_width`.
    pub fn check(&self) -> Result<(), ChopError> {
        if self.chop_lines {
            check_mark(CHOP_MARK, self.max_width, self.measure)?;
        }
        Ok(())
    }

    fn task_column1(&self, task: &Task, stats: &Stats) -> String {
        let indent = " ".repeat(TASK_INDENT);
        if self.indent_block {
            let block = pad_left(&task.block, stats.task_block.width, self.measure);
            format!("{indent}{block}{BLOCK_SEPARATOR}{}", task.name)
        } else {
            format!("{indent}{}", task.description())
        }
    }

    fn write_line<W: io::Write>(
        &self,
        out: &mut LineWriter<W>,
        col1: &str,
        col2: &str,
        col1_width: usize,
    ) -> Result<(), RenderError> {
        let line = format!(
            "{}{COLUMN_SEPARATOR}{col2}",
            pad_right(col1, col1_width, self.measure)
        );
        if self.chop_lines {
            out.write_line(&chop(&line, self.max_width, CHOP_MARK, self.measure)?)?;
        } else {
            out.write_line(&line)?;
        }
        Ok(())
    }

    pub fn render<W: io::Write>(
        &self,
        out: &mut LineWriter<W>,
        parsed: &Parsed,
    ) -> Result<(), RenderError> {
        self.check()?;
        let stats = &parsed.stats;
        let col1_width = self.column1_width(stats);
        tracing::debug!(
            col1_width,
            chop = self.chop_lines,
            indent_block = self.indent_block,
            "rendering columns"
        );

        for row in &parsed.rows {
            match &row.kind {
                RowKind::Play(play) => {
                    let col1 = format!("{}{}", " ".repeat(PLAY_INDENT), play.description());
                    let col2 = format!("TAGS: {}", play.tags);
                    self.write_line(out, &col1, &col2, col1_width)?;
                }
                RowKind::Tasks(group) => {
                    for task in &group.tasks {
                        let col1 = self.task_column1(task, stats);
                        let col2 = format!("TAGS: {}", task.tags);
                        self.write_line(out, &col1, &col2, col1_width)?;
                    }
                }
                RowKind::Passthru(line) => self.write_line(out, line, "", col1_width)?,
            }
        }
        Ok(())
    }
}
