//! Bordered table layout.
//!
//! Each play's task group becomes a three-column table (Block, Name, Tags);
//! play headers and pass-through lines are printed between the tables.
//!
//! ```text
//!   play #1 (web): Deploy    TAGS: [deploy]
//!     tasks:
//!       +--------+---------------+----------+
//!       | Block  | Name          | Tags     |
//!       +--------+---------------+----------+
//!       | common | Ping          | [ping]   |
//!       |        | Restart nginx | []       |
//!       +--------+---------------+----------+
//! ```
//!
//! Column widths come from [`Stats`]. When the table is wider than the line
//! width, Tags shrinks first, then Name, then Block, none below the width of
//! its header label. A table that still doesn't fit is cut by the per-line
//! chop every emitted line goes through.

use std::io;

use super::boxes::{BoxChars, BoxStyle};
use super::{PLAY_INDENT, TASK_INDENT};
use crate::error::RenderError;
use crate::measure::Measure;
use crate::model::{RowKind, Task, TaskGroup};
use crate::parser::Parsed;
use crate::sink::LineWriter;
use crate::stats::Stats;
use crate::text::{check_mark, chop, pad_left, pad_right, ChopError, CHOP_MARK};

const BLOCK_LABEL: &str = "Block";
const NAME_LABEL: &str = "Name";
const TAGS_LABEL: &str = "Tags";

/// Content widths of the three table columns, excluding padding and borders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TableWidths {
    pub block: usize,
    pub name: usize,
    pub tags: usize,
}

impl TableWidths {
    pub fn new(block: usize, name: usize, tags: usize) -> Self {
        TableWidths { block, name, tags }
    }

    /// The narrowest widths a column may shrink to: its header label.
    pub fn floors(measure: Measure) -> Self {
        TableWidths {
            block: measure.width(BLOCK_LABEL),
            name: measure.width(NAME_LABEL),
            tags: measure.width(TAGS_LABEL),
        }
    }
}

/// Shrinks `width` by up to `excess` without going below `floor`.
///
/// Returns the new width and the excess still to be absorbed elsewhere.
fn shrink(excess: usize, width: usize, floor: usize) -> (usize, usize) {
    let fitted = width.saturating_sub(excess).max(floor);
    (fitted, excess - (width - fitted))
}

struct Borders {
    top: String,
    middle: String,
    bottom: String,
}

/// Renders a listing with every task group drawn as a table.
///
/// # Example
///
/// ```rust
/// use ansible_pp_render::{parse_str, Eol, LineWriter, Measure, TablePrinter};
///
/// let parsed = parse_str("    tasks:\n      Ping\tTAGS: []\n", Measure::Chars).unwrap();
/// let mut out = LineWriter::new(Vec::new(), Eol::Lf);
/// TablePrinter::new().max_width(80).render(&mut out, &parsed).unwrap();
///
/// let text = String::from_utf8(out.into_inner()).unwrap();
/// assert_eq!(text.lines().nth(2), Some("      | Block | Name | Tags |"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TablePrinter {
    measure: Measure,
    max_width: usize,
    style: BoxStyle,
}

impl TablePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the width measure used for fitting, padding and chopping.
    pub fn measure(mut self, measure: Measure) -> Self {
        self.measure = measure;
        self
    }

    /// Set the line width every emitted line is chopped to.
    pub fn max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width;
        self
    }

    /// Set the box-drawing characters.
    pub fn box_style(mut self, style: BoxStyle) -> Self {
        self.style = style;
        self
    }

    fn borders(&self, widths: &TableWidths) -> Borders {
        let c = self.style.chars();
        let pad = " ".repeat(TASK_INDENT);
        let block = c.rule(widths.block + 2);
        let name = c.rule(widths.name + 2);
        let tags = c.rule(widths.tags + 2);

        let line = |left: char, tee: char, right: char| {
            format!("{pad}{left}{block}{tee}{name}{tee}{tags}{right}")
        };

        Borders {
            top: line(c.top_left, c.top_t, c.top_right),
            middle: line(c.left_t, c.cross, c.right_t),
            bottom: line(c.bottom_left, c.bottom_t, c.bottom_right),
        }
    }

    fn cells(chars: &BoxChars, block: &str, name: &str, tags: &str) -> String {
        let pad = " ".repeat(TASK_INDENT);
        let v = chars.vertical;
        format!("{pad}{v} {block} {v} {name} {v} {tags} {v}")
    }

    /// Column widths for a listing with these statistics.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ansible_pp_render::{Stats, TablePrinter, TableWidths};
    ///
    /// let widths = TablePrinter::new().max_width(80).fit(&Stats::default());
    /// assert_eq!(widths, TableWidths::new(5, 4, 4));
    /// ```
    pub fn fit(&self, stats: &Stats) -> TableWidths {
        let floors = TableWidths::floors(self.measure);
        let mut widths = TableWidths {
            block: stats.task_block.width.max(floors.block),
            name: stats.task_name.width.max(floors.name),
            tags: stats.task_tags.width.max(floors.tags),
        };

        let line_width = self.measure.width(&self.borders(&widths).top);
        if line_width <= self.max_width {
            return widths;
        }

        let excess = line_width - self.max_width;
        let (tags, excess) = shrink(excess, widths.tags, floors.tags);
        let (name, excess) = shrink(excess, widths.name, floors.name);
        let (block, excess) = shrink(excess, widths.block, floors.block);
        widths = TableWidths { block, name, tags };

        if excess > 0 {
            tracing::debug!(excess, ?widths, "table wider than line width at minimum widths");
        }
        widths
    }

    /// Fails if the chop marker can't fit in `max_width`.
    ///
    /// Column widths never drop below the header floors, which always hold a
    /// marker, so only the line width needs checking.
    pub fn check(&self) -> Result<(), ChopError> {
        check_mark(CHOP_MARK, self.max_width, self.measure)?;
        Ok(())
    }

    fn write_line<W: io::Write>(
        &self,
        out: &mut LineWriter<W>,
        line: &str,
    ) -> Result<(), RenderError> {
        out.write_line(&chop(line, self.max_width, CHOP_MARK, self.measure)?)?;
        Ok(())
    }

    fn task_cells(
        &self,
        chars: &BoxChars,
        task: &Task,
        widths: &TableWidths,
    ) -> Result<String, RenderError> {
        let m = self.measure;
        let block = pad_left(&chop(&task.block, widths.block, CHOP_MARK, m)?, widths.block, m);
        let name = pad_right(&chop(&task.name, widths.name, CHOP_MARK, m)?, widths.name, m);
        let tags = pad_right(&chop(&task.tags, widths.tags, CHOP_MARK, m)?, widths.tags, m);
        Ok(Self::cells(chars, &block, &name, &tags))
    }

    fn render_group<W: io::Write>(
        &self,
        out: &mut LineWriter<W>,
        group: &TaskGroup,
        widths: &TableWidths,
    ) -> Result<(), RenderError> {
        let chars = self.style.chars();
        let borders = self.borders(widths);
        let m = self.measure;

        self.write_line(out, &borders.top)?;
        self.write_line(
            out,
            &Self::cells(
                &chars,
                &pad_right(BLOCK_LABEL, widths.block, m),
                &pad_right(NAME_LABEL, widths.name, m),
                &pad_right(TAGS_LABEL, widths.tags, m),
            ),
        )?;
        self.write_line(out, &borders.middle)?;
        for task in &group.tasks {
            self.write_line(out, &self.task_cells(&chars, task, widths)?)?;
        }
        self.write_line(out, &borders.bottom)
    }

    pub fn render<W: io::Write>(
        &self,
        out: &mut LineWriter<W>,
        parsed: &Parsed,
    ) -> Result<(), RenderError> {
        self.check()?;
        let widths = self.fit(&parsed.stats);
        tracing::debug!(?widths, max_width = self.max_width, style = %self.style, "rendering table");

        for row in &parsed.rows {
            match &row.kind {
                RowKind::Play(play) => {
                    let line = format!(
                        "{}{}    TAGS: {}",
                        " ".repeat(PLAY_INDENT),
                        play.description(),
                        play.tags
                    );
                    self.write_line(out, &line)?;
                }
                RowKind::Tasks(group) => self.render_group(out, group, &widths)?,
                RowKind::Passthru(line) => self.write_line(out, line)?,
            }
        }
        Ok(())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::stats::Longest;
    use proptest::prelude::*;

    fn stats(block: usize, name: usize, tags: usize) -> Stats {
        Stats {
            task_block: Longest::new("", block),
            task_name: Longest::new("", name),
            task_tags: Longest::new("", tags),
            ..Stats::default()
        }
    }

    proptest! {
        #[test]
        fn fit_never_goes_below_floors(
            block in 0usize..60,
            name in 0usize..60,
            tags in 0usize..60,
            max_width in 0usize..160,
        ) {
            let widths = TablePrinter::new().max_width(max_width).fit(&stats(block, name, tags));
            prop_assert!(widths.block >= 5);
            prop_assert!(widths.name >= 4);
            prop_assert!(widths.tags >= 4);
        }

        #[test]
        fn fit_stays_within_width_when_floors_fit(
            block in 0usize..60,
            name in 0usize..60,
            tags in 0usize..60,
            max_width in 29usize..160,
        ) {
            let printer = TablePrinter::new().max_width(max_width);
            let widths = printer.fit(&stats(block, name, tags));
            let top = printer.borders(&widths).top;
            prop_assert!(Measure::Chars.width(&top) <= max_width);
        }

        #[test]
        fn fit_keeps_natural_widths_when_they_fit(
            block in 5usize..20,
            name in 4usize..20,
            tags in 4usize..20,
        ) {
            // 6 indent + 4 borders + 6 padding
            let natural = 16 + block + name + tags;
            let widths = TablePrinter::new().max_width(natural).fit(&stats(block, name, tags));
            prop_assert_eq!(widths, TableWidths::new(block, name, tags));
        }
    }
}
