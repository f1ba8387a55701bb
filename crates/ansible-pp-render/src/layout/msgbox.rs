//! A framed box of text lines, used for the statistics summary.

use std::io;

use super::boxes::BoxStyle;
use crate::measure::Measure;
use crate::sink::LineWriter;
use crate::text::pad_right;

/// Writes `lines` inside a border, one space of padding on each side.
///
/// # Example
///
/// ```rust
/// use ansible_pp_render::{BoxStyle, Eol, LineWriter, Measure, MsgBox};
///
/// let mut out = LineWriter::new(Vec::new(), Eol::Lf);
/// MsgBox::new(BoxStyle::Ascii, Measure::Chars)
///     .write(&mut out, &["ok", "done"])
///     .unwrap();
///
/// assert_eq!(
///     String::from_utf8(out.into_inner()).unwrap(),
///     "+------+\n| ok   |\n| done |\n+------+\n"
/// );
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MsgBox {
    style: BoxStyle,
    measure: Measure,
}

impl MsgBox {
    const PADDING: usize = 1;

    pub fn new(style: BoxStyle, measure: Measure) -> Self {
        MsgBox { style, measure }
    }

    pub fn write<W, S>(&self, out: &mut LineWriter<W>, lines: &[S]) -> io::Result<()>
    where
        W: io::Write,
        S: AsRef<str>,
    {
        let c = self.style.chars();
        let width = lines
            .iter()
            .map(|l| self.measure.width(l.as_ref()))
            .max()
            .unwrap_or(0);
        let rule = c.rule(width + Self::PADDING * 2);
        let pad = " ".repeat(Self::PADDING);

        out.write_line(&format!("{}{rule}{}", c.top_left, c.top_right))?;
        for line in lines {
            let body = pad_right(line.as_ref(), width, self.measure);
            out.write_line(&format!("{v}{pad}{body}{pad}{v}", v = c.vertical))?;
        }
        out.write_line(&format!("{}{rule}{}", c.bottom_left, c.bottom_right))
    }
}
