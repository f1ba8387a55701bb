//! Prelude for convenient imports.
//!
//! Re-exports what a caller needs to parse a listing and print it:
//!
//! ```rust
//! use ansible_pp_render::prelude::*;
//!
//! let parsed = parse_str("  play #1: Demo\tTAGS: []\n", Measure::Chars)?;
//! let mut out = LineWriter::new(Vec::new(), Eol::Lf);
//! Layout::default().render(&mut out, &parsed)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use crate::layout::{BoxStyle, ColumnPrinter, Layout, MsgBox, TablePrinter};
pub use crate::measure::Measure;
pub use crate::parser::{parse_lines, parse_reader, parse_str, ParseError, Parsed};
pub use crate::sink::{Eol, LineWriter};
pub use crate::RenderError;
