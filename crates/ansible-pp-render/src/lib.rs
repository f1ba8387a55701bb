//! # ansible-pp-render - parse and lay out Ansible task listings
//!
//! `ansible-pp-render` turns the human-readable output of
//! `ansible-playbook --list-tasks` into a row model, then prints it back as an
//! aligned two-column report or as bordered tables, optionally chopped to a
//! line width.
//!
//! This crate is the engine behind the `ansible-pp` command, but can be used
//! on its own by anything that already has the listing text.
//!
//! ## Core Concepts
//!
//! - [`Measure`]: how string widths are computed (bytes, chars, terminal cells)
//! - [`parse_str`] / [`parse_reader`] / [`parse_lines`]: build a [`Parsed`] listing
//! - [`Row`] / [`RowKind`]: pass-through lines, plays, and task groups
//! - [`Stats`]: widest values per field, used to size columns
//! - [`Layout`]: a [`ColumnPrinter`] or a [`TablePrinter`]
//! - [`LineWriter`]: line output with a chosen [`Eol`]
//!
//! ## Quick Start
//!
//! ```rust
//! use ansible_pp_render::{parse_str, Eol, Layout, LineWriter, Measure, TablePrinter};
//!
//! let listing = "\
//! playbook: site.yml
//!
//!   play #1 (web): Deploy\tTAGS: [deploy]
//!     tasks:
//!       common : Ping\tTAGS: [ping]
//! ";
//!
//! let parsed = parse_str(listing, Measure::Chars).unwrap();
//! let layout = Layout::from(TablePrinter::new().max_width(80));
//!
//! let mut out = LineWriter::new(Vec::new(), Eol::Lf);
//! layout.render(&mut out, &parsed).unwrap();
//!
//! let text = String::from_utf8(out.into_inner()).unwrap();
//! assert!(text.contains("| common | Ping | [ping] |"));
//! ```
//!
//! ## Chopping
//!
//! Long lines can be cut to a width, with `▒` marking the cut:
//!
//! ```rust
//! use ansible_pp_render::{chop, Measure, CHOP_MARK};
//!
//! let line = chop("  play #1 (web): Deploy", 10, CHOP_MARK, Measure::Chars).unwrap();
//! assert_eq!(line, "  play #1▒");
//! ```

mod error;
pub mod layout;
pub mod measure;
pub mod model;
pub mod parser;
pub mod prelude;
pub mod sink;
pub mod stats;
pub mod text;

// Error type
pub use error::RenderError;

// Width and text primitives
pub use measure::{Measure, UnknownMeasure};
pub use text::{check_mark, chop, pad_left, pad_right, ChopError, CHOP_MARK};

// Line model and parsing
pub use model::{Play, Row, RowKind, Task, TaskGroup};
pub use parser::{parse_lines, parse_reader, parse_str, ParseError, Parsed};
pub use stats::{Longest, Stats};

// Layouts and output
pub use layout::{
    BoxChars, BoxStyle, ColumnPrinter, Layout, MsgBox, TablePrinter, TableWidths,
};
pub use sink::{Eol, LineWriter, UnknownEol};
