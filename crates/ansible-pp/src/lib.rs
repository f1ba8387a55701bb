//! # ansible-pp - pretty-print Ansible task listings
//!
//! Library side of the `ansible-pp` command. It wires the command line to
//! [`ansible_pp_render`]: flags become a [`Config`], the selected input is
//! opened and parsed, and the chosen layout prints the report.
//!
//! ```rust
//! use ansible_pp::env::{MockStdin, MockTerminal};
//! use ansible_pp::{run_with, Cli};
//!
//! let cli = Cli { stdin: true, ..Cli::default() };
//! let stdin = MockStdin::piped("  play #1: Demo\tTAGS: [x]\n");
//!
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! run_with(&cli, &stdin, &MockTerminal::unknown(), &mut out, &mut err).unwrap();
//!
//! assert_eq!(String::from_utf8(out).unwrap(), "  play #1: Demo    TAGS: [x]\n");
//! ```

mod app;
mod cli;
mod config;
pub mod env;
mod error;
mod input;
pub mod logging;

pub use app::{run, run_with};
pub use cli::Cli;
pub use config::{Config, DEFAULT_WIDTH};
pub use error::InputError;
pub use input::InputSource;
