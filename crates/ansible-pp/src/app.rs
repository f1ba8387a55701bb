//! The `ansible-pp` run: read, parse, print.

use std::io::Write;

use ansible_pp_render::{parse_reader, LineWriter};
use anyhow::Context;
use clap::CommandFactory;

use crate::cli::Cli;
use crate::config::Config;
use crate::env::{RealStdin, RealTerminal, StdinReader, TerminalSize};

/// Runs `ansible-pp` against the real stdin and terminal.
///
/// The report goes to `out`; usage and warnings go to `err`.
pub fn run<W: Write, E: Write>(cli: &Cli, out: &mut W, err: &mut E) -> anyhow::Result<()> {
    run_with(cli, &RealStdin, &RealTerminal, out, err)
}

/// Runs `ansible-pp` with injected stdin and terminal.
///
/// With no input selected, usage is written to `err` and the run succeeds.
/// A listing that fails to parse, or a width too narrow for the chop marker,
/// produces no output at all.
pub fn run_with<W: Write, E: Write>(
    cli: &Cli,
    stdin: &dyn StdinReader,
    terminal: &dyn TerminalSize,
    out: &mut W,
    err: &mut E,
) -> anyhow::Result<()> {
    let config = Config::from_cli(cli, terminal, err).context("failed to write to stderr")?;

    let Some(reader) = config.input.open(stdin)? else {
        Cli::command()
            .write_help(err)
            .context("failed to write usage")?;
        return Ok(());
    };

    let parsed = parse_reader(reader, config.measure)
        .with_context(|| format!("failed to parse {}", config.input))?;

    let layout = config.layout();
    layout.check()?;

    let mut out = LineWriter::new(out, config.eol);
    if config.stats {
        config
            .msgbox()
            .write(&mut out, &parsed.stats.lines())
            .context("failed to write statistics")?;
    }
    layout.render(&mut out, &parsed)?;
    out.flush().context("failed to write output")?;
    Ok(())
}
