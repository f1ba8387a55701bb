//! ansible-pp - pretty-print the output of `ansible-playbook --list-tasks`

use std::io::{self, BufWriter};
use std::process::ExitCode;

use ansible_pp::{logging, Cli};
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut out = BufWriter::new(io::stdout().lock());
    let mut err = io::stderr();

    if let Err(e) = ansible_pp::run(&cli, &mut out, &mut err) {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
