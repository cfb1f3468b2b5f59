//! dirpeek - Print the size and first bytes of every file in a directory
//!
//! For each regular file directly inside DIR, dirpeek prints:
//! - `<name>: <size> bytes`
//! - `Content start: <first 100 bytes as a bytes literal>`

use clap::Parser;
use colored::Colorize;
use std::io::IsTerminal;
use std::process::ExitCode;

mod backends;
mod cli;
mod core;
mod log;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    log::init_tracing(cli.verbose);

    if !std::io::stderr().is_terminal() {
        colored::control::set_override(false);
    }

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
