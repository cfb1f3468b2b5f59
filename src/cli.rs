//! CLI module - Command-line interface definition and handler

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// dirpeek - print the size and first bytes of every file in a directory.
#[derive(Parser, Debug)]
#[command(name = "dirpeek")]
#[command(
    author,
    version,
    about,
    long_about = r#"dirpeek lists the regular files directly inside DIR and prints two lines
for each one:

    <name>: <size> bytes
    Content start: <first 100 bytes>

The content is read as raw bytes and shown as a bytes literal, with
non-printable bytes escaped (\xNN, \t, \n, \r). Sub-directories and special
files are skipped; there is no recursion. Files appear in the order the
filesystem lists them.

Examples:
    dirpeek
    dirpeek app/src/main/assets
    DIRPEEK_LOG=debug dirpeek /tmp
"#
)]
pub struct Cli {
    /// Directory to inspect.
    #[arg(
        value_name = "DIR",
        default_value = ".",
        long_help = "Directory to inspect (defaults to the current directory).\n\n\
Only entries directly inside DIR are examined. The command fails if DIR does\n\
not exist, is not a directory, or cannot be listed."
    )]
    pub dir: PathBuf,

    /// Verbose mode (debug logging on stderr).
    #[arg(
        short,
        long,
        long_help = "Enable debug logging on stderr, including skipped entries.\n\n\
The DIRPEEK_LOG environment variable, when set, overrides this with a\n\
tracing filter directive (e.g. DIRPEEK_LOG=trace)."
    )]
    pub verbose: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    crate::backends::inspect::run_inspect(&cli.dir)
}
