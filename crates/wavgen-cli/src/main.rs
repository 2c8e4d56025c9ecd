//! wavgen CLI - Command-line interface for test waveform generation
//!
//! This binary writes deterministic test signals as RIFF/WAVE files, or as a
//! WAV stream on stdout when piped into another program.

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use wavgen_cli::cli_args::Cli;
use wavgen_cli::{commands, logging};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // Bad arguments are configuration errors; --help and --version are not.
            return if e.use_stderr() {
                ExitCode::from(commands::generate::EXIT_CONFIG_ERROR)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let stdout_is_terminal = std::io::stdout().is_terminal();
    let piping = cli.filename.is_none() && !stdout_is_terminal && cli.describe.is_none();
    logging::init(cli.verbose, piping);

    let result = match cli.describe.as_deref() {
        Some(name) => commands::describe::run(name),
        None => commands::generate::run(&cli, stdout_is_terminal),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
