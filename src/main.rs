//! CLI entry point for the ASCII art converter

use cage::io::cli::{Cli, Processor, init_logging};
use cage::io::configuration::FAILURE_EXIT_CODE;
use clap::Parser;
use std::process::ExitCode;

// Usage text and the error line on stderr are the program's user-facing
// failure report; stdout only ever carries a rendering
#[allow(clippy::print_stderr)]
fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help and version requests count as usage outcomes too
        Err(error) => {
            eprint!("{}", error.render());
            return ExitCode::from(FAILURE_EXIT_CODE);
        }
    };
    init_logging(cli.verbose);

    match Processor::new(cli).process() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::from(error.exit_code())
        }
    }
}
