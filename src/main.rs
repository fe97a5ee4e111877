//! Cart Rules CLI

use std::{io, process::ExitCode};

use clap::Parser;

use cart_rules::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.run(io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            #[expect(
                clippy::print_stderr,
                reason = "errors are reported to the user, not only to the log subscriber"
            )]
            {
                eprintln!("error: {err}");
            }

            ExitCode::FAILURE
        }
    }
}
