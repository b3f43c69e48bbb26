//! orrery CLI - deterministic solar-system orrery.

use std::process::ExitCode;

use orrery::cli::{self, Args};

fn main() -> ExitCode {
    let args = Args::parse();
    match cli::execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
