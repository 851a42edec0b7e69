//! Clubroll - Local-first club administration

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = clubroll::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
