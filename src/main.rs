//! pagedate - best-effort dates for static content pipelines

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = pagedate::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
