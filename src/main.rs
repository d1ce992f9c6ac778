use std::process::ExitCode;

mod config;
mod error;
mod library;
mod logging;
mod manifest;
mod runtime;

fn main() -> ExitCode {
    logging::init();

    match runtime::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("discography: {e}");
            ExitCode::FAILURE
        }
    }
}
