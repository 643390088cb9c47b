#![forbid(unsafe_code)]

mod artifacts;
mod cli;
mod command_extract;
mod command_keywords;
mod config;
mod error;
mod extract_pipeline;
mod template_source;

use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
