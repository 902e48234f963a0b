// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use unique_collector::{app, args::Args, config::Config, logging};

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(args);

    if let Err(e) = logging::init(&config) {
        eprintln!("Logging Error: {e}");
    }

    match app::run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
