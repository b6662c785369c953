use clap::{CommandFactory, Parser};
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

mod api;
mod cli;
mod commands;
mod config;
mod models;
mod services;
mod store;
mod utils;

use cli::Cli;
use utils::AppError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let directive = if cli.verbose {
        "karma_trends=debug"
    } else {
        "karma_trends=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse().unwrap()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    if cli.verbose {
        debug!("setting verbose on");
    }

    match commands::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Usage) => {
            let _ = Cli::command().print_help();
            ExitCode::from(1)
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
