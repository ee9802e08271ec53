//! pkgfind CLI - locate a package directory under GOPATH/src
//!
//! Prints each matching directory as soon as it is found.

mod cli;
mod commands;
mod error;


use clap::Parser;

use crate::cli::Cli;
use crate::commands::completions::run_completions;
use crate::commands::find::run_find;
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        run_completions(shell, cli.output.as_deref())?;
    } else {
        run_find(cli.search_options(), cli.format)?;
    }

    Ok(())
}
