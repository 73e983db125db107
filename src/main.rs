mod cli;
mod commands;
mod errors;
mod handlers;
mod operations;
mod state;
mod ui;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::{Cli, Command};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Info+ on stderr unless --json; --verbose enables debug; RUST_LOG overrides
    if !cli.global.json {
        let level = if cli.global.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::new()
            .filter_module("coursecat", level)
            .filter_module("coursecat_core", level)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false)
            .init();
    }

    match &cli.command {
        Command::Render { output } => commands::render::run(output, &cli.global),
        Command::List { filters } => commands::list::run(filters, &cli.global),
        Command::Show { module_id, open } => commands::show::run(module_id, open, &cli.global),
        Command::Export { filters, output } => {
            commands::export::run(filters, output, &cli.global)
        }
        Command::Check => commands::check::run(&cli.global),
    }
}
