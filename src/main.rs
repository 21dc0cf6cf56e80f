#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! gh-runs — list GitHub Actions workflow runs from the CLI.

mod actions;
mod cli;
mod commands;
mod errors;
mod gh;
mod logging;
mod repo;
mod types;

use clap::Parser;

use cli::{Cli, OutputCtx, Stdout, write_error};
use commands::Env;
use gh::Config;
use repo::GitContext;
use types::ErrorOutput;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.debug);

    let config = Config::from_env();
    let repos = GitContext::new(&config.default_host, config.repo.clone());
    let env = Env {
        config: &config,
        repos: &repos,
        output: OutputCtx::new(cli.json, cli.no_header, &Stdout),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = commands::dispatch(&cli.command, &env, &mut out) {
        write_error(&ErrorOutput::from_app_error(&err), cli.json);
        std::process::exit(err.exit_code());
    }
}
