/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod list;

use std::io::Write;

use crate::cli::OutputCtx;
use crate::cli::args::Command;
use crate::errors::AppError;
use crate::gh::Config;
use crate::repo::RepoContext;

/// Everything a command needs from the outside world.
pub struct Env<'a> {
    /// Environment-derived settings.
    pub config: &'a Config,
    /// Ambient repository discovery for when `--repo` is absent.
    pub repos: &'a dyn RepoContext,
    /// Output format and layout.
    pub output: OutputCtx,
}

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `AppError` on any command failure.
pub fn dispatch(command: &Command, env: &Env<'_>, out: &mut dyn Write) -> Result<(), AppError> {
    match command {
        Command::List(args) => list::run(args, env, out),
    }
}
