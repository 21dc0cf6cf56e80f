/// `list` command: show the latest workflow runs of a repository.
use std::io::Write;

use tracing::debug;

use super::Env;
use crate::actions::fetch_workflow_runs;
use crate::cli::args::ListArgs;
use crate::cli::output::write_runs;
use crate::errors::AppError;
use crate::gh::RestClient;
use crate::repo::resolve;

/// Run `gh-runs list`.
///
/// Stages run strictly in order: validate arguments, resolve the repository,
/// fetch one page, render. Nothing is written to `out` unless every earlier
/// stage succeeded.
///
/// # Errors
///
/// - `AppError::Arguments` — positional arguments were given
/// - `AppError::Repo` — the repository is malformed or cannot be inferred
/// - `AppError::Api` — the request failed or returned an unusable body
/// - `AppError::Output` — writing the table failed
pub fn run(args: &ListArgs, env: &Env<'_>, out: &mut dyn Write) -> Result<(), AppError> {
    if !args.args.is_empty() {
        return Err(AppError::Arguments {
            received: args.args.len(),
        });
    }

    let repo = resolve(&args.repo, &env.config.default_host, env.repos)?;
    let client = RestClient::for_host(env.config, repo.host())?;
    let page = fetch_workflow_runs(&client, &repo, args.limit)?;

    debug!(rows = page.workflow_runs.len(), "rendering");
    write_runs(&page.workflow_runs, &env.output, out)?;
    Ok(())
}
