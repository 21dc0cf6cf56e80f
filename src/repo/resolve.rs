/// Resolution of the `--repo` flag to a `Repository`.
use tracing::debug;

use super::{context::RepoContext, errors::RepoError, repository::Repository};

/// Resolve the repository to query.
///
/// A non-empty `repo_flag` is parsed as `[HOST/]OWNER/REPO` (or a URL) with
/// `default_host` filling in a missing host. An empty flag defers to the
/// ambient `context`.
///
/// # Errors
///
/// - `RepoError::Parse` — the flag value is malformed
/// - `RepoError::NoRepository` — no flag and nothing ambient to fall back on
pub fn resolve(
    repo_flag: &str,
    default_host: &str,
    context: &dyn RepoContext,
) -> Result<Repository, RepoError> {
    let repo = if repo_flag.is_empty() {
        context.current_repository()?
    } else {
        Repository::parse(repo_flag, default_host)?
    };
    debug!(host = repo.host(), repo = %repo, "resolved repository");
    Ok(repo)
}
