/// Fetch one page of workflow runs for a repository.
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::gh::{ApiError, HttpClient, client::status_reason};
use crate::repo::Repository;
use crate::types::WorkflowRunsPage;

/// Path segments of a repository's workflow runs, relative to the API root.
#[must_use]
pub fn runs_path(repo: &Repository) -> [&str; 5] {
    ["repos", repo.owner(), repo.name(), "actions", "runs"]
}

/// Issue exactly one `GET repos/{owner}/{repo}/actions/runs?per_page={limit}`
/// and decode the page. No pagination, no retries.
///
/// # Errors
///
/// - `ApiError::Transport` — the host could not be reached
/// - `ApiError::Http` — any non-2xx status, including 5xx
/// - `ApiError::Decode` — the body is not a workflow runs page
pub fn fetch_workflow_runs(
    client: &dyn HttpClient,
    repo: &Repository,
    limit: u32,
) -> Result<WorkflowRunsPage, ApiError> {
    let path = runs_path(repo);
    debug!(%repo, limit, "fetching workflow runs");

    let response = client.get(&path, &[("per_page", limit.to_string())])?;

    if !response.is_success() {
        warn!(status = response.status, url = %response.url, "workflow runs request failed");
        return Err(ApiError::Http {
            status_code: response.status,
            message: error_message(&response.body)
                .unwrap_or_else(|| status_reason(response.status)),
            body: response.body,
            url: response.url,
        });
    }

    let page: WorkflowRunsPage =
        serde_json::from_str(&response.body).map_err(|source| ApiError::Decode {
            url: response.url.clone(),
            source,
        })?;

    match page.workflow_runs.len() {
        1 => info!(total = page.total_count, "fetched 1 workflow run from {repo}"),
        n => info!(total = page.total_count, "fetched {n} workflow runs from {repo}"),
    }
    Ok(page)
}

/// The `message` field of a GitHub JSON error body.
fn error_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
}
