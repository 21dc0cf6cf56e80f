/// Shared serializable types: API payloads and the error envelope.
///
/// Payload types double as output types: `--json` writes them back out
/// unchanged.
use serde::{Deserialize, Deserializer, Serialize};

/// One workflow run as returned by `GET /repos/{owner}/{repo}/actions/runs`.
///
/// Missing or `null` fields decode to zero values; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowRun {
    /// Run identifier.
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    /// Workflow display name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Run status, e.g. "queued", "in_progress", "completed".
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
}

/// One page of workflow runs.
///
/// `total_count` is the server-side total and may exceed `workflow_runs.len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowRunsPage {
    /// Number of runs matching the query across all pages.
    #[serde(deserialize_with = "null_as_default")]
    pub total_count: u64,
    /// Runs on this page, in server order.
    #[serde(deserialize_with = "null_as_default")]
    pub workflow_runs: Vec<WorkflowRun>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (`snake_case`).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// HTTP status, for API errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ErrorOutput {
    /// Construct from an `AppError`.
    #[must_use]
    pub fn from_app_error(err: &crate::errors::AppError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
                status: err.status_code(),
            },
        }
    }
}
