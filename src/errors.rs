/// Top-level error type for command execution.
use std::io;

use thiserror::Error;

use crate::gh::ApiError;
use crate::repo::RepoError;

/// Everything a command can fail with. Lower layers never recover; `main`
/// turns this into a message and an exit code.
#[derive(Debug, Error)]
pub enum AppError {
    /// Positional arguments were given to a command that takes none.
    #[error("Invalid argument(s). Expected 0 received {received}")]
    Arguments {
        /// Number of positional arguments received.
        received: usize,
    },

    /// The target repository could not be determined.
    #[error(transparent)]
    Repo(#[from] RepoError),

    /// The API request failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Writing the result failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl AppError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments { .. } => 2,
            Self::Repo(_) => 4,
            Self::Api(_) | Self::Output(_) => 1,
        }
    }

    /// Machine-readable error code (`snake_case`).
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Arguments { .. } => "invalid_arguments",
            Self::Repo(RepoError::Parse { .. }) => "invalid_repository",
            Self::Repo(RepoError::NoRepository { .. }) => "no_repository",
            Self::Api(ApiError::Client(_)) => "client_error",
            Self::Api(ApiError::Transport { .. }) => "transport_error",
            Self::Api(ApiError::Http { .. }) => "http_error",
            Self::Api(ApiError::Decode { .. }) => "decode_error",
            Self::Output(_) => "output_error",
        }
    }

    /// HTTP status of a failed API response, if that is what went wrong.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(err) => err.status_code(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arguments_message() {
        let err = AppError::Arguments { received: 1 };
        assert_eq!(err.to_string(), "Invalid argument(s). Expected 0 received 1");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_repo_errors_pass_through() {
        let err = AppError::from(RepoError::no_repository("no remotes"));
        assert_eq!(
            err.to_string(),
            "could not determine the current repository: no remotes"
        );
        assert_eq!(err.code(), "no_repository");
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_http_status_exposed() {
        let err = AppError::from(ApiError::Http {
            status_code: 500,
            message: "Internal Server Error".to_owned(),
            body: String::new(),
            url: "https://api.github.com/repos/o/r/actions/runs".to_owned(),
        });
        assert_eq!(err.status_code(), Some(500));
        assert_eq!(err.code(), "http_error");
        assert_ne!(err.exit_code(), 0);
    }
}
