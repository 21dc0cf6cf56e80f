/// Errors from the repository resolution layer.
use thiserror::Error;

/// Errors that can occur while determining which repository to query.
#[derive(Debug, Error)]
pub enum RepoError {
    /// The `--repo` value (or `GH_REPO`) is not a recognisable repository.
    #[error("invalid repository '{input}': {reason}")]
    Parse {
        /// The string that failed to parse.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// No repository was given and none could be inferred from the environment.
    #[error("could not determine the current repository: {reason}")]
    NoRepository {
        /// What the ambient lookup tried and why it failed.
        reason: String,
    },
}

impl RepoError {
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.to_owned(),
            reason: reason.into(),
        }
    }

    pub(crate) fn no_repository(reason: impl Into<String>) -> Self {
        Self::NoRepository {
            reason: reason.into(),
        }
    }
}
