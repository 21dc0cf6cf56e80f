/// Ambient repository discovery: `GH_REPO`, then the git remotes of the cwd.
use std::process::Command;

use tracing::debug;

use super::{errors::RepoError, repository::Repository};
use crate::gh::config::is_github_family;

/// Source of the "current" repository when none is given on the command line.
pub trait RepoContext {
    /// Infer the repository from the caller's environment.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::NoRepository` if nothing can be inferred, or
    /// `RepoError::Parse` if an explicit environment value is malformed.
    fn current_repository(&self) -> Result<Repository, RepoError>;
}

/// A single `git remote -v` fetch entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remote {
    /// Remote name, e.g. `origin`.
    pub name: String,
    /// Fetch URL as configured.
    pub url: String,
}

/// Discovers the repository from `GH_REPO` or the working directory's git remotes.
#[derive(Debug, Clone)]
pub struct GitContext {
    default_host: String,
    gh_repo: Option<String>,
}

impl GitContext {
    /// `gh_repo` is the value of `GH_REPO`, if set.
    #[must_use]
    pub fn new(default_host: &str, gh_repo: Option<String>) -> Self {
        Self {
            default_host: default_host.to_owned(),
            gh_repo,
        }
    }
}

impl RepoContext for GitContext {
    fn current_repository(&self) -> Result<Repository, RepoError> {
        if let Some(value) = self.gh_repo.as_deref().filter(|v| !v.is_empty()) {
            debug!(value, "using GH_REPO");
            return Repository::parse(value, &self.default_host);
        }

        let output = Command::new("git")
            .args(["remote", "-v"])
            .output()
            .map_err(|e| RepoError::no_repository(format!("failed to run git: {e}")))?;
        if !output.status.success() {
            return Err(RepoError::no_repository(
                "not a git repository; use --repo to select one",
            ));
        }

        let listing = String::from_utf8_lossy(&output.stdout);
        let remotes = parse_remotes(&listing);
        debug!(count = remotes.len(), "found git remotes");
        pick_remote(&remotes, &self.default_host).ok_or_else(|| {
            RepoError::no_repository(format!(
                "none of the git remotes point to a GitHub host ({}); use --repo to select one",
                self.default_host
            ))
        })
    }
}

/// Parse `git remote -v` output into fetch remotes, in listing order.
#[must_use]
pub fn parse_remotes(listing: &str) -> Vec<Remote> {
    listing
        .lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let name = fields.next()?;
            let url = fields.next()?;
            match fields.next() {
                Some("(fetch)") | None => Some(Remote {
                    name: name.to_owned(),
                    url: url.to_owned(),
                }),
                Some(_) => None,
            }
        })
        .collect()
}

/// Choose the remote to query: `upstream`, `github`, `origin`, then the rest
/// in listing order. Only remotes on `default_host` or a github.com-family
/// host are candidates; unparsable URLs are skipped.
#[must_use]
pub fn pick_remote(remotes: &[Remote], default_host: &str) -> Option<Repository> {
    let mut ordered: Vec<&Remote> = remotes.iter().collect();
    ordered.sort_by_key(|r| remote_priority(&r.name));
    ordered
        .into_iter()
        .filter_map(|r| Repository::from_url(&r.url).ok())
        .find(|repo| {
            repo.host().eq_ignore_ascii_case(default_host) || is_github_family(repo.host())
        })
}

fn remote_priority(name: &str) -> u8 {
    match name {
        "upstream" => 0,
        "github" => 1,
        "origin" => 2,
        _ => 3,
    }
}
