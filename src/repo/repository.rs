/// Repository identity and parsing of user-provided repository strings.
///
/// Accepted forms:
///
/// - `OWNER/REPO` (host is the configured default host)
/// - `HOST/OWNER/REPO`
/// - `https://HOST/OWNER/REPO[.git]` and other `scheme://` URLs
/// - `git@HOST:OWNER/REPO.git` (scp-like SSH remotes)
use std::fmt;

use reqwest::Url;

use super::errors::RepoError;

/// Host used when neither the input nor `GH_HOST` names one.
pub const DEFAULT_HOST: &str = "github.com";

const FORMAT_HINT: &str = r#"expected the "[HOST/]OWNER/REPO" format"#;

/// A remote repository: `{host, owner, name}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    host: String,
    owner: String,
    name: String,
}

impl Repository {
    /// Build a repository from already-validated parts. The host is normalised.
    #[must_use]
    pub fn new(host: &str, owner: &str, name: &str) -> Self {
        Self {
            host: normalize_host(host),
            owner: owner.to_owned(),
            name: name.to_owned(),
        }
    }

    /// Parse `[HOST/]OWNER/REPO` or a repository URL.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::Parse` when the input has the wrong number of
    /// segments, a segment with characters outside `[A-Za-z0-9._-]`, or is an
    /// unrecognisable URL.
    pub fn parse(input: &str, default_host: &str) -> Result<Self, RepoError> {
        let trimmed = input.trim();
        if trimmed.contains("://") || is_scp_like(trimmed) {
            return Self::from_url(trimmed);
        }

        match trimmed.split('/').collect::<Vec<_>>().as_slice() {
            [owner, name] => Self::from_parts(input, default_host, owner, name),
            [host, owner, name] => Self::from_parts(input, host, owner, name),
            _ => Err(RepoError::parse(input, FORMAT_HINT)),
        }
    }

    /// Parse a clone or browse URL: `scheme://[user@]host[:port]/owner/repo[.git]`
    /// or `[user@]host:owner/repo[.git]`. Query and fragment are ignored.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::Parse` if the URL is invalid, has no host, or its
    /// path is not exactly `OWNER/REPO`.
    pub fn from_url(input: &str) -> Result<Self, RepoError> {
        let normalized = if input.contains("://") {
            input.to_owned()
        } else {
            scp_to_ssh(input).ok_or_else(|| RepoError::parse(input, "not a repository URL"))?
        };
        let url = Url::parse(&normalized)
            .map_err(|e| RepoError::parse(input, format!("not a repository URL: {e}")))?;

        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| RepoError::parse(input, "URL has no host"))?;
        let segments: Vec<&str> = url
            .path_segments()
            .map(|s| s.filter(|p| !p.is_empty()).collect())
            .unwrap_or_default();

        match segments.as_slice() {
            [owner, name] => {
                let name = name.strip_suffix(".git").unwrap_or(name);
                Self::from_parts(input, host, owner, name)
            }
            _ => Err(RepoError::parse(input, "expected an OWNER/REPO path in the URL")),
        }
    }

    fn from_parts(input: &str, host: &str, owner: &str, name: &str) -> Result<Self, RepoError> {
        if !is_valid_host(host) {
            return Err(RepoError::parse(input, format!("invalid host '{host}'")));
        }
        for (label, value) in [("owner", owner), ("repository name", name)] {
            if value.is_empty() {
                return Err(RepoError::parse(input, FORMAT_HINT));
            }
            if !is_valid_segment(value) {
                return Err(RepoError::parse(
                    input,
                    format!("invalid {label} '{value}': only letters, digits, '.', '-' and '_' are allowed"),
                ));
            }
        }
        Ok(Self::new(host, owner, name))
    }

    /// Host name, e.g. `github.com`.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Account or organisation that owns the repository.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// `git@github.com:owner/repo.git` style: a colon before the first slash.
fn is_scp_like(input: &str) -> bool {
    match (input.find(':'), input.find('/')) {
        (Some(colon), Some(slash)) => colon < slash,
        (Some(_), None) => true,
        _ => false,
    }
}

/// `user@host:owner/repo` → `ssh://user@host/owner/repo`.
fn scp_to_ssh(input: &str) -> Option<String> {
    let (authority, path) = input.split_once(':')?;
    Some(format!("ssh://{authority}/{}", path.trim_start_matches('/')))
}

fn is_valid_segment(value: &str) -> bool {
    value != "."
        && value != ".."
        && value
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-' | b'_'))
}

fn is_valid_host(host: &str) -> bool {
    !host.is_empty()
        && host
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-'))
}

fn normalize_host(host: &str) -> String {
    let host = host.to_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);
    if host == "ssh.github.com" {
        DEFAULT_HOST.to_owned()
    } else {
        host.to_owned()
    }
}
