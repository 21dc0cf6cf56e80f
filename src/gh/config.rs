/// Environment-derived configuration: default host, tokens, API base URL.
///
/// Nothing is read from disk. Authentication is delegated to the environment
/// (`GH_TOKEN` and friends) or, failing that, to `gh auth token`.
use std::process::Command;

use tracing::debug;

use crate::repo::DEFAULT_HOST;

/// Environment variables consulted by [`Config::from_env`].
pub mod vars {
    /// Default host for `OWNER/REPO` and ambient resolution.
    pub const GH_HOST: &str = "GH_HOST";
    /// Repository to use when `--repo` is absent.
    pub const GH_REPO: &str = "GH_REPO";
    /// Tokens for github.com and GHE.com hosts, in priority order.
    pub const GITHUB_TOKENS: [&str; 2] = ["GH_TOKEN", "GITHUB_TOKEN"];
    /// Tokens for GitHub Enterprise Server hosts, in priority order.
    pub const ENTERPRISE_TOKENS: [&str; 2] = ["GH_ENTERPRISE_TOKEN", "GITHUB_ENTERPRISE_TOKEN"];
    /// Full API base URL override, e.g. for a proxy or a test server.
    pub const API_URL: &str = "GH_RUNS_API_URL";
    /// `tracing` filter directives.
    pub const LOG: &str = "GH_RUNS_LOG";
}

/// Settings resolved once at startup.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Host used when a repository string does not name one.
    pub default_host: String,
    /// Value of `GH_REPO`.
    pub repo: Option<String>,
    /// Explicit API base URL; bypasses host-based derivation.
    pub api_url: Option<String>,
    /// Token for github.com-family hosts.
    pub github_token: Option<String>,
    /// Token for Enterprise Server hosts.
    pub enterprise_token: Option<String>,
    /// Ask `gh auth token` when no token variable is set.
    pub use_gh_auth: bool,
}

impl Config {
    /// Read configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup. Empty values
    /// count as unset.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            default_host: get(vars::GH_HOST).unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            repo: get(vars::GH_REPO),
            api_url: get(vars::API_URL),
            github_token: vars::GITHUB_TOKENS.iter().find_map(|&k| get(k)),
            enterprise_token: vars::ENTERPRISE_TOKENS.iter().find_map(|&k| get(k)),
            use_gh_auth: true,
        }
    }

    /// Token from the environment for `host`, if any.
    #[must_use]
    pub fn env_token_for(&self, host: &str) -> Option<&str> {
        if is_github_family(host) {
            self.github_token.as_deref()
        } else {
            self.enterprise_token.as_deref()
        }
    }

    /// Token for `host`: environment first, then `gh auth token`.
    /// `None` means the request goes out unauthenticated.
    #[must_use]
    pub fn token_for(&self, host: &str) -> Option<String> {
        if let Some(token) = self.env_token_for(host) {
            return Some(token.to_owned());
        }
        if self.use_gh_auth {
            return gh_auth_token(host);
        }
        None
    }

    /// REST API base URL for `host`, always ending in `/`.
    #[must_use]
    pub fn api_base_url(&self, host: &str) -> String {
        match &self.api_url {
            Some(url) if url.ends_with('/') => url.clone(),
            Some(url) => format!("{url}/"),
            None => api_base_url_for_host(host),
        }
    }
}

/// github.com, GHE.com tenancies, and the local development host.
#[must_use]
pub fn is_github_family(host: &str) -> bool {
    host == DEFAULT_HOST || host == "github.localhost" || host.ends_with(".ghe.com")
}

/// Map a web host to its REST API base URL.
#[must_use]
pub fn api_base_url_for_host(host: &str) -> String {
    if host == DEFAULT_HOST {
        "https://api.github.com/".to_owned()
    } else if host == "github.localhost" {
        "http://api.github.localhost/".to_owned()
    } else if host.ends_with(".ghe.com") {
        format!("https://api.{host}/")
    } else {
        format!("https://{host}/api/v3/")
    }
}

fn gh_auth_token(host: &str) -> Option<String> {
    let output = Command::new("gh")
        .args(["auth", "token", "--hostname", host])
        .output()
        .ok()?;
    if !output.status.success() {
        debug!(host, "gh auth token returned no token");
        return None;
    }
    let token = String::from_utf8(output.stdout).ok()?.trim().to_owned();
    (!token.is_empty()).then_some(token)
}
