/// Blocking REST client bound to one API host.
use reqwest::{
    StatusCode, Url,
    blocking::Client,
    header::{self, HeaderMap, HeaderValue},
};
use tracing::debug;

use super::{config::Config, errors::ApiError};

const USER_AGENT: &str = concat!("gh-runs/", env!("CARGO_PKG_VERSION"));
const API_VERSION: &str = "2022-11-28";

/// A raw HTTP response: status and undecoded body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
    /// Final request URL, including the query string.
    pub url: String,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Authenticated GET access to an API host.
pub trait HttpClient {
    /// Issue one GET request for the path `segments`, relative to the API root.
    /// Each segment is percent-encoded, so it can never introduce a query,
    /// fragment, or extra path level.
    ///
    /// Non-2xx statuses are returned as responses, not errors.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if no response could be read, or
    /// `ApiError::Client` if the API root cannot take a path.
    fn get(&self, segments: &[&str], query: &[(&str, String)]) -> Result<HttpResponse, ApiError>;
}

/// `reqwest` implementation of [`HttpClient`].
#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
    base_url: Url,
}

impl RestClient {
    /// Build a client rooted at `base_url`, sending `token` as a bearer token.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Client` if the URL or token is invalid, or reqwest
    /// fails to initialise.
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self, ApiError> {
        let root = if base_url.ends_with('/') {
            base_url.to_owned()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&root)
            .map_err(|e| ApiError::Client(format!("invalid API URL '{base_url}': {e}")))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert("X-GitHub-Api-Version", HeaderValue::from_static(API_VERSION));
        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| ApiError::Client("token contains invalid characters".to_owned()))?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Build a client for `host` using the configured base URL and token.
    ///
    /// # Errors
    ///
    /// See [`RestClient::new`].
    pub fn for_host(config: &Config, host: &str) -> Result<Self, ApiError> {
        let base_url = config.api_base_url(host);
        let token = config.token_for(host);
        debug!(host, %base_url, authenticated = token.is_some(), "creating REST client");
        Self::new(&base_url, token.as_deref())
    }
}

impl HttpClient for RestClient {
    fn get(&self, segments: &[&str], query: &[(&str, String)]) -> Result<HttpResponse, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::Client(format!("API URL '{}' cannot take a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        debug!(%url, ?query, "GET");

        let response = self
            .client
            .get(url.clone())
            .query(query)
            .send()
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        let url = response.url().to_string();
        let body = response.text().map_err(|source| ApiError::Transport {
            url: url.clone(),
            source,
        })?;
        debug!(status = status.as_u16(), bytes = body.len(), "response received");

        Ok(HttpResponse {
            status: status.as_u16(),
            body,
            url,
        })
    }
}

/// Fallback error message for a status without a JSON `message` body.
#[must_use]
pub fn status_reason(status: u16) -> String {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("unexpected status")
        .to_owned()
}
