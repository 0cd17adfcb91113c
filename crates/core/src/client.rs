//! HTTP client for the site's `/api/search` endpoint.

use thiserror::Error;
use tracing::debug;

use crate::types::{SearchResult, SearchScope, WidgetConfig};

pub const SEARCH_PATH: &str = "/api/search";

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("search endpoint answered HTTP {0}")]
    Status(u16),
    #[error("search response is not a result list: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Build `{base}/api/search?q=<query>`, adding `&category=` for a narrowed scope.
pub fn search_url(base_url: &str, query: &str, scope: SearchScope) -> String {
    let mut url = format!(
        "{}{}?q={}",
        base_url.trim_end_matches('/'),
        SEARCH_PATH,
        urlencoding::encode(query)
    );
    if scope != SearchScope::All {
        url.push_str("&category=");
        url.push_str(scope.as_param());
    }
    url
}

/// Decode a response body. Anything other than a JSON array of result objects fails.
pub fn decode_results(body: &str) -> Result<Vec<SearchResult>, SearchError> {
    Ok(serde_json::from_str(body)?)
}

#[derive(Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    base_url: String,
    scope: SearchScope,
}

impl SearchClient {
    pub fn new(config: &WidgetConfig) -> Self {
        Self::with_http(reqwest::Client::new(), config)
    }

    pub fn with_http(http: reqwest::Client, config: &WidgetConfig) -> Self {
        Self { http, base_url: config.base_url.clone(), scope: config.scope }
    }

    pub fn url_for(&self, query: &str) -> String {
        search_url(&self.base_url, query, self.scope)
    }

    /// One GET, no retry and no timeout beyond the transport's own.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let url = self.url_for(query);
        debug!(url = url.as_str(), "Search request");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }
        let body = response.text().await?;
        decode_results(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_percent_encoded() {
        let url = search_url("http://localhost:5000", "Koidula luule & laul", SearchScope::All);
        assert_eq!(url, "http://localhost:5000/api/search?q=Koidula%20luule%20%26%20laul");
    }

    #[test]
    fn non_ascii_query_is_utf8_encoded() {
        let url = search_url("", "sõnad", SearchScope::All);
        assert_eq!(url, "/api/search?q=s%C3%B5nad");
    }

    #[test]
    fn scoped_search_adds_category() {
        let url = search_url("http://h/", "laul", SearchScope::Syndmused);
        assert_eq!(url, "http://h/api/search?q=laul&category=syndmused");
    }

    #[test]
    fn decode_rejects_non_array_bodies() {
        assert!(matches!(decode_results("<html>"), Err(SearchError::Decode(_))));
        assert!(matches!(decode_results(r#"{"title":"x"}"#), Err(SearchError::Decode(_))));
    }

    #[test]
    fn decode_accepts_empty_array() {
        assert!(decode_results("[]").unwrap().is_empty());
    }
}
