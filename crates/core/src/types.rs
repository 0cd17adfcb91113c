//! Shared types for the site widgets: the search result shape returned by
//! `/api/search`, the category scope the endpoint accepts, and the widget
//! configuration with its defaults.

use serde::{Deserialize, Serialize};

/// Minimum trimmed query length before a search is scheduled.
pub const MIN_QUERY_CHARS: usize = 2;

/// Quiet period after the last keystroke before the request goes out.
pub const DEBOUNCE_MS: u64 = 500;

/// Number of characters kept from a description in the result snippet.
pub const SNIPPET_CHARS: usize = 100;

/// Flask's development server address, where the site backend usually runs.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

// ---------------------------------------------------------------------------
// Search endpoint payload
// ---------------------------------------------------------------------------

/// One item of the `/api/search` JSON array. Every field is optional; defaults
/// are applied when the item is rendered, not when it is decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[cfg(test)]
impl SearchResult {
    pub fn titled(title: &str) -> Self {
        Self { title: Some(title.to_string()), ..Self::default() }
    }
}

/// Content section filter understood by the backend's `category` parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
    #[default]
    All,
    /// News.
    Uudised,
    /// Events.
    Syndmused,
    /// Culture articles.
    Kultuur,
}

impl SearchScope {
    pub fn as_param(self) -> &'static str {
        match self {
            SearchScope::All => "all",
            SearchScope::Uudised => "uudised",
            SearchScope::Syndmused => "syndmused",
            SearchScope::Kultuur => "kultuur",
        }
    }

    pub fn from_param(s: &str) -> Option<Self> {
        match s {
            "all" => Some(SearchScope::All),
            "uudised" => Some(SearchScope::Uudised),
            "syndmused" => Some(SearchScope::Syndmused),
            "kultuur" => Some(SearchScope::Kultuur),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Widget configuration
// ---------------------------------------------------------------------------

/// Runtime configuration for the search widget. Loaded from `.laulik.toml` or defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Scheme and host of the site backend, without a trailing slash.
    pub base_url: String,
    pub debounce_ms: u64,
    pub min_query_chars: usize,
    pub snippet_chars: usize,
    pub scope: SearchScope,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            debounce_ms: DEBOUNCE_MS,
            min_query_chars: MIN_QUERY_CHARS,
            snippet_chars: SNIPPET_CHARS,
            scope: SearchScope::All,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_sparse_items() {
        let items: Vec<SearchResult> =
            serde_json::from_str(r#"[{"title":"Laul","link":"https://x"},{}]"#).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title.as_deref(), Some("Laul"));
        assert_eq!(items[0].category, None);
        assert_eq!(items[1], SearchResult::default());
    }

    #[test]
    fn null_fields_decode_as_absent() {
        let items: Vec<SearchResult> =
            serde_json::from_str(r#"[{"title":null,"description":null,"category":"Kultuur"}]"#)
                .unwrap();
        assert_eq!(items[0].title, None);
        assert_eq!(items[0].category.as_deref(), Some("Kultuur"));
    }

    #[test]
    fn scope_params_round_trip() {
        for scope in
            [SearchScope::All, SearchScope::Uudised, SearchScope::Syndmused, SearchScope::Kultuur]
        {
            assert_eq!(SearchScope::from_param(scope.as_param()), Some(scope));
        }
        assert_eq!(SearchScope::from_param("sport"), None);
    }
}
