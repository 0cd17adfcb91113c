//! Turns search outcomes into what the results container shows: a status line
//! (loading, no results, error) or one row per result with defaults applied.

use crate::types::SearchResult;

pub const LOADING_TEXT: &str = "Otsin...";
pub const EMPTY_TEXT: &str = "Tulemusi ei leitud";
pub const ERROR_TEXT: &str = "Otsingu viga";

pub const DEFAULT_CATEGORY: &str = "Info";
pub const DEFAULT_TITLE: &str = "Pealkiri puudub";
pub const FALLBACK_LINK: &str = "#";

const ELLIPSIS: &str = "...";

/// A result with every default resolved, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub category: String,
    pub title: String,
    /// `None` when the result carries neither a description nor content.
    pub snippet: Option<String>,
    pub link: String,
}

impl ResultRow {
    /// `#` targets the current page and must not open a new window.
    pub fn opens_externally(&self) -> bool {
        self.link != FALLBACK_LINK
    }
}

/// Content of the results container.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Blank,
    Loading,
    Results(Vec<ResultRow>),
    NoResults,
    Error,
}

impl Panel {
    /// Single status line for the non-row states.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Panel::Loading => Some(LOADING_TEXT),
            Panel::NoResults => Some(EMPTY_TEXT),
            Panel::Error => Some(ERROR_TEXT),
            Panel::Blank | Panel::Results(_) => None,
        }
    }
}

/// Render a decoded result set into a panel.
pub fn render_results(results: &[SearchResult], snippet_chars: usize) -> Panel {
    if results.is_empty() {
        return Panel::NoResults;
    }
    Panel::Results(results.iter().map(|r| render_row(r, snippet_chars)).collect())
}

pub fn render_row(result: &SearchResult, snippet_chars: usize) -> ResultRow {
    let description =
        non_empty(&result.description).or_else(|| non_empty(&result.content)).unwrap_or("");

    ResultRow {
        category: non_empty(&result.category).unwrap_or(DEFAULT_CATEGORY).to_string(),
        title: non_empty(&result.title).unwrap_or(DEFAULT_TITLE).to_string(),
        snippet: if description.is_empty() {
            None
        } else {
            Some(snippet(description, snippet_chars))
        },
        link: non_empty(&result.link).unwrap_or(FALLBACK_LINK).to_string(),
    }
}

/// First `limit` characters followed by an ellipsis. The ellipsis is appended
/// even when the text is shorter than `limit`.
pub fn snippet(text: &str, limit: usize) -> String {
    let mut out: String = text.chars().take(limit).collect();
    out.push_str(ELLIPSIS);
    out
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SNIPPET_CHARS;

    #[test]
    fn empty_set_renders_empty_message() {
        let panel = render_results(&[], SNIPPET_CHARS);
        assert_eq!(panel, Panel::NoResults);
        assert_eq!(panel.message(), Some("Tulemusi ei leitud"));
    }

    #[test]
    fn missing_fields_get_defaults() {
        let result = SearchResult {
            title: Some("Laul".into()),
            link: Some("https://x".into()),
            ..SearchResult::default()
        };
        let row = render_row(&result, SNIPPET_CHARS);
        assert_eq!(row.category, "Info");
        assert_eq!(row.title, "Laul");
        assert_eq!(row.snippet, None);
        assert_eq!(row.link, "https://x");
        assert!(row.opens_externally());
    }

    #[test]
    fn bare_item_falls_back_everywhere() {
        let row = render_row(&SearchResult::default(), SNIPPET_CHARS);
        assert_eq!(row.category, "Info");
        assert_eq!(row.title, "Pealkiri puudub");
        assert_eq!(row.link, "#");
        assert!(!row.opens_externally());
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let result = SearchResult {
            category: Some(String::new()),
            title: Some(String::new()),
            description: Some(String::new()),
            content: Some("Sisu".into()),
            link: Some(String::new()),
        };
        let row = render_row(&result, SNIPPET_CHARS);
        assert_eq!(row.category, "Info");
        assert_eq!(row.title, "Pealkiri puudub");
        assert_eq!(row.snippet.as_deref(), Some("Sisu..."));
        assert_eq!(row.link, "#");
    }

    #[test]
    fn long_description_is_cut_at_100_chars() {
        let long = "a".repeat(150);
        let result = SearchResult { description: Some(long.clone()), ..SearchResult::default() };
        let row = render_row(&result, SNIPPET_CHARS);
        assert_eq!(row.snippet, Some(format!("{}...", &long[..100])));
    }

    #[test]
    fn short_description_still_gets_ellipsis() {
        assert_eq!(snippet("Lühike", SNIPPET_CHARS), "Lühike...");
    }

    #[test]
    fn snippet_counts_characters_not_bytes() {
        let text = "õ".repeat(120);
        let cut = snippet(&text, 100);
        assert_eq!(cut.chars().count(), 103);
        assert!(cut.starts_with(&"õ".repeat(100)));
    }

    #[test]
    fn description_wins_over_content() {
        let result = SearchResult {
            description: Some("Kirjeldus".into()),
            content: Some("Sisu".into()),
            ..SearchResult::default()
        };
        assert_eq!(render_row(&result, SNIPPET_CHARS).snippet.as_deref(), Some("Kirjeldus..."));
    }

    #[test]
    fn rendering_is_repeatable() {
        let results = vec![
            SearchResult {
                description: Some("x".repeat(130)),
                ..SearchResult::titled("Koit")
            },
            SearchResult::default(),
        ];
        let first = render_results(&results, SNIPPET_CHARS);
        let second = render_results(&results, SNIPPET_CHARS);
        assert_eq!(first, second);
    }
}
