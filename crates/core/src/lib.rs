//! E-laulik site widgets, the runtime-agnostic half.
//!
//! Everything here is plain data and state transitions; the Dioxus app in
//! `apps/site` feeds UI events in and carries out the returned effects.
//!
//! # Modules
//!
//! - [`types`]: Search result payload, category scope, widget configuration
//! - [`widget`]: Debounced search state machine (input → timer → fetch → panel)
//! - [`render`]: Result rows with defaults, snippet truncation, status messages
//! - [`client`]: HTTP client for `/api/search`
//! - [`anchor`]: Same-page anchor resolution for smooth scrolling
//! - [`reveal`]: Reveal-on-scroll geometry and styles
//! - [`fallback`]: Broken gallery image placeholder

pub mod anchor;
pub mod client;
pub mod fallback;
pub mod render;
pub mod reveal;
pub mod types;
pub mod widget;

use std::path::Path;

use tracing::{debug, warn};

use types::{SearchScope, WidgetConfig};

// ---------------------------------------------------------------------------
// Configuration loading
// ---------------------------------------------------------------------------

pub const CONFIG_FILE_NAME: &str = ".laulik.toml";

const KNOWN_CONFIG_KEYS: &[&str] =
    &["base_url", "debounce_ms", "min_query_chars", "snippet_chars", "scope"];

/// Simple Levenshtein edit distance for typo suggestions.
fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Load widget configuration from `.laulik.toml` in the given directory.
///
/// Missing file means defaults. A file that can't be read or parsed, unknown
/// keys and out-of-range values are reported with a warning and otherwise ignored.
pub fn load_laulik_config(dir: &Path) -> WidgetConfig {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return WidgetConfig::default();
    }

    debug!(path = %config_path.display(), "Loading .laulik.toml");
    match std::fs::read_to_string(&config_path) {
        Ok(content) => parse_laulik_config(&content),
        Err(e) => {
            warn!(error = %e, "Failed to read .laulik.toml");
            WidgetConfig::default()
        }
    }
}

/// Parse the contents of a `.laulik.toml` file on top of the defaults.
pub fn parse_laulik_config(content: &str) -> WidgetConfig {
    let mut config = WidgetConfig::default();

    let table = match content.parse::<toml::Table>() {
        Ok(t) => t,
        Err(e) => {
            warn!(error = %e, "Failed to parse .laulik.toml");
            return config;
        }
    };

    for key in table.keys() {
        if KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
            continue;
        }
        let suggestion = KNOWN_CONFIG_KEYS
            .iter()
            .min_by_key(|k| edit_distance(key, k))
            .copied()
            .unwrap_or_default();
        if edit_distance(key, suggestion) <= 3 {
            warn!(
                key = key.as_str(),
                suggestion,
                "Unknown key in .laulik.toml, did you mean '{suggestion}'?"
            );
        } else {
            warn!(
                key = key.as_str(),
                "Unknown key in .laulik.toml (known keys: {})",
                KNOWN_CONFIG_KEYS.join(", ")
            );
        }
    }

    if let Some(url) = table.get("base_url").and_then(|v| v.as_str()) {
        config.base_url = url.trim_end_matches('/').to_string();
    }

    if let Some(ms) = table.get("debounce_ms").and_then(|v| v.as_integer()) {
        match u64::try_from(ms) {
            Ok(ms) => config.debounce_ms = ms,
            Err(_) => warn!(value = ms, "debounce_ms must not be negative"),
        }
    }

    if let Some(n) = table.get("min_query_chars").and_then(|v| v.as_integer()) {
        match usize::try_from(n) {
            Ok(n) if n > 0 => config.min_query_chars = n,
            _ => warn!(value = n, "min_query_chars must be at least 1"),
        }
    }

    if let Some(n) = table.get("snippet_chars").and_then(|v| v.as_integer()) {
        match usize::try_from(n) {
            Ok(n) => config.snippet_chars = n,
            Err(_) => warn!(value = n, "snippet_chars must not be negative"),
        }
    }

    if let Some(scope) = table.get("scope").and_then(|v| v.as_str()) {
        match SearchScope::from_param(scope) {
            Some(s) => config.scope = s,
            None => warn!(
                value = scope,
                "Unknown scope in .laulik.toml (expected all, uudised, syndmused or kultuur)"
            ),
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_laulik_config(dir.path()), WidgetConfig::default());
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "base_url = \"https://laulik.example/\"\ndebounce_ms = 250\nscope = \"kultuur\"\n",
        )
        .unwrap();

        let config = load_laulik_config(dir.path());
        assert_eq!(config.base_url, "https://laulik.example");
        assert_eq!(config.debounce_ms, 250);
        assert_eq!(config.scope, SearchScope::Kultuur);
        assert_eq!(config.min_query_chars, 2);
        assert_eq!(config.snippet_chars, 100);
    }

    #[test]
    fn broken_toml_falls_back_to_defaults() {
        assert_eq!(parse_laulik_config("base_url = "), WidgetConfig::default());
    }

    #[test]
    fn invalid_values_are_ignored() {
        let config = parse_laulik_config("debounce_ms = -5\nmin_query_chars = 0\nscope = \"sport\"");
        assert_eq!(config, WidgetConfig::default());
    }

    #[test]
    fn unknown_keys_do_not_break_loading() {
        let config = parse_laulik_config("debounce = 100\nsnippet_chars = 40");
        assert_eq!(config.debounce_ms, 500);
        assert_eq!(config.snippet_chars, 40);
    }

    #[test]
    fn edit_distance_suggests_close_keys() {
        assert_eq!(edit_distance("debounce", "debounce_ms"), 3);
        assert_eq!(edit_distance("scope", "scope"), 0);
    }
}
