//! Results dropdown: a status line or one clickable row per result.

use dioxus::prelude::*;
use laulik_core::render::{Panel, ResultRow};
use tracing::warn;

use super::SearchRuntime;

#[component]
pub fn ResultsList() -> Element {
    let runtime = use_context::<SearchRuntime>();
    let widget = runtime.widget.read();
    let class = if widget.is_visible() { "search-results show" } else { "search-results" };

    let body = match widget.panel() {
        Panel::Blank => rsx! {},
        Panel::Results(rows) => rsx! {
            for (i, row) in rows.iter().enumerate() {
                ResultItem { key: "{i}", row: row.clone() }
            }
        },
        status => {
            let status_class =
                if *status == Panel::Error { "search-status error" } else { "search-status" };
            let message = status.message().unwrap_or_default();
            rsx! {
                div { class: status_class, "{message}" }
            }
        }
    };

    rsx! {
        div {
            id: "search-results",
            class,
            {body}
        }
    }
}

#[component]
fn ResultItem(row: ResultRow) -> Element {
    let link = row.link.clone();
    let external = row.opens_externally();

    rsx! {
        div {
            class: "search-result-item",
            onclick: move |_| {
                if external {
                    open_link(&link);
                }
            },
            div { class: "search-result-category", "{row.category}" }
            div { class: "search-result-title", "{row.title}" }
            if let Some(snippet) = &row.snippet {
                div { class: "search-result-snippet", "{snippet}" }
            }
        }
    }
}

/// Open a result in a new browsing context.
fn open_link(link: &str) {
    #[cfg(feature = "desktop")]
    {
        if let Err(e) = open::that(link) {
            warn!(link, error = %e, "Failed to open search result");
        }
    }

    #[cfg(not(feature = "desktop"))]
    {
        match serde_json::to_string(link) {
            Ok(quoted) => {
                let _ = document::eval(&format!("window.open({quoted}, '_blank');"));
            }
            Err(e) => warn!(link, error = %e, "Failed to open search result"),
        }
    }
}
