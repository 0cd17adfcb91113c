//! Smooth scrolling for `#fragment` links.

use dioxus::html::ScrollBehavior;
use dioxus::prelude::*;
use laulik_core::anchor::AnchorAction;
use tracing::debug;

use crate::state::ANCHORS;

/// A section that can be scrolled to by id.
#[component]
pub fn AnchorSection(id: String, class: String, children: Element) -> Element {
    let target = id.clone();

    rsx! {
        section {
            id: "{id}",
            class: "{class}",
            onmounted: move |e: MountedEvent| {
                ANCHORS.write().register(target.clone(), e.data());
            },
            {children}
        }
    }
}

/// Link that scrolls smoothly when `href` is a same-page fragment.
#[component]
pub fn AnchorLink(href: String, class: Option<String>, children: Element) -> Element {
    let target = href.clone();

    rsx! {
        a {
            href: "{href}",
            class: class.unwrap_or_default(),
            onclick: move |e: MouseEvent| {
                let element = match ANCHORS.read().resolve(&target) {
                    AnchorAction::Follow => return,
                    AnchorAction::Intercept(element) => element.cloned(),
                };
                e.prevent_default();

                let Some(element) = element else {
                    debug!(href = target.as_str(), "No scroll target for anchor");
                    return;
                };
                spawn(async move {
                    if let Err(err) = element.scroll_to(ScrollBehavior::Smooth).await {
                        debug!(error = ?err, "Smooth scroll failed");
                    }
                });
            },
            {children}
        }
    }
}
