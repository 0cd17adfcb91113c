//! Content cards that fade in the first time they scroll into view.
//!
//! The runtime's visibility events fire only when a card starts or stops
//! intersecting the raw viewport, so a card entering from below is also
//! re-checked on every page scroll until it passes the threshold.

use std::rc::Rc;

use dioxus::html::geometry::PixelsRect;
use dioxus::prelude::*;
use laulik_core::reveal::{is_reveal_class, Rect, Reveal};
use tracing::debug;

use crate::state::{SCROLL_ROOT, SCROLL_TICK};

fn to_rect(r: PixelsRect) -> Rect {
    Rect::new(r.origin.x, r.origin.y, r.size.width, r.size.height)
}

/// Measure the card against the scroll container and reveal it if it qualifies.
async fn check_position(mut reveal: Signal<Reveal>, card: Rc<MountedData>, label: String) {
    let Some(root) = SCROLL_ROOT.peek().clone() else {
        return;
    };
    let (Ok(target), Ok(viewport)) = (card.get_client_rect().await, root.get_client_rect().await)
    else {
        return;
    };
    if reveal.write().observe(to_rect(target), to_rect(viewport)) {
        debug!(class = label.as_str(), "Card revealed on scroll");
    }
}

/// Wraps one card. Only the fixed card classes animate; anything else renders as-is.
#[component]
pub fn RevealCard(class: String, children: Element) -> Element {
    let mut reveal = use_signal(Reveal::default);
    let mut mounted = use_signal(|| None::<Rc<MountedData>>);
    let animated = is_reveal_class(&class);

    let label = class.clone();
    use_effect(move || {
        // Subscribe to scrolls; everything else is read without subscribing.
        let _tick = *SCROLL_TICK.read();
        if !animated || reveal.peek().is_revealed() {
            return;
        }
        let Some(card) = mounted.peek().clone() else {
            return;
        };
        spawn(check_position(reveal, card, label.clone()));
    });

    if !animated {
        debug!(class = class.as_str(), "Not a reveal card class, rendering without animation");
        return rsx! {
            div { class: "{class}", {children} }
        };
    }

    let style = reveal.read().style();
    let label = class.clone();

    rsx! {
        div {
            class: "{class}",
            style: "{style}",
            onmounted: move |e: MountedEvent| mounted.set(Some(e.data())),
            onvisible: move |e: VisibleEvent| {
                if reveal.read().is_revealed() {
                    return;
                }
                let data = e.data();
                let revealed = match (data.get_bounding_client_rect(), data.get_root_bounds()) {
                    (Ok(target), Ok(root)) => reveal.write().observe(to_rect(target), to_rect(root)),
                    _ => matches!(data.is_intersecting(), Ok(true)) && reveal.write().mark_revealed(),
                };
                if revealed {
                    debug!(class = label.as_str(), "Card revealed");
                }
            },
            {children}
        }
    }
}
