//! Root application component: header with search, anchored sections, gallery.

use dioxus::prelude::*;
use laulik_core::widget::Msg;

use crate::content::{Card, CATEGORIES, CULTURE, EVENTS, GALLERY, NEWS};
use crate::gallery::GalleryImage;
use crate::scroll::{AnchorLink, AnchorSection, RevealCard};
use crate::search::{SearchPanel, SearchRuntime};
use crate::state::{SCROLL_ROOT, SCROLL_TICK};

static SITE_CSS: Asset = asset!("/assets/styles/site.css");

#[component]
pub fn App() -> Element {
    let search = use_context_provider(SearchRuntime::new);

    rsx! {
        document::Stylesheet { href: SITE_CSS }

        div {
            class: "page",
            onmounted: move |e: MountedEvent| *SCROLL_ROOT.write() = Some(e.data()),
            onscroll: move |_| *SCROLL_TICK.write() += 1,
            // Anything that reaches here came from outside the search panel.
            onclick: move |_| search.dispatch(Msg::OutsideClick),

            header {
                class: "site-header",
                AnchorLink { href: "#top", class: "site-title", "Koidulauliku E-laulik" }
                nav {
                    class: "site-nav",
                    AnchorLink { href: "#uudised", "Uudised" }
                    AnchorLink { href: "#syndmused", "Sündmused" }
                    AnchorLink { href: "#kultuur", "Kultuur" }
                    AnchorLink { href: "#galerii", "Galerii" }
                }
                SearchPanel {}
            }

            main {
                AnchorSection {
                    id: "top",
                    class: "hero",
                    h1 { "Eesti kultuur ühest kohast" }
                    div {
                        class: "category-grid",
                        for card in CATEGORIES {
                            CardView { card: *card }
                        }
                    }
                }
                CardSection { id: "uudised", title: "Uudised", cards: NEWS.to_vec() }
                CardSection { id: "syndmused", title: "Sündmused", cards: EVENTS.to_vec() }
                CardSection { id: "kultuur", title: "Kultuur", cards: CULTURE.to_vec() }
                AnchorSection {
                    id: "galerii",
                    class: "gallery",
                    h2 { "Galerii" }
                    div {
                        class: "gallery-grid",
                        for photo in GALLERY {
                            GalleryImage {
                                src: photo.src.to_string(),
                                alt: photo.alt.to_string(),
                                caption: photo.caption.to_string(),
                            }
                        }
                    }
                }
            }

            footer {
                class: "site-footer",
                AnchorLink { href: "#top", "Tagasi üles" }
            }
        }
    }
}

#[component]
fn CardSection(id: String, title: String, cards: Vec<Card>) -> Element {
    rsx! {
        AnchorSection {
            id: "{id}",
            class: "card-section",
            h2 { "{title}" }
            div {
                class: "card-grid",
                for card in cards {
                    CardView { card }
                }
            }
        }
    }
}

/// One reveal-animated card.
#[component]
fn CardView(card: Card) -> Element {
    rsx! {
        RevealCard {
            class: card.class.to_string(),
            h3 { "{card.title}" }
            p { "{card.body}" }
            AnchorLink { href: card.href.to_string(), class: "card-link", "Loe edasi" }
        }
    }
}
