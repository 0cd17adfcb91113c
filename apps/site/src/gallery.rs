//! Gallery images with a one-shot placeholder for broken sources.

use dioxus::prelude::*;
use laulik_core::fallback::{ImageFallback, GALLERY_IMAGE_CLASS};
use tracing::warn;

#[component]
pub fn GalleryImage(src: String, alt: String, caption: Option<String>) -> Element {
    let mut fallback = use_signal(ImageFallback::default);
    let mut shown = use_signal(|| (src.clone(), alt.clone()));
    let (current_src, current_alt) = shown.read().clone();
    let marker = fallback.read().marker();

    rsx! {
        figure {
            class: "gallery-item",
            div {
                class: GALLERY_IMAGE_CLASS,
                img {
                    src: "{current_src}",
                    alt: "{current_alt}",
                    loading: "lazy",
                    "data-fallback-applied": marker,
                    onerror: move |_| {
                        // Marker first, so a failing placeholder can't loop.
                        let Some(sub) = fallback.write().on_error() else {
                            return;
                        };
                        warn!(src = src.as_str(), "Gallery image failed to load, using placeholder");
                        shown.set((sub.src, sub.alt.to_string()));
                    },
                }
            }
            if let Some(caption) = caption {
                figcaption { "{caption}" }
            }
        }
    }
}
