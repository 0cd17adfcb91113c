//! Page scrolling helpers: smooth same-page anchors and reveal-on-scroll cards.

mod anchor;
mod reveal;

pub use anchor::{AnchorLink, AnchorSection};
pub use reveal::RevealCard;
