//! Same-page anchor links: which clicks to intercept and where to scroll.
//!
//! Sections register as they mount and links look their target up when
//! clicked, so a fragment resolves as soon as its section exists.

use std::collections::HashMap;

/// What to do with an activated link.
#[derive(Debug, PartialEq, Eq)]
pub enum AnchorAction<'a, H> {
    /// Not a same-page link; let the default navigation happen.
    Follow,
    /// Suppress the default jump. Scroll to the handle when the fragment
    /// names a registered element, otherwise do nothing.
    Intercept(Option<&'a H>),
}

/// Element id named by a same-page `href`, if it forms a valid id selector.
///
/// `"#"`, `"#1st"` and `"#a b"` have no usable target.
pub fn fragment_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    is_css_identifier(id).then_some(id)
}

fn is_css_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let first = match chars.next() {
        Some('-') => match chars.next() {
            Some(c) => c,
            None => return false,
        },
        Some(c) => c,
        None => return false,
    };
    if first.is_ascii_digit() {
        return false;
    }
    let ident_char = |c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii();
    ident_char(first) && chars.all(ident_char)
}

/// Scroll targets keyed by element id. `H` is whatever handle the UI layer
/// needs to scroll the element into view.
pub struct AnchorRegistry<H> {
    targets: HashMap<String, H>,
}

impl<H> Default for AnchorRegistry<H> {
    fn default() -> Self {
        Self { targets: HashMap::new() }
    }
}

impl<H> AnchorRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: impl Into<String>, handle: H) {
        self.targets.insert(id.into(), handle);
    }

    pub fn resolve(&self, href: &str) -> AnchorAction<'_, H> {
        if !href.starts_with('#') {
            return AnchorAction::Follow;
        }
        AnchorAction::Intercept(fragment_id(href).and_then(|id| self.targets.get(id)))
    }
}
