//! Fade-in of content cards as they scroll into view.
//!
//! Cards start transparent and shifted down. Once the visible share of a card
//! inside the viewport (shrunk by the bottom margin) reaches the threshold, the
//! card is revealed and never evaluated again.

/// Card classes that take part in the reveal animation.
pub const REVEAL_CLASSES: &[&str] = &["news-item", "event-card", "culture-item", "category-card"];

pub fn is_reveal_class(class: &str) -> bool {
    class.split_whitespace().any(|c| REVEAL_CLASSES.contains(&c))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    /// Visible fraction of the card needed to reveal it.
    pub threshold: f64,
    /// Added to the viewport's bottom edge; negative values shrink it.
    pub root_margin_bottom: f64,
    /// Initial downward offset in pixels.
    pub offset_px: f64,
    pub transition_secs: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self { threshold: 0.1, root_margin_bottom: -50.0, offset_px: 20.0, transition_secs: 0.5 }
    }
}

/// Axis-aligned rectangle in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    fn right(&self) -> f64 {
        self.x + self.width
    }

    fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Share of `target` inside `root` after applying the bottom margin, in `0.0..=1.0`.
pub fn intersection_ratio(target: Rect, root: Rect, opts: &RevealOptions) -> f64 {
    let root_bottom = root.bottom() + opts.root_margin_bottom;

    let left = target.x.max(root.x);
    let right = target.right().min(root.right());
    let top = target.y.max(root.y);
    let bottom = target.bottom().min(root_bottom);

    if right < left || bottom < top {
        return 0.0;
    }

    let area = target.width * target.height;
    if area <= 0.0 {
        // Zero-area cards count as fully visible once they touch the viewport.
        return 1.0;
    }
    ((right - left) * (bottom - top) / area).clamp(0.0, 1.0)
}

/// Reveal state of one card.
#[derive(Debug, Clone, Default)]
pub struct Reveal {
    opts: RevealOptions,
    revealed: bool,
}

impl Reveal {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Evaluate a visibility report. Returns `true` only on the call that reveals.
    pub fn observe(&mut self, target: Rect, root: Rect) -> bool {
        if self.revealed {
            return false;
        }
        if intersection_ratio(target, root, &self.opts) >= self.opts.threshold {
            self.revealed = true;
            return true;
        }
        false
    }

    /// Force the revealed state, for runtimes that only report a bare
    /// "intersecting" flag without geometry.
    pub fn mark_revealed(&mut self) -> bool {
        !std::mem::replace(&mut self.revealed, true)
    }

    /// Inline style for the card's current state.
    pub fn style(&self) -> String {
        let transition = format!(
            "transition: opacity {secs}s ease, transform {secs}s ease;",
            secs = self.opts.transition_secs
        );
        if self.revealed {
            format!("opacity: 1; transform: translateY(0); {transition}")
        } else {
            format!("opacity: 0; transform: translateY({}px); {transition}", self.opts.offset_px)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect { x: 0.0, y: 0.0, width: 1000.0, height: 800.0 };

    fn card_at(y: f64) -> Rect {
        Rect::new(100.0, y, 300.0, 200.0)
    }

    #[test]
    fn fully_visible_card_has_ratio_one() {
        let ratio = intersection_ratio(card_at(100.0), VIEWPORT, &RevealOptions::default());
        assert_eq!(ratio, 1.0);
    }

    #[test]
    fn bottom_margin_shrinks_the_viewport() {
        // Top 30px of the card are inside the raw viewport but all inside the 50px margin.
        let ratio = intersection_ratio(card_at(770.0), VIEWPORT, &RevealOptions::default());
        assert_eq!(ratio, 0.0);
    }

    #[test]
    fn threshold_is_ten_percent() {
        let mut below = Reveal::default();
        // 19px of 200px visible above the margin line at 750.
        assert!(!below.observe(card_at(731.0), VIEWPORT));

        let mut at = Reveal::default();
        // Exactly 20px of 200px.
        assert!(at.observe(card_at(730.0), VIEWPORT));
        assert!(at.is_revealed());
    }

    #[test]
    fn entering_card_reveals_on_a_later_scroll_check() {
        let mut r = Reveal::default();
        // First report arrives as the top edge crosses the raw viewport bottom.
        assert!(!r.observe(card_at(799.0), VIEWPORT));
        // Scroll re-checks while the card moves up.
        assert!(!r.observe(card_at(760.0), VIEWPORT));
        assert!(!r.observe(card_at(740.0), VIEWPORT));
        assert!(r.observe(card_at(700.0), VIEWPORT));
        assert!(r.is_revealed());
    }

    #[test]
    fn reveal_is_one_way() {
        let mut r = Reveal::default();
        assert!(r.observe(card_at(100.0), VIEWPORT));
        assert!(!r.observe(card_at(5000.0), VIEWPORT));
        assert!(r.is_revealed());
        assert!(r.style().starts_with("opacity: 1; transform: translateY(0);"));
    }

    #[test]
    fn initial_style_is_hidden_and_offset() {
        assert_eq!(
            Reveal::default().style(),
            "opacity: 0; transform: translateY(20px); transition: opacity 0.5s ease, transform 0.5s ease;"
        );
    }

    #[test]
    fn mark_revealed_reports_first_time_only() {
        let mut r = Reveal::default();
        assert!(r.mark_revealed());
        assert!(!r.mark_revealed());
    }

    #[test]
    fn class_matching() {
        assert!(is_reveal_class("card news-item"));
        assert!(is_reveal_class("category-card"));
        assert!(!is_reveal_class("news-items"));
    }
}
