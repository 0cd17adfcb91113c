//! Placeholder for gallery images that fail to load.

/// Class of the container whose images get the fallback.
pub const GALLERY_IMAGE_CLASS: &str = "gallery-image";

pub const FALLBACK_ALT: &str = "Pilt puudub";
const FALLBACK_SUBTITLE: &str = "Ajalooline vaade";

const PLACEHOLDER_WIDTH: u32 = 400;
const PLACEHOLDER_HEIGHT: u32 = 300;

/// Fixed-size SVG drawing shown in place of a broken image.
pub fn placeholder_svg() -> String {
    let (w, h) = (PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT);
    let cx = w / 2;
    format!(
        concat!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"##,
            r##"<rect width="{w}" height="{h}" fill="#f0f0f0"/>"##,
            r##"<rect x="{fx}" y="{fy}" width="{fw}" height="{fh}" fill="none" stroke="#c8c8c8" stroke-width="2"/>"##,
            r##"<text x="{cx}" y="{t1}" font-family="sans-serif" font-size="20" fill="#777" text-anchor="middle">{title}</text>"##,
            r##"<text x="{cx}" y="{t2}" font-family="sans-serif" font-size="14" fill="#999" text-anchor="middle">{subtitle}</text>"##,
            "</svg>"
        ),
        w = w,
        h = h,
        fx = w / 8,
        fy = h / 8,
        fw = w * 3 / 4,
        fh = h * 3 / 4,
        cx = cx,
        t1 = h / 2,
        t2 = h / 2 + 28,
        title = FALLBACK_ALT,
        subtitle = FALLBACK_SUBTITLE,
    )
}

/// The placeholder as an inline `data:` URI usable as an image source.
pub fn placeholder_data_uri() -> String {
    format!("data:image/svg+xml;charset=UTF-8,{}", urlencoding::encode(&placeholder_svg()))
}

/// Replacement source and alt text for a failed image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub src: String,
    pub alt: &'static str,
}

/// Per-image marker guarding against repeated substitution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageFallback {
    applied: bool,
}

impl ImageFallback {
    pub fn is_applied(&self) -> bool {
        self.applied
    }

    /// Value for the image's `data-fallback-applied` attribute; absent until applied.
    pub fn marker(&self) -> Option<&'static str> {
        self.applied.then_some("true")
    }

    /// Handle a load failure. The marker is set before the substitution is
    /// handed out, so an error from the placeholder itself yields `None`.
    pub fn on_error(&mut self) -> Option<Substitution> {
        if self.applied {
            return None;
        }
        self.applied = true;
        Some(Substitution { src: placeholder_data_uri(), alt: FALLBACK_ALT })
    }
}
