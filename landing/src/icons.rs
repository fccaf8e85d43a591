//! Inline SVG icons (Lucide, stroke style).
//!
//! Every glyph is drawn on a 24x24 grid as one or more stroked paths.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Camera,
    ShoppingCart,
    Utensils,
    Heart,
    Share,
    Check,
    ArrowRight,
    Rocket,
    Menu,
    Close,
    ChevronLeft,
    ChevronRight,
    Star,
    Quote,
}

impl Glyph {
    /// SVG path data (`d` attributes) for the glyph.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Glyph::Camera => &[
                "M14.5 4h-5L7 7H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2h-3l-2.5-3z",
                "M9 13a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
            ],
            Glyph::ShoppingCart => &[
                "M7 21a1 1 0 1 0 2 0a1 1 0 1 0-2 0",
                "M18 21a1 1 0 1 0 2 0a1 1 0 1 0-2 0",
                "M2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12",
            ],
            Glyph::Utensils => &[
                "M3 2v7c0 1.1.9 2 2 2h4a2 2 0 0 0 2-2V2",
                "M7 2v20",
                "M21 15V2a5 5 0 0 0-5 5v6c0 1.1.9 2 2 2h3Zm0 0v7",
            ],
            Glyph::Heart => &[
                "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
            ],
            Glyph::Share => &[
                "M15 5a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
                "M3 12a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
                "M15 19a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
                "M8.59 13.51l6.83 3.98",
                "M15.41 6.51l-6.82 3.98",
            ],
            Glyph::Check => &["M20 6 9 17l-5-5"],
            Glyph::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Glyph::Rocket => &[
                "M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z",
                "m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z",
                "M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0",
                "M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5",
            ],
            Glyph::Menu => &["M4 12h16", "M4 6h16", "M4 18h16"],
            Glyph::Close => &["M18 6 6 18", "m6 6 12 12"],
            Glyph::ChevronLeft => &["m15 18-6-6 6-6"],
            Glyph::ChevronRight => &["m9 18 6-6-6-6"],
            Glyph::Star => &[
                "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
            ],
            Glyph::Quote => &[
                "M3 21c3 0 7-1 7-8V5c0-1.25-.76-2-2-2H4c-1.25 0-2 .75-2 1.97V11c0 1.25.75 2 2 2 1 0 1 0 1 1v1c0 1-1 2-2 2s-1 0-1 1.03V20c0 1 0 1 1 1z",
                "M15 21c3 0 7-1 7-8V5c0-1.25-.76-2-2-2h-4c-1.25 0-2 .75-2 1.97V11c0 1.25.75 2 2 2h.75c0 2.25.25 4-2.75 4v3c0 1 0 1 1 1z",
            ],
        }
    }
}

/// Renders a glyph as an inline SVG.
///
/// ```rust,ignore
/// view! { <Icon glyph=Glyph::Camera size=48 class="feature-glyph" /> }
/// ```
#[component]
pub fn Icon(
    glyph: Glyph,
    /// Width and height in pixels
    #[prop(default = 24)]
    size: u32,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
    /// Fill the shape with the current color (used for rating stars)
    #[prop(default = false)]
    filled: bool,
) -> impl IntoView {
    let fill = if filled { "currentColor" } else { "none" };
    let px = size.to_string();
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=px.clone()
            height=px
            viewBox="0 0 24 24"
            fill=fill
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {glyph.paths().iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_glyph_has_path_data() {
        let all = [
            Glyph::Camera,
            Glyph::ShoppingCart,
            Glyph::Utensils,
            Glyph::Heart,
            Glyph::Share,
            Glyph::Check,
            Glyph::ArrowRight,
            Glyph::Rocket,
            Glyph::Menu,
            Glyph::Close,
            Glyph::ChevronLeft,
            Glyph::ChevronRight,
            Glyph::Star,
            Glyph::Quote,
        ];
        for glyph in all {
            let paths = glyph.paths();
            assert!(!paths.is_empty(), "{glyph:?} has no paths");
            assert!(paths.iter().all(|d| d.starts_with(['M', 'm'])), "{glyph:?}");
        }
    }
}
