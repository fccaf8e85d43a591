//! Copy and artwork for every section.
//!
//! Everything here is fixed at compile time. Components render these slices
//! directly; nothing mutates them.

use crate::icons::Glyph;

pub const BRAND_ACCENT: &str = "Smart";
pub const BRAND_REST: &str = "Recipe";

pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// In-page section links, shared by the desktop bar, mobile menu and footer.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        href: "#features",
        label: "Features",
    },
    NavLink {
        href: "#how-it-works",
        label: "How It Works",
    },
    NavLink {
        href: "#testimonials",
        label: "Testimonials",
    },
];

pub const BETA_LINK: NavLink = NavLink {
    href: "#beta-tester",
    label: "Beta Program",
};

pub const DOWNLOAD_LINK: NavLink = NavLink {
    href: "#download",
    label: "Download App",
};

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: &[Stat] = &[
    Stat {
        value: "15K+",
        label: "Active Users",
    },
    Stat {
        value: "50K+",
        label: "Recipes Saved",
    },
    Stat {
        value: "4.8/5",
        label: "App Rating",
    },
];

pub const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1606787366850-de6330128bfc?ixlib=rb-4.0.3&auto=format&fit=crop&w=2070&q=80";
pub const HOW_IT_WORKS_IMAGE: &str = "https://images.unsplash.com/photo-1567620905732-2d1ec7ab7445?ixlib=rb-4.0.3&auto=format&fit=crop&w=1980&q=80";
pub const NEWSLETTER_IMAGE: &str = "https://images.unsplash.com/photo-1498837167922-ddd27525d352?ixlib=rb-4.0.3&auto=format&fit=crop&w=2070&q=80";

pub struct Feature {
    pub icon: Glyph,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: Glyph::Camera,
        title: "Multi-modal Recipe Input",
        description: "Add recipes via photo, video, or voice. Our AI identifies ingredients and instructions automatically.",
    },
    Feature {
        icon: Glyph::ShoppingCart,
        title: "Smart Shopping Lists",
        description: "Generate shopping lists automatically. Organize by store section and find the best prices.",
    },
    Feature {
        icon: Glyph::Utensils,
        title: "Nutritional Analysis",
        description: "Get detailed nutritional information for every recipe. Track calories, macros, and dietary preferences.",
    },
    Feature {
        icon: Glyph::Heart,
        title: "Personalized Recommendations",
        description: "Discover new recipes based on your preferences, dietary restrictions, and cooking habits.",
    },
    Feature {
        icon: Glyph::Share,
        title: "Social Sharing",
        description: "Share your culinary creations with friends and family. Discover popular recipes from our community.",
    },
];

pub struct Step {
    pub icon: Glyph,
    pub title: &'static str,
    pub description: &'static str,
    /// Modifier class for the numbered badge.
    pub color: &'static str,
}

pub const STEPS: &[Step] = &[
    Step {
        icon: Glyph::Camera,
        title: "Capture Your Recipe",
        description: "Take a photo of a recipe, record a video, or use voice input. Our AI understands and processes the information.",
        color: "step-badge-primary",
    },
    Step {
        icon: Glyph::Utensils,
        title: "Get Detailed Breakdown",
        description: "View ingredients, instructions, nutritional information, and estimated costs for your recipe.",
        color: "step-badge-accent",
    },
    Step {
        icon: Glyph::ShoppingCart,
        title: "Shop Intelligently",
        description: "Generate a smart shopping list organized by store sections with price comparisons and suggestions.",
        color: "step-badge-secondary",
    },
    Step {
        icon: Glyph::Check,
        title: "Cook with Confidence",
        description: "Follow step-by-step instructions, set timers, and get helpful tips while you cook your meal.",
        color: "step-badge-primary",
    },
];

/// Star rating, 1 to 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating(u8);

impl Rating {
    pub const MAX: u8 = 5;

    /// Checked at compile time when used in a `const`.
    pub const fn new(stars: u8) -> Self {
        assert!(stars >= 1 && stars <= Self::MAX, "rating must be within 1..=5");
        Self(stars)
    }

    pub fn stars(self) -> u8 {
        self.0
    }
}

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub avatar_url: &'static str,
    pub rating: Rating,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "SmartRecipe turned a camera roll full of recipe screenshots into an actual cookbook. The shopping lists alone save me an hour every week.",
        author: "Sarah Johnson",
        role: "Busy Parent",
        avatar_url: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?auto=format&fit=crop&w=150&q=80",
        rating: Rating::new(5),
    },
    Testimonial {
        quote: "I snapped a photo of my grandmother's handwritten card and it pulled out every ingredient. The nutrition breakdown is a bonus.",
        author: "Michael Chen",
        role: "Home Cook",
        avatar_url: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?auto=format&fit=crop&w=150&q=80",
        rating: Rating::new(5),
    },
    Testimonial {
        quote: "I recommend it to clients who want to keep an eye on macros without weighing every single meal.",
        author: "Elena Rodriguez",
        role: "Nutritionist",
        avatar_url: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?auto=format&fit=crop&w=150&q=80",
        rating: Rating::new(4),
    },
    Testimonial {
        quote: "Step-by-step mode with built-in timers keeps weeknight dinners calm. My kids now ask to cook with me.",
        author: "David Thompson",
        role: "Weekend Chef",
        avatar_url: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?auto=format&fit=crop&w=150&q=80",
        rating: Rating::new(5),
    },
];

pub enum Store {
    AppStore,
    GooglePlay,
}

pub struct StoreLink {
    pub store: Store,
    pub href: &'static str,
    pub caption: &'static str,
    pub name: &'static str,
}

/// Placeholder targets until the app ships.
pub const STORE_LINKS: &[StoreLink] = &[
    StoreLink {
        store: Store::AppStore,
        href: "#",
        caption: "Download on the",
        name: "App Store",
    },
    StoreLink {
        store: Store::GooglePlay,
        href: "#",
        caption: "GET IT ON",
        name: "Google Play",
    },
];

pub struct NoticeText {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SUBSCRIBED_NOTICE: NoticeText = NoticeText {
    title: "Successfully subscribed!",
    description: "You'll now receive our latest updates and exclusive offers.",
};

pub const APPLICATION_NOTICE: NoticeText = NoticeText {
    title: "Application received!",
    description: "Thank you for applying to be a beta tester. We'll be in touch soon!",
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn content_counts() {
        assert_eq!(FEATURES.len(), 5);
        assert_eq!(STEPS.len(), 4);
        assert_eq!(HERO_STATS.len(), 3);
        assert!(!TESTIMONIALS.is_empty());
    }

    #[test]
    fn ratings_are_in_range() {
        for t in TESTIMONIALS {
            assert!((1..=Rating::MAX).contains(&t.rating.stars()), "{}", t.author);
        }
    }

    #[test]
    fn nav_targets_are_anchors() {
        let ids: Vec<_> = NAV_LINKS.iter().map(|l| l.href).collect();
        assert_eq!(ids, vec!["#features", "#how-it-works", "#testimonials"]);
        assert_eq!(DOWNLOAD_LINK.href, "#download");
        assert_eq!(BETA_LINK.href, "#beta-tester");
    }
}
