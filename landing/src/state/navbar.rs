//! Navbar appearance and mobile menu.
//!
//! Two independent signals feed this machine: the vertical scroll offset picks
//! the bar style, the viewport width can only ever close the menu. The toggle
//! button and link clicks are the only user inputs.

use crate::config::LandingConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Appearance {
    #[default]
    Transparent,
    Compact,
}

impl Appearance {
    pub fn css_class(self) -> &'static str {
        match self {
            Appearance::Transparent => "nav nav-transparent",
            Appearance::Compact => "nav nav-compact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavbarState {
    appearance: Appearance,
    menu_open: bool,
    scroll_threshold: f64,
    breakpoint: f64,
}

impl Default for NavbarState {
    fn default() -> Self {
        Self::new(&LandingConfig::default())
    }
}

impl NavbarState {
    pub fn new(config: &LandingConfig) -> Self {
        Self {
            appearance: Appearance::Transparent,
            menu_open: false,
            scroll_threshold: config.scroll_threshold,
            breakpoint: config.mobile_breakpoint,
        }
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Returns true when the appearance changed.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let next = if offset > self.scroll_threshold {
            Appearance::Compact
        } else {
            Appearance::Transparent
        };
        let changed = next != self.appearance;
        self.appearance = next;
        changed
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Closes the mobile menu once the viewport is wide enough for the
    /// desktop links. Returns true when the menu was closed by this call.
    pub fn on_resize(&mut self, width: f64) -> bool {
        if self.menu_open && width > self.breakpoint {
            self.menu_open = false;
            return true;
        }
        false
    }

    /// Following any menu link closes the menu.
    pub fn on_link_selected(&mut self) -> bool {
        std::mem::replace(&mut self.menu_open, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scroll_threshold_is_exclusive() {
        let mut nav = NavbarState::default();
        assert!(!nav.on_scroll(10.0));
        assert_eq!(nav.appearance(), Appearance::Transparent);
        assert!(nav.on_scroll(10.5));
        assert_eq!(nav.appearance(), Appearance::Compact);
        assert!(!nav.on_scroll(400.0));
        assert!(nav.on_scroll(0.0));
        assert_eq!(nav.appearance(), Appearance::Transparent);
    }

    #[test]
    fn resize_only_closes_an_open_menu() {
        let mut nav = NavbarState::default();
        assert!(!nav.on_resize(1200.0));
        assert!(!nav.menu_open());

        nav.toggle_menu();
        assert!(!nav.on_resize(768.0));
        assert!(nav.menu_open());
        assert!(nav.on_resize(769.0));
        assert!(!nav.menu_open());
    }

    #[test]
    fn narrow_viewport_never_opens_menu() {
        let mut nav = NavbarState::default();
        nav.on_resize(320.0);
        assert!(!nav.menu_open());
    }

    #[test]
    fn link_selection_closes_menu() {
        let mut nav = NavbarState::default();
        assert!(!nav.on_link_selected());
        nav.toggle_menu();
        assert!(nav.on_link_selected());
        assert!(!nav.menu_open());
    }

    #[test]
    fn scroll_and_menu_are_independent() {
        let mut nav = NavbarState::default();
        nav.toggle_menu();
        nav.on_scroll(50.0);
        assert!(nav.menu_open());
        assert_eq!(nav.appearance(), Appearance::Compact);
    }

    #[test]
    fn thresholds_follow_config() {
        let config = LandingConfig {
            scroll_threshold: 100.0,
            mobile_breakpoint: 1024.0,
            ..LandingConfig::default()
        };
        let mut nav = NavbarState::new(&config);
        nav.on_scroll(50.0);
        assert_eq!(nav.appearance(), Appearance::Transparent);
        nav.toggle_menu();
        assert!(!nav.on_resize(900.0));
        assert!(nav.on_resize(1100.0));
    }
}
