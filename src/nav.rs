use crate::config::{DESKTOP_BREAKPOINT_PX, NAVBAR_OFFSET_PX};

const NAVBAR_SOLID_AFTER_PX: f64 = 100.0;
const NAVBAR_BACKGROUND_SOLID: &str = "rgba(10, 10, 10, 0.95)";
const NAVBAR_BACKGROUND_TRANSLUCENT: &str = "rgba(10, 10, 10, 0.9)";
const PARALLAX_FACTOR: f64 = 0.5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    menu_open: bool,
}

impl NavState {
    pub fn is_open(self) -> bool {
        self.menu_open
    }

    pub fn toggle(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Returns whether the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.menu_open, false)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollAppearance {
    pub navbar_background: &'static str,
    pub parallax_offset: f64,
}

impl Default for ScrollAppearance {
    fn default() -> Self {
        Self {
            navbar_background: NAVBAR_BACKGROUND_TRANSLUCENT,
            parallax_offset: 0.0,
        }
    }
}

impl ScrollAppearance {
    /// The parallax offset only tracks the scroll while the hero is still on screen;
    /// past that it keeps its last value.
    pub fn update(&mut self, scroll_y: f64, viewport_height: f64) {
        self.navbar_background = navbar_background(scroll_y);
        if let Some(offset) = parallax_offset(scroll_y, viewport_height) {
            self.parallax_offset = offset;
        }
    }
}

pub fn navbar_background(scroll_y: f64) -> &'static str {
    if scroll_y > NAVBAR_SOLID_AFTER_PX {
        NAVBAR_BACKGROUND_SOLID
    } else {
        NAVBAR_BACKGROUND_TRANSLUCENT
    }
}

pub fn parallax_offset(scroll_y: f64, viewport_height: f64) -> Option<f64> {
    (scroll_y < viewport_height).then_some(scroll_y * PARALLAX_FACTOR)
}

pub fn closes_menu_at_width(viewport_width: f64) -> bool {
    viewport_width > DESKTOP_BREAKPOINT_PX
}

/// Scroll target for a section, leaving room for the fixed navbar.
pub fn section_scroll_top(section_offset_top: f64) -> f64 {
    section_offset_top - NAVBAR_OFFSET_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_and_close() {
        let mut nav = NavState::default();

        assert!(nav.toggle());
        assert!(nav.close());
        assert!(!nav.close());
        assert!(!nav.is_open());
    }

    #[test]
    fn navbar_turns_solid_past_threshold() {
        assert_eq!(navbar_background(100.0), NAVBAR_BACKGROUND_TRANSLUCENT);
        assert_eq!(navbar_background(100.5), NAVBAR_BACKGROUND_SOLID);
    }

    #[test]
    fn parallax_freezes_below_the_fold() {
        let mut appearance = ScrollAppearance::default();

        appearance.update(400.0, 900.0);
        assert_eq!(appearance.parallax_offset, 200.0);

        appearance.update(1_200.0, 900.0);
        assert_eq!(appearance.parallax_offset, 200.0);
        assert_eq!(appearance.navbar_background, NAVBAR_BACKGROUND_SOLID);
    }

    #[test]
    fn breakpoint_is_exclusive() {
        assert!(!closes_menu_at_width(768.0));
        assert!(closes_menu_at_width(769.0));
    }

    #[test]
    fn section_offset_accounts_for_navbar() {
        assert_eq!(section_scroll_top(1_000.0), 930.0);
    }
}
