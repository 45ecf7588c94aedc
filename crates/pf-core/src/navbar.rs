//! Navbar style decision.
//!
//! Shared by the scroll handler and the theme toggle so both always agree
//! on what the navbar should look like for a given offset and theme.

use crate::config::PageConfig;
use crate::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarState {
    Expanded,
    Compact,
}

impl NavbarState {
    pub fn for_offset(scroll_offset: f64, config: &PageConfig) -> Self {
        if scroll_offset > config.navbar_compact_after {
            NavbarState::Compact
        } else {
            NavbarState::Expanded
        }
    }
}

/// Inline CSS values for the navbar element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarStyle {
    pub state: NavbarState,
    pub height: &'static str,
    pub background: &'static str,
    pub box_shadow: &'static str,
}

impl NavbarStyle {
    /// `(property, value)` pairs in the order they are written.
    pub fn properties(&self) -> [(&'static str, &'static str); 3] {
        [
            ("height", self.height),
            ("background", self.background),
            ("box-shadow", self.box_shadow),
        ]
    }
}

pub fn navbar_style(scroll_offset: f64, theme: Theme, config: &PageConfig) -> NavbarStyle {
    let state = NavbarState::for_offset(scroll_offset, config);
    let (height, background, box_shadow) = match (state, theme) {
        (NavbarState::Expanded, Theme::Light) => ("80px", "rgba(255, 255, 255, 0.85)", "none"),
        (NavbarState::Compact, Theme::Light) => {
            ("70px", "rgba(255, 255, 255, 0.95)", "0 4px 20px rgba(0,0,0,0.05)")
        }
        (NavbarState::Expanded, Theme::Dark) => ("80px", "rgba(15, 23, 42, 0.85)", "none"),
        (NavbarState::Compact, Theme::Dark) => {
            ("70px", "rgba(15, 23, 42, 0.95)", "0 4px 20px rgba(0,0,0,0.3)")
        }
    };
    NavbarStyle {
        state,
        height,
        background,
        box_shadow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_at_fifty_is_expanded() {
        let config = PageConfig::default();
        for offset in [0.0, 10.0, 49.9, 50.0] {
            let style = navbar_style(offset, Theme::Light, &config);
            assert_eq!(style.state, NavbarState::Expanded, "offset {offset}");
            assert_eq!(style.height, "80px");
            assert_eq!(style.box_shadow, "none");
        }
        for offset in [50.5, 51.0, 400.0, 10_000.0] {
            let style = navbar_style(offset, Theme::Light, &config);
            assert_eq!(style.state, NavbarState::Compact, "offset {offset}");
            assert_eq!(style.height, "70px");
        }
    }

    #[test]
    fn theme_changes_background_not_height() {
        let config = PageConfig::default();
        for offset in [0.0, 120.0] {
            let light = navbar_style(offset, Theme::Light, &config);
            let dark = navbar_style(offset, Theme::Dark, &config);
            assert_eq!(light.height, dark.height);
            assert_ne!(light.background, dark.background);
        }
    }

    #[test]
    fn toggling_twice_restores_style() {
        let config = PageConfig::default();
        let theme = Theme::Light;
        let before = navbar_style(75.0, theme, &config);
        let after = navbar_style(75.0, theme.toggled().toggled(), &config);
        assert_eq!(before, after);
    }

    #[test]
    fn respects_configured_threshold() {
        let config = PageConfig {
            navbar_compact_after: 200.0,
            ..PageConfig::default()
        };
        assert_eq!(navbar_style(150.0, Theme::Dark, &config).state, NavbarState::Expanded);
        assert_eq!(navbar_style(201.0, Theme::Dark, &config).state, NavbarState::Compact);
    }
}
