//! Light/dark theme state.

use crate::error::StoreError;
use crate::storage::{KeyValueStore, keys};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Interpret a stored value. Anything other than `"dark"` is light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Indicator glyph for the toggle button: the theme a click switches to.
    pub fn glyph(self) -> &'static str {
        match self {
            Theme::Light => "\u{263E}",
            Theme::Dark => "\u{2600}",
        }
    }

    pub fn load(store: &impl KeyValueStore) -> Result<Self, StoreError> {
        Ok(Self::from_stored(store.get(keys::THEME)?.as_deref()))
    }

    pub fn save(self, store: &impl KeyValueStore) -> Result<(), StoreError> {
        store.set(keys::THEME, self.as_str())
    }

    /// Flip the theme and persist the result.
    pub fn toggle_persisted(self, store: &impl KeyValueStore) -> Result<Self, StoreError> {
        let next = self.toggled();
        next.save(store)?;
        Ok(next)
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageConfig;
    use crate::navbar::navbar_style;
    use crate::storage::InMemoryStore;

    #[test]
    fn defaults_to_light() -> Result<(), StoreError> {
        let store = InMemoryStore::new();
        assert_eq!(Theme::load(&store)?, Theme::Light);
        store.set(keys::THEME, "sepia")?;
        assert_eq!(Theme::load(&store)?, Theme::Light);
        Ok(())
    }

    #[test]
    fn toggle_twice_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn persists_as_plain_string() -> Result<(), StoreError> {
        let store = InMemoryStore::new();
        Theme::Dark.save(&store)?;
        assert_eq!(store.get(keys::THEME)?.as_deref(), Some("dark"));
        assert_eq!(Theme::load(&store)?, Theme::Dark);
        Ok(())
    }

    #[test]
    fn two_persisted_toggles_restore_store_and_navbar() -> Result<(), StoreError> {
        let store = InMemoryStore::new();
        let config = PageConfig::default();
        let start = Theme::load(&store)?;
        let before = navbar_style(120.0, start, &config);

        let dark = start.toggle_persisted(&store)?;
        assert_eq!(dark, Theme::Dark);
        assert_eq!(store.get(keys::THEME)?.as_deref(), Some("dark"));
        assert_ne!(navbar_style(120.0, dark, &config), before);

        let back = Theme::load(&store)?.toggle_persisted(&store)?;
        assert_eq!(back, start);
        assert_eq!(store.get(keys::THEME)?.as_deref(), Some("light"));
        assert_eq!(navbar_style(120.0, Theme::load(&store)?, &config), before);
        Ok(())
    }

    #[test]
    fn glyph_differs_per_theme() {
        assert_ne!(Theme::Light.glyph(), Theme::Dark.glyph());
    }
}
