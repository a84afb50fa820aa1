//! Light/dark theme preference
//!
//! Persisted as a bare string under the `theme` key.

use serde::{Deserialize, Serialize};

use crate::platform::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "theme";

    /// Value of the `data-theme` attribute and the stored string
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Theme named by the current `data-theme` attribute; anything but
    /// `dark` counts as light, so the first toggle selects dark
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Toggle button glyph: the sun offers a way out of dark mode, the moon into it
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "\u{1F319}",
            Theme::Dark => "\u{2600}",
        }
    }

    /// Saved preference, if one was stored and is recognised
    pub fn load(store: &impl KeyValueStore) -> Option<Self> {
        let saved = store.get(Self::STORAGE_KEY)?;
        let theme = Self::from_str(&saved);
        if theme.is_none() {
            log::warn!("Ignoring unknown saved theme '{}'", saved);
        }
        theme
    }

    pub fn save(&self, store: &mut impl KeyValueStore) {
        store.set(Self::STORAGE_KEY, self.as_str());
        log::info!("Theme set to {}", self.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStore;

    #[test]
    fn test_toggle_from_missing_attribute_selects_dark() {
        assert_eq!(Theme::from_attribute(None).toggled(), Theme::Dark);
        assert_eq!(Theme::from_attribute(Some("dark")).toggled(), Theme::Light);
        assert_eq!(Theme::from_attribute(Some("sepia")), Theme::Light);
    }

    #[test]
    fn test_icons() {
        assert_eq!(Theme::Dark.icon(), "☀");
        assert_eq!(Theme::Light.icon(), "🌙");
    }

    #[test]
    fn test_load_and_save() {
        let mut store = MemoryStore::new();
        assert_eq!(Theme::load(&store), None);

        Theme::Dark.save(&mut store);
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
        assert_eq!(Theme::load(&store), Some(Theme::Dark));

        store.set("theme", "neon");
        assert_eq!(Theme::load(&store), None);
    }
}
