//! Light/dark theme and its persisted preference.

use serde::{Deserialize, Serialize};

use crate::storage::PreferenceStore;

/// Storage key of the theme preference.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than `light` or `dark` is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// The active theme, backed by a preference store.
///
/// A stored choice always beats the system theme. Storage failures are
/// logged and otherwise ignored: the theme still changes for this session.
pub struct ThemePreference<S: PreferenceStore> {
    store: S,
    theme: Theme,
    stored: bool,
}

impl<S: PreferenceStore> ThemePreference<S> {
    /// Resolve the initial theme from `store`, falling back to `system`, then dark.
    pub fn load(store: S, system: Option<Theme>) -> Self {
        let stored = match store.get(THEME_KEY) {
            Ok(Some(value)) => {
                let parsed = Theme::parse(&value);
                if parsed.is_none() {
                    log::warn!("Ignoring unknown stored theme {:?}", value);
                }
                parsed
            }
            Ok(None) => None,
            Err(e) => {
                log::warn!("Failed to read theme preference: {}", e);
                None
            }
        };

        let (theme, source) = match (stored, system) {
            (Some(theme), _) => (theme, "stored"),
            (None, Some(theme)) => (theme, "system"),
            (None, None) => (Theme::default(), "default"),
        };
        log::info!("Theme: {} ({})", theme.as_str(), source);

        Self {
            store,
            theme,
            stored: stored.is_some(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Whether the user has made an explicit choice.
    pub fn is_stored(&self) -> bool {
        self.stored
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggle());
        self.theme
    }

    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        self.stored = true;
        if let Err(e) = self.store.set(THEME_KEY, theme.as_str()) {
            log::warn!("Failed to save theme preference: {}", e);
        }
    }

    /// Track a system theme change. Ignored once the user has chosen a theme.
    pub fn follow_system(&mut self, system: Theme) {
        if !self.stored {
            self.theme = system;
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, StorageError, StorageResult};

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Io("disk on fire".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Io("disk on fire".to_string()))
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("solarized"), None);
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
    }

    #[test]
    fn test_defaults_to_dark() {
        let preference = ThemePreference::load(MemoryStore::new(), None);
        assert_eq!(preference.theme(), Theme::Dark);
        assert!(!preference.is_stored());
    }

    #[test]
    fn test_system_theme_without_stored_value() {
        let preference = ThemePreference::load(MemoryStore::new(), Some(Theme::Light));
        assert_eq!(preference.theme(), Theme::Light);
    }

    #[test]
    fn test_stored_value_wins() {
        let store = MemoryStore::new();
        store.set(THEME_KEY, "light").unwrap();
        let mut preference = ThemePreference::load(store, Some(Theme::Dark));
        assert_eq!(preference.theme(), Theme::Light);

        preference.follow_system(Theme::Dark);
        assert_eq!(preference.theme(), Theme::Light);
    }

    #[test]
    fn test_unknown_stored_value_falls_back() {
        let store = MemoryStore::new();
        store.set(THEME_KEY, "sepia").unwrap();
        let preference = ThemePreference::load(store, Some(Theme::Light));
        assert_eq!(preference.theme(), Theme::Light);
        assert!(!preference.is_stored());
    }

    #[test]
    fn test_toggle_persists() {
        let mut preference = ThemePreference::load(MemoryStore::new(), None);
        assert_eq!(preference.toggle(), Theme::Light);
        assert_eq!(preference.store().get(THEME_KEY).unwrap().as_deref(), Some("light"));

        preference.toggle();
        assert_eq!(preference.store().get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_follow_system_until_chosen() {
        let mut preference = ThemePreference::load(MemoryStore::new(), Some(Theme::Dark));
        preference.follow_system(Theme::Light);
        assert_eq!(preference.theme(), Theme::Light);

        preference.set(Theme::Dark);
        preference.follow_system(Theme::Light);
        assert_eq!(preference.theme(), Theme::Dark);
    }

    #[test]
    fn test_broken_store_still_toggles() {
        let mut preference = ThemePreference::load(BrokenStore, Some(Theme::Light));
        assert_eq!(preference.theme(), Theme::Light);
        assert_eq!(preference.toggle(), Theme::Dark);
    }
}
