pub const THEME_KEY: &str = "folio-theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Used when nothing (or something unreadable) is stored.
    pub const FALLBACK: Self = Self::Dark;

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

pub trait ThemeStore {
    fn load(&self) -> Option<Theme>;
    fn save(&self, theme: Theme);
}

/// Process-wide theme value. Only [`ThemePreference::toggle`] changes it, and every change is
/// written through to the store before it becomes visible.
#[derive(Clone, PartialEq)]
pub struct ThemePreference<S> {
    theme: Theme,
    store: S,
}

impl<S: ThemeStore> ThemePreference<S> {
    pub fn load(store: S) -> Self {
        let theme = store.load().unwrap_or(Theme::FALLBACK);
        Self { theme, store }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.theme.toggled();
        self.store.save(next);
        self.theme = next;
        next
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserThemeStore;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{Theme, ThemeStore, THEME_KEY};
    use web_sys::{window, Storage};

    #[derive(Clone, Copy, Default, PartialEq)]
    pub struct BrowserThemeStore;

    fn local_storage() -> Option<Storage> {
        window()?.local_storage().ok().flatten()
    }

    impl ThemeStore for BrowserThemeStore {
        fn load(&self) -> Option<Theme> {
            let value = local_storage()?.get_item(THEME_KEY).ok().flatten()?;
            Theme::parse(&value)
        }

        fn save(&self, theme: Theme) {
            if let Some(storage) = local_storage() {
                if storage.set_item(THEME_KEY, theme.as_str()).is_err() {
                    gloo::console::warn!("unable to persist theme preference");
                }
            }
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Keeps the stored value in memory; clones share the same slot.
    #[derive(Clone, Default)]
    pub struct MemoryThemeStore {
        slot: Rc<RefCell<Option<String>>>,
    }

    impl MemoryThemeStore {
        pub fn with_raw(value: &str) -> Self {
            Self {
                slot: Rc::new(RefCell::new(Some(value.to_string()))),
            }
        }

        pub fn raw(&self) -> Option<String> {
            self.slot.borrow().clone()
        }
    }

    impl PartialEq for MemoryThemeStore {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.slot, &other.slot)
        }
    }

    impl ThemeStore for MemoryThemeStore {
        fn load(&self) -> Option<Theme> {
            Theme::parse(self.slot.borrow().as_deref()?)
        }

        fn save(&self, theme: Theme) {
            *self.slot.borrow_mut() = Some(theme.as_str().to_string());
        }
    }

    #[test]
    fn missing_value_falls_back_to_dark() {
        let preference = ThemePreference::load(MemoryThemeStore::default());
        assert_eq!(preference.theme(), Theme::Dark);
    }

    #[test]
    fn unreadable_value_falls_back_to_dark() {
        let preference = ThemePreference::load(MemoryThemeStore::with_raw("sepia"));
        assert_eq!(preference.theme(), Theme::Dark);
    }

    #[test]
    fn stored_value_wins_over_fallback() {
        let preference = ThemePreference::load(MemoryThemeStore::with_raw("light"));
        assert_eq!(preference.theme(), Theme::Light);
    }

    #[test]
    fn toggling_twice_restores_value_and_keeps_store_in_sync() {
        let store = MemoryThemeStore::default();
        let mut preference = ThemePreference::load(store.clone());
        let original = preference.theme();

        let first = preference.toggle();
        assert_eq!(first, Theme::Light);
        assert_eq!(store.raw().as_deref(), Some(preference.theme().as_str()));

        let second = preference.toggle();
        assert_eq!(second, original);
        assert_eq!(store.raw().as_deref(), Some(preference.theme().as_str()));
    }

    #[test]
    fn toggle_label_names_the_next_theme() {
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
    }
}
