use std::cell::RefCell;
use std::collections::HashMap;

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Dark => "☀",
            Self::Light => "☾",
        }
    }
}

/// Key-value preference storage. Reads yield `None` for absent or unreadable
/// values; writes are best-effort and never surface a failure.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

pub fn load_theme(store: &dyn PreferenceStore) -> Theme {
    store
        .read(THEME_KEY)
        .as_deref()
        .and_then(Theme::from_str)
        .unwrap_or(Theme::Dark)
}

pub fn persist_theme(store: &dyn PreferenceStore, theme: Theme) {
    store.write(THEME_KEY, theme.as_str());
}

/// Class edit that keeps exactly one of `dark`/`light` on an anchor element.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ClassSwap {
    pub add: &'static str,
    pub remove: &'static str,
}

pub fn class_swap(theme: Theme) -> ClassSwap {
    ClassSwap {
        add: theme.as_str(),
        remove: theme.toggled().as_str(),
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{class_swap, PreferenceStore, Theme};
    use web_sys::{window, Storage};

    pub struct LocalStorageStore;

    fn local_storage() -> Option<Storage> {
        window()?.local_storage().ok().flatten()
    }

    impl PreferenceStore for LocalStorageStore {
        fn read(&self, key: &str) -> Option<String> {
            local_storage()?.get_item(key).ok().flatten()
        }

        fn write(&self, key: &str, value: &str) {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
    }

    /// Mirrors the theme onto both styling anchors: the document element and
    /// the body.
    pub fn apply_theme(theme: Theme) {
        let Some(document) = window().and_then(|w| w.document()) else {
            return;
        };

        let swap = class_swap(theme);

        if let Some(root) = document.document_element() {
            let classes = root.class_list();
            let _ = classes.remove_1(swap.remove);
            let _ = classes.add_1(swap.add);
        }

        if let Some(body) = document.body() {
            let classes = body.class_list();
            let _ = classes.remove_1(swap.remove);
            let _ = classes.add_1(swap.add);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::{apply_theme, LocalStorageStore};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_defaults_to_dark() {
        let store = MemoryStore::default();

        assert_eq!(load_theme(&store), Theme::Dark);
    }

    #[test]
    fn garbage_stored_value_defaults_to_dark() {
        let store = MemoryStore::default();
        store.write(THEME_KEY, "sepia");

        assert_eq!(load_theme(&store), Theme::Dark);
    }

    #[test]
    fn toggle_from_default_persists_light() {
        let store = MemoryStore::default();
        let theme = load_theme(&store);
        assert_eq!(theme, Theme::Dark);

        let next = theme.toggled();
        persist_theme(&store, next);

        assert_eq!(next, Theme::Light);
        assert_eq!(store.read(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(load_theme(&store), Theme::Light);
    }

    #[test]
    fn odd_toggle_count_yields_complement() {
        for start in [Theme::Dark, Theme::Light] {
            let mut theme = start;
            for _ in 0..5 {
                theme = theme.toggled();
            }
            assert_eq!(theme, start.toggled());

            theme = theme.toggled();
            assert_eq!(theme, start);
        }
    }

    #[test]
    fn class_swap_keeps_exactly_one_theme_class() {
        for theme in [Theme::Dark, Theme::Light] {
            let swap = class_swap(theme);

            assert_ne!(swap.add, swap.remove);
            assert_eq!(swap.add, theme.as_str());
            assert!(["dark", "light"].contains(&swap.add));
            assert!(["dark", "light"].contains(&swap.remove));
        }
    }

    #[test]
    fn stored_values_round_trip() {
        assert_eq!(Theme::from_str("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_str("light"), Some(Theme::Light));
        assert_eq!(Theme::from_str("DARK"), None);
        assert_eq!(Theme::from_str(""), None);
    }
}
