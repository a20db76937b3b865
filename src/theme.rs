//! Dark mode state, split from the browser so it can be driven in tests.

pub const MODE_KEY: &str = "mode";
pub const DARK_MODE: &str = "dark-mode";

/// Persistent string key-value store, `localStorage` in the browser.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// Class list of the root visual element, `document.body` in the browser.
pub trait RootElement {
    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
    fn has_class(&self, class: &str) -> bool;
}

pub struct Theme<S, R> {
    store: S,
    root: R,
}

impl<S, R> Theme<S, R>
where
    S: PreferenceStore,
    R: RootElement,
{
    pub fn new(store: S, root: R) -> Self {
        Theme { store, root }
    }

    /// Restore the stored mode on page load. A stored value is applied as a
    /// class verbatim; absent or empty means the default light mode.
    pub fn initialize(&mut self) {
        if let Some(mode) = self.store.get(MODE_KEY).filter(|m| !m.is_empty()) {
            tracing::info!("restoring mode {mode:?}");
            self.root.add_class(&mode);
        }
    }

    /// Flip the dark mode class, persist whichever mode the flip landed on
    /// and return it. A failed write keeps the visual flip.
    pub fn toggle(&mut self) -> bool {
        if self.root.has_class(DARK_MODE) {
            self.root.remove_class(DARK_MODE);
        } else {
            self.root.add_class(DARK_MODE);
        }
        let dark = self.root.has_class(DARK_MODE);
        let mode = if dark { DARK_MODE } else { "" };
        if let Err(e) = self.store.set(MODE_KEY, mode) {
            tracing::warn!("failed to persist mode {mode:?}: {e:#}");
        }
        dark
    }

    pub fn is_dark(&self) -> bool {
        self.root.has_class(DARK_MODE)
    }
}

#[cfg(test)]
#[derive(Default)]
struct MemStore(std::collections::HashMap<String, String>);

#[cfg(test)]
impl PreferenceStore for MemStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.0.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// Store with storage disabled, every read absent and every write refused.
#[cfg(test)]
struct NoStore;

#[cfg(test)]
impl PreferenceStore for NoStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, _key: &str, _value: &str) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("no local storage"))
    }
}

#[cfg(test)]
#[derive(Default)]
struct Classes(Vec<String>);

#[cfg(test)]
impl RootElement for Classes {
    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.0.push(class.to_string());
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.0.retain(|c| c != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }
}

#[test]
fn test_initialize_restores_stored_mode() {
    let _ = tracing_subscriber::fmt::try_init();

    let mut store = MemStore::default();
    store.set(MODE_KEY, DARK_MODE).unwrap();
    let mut theme = Theme::new(store, Classes::default());
    theme.initialize();
    assert!(theme.is_dark());

    let mut store = MemStore::default();
    store.set(MODE_KEY, "").unwrap();
    let mut theme = Theme::new(store, Classes::default());
    theme.initialize();
    assert!(!theme.is_dark());
}

#[test]
fn test_initialize_with_empty_store() {
    let _ = tracing_subscriber::fmt::try_init();

    let mut theme = Theme::new(MemStore::default(), Classes::default());
    theme.initialize();
    assert!(!theme.is_dark());
    assert!(theme.root.0.is_empty());
}

#[test]
fn test_initialize_without_storage() {
    let _ = tracing_subscriber::fmt::try_init();

    let mut theme = Theme::new(NoStore, Classes::default());
    theme.initialize();
    assert!(!theme.is_dark());
}

#[test]
fn test_toggle_flips_and_persists() {
    use pretty_assertions::assert_eq;

    let _ = tracing_subscriber::fmt::try_init();

    let mut theme = Theme::new(MemStore::default(), Classes::default());
    assert!(theme.toggle());
    assert!(theme.is_dark());
    assert_eq!(theme.store.get(MODE_KEY), Some(DARK_MODE.to_string()));

    assert!(!theme.toggle());
    assert!(!theme.is_dark());
    assert_eq!(theme.store.get(MODE_KEY), Some("".to_string()));
}

#[test]
fn test_toggle_twice_is_identity() {
    use pretty_assertions::assert_eq;

    let _ = tracing_subscriber::fmt::try_init();

    let mut store = MemStore::default();
    store.set(MODE_KEY, DARK_MODE).unwrap();
    let mut theme = Theme::new(store, Classes::default());
    theme.initialize();

    theme.toggle();
    theme.toggle();
    assert!(theme.is_dark());
    assert_eq!(theme.store.get(MODE_KEY), Some(DARK_MODE.to_string()));
}

#[test]
fn test_toggle_without_storage() {
    let _ = tracing_subscriber::fmt::try_init();

    let mut theme = Theme::new(NoStore, Classes::default());
    assert!(theme.toggle());
    assert!(theme.is_dark());
    assert!(!theme.toggle());
    assert!(!theme.is_dark());
}

#[test]
fn test_stored_value_applied_verbatim() {
    use pretty_assertions::assert_eq;

    let _ = tracing_subscriber::fmt::try_init();

    let mut store = MemStore::default();
    store.set(MODE_KEY, "sepia").unwrap();
    let mut theme = Theme::new(store, Classes::default());
    theme.initialize();
    assert!(theme.root.has_class("sepia"));
    assert!(!theme.is_dark());

    // the first toggle writes a canonical mode back
    assert!(theme.toggle());
    assert_eq!(theme.store.get(MODE_KEY), Some(DARK_MODE.to_string()));
    assert!(theme.root.has_class("sepia"));
}

#[test]
fn test_reload_restores_toggled_mode() {
    use pretty_assertions::assert_eq;

    let _ = tracing_subscriber::fmt::try_init();

    let mut theme = Theme::new(MemStore::default(), Classes::default());
    theme.initialize();
    assert!(!theme.is_dark());
    assert!(theme.toggle());
    assert_eq!(theme.store.get(MODE_KEY), Some(DARK_MODE.to_string()));

    // reload drops the DOM but keeps the store
    let mut theme = Theme::new(theme.store, Classes::default());
    theme.initialize();
    assert!(theme.is_dark());
}
