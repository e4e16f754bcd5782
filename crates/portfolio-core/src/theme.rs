//! Theme preference
//!
//! A single persisted string selects light or dark presentation. On load the
//! stored value is reapplied; on a first visit the configured default is
//! applied and written back so later visits see the same theme.
//!
//! | Stored value | Applied | Written |
//! |--------------|---------|---------|
//! | none / `""`  | default | default |
//! | `"dark"`     | Dark    | -       |
//! | anything else| Light   | -       |

use std::cell::{Cell, RefCell};
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};

/// Visual presentation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// String form persisted in the store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a persisted value. Only the exact strings are accepted.
    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// The opposite theme.
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Class set on the document root, if any.
    pub fn root_class(&self) -> Option<&'static str> {
        match self {
            Theme::Light => None,
            Theme::Dark => Some("dark"),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of reading the persisted preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeResolution {
    /// A preference was stored and is reapplied as-is
    Stored(Theme),
    /// Nothing was stored; the default applies and must be persisted
    Defaulted(Theme),
}

impl ThemeResolution {
    pub fn theme(&self) -> Theme {
        match self {
            ThemeResolution::Stored(theme) | ThemeResolution::Defaulted(theme) => *theme,
        }
    }

    pub fn needs_persist(&self) -> bool {
        matches!(self, ThemeResolution::Defaulted(_))
    }
}

/// A single key/value slot holding the theme preference.
pub trait ThemeStore {
    fn load(&self) -> PortfolioResult<Option<String>>;
    fn save(&self, value: &str) -> PortfolioResult<()>;
}

/// Decide which theme applies for a stored value.
///
/// An empty string counts as "nothing stored". Any non-empty value other than
/// `"dark"` resolves to light without rewriting the store.
pub fn resolve(stored: Option<&str>, default: Theme) -> ThemeResolution {
    match stored {
        None | Some("") => ThemeResolution::Defaulted(default),
        Some("dark") => ThemeResolution::Stored(Theme::Dark),
        Some(_) => ThemeResolution::Stored(Theme::Light),
    }
}

/// Load-time initialization: read, resolve, and persist the default on first visit.
pub fn initialize(store: &dyn ThemeStore, default: Theme) -> Theme {
    let stored = match store.load() {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read theme preference, using default");
            None
        }
    };

    let resolution = resolve(stored.as_deref(), default);
    let theme = resolution.theme();

    if resolution.needs_persist() {
        if let Err(e) = store.save(theme.as_str()) {
            tracing::warn!(error = %e, theme = %theme, "Failed to persist default theme");
        }
    }

    tracing::debug!(theme = %theme, defaulted = resolution.needs_persist(), "Theme initialized");
    theme
}

/// Flip the theme and persist the new value.
pub fn toggle(store: &dyn ThemeStore, current: Theme) -> Theme {
    let next = current.toggled();
    if let Err(e) = store.save(next.as_str()) {
        tracing::warn!(error = %e, theme = %next, "Failed to persist theme toggle");
    }
    next
}

/// In-memory store, mostly for tests.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    value: RefCell<Option<String>>,
    writes: Cell<usize>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a value, as on a returning visit.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: RefCell::new(Some(value.into())),
            writes: Cell::new(0),
        }
    }

    pub fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    /// Number of successful `save` calls.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> PortfolioResult<Option<String>> {
        Ok(self.value.borrow().clone())
    }

    fn save(&self, value: &str) -> PortfolioResult<()> {
        *self.value.borrow_mut() = Some(value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// Store backed by a single file (desktop builds).
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> PortfolioResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents.trim().to_string())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PortfolioError::Io(e)),
        }
    }

    fn save(&self, value: &str) -> PortfolioResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl ThemeStore for BrokenStore {
        fn load(&self) -> PortfolioResult<Option<String>> {
            Err(PortfolioError::Storage("storage disabled".to_string()))
        }

        fn save(&self, _value: &str) -> PortfolioResult<()> {
            Err(PortfolioError::Storage("storage disabled".to_string()))
        }
    }

    #[test]
    fn test_theme_round_trips_through_str() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::parse("Dark"), None);
    }

    #[test]
    fn test_root_class() {
        assert_eq!(Theme::Dark.root_class(), Some("dark"));
        assert_eq!(Theme::Light.root_class(), None);
    }

    #[test]
    fn test_resolve_table() {
        assert_eq!(resolve(None, Theme::Light), ThemeResolution::Defaulted(Theme::Light));
        assert_eq!(resolve(Some(""), Theme::Dark), ThemeResolution::Defaulted(Theme::Dark));
        assert_eq!(resolve(Some("dark"), Theme::Light), ThemeResolution::Stored(Theme::Dark));
        assert_eq!(resolve(Some("light"), Theme::Dark), ThemeResolution::Stored(Theme::Light));
        assert_eq!(resolve(Some("sepia"), Theme::Dark), ThemeResolution::Stored(Theme::Light));
    }

    #[test]
    fn test_unreadable_store_falls_back_to_default() {
        let _ = tracing_subscriber::fmt::try_init();
        assert_eq!(initialize(&BrokenStore, Theme::Dark), Theme::Dark);
    }

    #[test]
    fn test_toggle_survives_write_failure() {
        let _ = tracing_subscriber::fmt::try_init();
        assert_eq!(toggle(&BrokenStore, Theme::Light), Theme::Dark);
    }

    #[test]
    fn test_theme_serde() {
        let json = serde_json::to_string(&Theme::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
        let parsed: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(parsed, Theme::Light);
    }
}
