//! Theme preference persistence across visits
//!
//! These tests cover first-visit defaulting, reapplying a stored theme on
//! later visits, and the file-backed store used by desktop builds.

use portfolio_core::theme::{initialize, toggle};
use portfolio_core::{FileThemeStore, MemoryThemeStore, Theme, ThemeStore};
use tempfile::TempDir;

// ============================================================================
// First Visit
// ============================================================================

/// No stored preference: apply the default and persist it
#[test]
fn test_first_visit_applies_and_persists_default() {
    let store = MemoryThemeStore::new();

    let theme = initialize(&store, Theme::Light);

    assert_eq!(theme, Theme::Light);
    assert_eq!(store.value().as_deref(), Some("light"));
    assert_eq!(store.writes(), 1);
}

/// A configured dark default is honoured on first visit
#[test]
fn test_first_visit_with_dark_default() {
    let store = MemoryThemeStore::new();

    assert_eq!(initialize(&store, Theme::Dark), Theme::Dark);
    assert_eq!(store.value().as_deref(), Some("dark"));
}

/// An empty stored string counts as no preference
#[test]
fn test_empty_value_treated_as_first_visit() {
    let store = MemoryThemeStore::with_value("");

    assert_eq!(initialize(&store, Theme::Light), Theme::Light);
    assert_eq!(store.value().as_deref(), Some("light"));
}

// ============================================================================
// Returning Visits
// ============================================================================

/// A stored dark preference is reapplied without rewriting
#[test]
fn test_returning_visit_reapplies_dark() {
    let store = MemoryThemeStore::with_value("dark");

    assert_eq!(initialize(&store, Theme::Light), Theme::Dark);
    assert_eq!(store.writes(), 0);
}

/// A stored light preference wins over a dark default
#[test]
fn test_returning_visit_reapplies_light() {
    let store = MemoryThemeStore::with_value("light");

    assert_eq!(initialize(&store, Theme::Dark), Theme::Light);
    assert_eq!(store.writes(), 0);
}

/// Unknown values render light and are left untouched
#[test]
fn test_unknown_value_renders_light() {
    let store = MemoryThemeStore::with_value("solarized");

    assert_eq!(initialize(&store, Theme::Dark), Theme::Light);
    assert_eq!(store.value().as_deref(), Some("solarized"));
}

/// Toggle then reload: the toggled theme comes back
#[test]
fn test_toggle_persists_for_next_visit() {
    let store = MemoryThemeStore::new();

    let first = initialize(&store, Theme::Light);
    let toggled = toggle(&store, first);
    assert_eq!(toggled, Theme::Dark);

    let next_visit = initialize(&store, Theme::Light);
    assert_eq!(next_visit, Theme::Dark);
}

/// Toggling twice returns to the original theme
#[test]
fn test_double_toggle() {
    let store = MemoryThemeStore::with_value("dark");
    let theme = toggle(&store, toggle(&store, Theme::Dark));
    assert_eq!(theme, Theme::Dark);
    assert_eq!(store.value().as_deref(), Some("dark"));
}

// ============================================================================
// File Store
// ============================================================================

#[test]
fn test_file_store_missing_file_is_none() {
    let dir = TempDir::new().unwrap();
    let store = FileThemeStore::new(dir.path().join("theme"));

    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn test_file_store_creates_parent_dirs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("portfolio").join("theme");
    let store = FileThemeStore::new(&path);

    store.save("dark").unwrap();

    assert!(path.exists());
    assert_eq!(store.load().unwrap().as_deref(), Some("dark"));
}

/// Full first-visit / returning-visit cycle against the file store
#[test]
fn test_file_store_across_visits() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("theme");

    {
        let store = FileThemeStore::new(&path);
        assert_eq!(initialize(&store, Theme::Light), Theme::Light);
        toggle(&store, Theme::Light);
    }

    let store = FileThemeStore::new(&path);
    assert_eq!(initialize(&store, Theme::Light), Theme::Dark);
}

/// Trailing newline from a hand-edited file is ignored
#[test]
fn test_file_store_trims_contents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("theme");
    std::fs::write(&path, "dark\n").unwrap();

    let store = FileThemeStore::new(&path);
    assert_eq!(initialize(&store, Theme::Light), Theme::Dark);
}

/// A directory where the file should be is an I/O error, not a panic
#[test]
fn test_file_store_unreadable_falls_back() {
    let dir = TempDir::new().unwrap();
    let store = FileThemeStore::new(dir.path());

    assert!(store.load().is_err());
    assert_eq!(initialize(&store, Theme::Dark), Theme::Dark);
}
