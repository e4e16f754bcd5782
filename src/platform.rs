//! Platform glue: where the theme preference lives and how the document is poked.
//!
//! Web builds keep the preference in `localStorage` under the configured key.
//! Desktop builds keep it in a file in the data directory. DOM side effects go
//! through `document::eval`, which both renderers support.

use std::rc::Rc;

use dioxus::document::{self, Eval};
use portfolio_core::{SiteConfig, Theme, ThemeStore};

/// Scroll offset past which the navbar switches to its glass style.
pub const SCROLL_THRESHOLD: f64 = 20.0;

/// Build the theme store for the current platform.
pub fn theme_store(config: &SiteConfig) -> Rc<dyn ThemeStore> {
    #[cfg(feature = "desktop")]
    {
        let path = crate::get_data_dir().join(&config.theme_key);
        tracing::debug!(path = ?path, "Using file theme store");
        Rc::new(portfolio_core::FileThemeStore::new(path))
    }

    #[cfg(all(feature = "web", not(feature = "desktop")))]
    {
        Rc::new(web::LocalThemeStore::new(config.theme_key.clone()))
    }

    #[cfg(not(any(feature = "web", feature = "desktop")))]
    {
        let _ = config;
        Rc::new(portfolio_core::MemoryThemeStore::new())
    }
}

/// Toggle the `dark` class on the document root.
pub fn apply_theme(theme: Theme) {
    document::eval(&theme_script(theme));
    tracing::debug!(theme = %theme, "Applied theme");
}

/// Script that clears any theme class, then adds this theme's one.
fn theme_script(theme: Theme) -> String {
    let mut script = String::from("const root = document.documentElement;");
    for class in [Theme::Light, Theme::Dark].iter().filter_map(Theme::root_class) {
        script.push_str(&format!(" root.classList.remove('{}');", class));
    }
    if let Some(class) = theme.root_class() {
        script.push_str(&format!(" root.classList.add('{}');", class));
    }
    script
}

/// Smooth-scroll to the element with the given id.
pub fn scroll_to(id: &str) {
    document::eval(&format!(
        "document.getElementById('{}')?.scrollIntoView({{ behavior: 'smooth' }});",
        id
    ));
}

/// Lock or release body scrolling (mobile menu overlay).
pub fn lock_body_scroll(locked: bool) {
    let overflow = if locked { "hidden" } else { "unset" };
    document::eval(&format!("document.body.style.overflow = '{}';", overflow));
}

/// Stream `window.scrollY` on every scroll event, starting with the current value.
pub fn watch_scroll() -> Eval {
    document::eval(
        r#"
        const report = () => dioxus.send(window.scrollY);
        window.addEventListener('scroll', report, { passive: true });
        report();
        await new Promise(() => {});
        "#,
    )
}

/// Add `is-visible` to each `.reveal` element the first time it enters the viewport.
pub fn install_reveal_observer() {
    document::eval(
        r#"
        const observer = new IntersectionObserver((entries) => {
            for (const entry of entries) {
                if (entry.isIntersecting) {
                    entry.target.classList.add('is-visible');
                    observer.unobserve(entry.target);
                }
            }
        }, { rootMargin: '0px 0px -50px 0px' });
        document.querySelectorAll('.reveal').forEach((el) => observer.observe(el));
        "#,
    );
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

#[cfg(all(feature = "web", not(feature = "desktop")))]
mod web {
    use gloo::storage::{LocalStorage, Storage};
    use portfolio_core::{PortfolioError, PortfolioResult, ThemeStore};

    /// Raw `localStorage` slot. Values are stored unquoted so they stay
    /// readable as plain `"light"` / `"dark"`.
    pub struct LocalThemeStore {
        key: String,
    }

    impl LocalThemeStore {
        pub fn new(key: String) -> Self {
            Self { key }
        }
    }

    impl ThemeStore for LocalThemeStore {
        fn load(&self) -> PortfolioResult<Option<String>> {
            LocalStorage::raw()
                .get_item(&self.key)
                .map_err(|e| PortfolioError::Storage(format!("{:?}", e)))
        }

        fn save(&self, value: &str) -> PortfolioResult<()> {
            LocalStorage::raw()
                .set_item(&self.key, value)
                .map_err(|e| PortfolioError::Storage(format!("{:?}", e)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_script_uses_root_class() {
        let dark = theme_script(Theme::Dark);
        assert!(dark.ends_with("root.classList.add('dark');"));

        let light = theme_script(Theme::Light);
        assert!(light.contains("root.classList.remove('dark');"));
        assert!(!light.contains("classList.add"));
    }

    #[test]
    fn test_scroll_threshold_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(20.5));
    }
}
