//! Context providers for the portfolio page.
//!
//! `App` provides the theme handle and the form transport once; components
//! pull them with the hooks below.
//!
//! ## Usage
//!
//! ```ignore
//! let theme = use_theme();
//! button { onclick: move |_| theme.toggle(), "toggle" }
//! ```

use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::{theme, FormTransport, SiteConfig, Theme, ThemeStore};

/// Get the active site configuration.
pub fn get_site_config() -> SiteConfig {
    crate::get_site_config()
}

/// Current theme plus the store it is persisted to.
#[derive(Clone)]
pub struct ThemeContext {
    theme: Signal<Theme>,
    store: Rc<dyn ThemeStore>,
}

impl ThemeContext {
    pub fn new(theme: Signal<Theme>, store: Rc<dyn ThemeStore>) -> Self {
        Self { theme, store }
    }

    /// Reactive read of the current theme.
    pub fn current(&self) -> Theme {
        *self.theme.read()
    }

    /// Flip the theme and persist it. The `App` effect re-applies the class.
    pub fn toggle(&self) {
        let mut signal = self.theme;
        let next = theme::toggle(self.store.as_ref(), *signal.peek());
        tracing::info!(theme = %next, "Theme toggled");
        signal.set(next);
    }
}

/// Shared handle to the contact-form transport.
#[derive(Clone)]
pub struct TransportHandle(Rc<dyn FormTransport>);

impl TransportHandle {
    pub fn new(transport: impl FormTransport + 'static) -> Self {
        Self(Rc::new(transport))
    }

    pub fn get(&self) -> Rc<dyn FormTransport> {
        Rc::clone(&self.0)
    }
}

/// Hook to access the theme handle from context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

/// Hook to access the form transport from context.
pub fn use_transport() -> TransportHandle {
    use_context::<TransportHandle>()
}
