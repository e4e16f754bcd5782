use dioxus::prelude::*;
use portfolio_core::{theme, HttpTransport};

use crate::context::{get_site_config, ThemeContext, TransportHandle};
use crate::pages::Index;
use crate::platform;
use crate::theme::{palette_css, GLOBAL_STYLES};

/// Root application component.
///
/// Initializes the theme preference once, provides the theme and transport
/// contexts, and renders the single page.
#[component]
pub fn App() -> Element {
    let config = use_hook(get_site_config);
    let store = use_hook(|| platform::theme_store(&config));

    let theme_signal = use_signal(|| theme::initialize(store.as_ref(), config.default_theme));

    use_context_provider(|| ThemeContext::new(theme_signal, store.clone()));
    use_context_provider(|| TransportHandle::new(HttpTransport::new(config.endpoint())));

    // Re-applies whenever the theme changes
    use_effect(move || {
        platform::apply_theme(theme_signal());
    });

    use_effect(|| {
        platform::install_reveal_observer();
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        style { {palette_css()} }
        Index {}
    }
}
