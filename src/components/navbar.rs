//! Navigation bar
//!
//! Desktop: logo, centered anchor links, theme toggle
//! Mobile: logo, theme toggle, menu button opening a full-screen overlay

use dioxus::prelude::*;
use portfolio_core::content::{Icon, LOGO_TEXT, NAV_LINKS};

use crate::components::LucideIcon;
use crate::context::use_theme;
use crate::platform;

/// Header background style.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavSurface {
    /// Mobile menu is open: solid background
    Solid,
    /// Page scrolled: translucent blurred background
    Glass,
    /// At the top of the page
    Transparent,
}

impl NavSurface {
    /// An open menu always wins over scroll position.
    pub fn select(menu_open: bool, scrolled: bool) -> Self {
        if menu_open {
            NavSurface::Solid
        } else if scrolled {
            NavSurface::Glass
        } else {
            NavSurface::Transparent
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            NavSurface::Solid => "navbar navbar--solid",
            NavSurface::Glass => "navbar navbar--glass",
            NavSurface::Transparent => "navbar navbar--transparent",
        }
    }
}

#[component]
pub fn Navbar() -> Element {
    let theme = use_theme();
    let mut menu_open = use_signal(|| false);
    let mut scrolled = use_signal(|| false);

    // Scroll detection
    use_future(move || async move {
        let mut watcher = platform::watch_scroll();
        while let Ok(scroll_y) = watcher.recv::<f64>().await {
            let next = platform::is_scrolled(scroll_y);
            if *scrolled.peek() != next {
                scrolled.set(next);
            }
        }
    });

    // Lock body scroll when mobile menu is open
    use_effect(move || {
        platform::lock_body_scroll(menu_open());
    });

    let surface = NavSurface::select(menu_open(), scrolled());
    let is_dark = theme.current().is_dark();
    let toggle_theme = {
        let theme = theme.clone();
        move |_| theme.toggle()
    };

    rsx! {
        nav { class: surface.class(),
            div { class: "navbar-inner container",
                // Logo
                a {
                    class: "navbar-logo gradient-text",
                    href: "#",
                    onclick: move |_| menu_open.set(false),
                    "{LOGO_TEXT}"
                }

                // Desktop links
                div { class: "navbar-links",
                    for link in NAV_LINKS.iter() {
                        a { key: "{link.label}", class: "navbar-link", href: link.href, "{link.label}" }
                    }
                }

                // Actions
                div { class: "navbar-actions",
                    button {
                        r#type: "button",
                        class: if is_dark { "theme-toggle theme-toggle--dark" } else { "theme-toggle" },
                        onclick: toggle_theme,
                        "aria-label": "Toggle theme",
                        if is_dark {
                            LucideIcon { icon: Icon::Sun, size: 18 }
                        } else {
                            LucideIcon { icon: Icon::Moon, size: 18 }
                        }
                    }

                    button {
                        r#type: "button",
                        class: "menu-toggle",
                        onclick: move |_| menu_open.set(!menu_open()),
                        "aria-label": "Toggle menu",
                        "aria-expanded": "{menu_open()}",
                        if menu_open() {
                            LucideIcon { icon: Icon::X, size: 24, class: "menu-icon menu-icon--close" }
                        } else {
                            LucideIcon { icon: Icon::Menu, size: 24, class: "menu-icon menu-icon--open" }
                        }
                    }
                }
            }

            // Mobile overlay
            if menu_open() {
                div { class: "mobile-menu",
                    div { class: "mobile-menu-links",
                        for (idx, link) in NAV_LINKS.iter().enumerate() {
                            a {
                                key: "{link.label}",
                                class: "mobile-menu-link",
                                style: format!("animation-delay: {}s;", stagger_delay(idx)),
                                href: link.href,
                                onclick: move |_| menu_open.set(false),
                                "{link.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Entry delay of the n-th mobile link.
fn stagger_delay(idx: usize) -> f32 {
    0.1 + idx as f32 * 0.1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_menu_forces_solid() {
        assert_eq!(NavSurface::select(true, false), NavSurface::Solid);
        assert_eq!(NavSurface::select(true, true), NavSurface::Solid);
    }

    #[test]
    fn test_scroll_selects_glass() {
        assert_eq!(NavSurface::select(false, true), NavSurface::Glass);
        assert_eq!(NavSurface::select(false, false), NavSurface::Transparent);
        assert_eq!(NavSurface::Glass.class(), "navbar navbar--glass");
    }

    #[test]
    fn test_stagger_delay() {
        assert!((stagger_delay(0) - 0.1).abs() < f32::EPSILON);
        assert!((stagger_delay(3) - 0.4).abs() < 1e-6);
    }
}
