//! Hero banner: headline, calls to action and the metrics card.

use dioxus::prelude::*;
use portfolio_core::content::{Icon, HERO, PROFILE, SECTION_PROJECTS};

use crate::components::LucideIcon;
use crate::platform;
use crate::theme::accent_style;

#[component]
pub fn Hero() -> Element {
    let scroll_to_projects = move |_| platform::scroll_to(SECTION_PROJECTS);

    rsx! {
        section { class: "hero",
            // Background grid and ambient orbs
            div { class: "hero-grid" }
            div { class: "hero-orbs",
                div { class: "orb orb--blue" }
                div { class: "orb orb--rose" }
            }

            div { class: "hero-layout container",
                // Text column
                div { class: "hero-copy",
                    span { class: "hero-badge fade-left",
                        span { class: "ping-dot" }
                        "{HERO.badge}"
                    }

                    h1 { class: "hero-title fade-left",
                        "{HERO.headline}"
                        br {}
                        span { class: "gradient-text", "{HERO.headline_highlight}" }
                    }

                    p { class: "hero-subtext fade-left", "{HERO.subtext}" }

                    div { class: "hero-actions fade-left",
                        button {
                            r#type: "button",
                            class: "btn btn-primary",
                            onclick: scroll_to_projects,
                            "View Work"
                            LucideIcon { icon: Icon::ArrowRight, size: 16, class: "btn-icon-slide" }
                        }
                        a {
                            class: "btn btn-ghost",
                            href: PROFILE.resume,
                            download: "",
                            LucideIcon { icon: Icon::Download, size: 16 }
                            "Resume"
                        }
                    }
                }

                // Visual column
                div { class: "hero-visual fade-up",
                    div { class: "metrics-card float",
                        div { class: "metrics-card-header",
                            div { class: "window-dots",
                                span {}
                                span {}
                            }
                            span { class: "mono-label", "{HERO.card_file}" }
                        }

                        div { class: "metrics-card-body",
                            for bar in HERO.bars.iter() {
                                div { key: "{bar.label}", class: "bar-metric", style: accent_style(bar.accent),
                                    div { class: "bar-metric-labels",
                                        span { "{bar.label}" }
                                        span { class: "accent-text", "{bar.display}" }
                                    }
                                    div { class: "bar-track",
                                        div { class: "bar-fill", style: "width: {bar.fill_percent}%;" }
                                    }
                                }
                            }

                            div { class: "code-block",
                                for line in HERO.code_lines.iter() {
                                    pre { key: "{line}", class: code_line_class(line), "{line}" }
                                }
                            }
                        }

                        div { class: "metrics-card-footer",
                            div { class: "status-icon",
                                LucideIcon { icon: Icon::Activity, size: 16 }
                            }
                            div { class: "status-text",
                                span { class: "status-title", "{HERO.status_title}" }
                                span { class: "status-caption", "{HERO.status_caption}" }
                            }
                        }
                    }

                    div { class: "floating-chip floating-chip--top",
                        LucideIcon { icon: Icon::Database, size: 24 }
                    }
                    div { class: "floating-chip floating-chip--bottom",
                        LucideIcon { icon: Icon::ShieldCheck, size: 20 }
                    }
                }
            }

            // Scroll indicator
            div { class: "scroll-indicator",
                div { class: "scroll-indicator-dot" }
            }
        }
    }
}

/// Comment lines render muted.
fn code_line_class(line: &str) -> &'static str {
    if line.trim_start().starts_with('#') {
        "code-line code-line--comment"
    } else {
        "code-line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_line_class() {
        assert_eq!(code_line_class("# Pipeline Config"), "code-line code-line--comment");
        assert_eq!(code_line_class("    return model.predict(features)"), "code-line");
    }
}
