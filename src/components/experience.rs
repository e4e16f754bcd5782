//! Flagship experience highlight.

use dioxus::prelude::*;
use portfolio_core::content::{Icon, EXPERIENCE, SECTION_EXPERIENCE};

use crate::components::{LucideIcon, RichText, SectionHeading};
use crate::theme::accent_style;

#[component]
pub fn Experience() -> Element {
    rsx! {
        section { id: SECTION_EXPERIENCE, class: "section section--experience",
            div { class: "container",
                div { class: "experience-intro reveal",
                    span { class: "pill-badge",
                        LucideIcon { icon: Icon::ShieldCheck, size: 14 }
                        "{EXPERIENCE.badge}"
                    }
                }
                SectionHeading { heading: EXPERIENCE.heading }

                div { class: "experience-layout",
                    // Narrative card
                    div { class: "experience-card card reveal",
                        div { class: "experience-org",
                            div { class: "org-logo",
                                img { src: EXPERIENCE.logo, alt: EXPERIENCE.logo_alt }
                            }
                            div {
                                h3 { class: "org-name", "{EXPERIENCE.organisation}" }
                                p { class: "org-role", "{EXPERIENCE.role}" }
                            }
                        }

                        for (idx, paragraph) in EXPERIENCE.paragraphs.iter().enumerate() {
                            RichText { key: "{idx}", segments: *paragraph, class: "experience-paragraph" }
                        }

                        div { class: "tag-list",
                            for tag in EXPERIENCE.tags.iter() {
                                span { key: "{tag}", class: "tag", "{tag}" }
                            }
                        }
                    }

                    // Metric tiles
                    div { class: "metric-grid",
                        for metric in EXPERIENCE.metrics.iter() {
                            div {
                                key: "{metric.label}",
                                class: "metric-tile card reveal",
                                style: accent_style(metric.accent),
                                div { class: "metric-icon",
                                    LucideIcon { icon: metric.icon, size: 20 }
                                }
                                span { class: "metric-value", "{metric.value}" }
                                span { class: "metric-label", "{metric.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
