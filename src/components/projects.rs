//! Projects: flagship grid, foundational projects and achievements.

use dioxus::prelude::*;
use portfolio_core::content::{
    Icon, Span, ACHIEVEMENTS, ACHIEVEMENTS_HEADING, FOUNDATIONAL, PROJECTS, PROJECTS_HEADING,
    SECTION_PROJECTS,
};

use crate::components::{HeadingSize, LucideIcon, RichText, SectionHeading};
use crate::theme::{accent_style, gradient_style};

fn span_class(span: Span) -> &'static str {
    match span {
        Span::Narrow => "project-card card reveal",
        Span::Wide => "project-card project-card--wide card reveal",
    }
}

#[component]
pub fn Projects() -> Element {
    rsx! {
        section { id: SECTION_PROJECTS, class: "section section--projects",
            div { class: "container",
                SectionHeading { heading: PROJECTS_HEADING }

                // Flagship projects
                div { class: "project-grid",
                    for project in PROJECTS.iter() {
                        article {
                            key: "{project.title}",
                            class: span_class(project.span),
                            style: gradient_style(project.gradient),
                            div { class: "project-card-glow" }
                            div { class: "project-card-header",
                                div { class: "gradient-tile",
                                    LucideIcon { icon: project.icon, size: 24 }
                                }
                                LucideIcon { icon: Icon::ArrowUpRight, size: 20, class: "project-card-arrow" }
                            }
                            h3 { class: "project-title", "{project.title}" }
                            RichText { segments: project.description, class: "project-description" }
                            div { class: "tag-list",
                                for tag in project.tags.iter() {
                                    span { key: "{tag}", class: "tag", "{tag}" }
                                }
                            }
                        }
                    }
                }

                // Foundational projects
                div { class: "foundational-grid",
                    for project in FOUNDATIONAL.iter() {
                        div { key: "{project.title}", class: "foundational-card card reveal",
                            div { class: "foundational-header",
                                LucideIcon { icon: project.icon, size: 20 }
                                span { class: "mono-label", "{project.tech}" }
                            }
                            h4 { class: "foundational-title", "{project.title}" }
                            RichText { segments: project.description, class: "foundational-description" }
                        }
                    }
                }

                div { class: "separator" }

                // Achievements
                SectionHeading { heading: ACHIEVEMENTS_HEADING, size: HeadingSize::Medium }
                div { class: "achievement-grid",
                    for achievement in ACHIEVEMENTS.iter() {
                        div {
                            key: "{achievement.title}",
                            class: "achievement-card card reveal",
                            style: accent_style(achievement.accent),
                            div { class: "achievement-icon",
                                LucideIcon { icon: achievement.icon, size: 24 }
                            }
                            div {
                                h4 { class: "achievement-title", "{achievement.title}" }
                                p { class: "achievement-description", "{achievement.description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_cards_get_wide_class() {
        assert!(span_class(Span::Wide).contains("project-card--wide"));
        assert!(!span_class(Span::Narrow).contains("--wide"));
    }
}
