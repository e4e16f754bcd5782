//! Technical competencies grid.

use dioxus::prelude::*;
use portfolio_core::content::{Icon, SKILLS_HEADING, SKILL_CATEGORIES};

use crate::components::{LucideIcon, SectionHeading};

#[component]
pub fn Skills() -> Element {
    rsx! {
        section { class: "section section--skills",
            div { class: "container",
                SectionHeading { heading: SKILLS_HEADING }

                div { class: "skill-grid",
                    for category in SKILL_CATEGORIES.iter() {
                        div { key: "{category.id}", class: "skill-card card reveal",
                            div { class: "skill-card-header",
                                div { class: "skill-icon",
                                    LucideIcon { icon: category.icon, size: 22 }
                                }
                                h3 { class: "skill-name", "{category.name}" }
                            }
                            p { class: "skill-description", "{category.description}" }
                            ul { class: "skill-list",
                                for skill in category.skills.iter() {
                                    li { key: "{skill}", class: "skill-item",
                                        LucideIcon { icon: Icon::CheckCircle, size: 14 }
                                        "{skill}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
