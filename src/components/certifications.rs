//! Certification cards linking to the credential documents.

use dioxus::prelude::*;
use portfolio_core::content::{Icon, CERTIFICATIONS, CERTIFICATIONS_HEADING};

use crate::components::{LucideIcon, SectionHeading};
use crate::theme::gradient_style;

#[component]
pub fn Certifications() -> Element {
    rsx! {
        section { class: "section section--certifications",
            div { class: "container",
                SectionHeading { heading: CERTIFICATIONS_HEADING }

                div { class: "cert-grid",
                    for cert in CERTIFICATIONS.iter() {
                        div {
                            key: "{cert.file}",
                            class: "cert-card card reveal",
                            style: gradient_style(cert.gradient),
                            div { class: "cert-bar" }
                            div { class: "gradient-tile",
                                LucideIcon { icon: Icon::Award, size: 22 }
                            }
                            h3 { class: "cert-title", "{cert.title}" }
                            p { class: "cert-issuer", "{cert.issuer}" }
                            div { class: "cert-footer",
                                span { class: "cert-date",
                                    LucideIcon { icon: Icon::Calendar, size: 14 }
                                    "{cert.date}"
                                }
                                a {
                                    class: "cert-link",
                                    href: cert.file,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "View Credential"
                                    LucideIcon { icon: Icon::ExternalLink, size: 14 }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
