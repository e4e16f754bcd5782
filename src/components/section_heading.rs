//! Section heading and rich text run.

use dioxus::prelude::*;
use portfolio_core::content::{Heading, Segment};

use crate::theme::accent_style;

/// Heading size: `Large` for top-level sections, `Medium` for sub-sections.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum HeadingSize {
    #[default]
    Large,
    Medium,
}

impl HeadingSize {
    fn class(&self) -> &'static str {
        match self {
            HeadingSize::Large => "section-title",
            HeadingSize::Medium => "section-title section-title--medium",
        }
    }
}

/// Title with a gradient tail, plus an optional subtitle.
#[component]
pub fn SectionHeading(heading: Heading, #[props(default)] size: HeadingSize) -> Element {
    rsx! {
        div { class: "section-heading reveal",
            h2 { class: size.class(),
                "{heading.lead} "
                span { class: "gradient-text", "{heading.highlight}" }
            }
            if let Some(subtitle) = heading.subtitle {
                p { class: "section-subtitle", "{subtitle}" }
            }
        }
    }
}

/// Running text with highlighted phrases.
#[component]
pub fn RichText(segments: &'static [Segment], #[props(default)] class: String) -> Element {
    rsx! {
        p { class: "{class}",
            for segment in segments.iter() {
                {match segment {
                    Segment::Plain(text) => rsx! { "{text}" },
                    Segment::Strong(text, accent) => rsx! {
                        strong { class: "highlight", style: accent_style(*accent), "{text}" }
                    },
                }}
            }
        }
    }
}
