//! Lucide icons as inline SVG.

use dioxus::prelude::*;
use portfolio_core::content::Icon;

/// Render a Lucide icon at the given pixel size.
#[component]
pub fn LucideIcon(
    icon: Icon,
    #[props(default = 24)] size: u32,
    #[props(default)] class: String,
) -> Element {
    rsx! {
        svg {
            class: "icon {class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {icon_paths(icon)}
        }
    }
}

fn icon_paths(icon: Icon) -> Element {
    match icon {
        Icon::Activity => rsx! {
            path { d: "M22 12h-4l-3 9L9 3l-3 9H2" }
        },
        Icon::ArrowRight => rsx! {
            path { d: "M5 12h14" }
            path { d: "m12 5 7 7-7 7" }
        },
        Icon::ArrowUpRight => rsx! {
            path { d: "M7 7h10v10" }
            path { d: "M7 17 17 7" }
        },
        Icon::Award => rsx! {
            circle { cx: "12", cy: "8", r: "6" }
            path { d: "M15.477 12.89 17 22l-5-3-5 3 1.523-9.11" }
        },
        Icon::Bot => rsx! {
            path { d: "M12 8V4H8" }
            rect { width: "16", height: "12", x: "4", y: "8", rx: "2" }
            path { d: "M2 14h2" }
            path { d: "M20 14h2" }
            path { d: "M15 13v2" }
            path { d: "M9 13v2" }
        },
        Icon::Brain => rsx! {
            path { d: "M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z" }
            path { d: "M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z" }
            path { d: "M15 13a4.5 4.5 0 0 1-3-4 4.5 4.5 0 0 1-3 4" }
        },
        Icon::BrainCircuit => rsx! {
            path { d: "M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z" }
            path { d: "M9 13a4.5 4.5 0 0 0 3-4" }
            path { d: "M12 13h4" }
            path { d: "M12 18h6a2 2 0 0 1 2 2v1" }
            path { d: "M12 8h8" }
            path { d: "M16 8V5a2 2 0 0 1 2-2" }
            circle { cx: "16", cy: "13", r: ".5" }
            circle { cx: "18", cy: "3", r: ".5" }
            circle { cx: "20", cy: "21", r: ".5" }
            circle { cx: "20", cy: "8", r: ".5" }
        },
        Icon::Calendar => rsx! {
            rect { width: "18", height: "18", x: "3", y: "4", rx: "2", ry: "2" }
            line { x1: "16", x2: "16", y1: "2", y2: "6" }
            line { x1: "8", x2: "8", y1: "2", y2: "6" }
            line { x1: "3", x2: "21", y1: "10", y2: "10" }
        },
        Icon::CheckCircle => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "m9 12 2 2 4-4" }
        },
        Icon::Cpu => rsx! {
            rect { width: "16", height: "16", x: "4", y: "4", rx: "2" }
            rect { width: "6", height: "6", x: "9", y: "9", rx: "1" }
            path { d: "M15 2v2" }
            path { d: "M15 20v2" }
            path { d: "M2 15h2" }
            path { d: "M2 9h2" }
            path { d: "M20 15h2" }
            path { d: "M20 9h2" }
            path { d: "M9 2v2" }
            path { d: "M9 20v2" }
        },
        Icon::Database => rsx! {
            ellipse { cx: "12", cy: "5", rx: "9", ry: "3" }
            path { d: "M3 5V19A9 3 0 0 0 21 19V5" }
            path { d: "M3 12A9 3 0 0 0 21 12" }
        },
        Icon::Download => rsx! {
            path { d: "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" }
            polyline { points: "7 10 12 15 17 10" }
            line { x1: "12", x2: "12", y1: "15", y2: "3" }
        },
        Icon::ExternalLink => rsx! {
            path { d: "M15 3h6v6" }
            path { d: "M10 14 21 3" }
            path { d: "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" }
        },
        Icon::Github => rsx! {
            path { d: "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" }
            path { d: "M9 18c-4.51 2-5-2-7-2" }
        },
        Icon::Globe => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20" }
            path { d: "M2 12h20" }
        },
        Icon::Lightbulb => rsx! {
            path { d: "M15 14c.2-1 .7-1.7 1.5-2.5 1-.9 1.5-2.2 1.5-3.5A6 6 0 0 0 6 8c0 1 .2 2.2 1.5 3.5.7.7 1.3 1.5 1.5 2.5" }
            path { d: "M9 18h6" }
            path { d: "M10 22h4" }
        },
        Icon::Linkedin => rsx! {
            path { d: "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" }
            rect { width: "4", height: "12", x: "2", y: "9" }
            circle { cx: "4", cy: "4", r: "2" }
        },
        Icon::Lock => rsx! {
            rect { width: "18", height: "11", x: "3", y: "11", rx: "2", ry: "2" }
            path { d: "M7 11V7a5 5 0 0 1 10 0v4" }
        },
        Icon::Mail => rsx! {
            rect { width: "20", height: "16", x: "2", y: "4", rx: "2" }
            path { d: "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" }
        },
        Icon::Menu => rsx! {
            line { x1: "4", x2: "20", y1: "12", y2: "12" }
            line { x1: "4", x2: "20", y1: "6", y2: "6" }
            line { x1: "4", x2: "20", y1: "18", y2: "18" }
        },
        Icon::Mic => rsx! {
            path { d: "M12 2a3 3 0 0 0-3 3v7a3 3 0 0 0 6 0V5a3 3 0 0 0-3-3Z" }
            path { d: "M19 10v2a7 7 0 0 1-14 0v-2" }
            line { x1: "12", x2: "12", y1: "19", y2: "22" }
        },
        Icon::Moon => rsx! {
            path { d: "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" }
        },
        Icon::Send => rsx! {
            path { d: "m22 2-7 20-4-9-9-4Z" }
            path { d: "M22 2 11 13" }
        },
        Icon::ShieldAlert => rsx! {
            path { d: "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z" }
            path { d: "M12 8v4" }
            path { d: "M12 16h.01" }
        },
        Icon::ShieldCheck => rsx! {
            path { d: "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z" }
            path { d: "m9 12 2 2 4-4" }
        },
        Icon::Star => rsx! {
            polygon { points: "12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" }
        },
        Icon::Sun => rsx! {
            circle { cx: "12", cy: "12", r: "4" }
            path { d: "M12 2v2" }
            path { d: "M12 20v2" }
            path { d: "m4.93 4.93 1.41 1.41" }
            path { d: "m17.66 17.66 1.41 1.41" }
            path { d: "M2 12h2" }
            path { d: "M20 12h2" }
            path { d: "m6.34 17.66-1.41 1.41" }
            path { d: "m19.07 4.93-1.41 1.41" }
        },
        Icon::Terminal => rsx! {
            polyline { points: "4 17 10 11 4 5" }
            line { x1: "12", x2: "20", y1: "19", y2: "19" }
        },
        Icon::TrendingDown => rsx! {
            polyline { points: "22 17 13.5 8.5 8.5 13.5 2 7" }
            polyline { points: "16 17 22 17 22 11" }
        },
        Icon::Trophy => rsx! {
            path { d: "M6 9H4.5a2.5 2.5 0 0 1 0-5H6" }
            path { d: "M18 9h1.5a2.5 2.5 0 0 0 0-5H18" }
            path { d: "M4 22h16" }
            path { d: "M10 14.66V17c0 .55-.47.98-.97 1.21C7.85 18.75 7 20.24 7 22" }
            path { d: "M14 14.66V17c0 .55.47.98.97 1.21C16.15 18.75 17 20.24 17 22" }
            path { d: "M18 2H6v7a6 6 0 0 0 12 0V2Z" }
        },
        Icon::X => rsx! {
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        },
        Icon::Zap => rsx! {
            path { d: "M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z" }
        },
    }
}
