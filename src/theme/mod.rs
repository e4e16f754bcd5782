//! Visual styling: global stylesheet and the accent palette.

mod colors;
mod styles;

pub use colors::{accent_style, gradient_style, palette_css};
pub use styles::GLOBAL_STYLES;
