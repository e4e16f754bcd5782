//! Accent palette
//!
//! Each accent gets a light-mode and a dark-mode shade, emitted as
//! `--accent-<name>` custom properties on `:root` and `:root.dark`.
//! Components pick an accent by setting `--accent` (or `--from`/`--to` for
//! gradients) inline; the stylesheet only ever reads those variables.

use portfolio_core::content::{Accent, Gradient};

/// (accent, light shade, dark shade)
pub const PALETTE: &[(Accent, &str, &str)] = &[
    (Accent::Blue, "#2563eb", "#60a5fa"),
    (Accent::Cyan, "#0891b2", "#22d3ee"),
    (Accent::Indigo, "#4f46e5", "#818cf8"),
    (Accent::Rose, "#e11d48", "#fb7185"),
    (Accent::Orange, "#ea580c", "#fb923c"),
    (Accent::Emerald, "#059669", "#34d399"),
    (Accent::Teal, "#0d9488", "#2dd4bf"),
    (Accent::Violet, "#7c3aed", "#a78bfa"),
    (Accent::Purple, "#9333ea", "#c084fc"),
    (Accent::Yellow, "#eab308", "#facc15"),
    (Accent::Slate, "#0f172a", "#ffffff"),
];

fn var_name(accent: Accent) -> String {
    format!("--accent-{}", accent.as_str())
}

/// Custom-property declarations for both themes.
pub fn palette_css() -> String {
    let mut light = String::from(":root {\n");
    let mut dark = String::from(":root.dark {\n");
    for (accent, light_shade, dark_shade) in PALETTE {
        light.push_str(&format!("  {}: {};\n", var_name(*accent), light_shade));
        dark.push_str(&format!("  {}: {};\n", var_name(*accent), dark_shade));
    }
    light.push_str("}\n");
    dark.push_str("}\n");
    light + &dark
}

/// Inline style selecting a single accent.
pub fn accent_style(accent: Accent) -> String {
    format!("--accent: var({});", var_name(accent))
}

/// Inline style selecting a two-stop gradient.
pub fn gradient_style(gradient: Gradient) -> String {
    format!(
        "--from: var({}); --to: var({});",
        var_name(gradient.from),
        var_name(gradient.to)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_declares_every_accent_twice() {
        let css = palette_css();
        for (accent, _, _) in PALETTE {
            let decl = format!("{}:", var_name(*accent));
            assert_eq!(css.matches(&decl).count(), 2, "{}", accent.as_str());
        }
    }

    #[test]
    fn test_inline_styles() {
        assert_eq!(accent_style(Accent::Rose), "--accent: var(--accent-rose);");
        let style = gradient_style(Gradient {
            from: Accent::Blue,
            to: Accent::Cyan,
        });
        assert_eq!(style, "--from: var(--accent-blue); --to: var(--accent-cyan);");
    }
}
