//! Site configuration.
//!
//! Values are baked in at compile time from `PORTFOLIO_FORMSPREE_ID` and
//! `PORTFOLIO_DEFAULT_THEME`. The desktop shell may override them from flags.

use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Form id used until a real one is configured.
pub const PLACEHOLDER_FORMSPREE_ID: &str = "YOUR_FORM_ID_HERE";

/// Key of the persisted theme preference.
pub const DEFAULT_THEME_KEY: &str = "theme";

const FORMSPREE_BASE: &str = "https://formspree.io/f/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Formspree form id, the last path segment of the endpoint
    pub formspree_id: String,
    /// Theme applied on a first visit
    pub default_theme: Theme,
    /// Storage key of the theme preference
    pub theme_key: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let formspree_id = option_env!("PORTFOLIO_FORMSPREE_ID")
            .filter(|id| !id.trim().is_empty())
            .unwrap_or(PLACEHOLDER_FORMSPREE_ID)
            .to_string();

        let default_theme = option_env!("PORTFOLIO_DEFAULT_THEME")
            .and_then(Theme::parse)
            .unwrap_or_default();

        Self {
            formspree_id,
            default_theme,
            theme_key: DEFAULT_THEME_KEY.to_string(),
        }
    }
}

impl SiteConfig {
    /// Full URL the contact form posts to.
    pub fn endpoint(&self) -> String {
        format!("{}{}", FORMSPREE_BASE, self.formspree_id.trim())
    }

    /// Whether the form id still needs to be filled in.
    pub fn is_placeholder(&self) -> bool {
        self.formspree_id.trim().is_empty() || self.formspree_id == PLACEHOLDER_FORMSPREE_ID
    }

    pub fn with_formspree_id(mut self, id: impl Into<String>) -> Self {
        self.formspree_id = id.into();
        self
    }

    pub fn with_default_theme(mut self, theme: Theme) -> Self {
        self.default_theme = theme;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint() {
        let config = SiteConfig::default().with_formspree_id("xyzabcd");
        assert_eq!(config.endpoint(), "https://formspree.io/f/xyzabcd");
        assert!(!config.is_placeholder());
    }

    #[test]
    fn test_placeholder_detection() {
        let config = SiteConfig::default().with_formspree_id(PLACEHOLDER_FORMSPREE_ID);
        assert!(config.is_placeholder());
        assert!(SiteConfig::default().with_formspree_id("  ").is_placeholder());
    }

    #[test]
    fn test_theme_key_default() {
        assert_eq!(SiteConfig::default().theme_key, "theme");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SiteConfig = serde_json::from_str(r#"{"default_theme":"dark"}"#).unwrap();
        assert_eq!(config.default_theme, Theme::Dark);
        assert_eq!(config.theme_key, DEFAULT_THEME_KEY);
    }
}
