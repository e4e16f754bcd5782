#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod platform;
mod theme;

#[cfg(feature = "desktop")]
use std::path::PathBuf;
use std::sync::OnceLock;

#[cfg(feature = "desktop")]
use clap::Parser;
use portfolio_core::SiteConfig;

/// Global data directory, set from command line
#[cfg(feature = "desktop")]
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Site configuration, possibly overridden from the command line
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Get the data directory (set from command line or default)
#[cfg(feature = "desktop")]
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("portfolio")
    })
}

/// Get the active site configuration.
pub fn get_site_config() -> SiteConfig {
    SITE_CONFIG.get().cloned().unwrap_or_default()
}

/// Kinisha Gupta - Portfolio
#[cfg(feature = "desktop")]
#[derive(Parser, Debug)]
#[command(name = "portfolio")]
#[command(about = "Single-page portfolio site in a desktop window")]
struct Args {
    /// Data directory for the stored theme preference
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Formspree form id the contact form posts to
    #[arg(long)]
    formspree_id: Option<String>,

    /// Theme applied on first launch (light or dark)
    #[arg(long, value_parser = parse_theme)]
    theme: Option<portfolio_core::Theme>,
}

#[cfg(feature = "desktop")]
fn parse_theme(value: &str) -> Result<portfolio_core::Theme, String> {
    portfolio_core::Theme::parse(value).ok_or_else(|| format!("unknown theme '{}'", value))
}

#[cfg(feature = "desktop")]
fn main() {
    use dioxus::desktop::{Config, WindowBuilder};
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = SiteConfig::default();
    if let Some(id) = args.formspree_id {
        config = config.with_formspree_id(id);
    }
    if let Some(theme) = args.theme {
        config = config.with_default_theme(theme);
    }

    let data_dir = args.data_dir.unwrap_or_else(get_data_dir);
    let _ = DATA_DIR.set(data_dir.clone());
    let _ = SITE_CONFIG.set(config.clone());

    if config.is_placeholder() {
        tracing::warn!("No Formspree form id configured; contact form submissions will be rejected");
    }

    tracing::info!(data_dir = ?data_dir, theme = %config.default_theme, "Starting portfolio");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Kinisha Gupta - Portfolio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = SiteConfig::default();
    if config.is_placeholder() {
        tracing::warn!("No Formspree form id configured; contact form submissions will be rejected");
    }
    let _ = SITE_CONFIG.set(config);

    dioxus::launch(app::App);
}
