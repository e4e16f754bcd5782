//! Portfolio Core Library
//!
//! Platform-agnostic pieces of the portfolio site: theme preference,
//! contact-form submission, site configuration and the hard-coded page
//! content. The Dioxus application depends on this crate; nothing here
//! touches the DOM.
//!
//! ## Quick Start
//!
//! ```ignore
//! use portfolio_core::{ContactSession, HttpTransport, MemoryThemeStore, SiteConfig, Theme};
//!
//! let config = SiteConfig::default();
//! let store = MemoryThemeStore::new();
//! let theme = portfolio_core::theme::initialize(&store, config.default_theme);
//!
//! let transport = HttpTransport::new(config.endpoint());
//! let mut session = ContactSession::new();
//! session.set_name("Ada");
//! session.set_email("ada@example.com");
//! session.set_message("Hello!");
//! session.submit(&transport).await;
//! ```

pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod theme;
pub mod transport;

// Re-exports
pub use config::SiteConfig;
pub use contact::{
    extract_error_message, submit_contact, ContactForm, ContactSession, FormTransport,
    SubmissionStatus, TransportResponse,
};
pub use error::{PortfolioError, PortfolioResult, SubmitError};
pub use theme::{FileThemeStore, MemoryThemeStore, Theme, ThemeResolution, ThemeStore};
pub use transport::HttpTransport;
