//! Page components for the portfolio.

mod index;

pub use index::Index;
