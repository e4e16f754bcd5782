//! UI components for the portfolio page, one per section.

mod certifications;
mod experience;
mod footer;
mod hero;
mod icons;
mod navbar;
mod projects;
mod section_heading;
mod skills;

pub use certifications::Certifications;
pub use experience::Experience;
pub use footer::Footer;
pub use hero::Hero;
pub use icons::LucideIcon;
pub use navbar::Navbar;
pub use projects::Projects;
pub use section_heading::{HeadingSize, RichText, SectionHeading};
pub use skills::Skills;
