//! The one and only page.

use dioxus::prelude::*;

use crate::components::{Certifications, Experience, Footer, Hero, Navbar, Projects, Skills};

/// Full portfolio, top to bottom.
#[component]
pub fn Index() -> Element {
    rsx! {
        main { class: "page",
            Navbar {}
            Hero {}
            Experience {}
            Projects {}
            Skills {}
            Certifications {}
            Footer {}
        }
    }
}
