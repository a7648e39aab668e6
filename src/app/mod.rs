//! Dioxus application entry point.
//!
//! The root [`App`] renders the navigation view above the five sections.
//! It runs server-side for the initial HTML and hydrates in the browser,
//! where the scroll spy attaches.

use dioxus::prelude::*;

pub mod components;
pub mod dom;
pub mod navigation;

use crate::config::SiteConfig;
use components::{Layout, NavBar, Sections};

/// Root app component
#[component]
pub fn App() -> Element {
    // Site definition is shared by every component below
    let site = use_site_provider();

    rsx! {
        Layout { title: "{site.brand} - Portfolio",
            NavBar {}
            main { Sections {} }
        }
    }
}

/// Initialize site context provider - call once at app root
pub fn use_site_provider() -> SiteConfig {
    use_context_provider(SiteConfig::embedded)
}

/// Get site context - use in any component
pub fn use_site() -> SiteConfig {
    use_context::<SiteConfig>()
}
