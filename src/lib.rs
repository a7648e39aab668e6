//! Portfolio site - single-page Dioxus application
//!
//! A fixed navigation bar over five static sections (Home, About, Skills,
//! Projects, Contact). The bar highlights the section in view (scroll spy)
//! and scrolls smoothly to a section when a menu item is clicked.
//!
//! - `spy` - platform-free scroll-spy logic (tracker, indicator, navigator)
//! - `app` - Dioxus components and browser bindings
//! - `config` - embedded site definition and server settings

pub mod app;
pub mod config;
pub mod spy;
