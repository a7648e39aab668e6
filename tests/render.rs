//! Server-side render of the full page.
//!
//! Effects do not run during SSR, so this checks the markup contract: the
//! five section ids, the menu, and the initial state before any scroll.

use dioxus::prelude::*;
use portfolio_site::app::App;
use portfolio_site::spy::SECTION_IDS;

fn render_page() -> String {
    let mut dom = VirtualDom::new(App);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn renders_all_section_anchors() {
    let html = render_page();
    for id in SECTION_IDS {
        assert!(
            html.contains(&format!("id=\"{id}\"")),
            "missing section anchor '{id}'"
        );
    }
}

#[test]
fn renders_menu_with_first_item_active() {
    let html = render_page();

    for label in ["Home", "About", "Skills", "Projects"] {
        assert!(html.contains(label), "missing menu label '{label}'");
    }
    assert_eq!(html.matches("menu-button--active").count(), 1);
    assert_eq!(html.matches("aria-current=\"true\"").count(), 1);
}

#[test]
fn indicator_is_absent_before_measurement() {
    let html = render_page();
    assert!(html.contains("menu-pill__track"));
    assert!(!html.contains("menu-pill__indicator"));
}

#[test]
fn initial_bar_is_not_scrolled_and_menu_is_closed() {
    let html = render_page();
    assert!(!html.contains("navbar--scrolled"));
    assert!(!html.contains("mobile-menu__item"));
    assert!(html.contains("aria-expanded=\"false\""));
}

#[test]
fn renders_site_content() {
    let html = render_page();
    assert!(html.contains("Welcome Home"));
    assert!(html.contains("mailto:hello@example.com"));
    assert_eq!(html.matches("project-card__title").count(), 4);
}
