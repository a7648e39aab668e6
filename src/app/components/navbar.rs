//! Fixed navigation bar with scroll-spy highlight.

use dioxus::prelude::*;

use crate::app::dom::ButtonRef;
use crate::app::navigation::{use_navigation, use_navigation_provider};
use crate::app::use_site;
use crate::spy::{MenuItem, SECTION_IDS};

/// The navigation view. Owns the scroll-spy state while mounted.
#[component]
pub fn NavBar() -> Element {
    let site = use_site();
    let nav = use_navigation_provider(&site);

    let bar_class = if nav.is_scrolled() {
        "navbar navbar--scrolled"
    } else {
        "navbar"
    };

    rsx! {
        nav { class: "{bar_class}",
            div { class: "navbar__inner",
                BrandButton { brand: site.brand.clone() }
                MenuPill {
                    menu: site.menu.clone(),
                    transition_ms: site.spy.transition_ms,
                    easing: site.spy.easing.clone(),
                }
                CtaButton { label: site.cta.label.clone(), target: site.cta.target.clone() }
                MenuToggle {}
            }
            MobileMenu { menu: site.menu.clone() }
        }
    }
}

/// Logo button, scrolls back to the top section
#[component]
fn BrandButton(brand: String) -> Element {
    let nav = use_navigation();

    rsx! {
        button {
            r#type: "button",
            class: "brand",
            onclick: move |_| nav.go_to(SECTION_IDS[0]),
            h1 { class: "brand__text", "{brand}" }
        }
    }
}

/// Desktop menu with the animated highlight behind the active item
#[component]
fn MenuPill(menu: Vec<MenuItem>, transition_ms: u32, easing: String) -> Element {
    let nav = use_navigation();

    // Not rendered until the first measurement, so it never flashes at origin
    let indicator = nav.indicator().map(|geometry| {
        let style = geometry.style(transition_ms, &easing);
        rsx! {
            div { class: "menu-pill__indicator", style: "{style}",
                div { class: "menu-pill__glow" }
            }
        }
    });

    rsx! {
        div { class: "menu-pill",
            div { class: "menu-pill__track",
                {indicator}
                div { class: "menu-pill__items",
                    for item in menu {
                        MenuButton { key: "{item.id}", item: item.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn MenuButton(item: MenuItem) -> Element {
    let nav = use_navigation();
    let active = nav.is_active(&item.id);
    let mounted_id = item.id.clone();
    let target = item.id.clone();
    let dropped_id = item.id.clone();
    use_drop(move || nav.unregister_button(&dropped_id));

    rsx! {
        button {
            r#type: "button",
            class: if active { "menu-button menu-button--active" } else { "menu-button" },
            "aria-current": if active { "true" } else { "false" },
            onmounted: move |evt: MountedEvent| {
                if let Some(button) = ButtonRef::from_mounted(&evt.data()) {
                    nav.register_button(&mounted_id, button);
                }
            },
            onclick: move |_| nav.go_to(&target),
            "{item.label}"
        }
    }
}

#[component]
fn CtaButton(label: String, target: String) -> Element {
    let nav = use_navigation();

    rsx! {
        button {
            r#type: "button",
            class: "cta",
            onclick: move |_| nav.go_to(&target),
            span { class: "cta__label",
                "{label}"
                svg {
                    class: "cta__arrow",
                    fill: "none",
                    stroke: "currentColor",
                    view_box: "0 0 24 24",
                    path {
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        stroke_width: "2",
                        d: "M13 7l5 5m0 0l-5 5m5-5H6",
                    }
                }
            }
            span { class: "cta__glow" }
        }
    }
}

/// Hamburger shown below the desktop breakpoint
#[component]
fn MenuToggle() -> Element {
    let nav = use_navigation();
    let open = nav.is_menu_open();

    rsx! {
        button {
            r#type: "button",
            class: "menu-toggle",
            "aria-label": if open { "Close menu" } else { "Open menu" },
            "aria-expanded": if open { "true" } else { "false" },
            onclick: move |_| nav.toggle_menu(),
            svg {
                class: "menu-toggle__icon",
                fill: "none",
                stroke: "currentColor",
                view_box: "0 0 24 24",
                path {
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    stroke_width: "2",
                    d: "M4 6h16M4 12h16M4 18h16",
                }
            }
        }
    }
}

#[component]
fn MobileMenu(menu: Vec<MenuItem>) -> Element {
    let nav = use_navigation();

    if !nav.is_menu_open() {
        return rsx! {};
    }

    rsx! {
        div { class: "mobile-menu",
            for item in menu {
                button {
                    key: "{item.id}",
                    r#type: "button",
                    class: if nav.is_active(&item.id) { "mobile-menu__item mobile-menu__item--active" } else { "mobile-menu__item" },
                    onclick: {
                        let target = item.id.clone();
                        move |_| {
                            nav.close_menu();
                            nav.go_to(&target);
                        }
                    },
                    "{item.label}"
                }
            }
        }
    }
}
