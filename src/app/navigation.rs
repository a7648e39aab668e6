//! Navigation view state.
//!
//! The nav bar owns one [`Navigation`] for as long as it is mounted: the
//! scroll-spy state, the section id → menu button mapping and the mobile
//! menu toggle. Children reach it through [`use_navigation`].

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::app::dom::{ButtonRef, PageWindow};
use crate::config::SiteConfig;
use crate::spy::{
    refresh, IndicatorGeometry, MenuButtons, MenuItem, NavigationState, ScrollSpy,
    SectionNavigator,
};

/// Handle to the navigation view state shared via context
#[derive(Clone, Copy)]
pub struct Navigation {
    state: Signal<NavigationState>,
    buttons: Signal<MenuButtons<ButtonRef>>,
    menu_open: Signal<bool>,
    navigator: SectionNavigator,
}

impl Navigation {
    pub fn is_active(&self, id: &str) -> bool {
        self.state.read().is_active(id)
    }

    pub fn is_scrolled(&self) -> bool {
        self.state.read().scrolled
    }

    /// Last measured highlight geometry, `None` before the first measurement
    pub fn indicator(&self) -> Option<IndicatorGeometry> {
        self.state.read().indicator
    }

    /// Record the mounted desktop button for `id`
    pub fn register_button(&self, id: &str, button: ButtonRef) {
        let mut buttons = self.buttons;
        buttons.write().insert(id, button);
    }

    /// Drop the handle for `id` when its button unmounts
    pub fn unregister_button(&self, id: &str) {
        let mut buttons = self.buttons;
        // The whole view may already be gone
        if let Ok(mut buttons) = buttons.try_write() {
            buttons.remove(id);
        };
    }

    /// Smooth-scroll to section `id`. Missing anchors are ignored.
    pub fn go_to(&self, id: &str) {
        let Some(window) = PageWindow::current() else {
            return;
        };
        if let Err(e) = self.navigator.go_to(id, &window, &window) {
            tracing::debug!("Navigation skipped: {}", e);
        }
    }

    pub fn is_menu_open(&self) -> bool {
        (self.menu_open)()
    }

    pub fn toggle_menu(&self) {
        let mut open = self.menu_open;
        let next = !*open.peek();
        open.set(next);
    }

    pub fn close_menu(&self) {
        let mut open = self.menu_open;
        if *open.peek() {
            open.set(false);
        }
    }
}

/// Initialize navigation state - call once in the nav bar component
pub fn use_navigation_provider(site: &SiteConfig) -> Navigation {
    let state = use_signal(|| NavigationState::new(&site.menu));
    let buttons = use_signal(MenuButtons::<ButtonRef>::new);
    let menu_open = use_signal(|| false);

    let nav = Navigation {
        state,
        buttons,
        menu_open,
        navigator: SectionNavigator,
    };
    use_context_provider(|| nav);

    let tracker = site.spy.tracker();
    let menu: Rc<[MenuItem]> = use_hook(|| site.menu.clone().into());

    // Listener lives in a hook slot so it is released with the view
    let spy: Rc<RefCell<ScrollSpy<PageWindow>>> =
        use_hook(|| Rc::new(RefCell::new(ScrollSpy::new())));

    let mounted = spy.clone();
    use_effect(move || {
        let Some(window) = PageWindow::current() else {
            return;
        };
        let on_change = {
            let window = window.clone();
            let menu = menu.clone();
            move || {
                let mut state = state;
                let mut next = state.peek().clone();
                if refresh(&tracker, &mut next, &menu, &window, &*buttons.peek()) {
                    state.set(next);
                }
            }
        };
        if let Err(e) = mounted.borrow_mut().mount(window, on_change) {
            tracing::warn!("Scroll spy disabled: {}", e);
        }
    });

    use_drop(move || spy.borrow_mut().unmount());

    // Indicator follows the active section, and retries once its button mounts
    let active = use_memo(move || state.read().active.clone());
    use_effect(move || {
        let active = active();
        let buttons = buttons.read();
        let mut next = state.peek().clone();
        match buttons.reposition(&mut next) {
            Ok(true) => {
                let mut state = state;
                state.set(next);
            }
            Ok(false) => {}
            Err(e) => tracing::trace!("Indicator for '{}' unchanged: {}", active, e),
        }
    });

    nav
}

/// Get navigation state - use in any component under the nav bar
pub fn use_navigation() -> Navigation {
    use_context::<Navigation>()
}
