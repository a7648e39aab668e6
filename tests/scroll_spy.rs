//! Scroll-spy behavior through the public API, against a fake browser window.
//!
//! The fake page has five sections at {0, 1000, 2000, 3000, 4000} and a
//! 900px viewport.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use portfolio_site::config::SiteConfig;
use portfolio_site::spy::{
    refresh, AnchorLookup, IndicatorGeometry, Measurable, MenuButtons, MenuItem, NavigationState,
    ScrollEvents, ScrollSpy, ScrollTracker, SectionNavigator, SpyError, Viewport,
};

type Callback = Box<dyn FnMut()>;

#[derive(Default)]
struct Page {
    scroll_y: Cell<f64>,
    inner_height: Cell<f64>,
    anchors: RefCell<HashMap<String, f64>>,
    scroll_requests: RefCell<Vec<f64>>,
    listeners: RefCell<Vec<(u32, Callback)>>,
    next_listener: Cell<u32>,
}

/// Cloneable handle, the way the browser window is shared
#[derive(Clone)]
struct FakeWindow(Rc<Page>);

impl FakeWindow {
    fn with_sections() -> Self {
        let page = Page::default();
        page.inner_height.set(900.0);
        for (i, id) in ["home", "about", "skills", "projects", "contact"]
            .iter()
            .enumerate()
        {
            page.anchors
                .borrow_mut()
                .insert(id.to_string(), i as f64 * 1000.0);
        }
        Self(Rc::new(page))
    }

    fn dispatch(&self) {
        for (_, cb) in self.0.listeners.borrow_mut().iter_mut() {
            cb();
        }
    }

    /// Set the scroll offset and dispatch a scroll event
    fn scroll(&self, y: f64) {
        self.0.scroll_y.set(y);
        self.dispatch();
    }

    /// Set the viewport height and dispatch a resize event
    fn resize(&self, height: f64) {
        self.0.inner_height.set(height);
        self.dispatch();
    }

    fn listener_count(&self) -> usize {
        self.0.listeners.borrow().len()
    }
}

impl Viewport for FakeWindow {
    fn scroll_y(&self) -> f64 {
        self.0.scroll_y.get()
    }

    fn inner_height(&self) -> f64 {
        self.0.inner_height.get()
    }

    fn smooth_scroll_to(&self, top: f64) {
        self.0.scroll_requests.borrow_mut().push(top);
    }
}

impl AnchorLookup for FakeWindow {
    fn anchor_top(&self, id: &str) -> Option<f64> {
        self.0.anchors.borrow().get(id).copied()
    }
}

impl ScrollEvents for FakeWindow {
    type Listener = u32;

    fn listen(&self, callback: Callback) -> Result<u32, SpyError> {
        let id = self.0.next_listener.get();
        self.0.next_listener.set(id + 1);
        self.0.listeners.borrow_mut().push((id, callback));
        Ok(id)
    }

    fn unlisten(&self, listener: u32) {
        self.0
            .listeners
            .borrow_mut()
            .retain(|(id, _)| *id != listener);
    }
}

/// A menu button whose layout box the test controls
#[derive(Clone, Default)]
struct Button(Rc<Cell<Option<IndicatorGeometry>>>);

impl Button {
    fn at(offset: f64, width: f64) -> Self {
        let button = Self::default();
        button.layout(offset, width);
        button
    }

    fn layout(&self, offset: f64, width: f64) {
        self.0.set(Some(IndicatorGeometry::new(offset, width)));
    }
}

impl Measurable for Button {
    fn measure(&self) -> Option<IndicatorGeometry> {
        self.0.get()
    }
}

/// Minimal navigation view: state, button map and a render counter
struct View {
    state: Rc<RefCell<NavigationState>>,
    buttons: Rc<RefCell<MenuButtons<Button>>>,
    renders: Rc<Cell<u32>>,
    spy: ScrollSpy<FakeWindow>,
}

impl View {
    fn mount(window: &FakeWindow, menu: Vec<MenuItem>) -> Self {
        Self::mount_with_buttons(window, menu, MenuButtons::new())
    }

    fn mount_with_buttons(
        window: &FakeWindow,
        menu: Vec<MenuItem>,
        buttons: MenuButtons<Button>,
    ) -> Self {
        let tracker = ScrollTracker::default();
        let state = Rc::new(RefCell::new(NavigationState::new(&menu)));
        let buttons = Rc::new(RefCell::new(buttons));
        let renders = Rc::new(Cell::new(0));
        let menu: Rc<[MenuItem]> = menu.into();

        let on_change = {
            let state = state.clone();
            let buttons = buttons.clone();
            let renders = renders.clone();
            let window = window.clone();
            move || {
                let mut state = state.borrow_mut();
                if refresh(&tracker, &mut state, &menu, &window, &*buttons.borrow()) {
                    renders.set(renders.get() + 1);
                }
            }
        };
        let mut spy = ScrollSpy::new();
        spy.mount(window.clone(), on_change).unwrap();

        Self {
            state,
            buttons,
            renders,
            spy,
        }
    }

    fn active(&self) -> String {
        self.state.borrow().active.clone()
    }

    fn indicator(&self) -> Option<IndicatorGeometry> {
        self.state.borrow().indicator
    }

    fn unmount(&mut self) {
        self.spy.unmount();
    }
}

fn menu() -> Vec<MenuItem> {
    SiteConfig::default().menu
}

fn full_menu() -> Vec<MenuItem> {
    let mut menu = menu();
    menu.push(MenuItem::new("contact", "Contact"));
    menu
}

#[test]
fn active_section_follows_scroll_offset() {
    let window = FakeWindow::with_sections();
    let view = View::mount(&window, full_menu());
    assert_eq!(view.active(), "home");

    window.scroll(950.0);
    assert_eq!(view.active(), "about");

    window.scroll(0.0);
    assert_eq!(view.active(), "home");

    window.scroll(3950.0);
    assert_eq!(view.active(), "contact");
}

#[test]
fn active_section_matches_reference_rule_for_all_offsets() {
    let window = FakeWindow::with_sections();
    let menu = full_menu();
    let view = View::mount(&window, menu.clone());

    for step in 0..=100 {
        let y = f64::from(step) * 47.0;
        window.scroll(y);

        let line = y + 900.0 / 3.0;
        let expected = menu
            .iter()
            .rev()
            .find(|item| window.anchor_top(&item.id).unwrap() <= line)
            .map(|item| item.id.clone())
            .unwrap_or_else(|| menu[0].id.clone());
        assert_eq!(view.active(), expected, "scroll_y = {y}");
    }
}

#[test]
fn four_item_menu_keeps_projects_at_page_bottom() {
    // The shipped menu has no contact entry, so projects stays lit
    let window = FakeWindow::with_sections();
    let view = View::mount(&window, menu());

    window.scroll(3950.0);
    assert_eq!(view.active(), "projects");
}

#[test]
fn scrolled_flag_has_exclusive_threshold() {
    let window = FakeWindow::with_sections();
    let view = View::mount(&window, menu());

    window.scroll(20.0);
    assert!(!view.state.borrow().scrolled);

    window.scroll(21.0);
    assert!(view.state.borrow().scrolled);

    window.scroll(0.0);
    assert!(!view.state.borrow().scrolled);
}

#[test]
fn missing_anchor_is_skipped_not_fatal() {
    let window = FakeWindow::with_sections();
    window.0.anchors.borrow_mut().remove("about");
    let view = View::mount(&window, menu());

    window.scroll(950.0);
    assert_eq!(view.active(), "home");

    window.scroll(1800.0);
    assert_eq!(view.active(), "skills");
}

#[test]
fn mount_reads_initial_position() {
    let window = FakeWindow::with_sections();
    window.0.scroll_y.set(2100.0);

    let view = View::mount(&window, menu());
    assert_eq!(view.active(), "skills");
    assert!(view.state.borrow().scrolled);
}

#[test]
fn clicking_a_section_scrolls_to_its_anchor() {
    let window = FakeWindow::with_sections();
    let navigator = SectionNavigator::default();

    for start in [0.0, 2500.0, 4000.0] {
        window.0.scroll_y.set(start);
        assert_eq!(navigator.go_to("skills", &window, &window), Ok(2000.0));
    }

    assert_eq!(*window.0.scroll_requests.borrow(), vec![2000.0; 3]);
}

#[test]
fn clicking_a_missing_section_does_nothing() {
    let window = FakeWindow::with_sections();
    window.0.anchors.borrow_mut().remove("contact");

    let result = SectionNavigator::default().go_to("contact", &window, &window);
    assert_eq!(result, Err(SpyError::MissingAnchor("contact".into())));
    assert!(window.0.scroll_requests.borrow().is_empty());
}

#[test]
fn unmount_removes_listener_and_stops_updates() {
    let window = FakeWindow::with_sections();
    let mut view = View::mount(&window, menu());
    assert_eq!(window.listener_count(), 1);

    window.scroll(950.0);
    let renders = view.renders.get();
    assert!(renders > 0);

    view.unmount();
    assert_eq!(window.listener_count(), 0);

    window.scroll(2500.0);
    assert_eq!(view.renders.get(), renders);
    assert_eq!(view.active(), "about");
}

#[test]
fn mount_measures_once_without_a_scroll_event() {
    let window = FakeWindow::with_sections();
    window.0.scroll_y.set(950.0);

    let view = View::mount(&window, menu());
    assert_eq!(view.renders.get(), 1);
    assert_eq!(view.active(), "about");
    assert_eq!(window.listener_count(), 1);
}

#[test]
fn dropping_the_view_removes_listener() {
    let window = FakeWindow::with_sections();
    let view = View::mount(&window, menu());
    assert_eq!(window.listener_count(), 1);

    drop(view);
    assert_eq!(window.listener_count(), 0);
    window.scroll(2500.0);
}

#[test]
fn indicator_tracks_measurable_buttons_only() {
    let mut buttons = MenuButtons::new();
    buttons.insert("home", Button::at(12.0, 88.0));
    buttons.insert("about", Button::at(108.0, 92.0));
    buttons.insert("skills", Button::default());

    let window = FakeWindow::with_sections();
    let view = View::mount_with_buttons(&window, menu(), buttons);
    assert_eq!(view.indicator(), Some(IndicatorGeometry::new(12.0, 88.0)));

    window.scroll(950.0);
    assert_eq!(view.indicator(), Some(IndicatorGeometry::new(108.0, 92.0)));

    // Skills button has no layout yet: highlight stays where it was
    window.scroll(1800.0);
    assert_eq!(view.active(), "skills");
    assert_eq!(view.indicator(), Some(IndicatorGeometry::new(108.0, 92.0)));
}

#[test]
fn indicator_appears_when_resize_reveals_menu() {
    // Loaded below the desktop breakpoint: buttons exist but have no width
    let home = Button::at(0.0, 0.0);
    let mut buttons = MenuButtons::new();
    buttons.insert("home", home.clone());

    let window = FakeWindow::with_sections();
    let view = View::mount_with_buttons(&window, menu(), buttons);
    assert_eq!(view.indicator(), None);

    home.layout(12.0, 88.0);
    window.resize(1200.0);
    assert_eq!(view.active(), "home");
    assert_eq!(view.indicator(), Some(IndicatorGeometry::new(12.0, 88.0)));
}

#[test]
fn resize_moves_the_activation_line() {
    let window = FakeWindow::with_sections();
    window.0.scroll_y.set(500.0);
    let view = View::mount(&window, full_menu());
    assert_eq!(view.active(), "home");

    // 500 + 1800 / 3 = 1100 crosses the about anchor
    window.resize(1800.0);
    assert_eq!(view.active(), "about");
}

#[test]
fn unmounted_button_stops_driving_indicator() {
    let mut buttons = MenuButtons::new();
    buttons.insert("home", Button::at(12.0, 88.0));
    buttons.insert("about", Button::at(108.0, 92.0));

    let window = FakeWindow::with_sections();
    let view = View::mount_with_buttons(&window, menu(), buttons);

    view.buttons.borrow_mut().remove("about");
    window.scroll(950.0);
    assert_eq!(view.active(), "about");
    assert_eq!(view.indicator(), Some(IndicatorGeometry::new(12.0, 88.0)));
}
