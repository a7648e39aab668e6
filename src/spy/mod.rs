//! Scroll-spy core: which section is active, where the highlight sits, and
//! how a menu click becomes a viewport scroll.
//!
//! Nothing in here touches the DOM. The browser side plugs in through the
//! [`Viewport`], [`AnchorLookup`], [`Measurable`] and [`ScrollEvents`] traits,
//! so the whole module runs (and is tested) on the host.

use serde::{Deserialize, Serialize};

pub mod error;
pub mod indicator;
pub mod mount;
pub mod navigator;
pub mod subscription;
pub mod tracker;

pub use error::SpyError;
pub use indicator::{IndicatorGeometry, Measurable, MenuButtons};
pub use mount::{refresh, ScrollSpy};
pub use navigator::SectionNavigator;
pub use subscription::{ScrollEvents, ScrollSubscription};
pub use tracker::{ScrollSample, ScrollTracker};

/// Section ids the page layout must provide, in document order.
pub const SECTION_IDS: [&str; 5] = ["home", "about", "skills", "projects", "contact"];

/// Returns true if `id` names one of the page's sections.
pub fn is_section_id(id: &str) -> bool {
    SECTION_IDS.contains(&id)
}

/// One entry of the navigation menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Section id this item scrolls to and tracks
    pub id: String,
    /// Display text
    pub label: String,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Read/write access to the browser viewport.
pub trait Viewport {
    /// Current vertical scroll offset in CSS pixels.
    fn scroll_y(&self) -> f64;
    /// Height of the visible viewport in CSS pixels.
    fn inner_height(&self) -> f64;
    /// Request a smooth scroll to `top`; an in-flight scroll is redirected.
    fn smooth_scroll_to(&self, top: f64);
}

/// Resolves a section id to its anchor's offset from the top of the document.
///
/// Anchors belong to the page layout; a missing one yields `None`.
pub trait AnchorLookup {
    fn anchor_top(&self, id: &str) -> Option<f64>;
}

/// State owned by the navigation view for its whole mounted lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationState {
    /// Id of the highlighted menu item
    pub active: String,
    /// True once the page is scrolled past the threshold
    pub scrolled: bool,
    /// Last measured highlight geometry; `None` until the first measurement
    pub indicator: Option<IndicatorGeometry>,
}

impl NavigationState {
    /// Initial state: the first menu item is active.
    pub fn new(menu: &[MenuItem]) -> Self {
        Self {
            active: menu
                .first()
                .map(|item| item.id.clone())
                .unwrap_or_else(|| SECTION_IDS[0].to_string()),
            scrolled: false,
            indicator: None,
        }
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active == id
    }
}
