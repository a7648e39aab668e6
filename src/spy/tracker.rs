//! Scroll-position tracker.
//!
//! Turns a viewport reading into `scrolled` and `active` state. Runs on every
//! scroll event, so it only reads offsets and never scrolls the page itself.

use super::{AnchorLookup, MenuItem, NavigationState, Viewport};

/// Default scroll distance (px) after which the bar counts as scrolled.
pub const DEFAULT_SCROLLED_THRESHOLD: f64 = 20.0;

/// Default fraction of the viewport (as a divisor) that activates a section.
pub const DEFAULT_VIEWPORT_DIVISOR: f64 = 3.0;

/// One reading of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSample {
    pub scroll_y: f64,
    pub viewport_height: f64,
}

impl ScrollSample {
    pub fn read(viewport: &impl Viewport) -> Self {
        Self {
            scroll_y: viewport.scroll_y(),
            viewport_height: viewport.inner_height(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTracker {
    scrolled_threshold: f64,
    viewport_divisor: f64,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLLED_THRESHOLD, DEFAULT_VIEWPORT_DIVISOR)
    }
}

impl ScrollTracker {
    pub fn new(scrolled_threshold: f64, viewport_divisor: f64) -> Self {
        Self {
            scrolled_threshold,
            viewport_divisor,
        }
    }

    /// Strictly greater than the threshold; exactly at it is not scrolled.
    pub fn is_scrolled(&self, scroll_y: f64) -> bool {
        scroll_y > self.scrolled_threshold
    }

    /// The document offset a section top has to reach to become active.
    pub fn activation_line(&self, sample: ScrollSample) -> f64 {
        sample.scroll_y + sample.viewport_height / self.viewport_divisor
    }

    /// Last menu section (in menu order) whose anchor top is at or above the
    /// activation line. Sections without an anchor are skipped. `None` when
    /// nothing qualifies.
    pub fn active_section<'a>(
        &self,
        menu: &'a [MenuItem],
        anchors: &impl AnchorLookup,
        sample: ScrollSample,
    ) -> Option<&'a MenuItem> {
        let line = self.activation_line(sample);
        menu.iter().rev().find(|item| {
            anchors
                .anchor_top(&item.id)
                .is_some_and(|top| top <= line)
        })
    }

    /// Apply a reading to `state`. Returns true if anything changed.
    ///
    /// When no section qualifies the current active id is kept.
    pub fn apply(
        &self,
        state: &mut NavigationState,
        menu: &[MenuItem],
        anchors: &impl AnchorLookup,
        sample: ScrollSample,
    ) -> bool {
        let mut changed = false;

        let scrolled = self.is_scrolled(sample.scroll_y);
        if state.scrolled != scrolled {
            state.scrolled = scrolled;
            changed = true;
        }

        if let Some(item) = self.active_section(menu, anchors, sample) {
            if state.active != item.id {
                tracing::trace!("Scroll spy: {} -> {}", state.active, item.id);
                state.active = item.id.clone();
                changed = true;
            }
        }

        changed
    }

    /// Read the viewport and apply it to `state`.
    pub fn observe(
        &self,
        state: &mut NavigationState,
        menu: &[MenuItem],
        viewport: &impl Viewport,
        anchors: &impl AnchorLookup,
    ) -> bool {
        self.apply(state, menu, anchors, ScrollSample::read(viewport))
    }
}
