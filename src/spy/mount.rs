//! Mount sequence of the navigation view's scroll spy.
//!
//! Mounting attaches one listener and immediately runs a refresh for the
//! current scroll position; unmounting releases the listener. The Dioxus
//! hook and the host tests both go through [`ScrollSpy`].

use super::{
    AnchorLookup, Measurable, MenuButtons, MenuItem, NavigationState, ScrollEvents,
    ScrollSubscription, ScrollTracker, SpyError, Viewport,
};

/// One refresh pass, run on mount and on every scroll or resize.
///
/// Updates `scrolled` and the active id, then re-measures the active
/// button. Re-measuring on every pass lets the highlight appear once a
/// hidden menu gets a layout (e.g. the window is widened past the mobile
/// breakpoint) without waiting for the active section to change. Returns
/// true if `state` changed.
pub fn refresh<W, H>(
    tracker: &ScrollTracker,
    state: &mut NavigationState,
    menu: &[MenuItem],
    window: &W,
    buttons: &MenuButtons<H>,
) -> bool
where
    W: Viewport + AnchorLookup,
    H: Measurable,
{
    let tracked = tracker.observe(state, menu, window, window);
    let moved = match buttons.reposition(state) {
        Ok(moved) => moved,
        Err(e) => {
            tracing::trace!("Indicator unchanged: {}", e);
            false
        }
    };
    tracked || moved
}

/// Listener slot owned by the navigation view while it is mounted.
pub struct ScrollSpy<E: ScrollEvents> {
    subscription: Option<ScrollSubscription<E>>,
}

impl<E: ScrollEvents> Default for ScrollSpy<E> {
    fn default() -> Self {
        Self { subscription: None }
    }
}

impl<E: ScrollEvents> ScrollSpy<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `on_change` to `events`, then run it once for the current
    /// position (e.g. after a reload mid-page).
    ///
    /// Returns `Ok(false)` if already mounted. If the listener cannot be
    /// registered, the initial run still happens and the error is returned.
    pub fn mount<F>(&mut self, events: E, mut on_change: F) -> Result<bool, SpyError>
    where
        F: FnMut() + Clone + 'static,
    {
        if self.is_mounted() {
            return Ok(false);
        }
        let attached = ScrollSubscription::attach(events, on_change.clone());
        on_change();
        self.subscription = Some(attached?);
        Ok(true)
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription
            .as_ref()
            .is_some_and(ScrollSubscription::is_attached)
    }

    /// Release the listener. Safe to call more than once.
    pub fn unmount(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.detach();
        }
    }
}
