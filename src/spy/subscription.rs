//! Scroll listener lifecycle.
//!
//! [`ScrollSpy`](super::ScrollSpy) holds one [`ScrollSubscription`] while the
//! view is mounted. Dropping it removes the listener, so a torn-down view
//! never receives another scroll.

use super::SpyError;

/// A source of viewport change notifications (scrolls, and resizes where
/// the platform reports them).
pub trait ScrollEvents {
    /// Token needed to remove a registered listener.
    type Listener;

    fn listen(&self, callback: Box<dyn FnMut()>) -> Result<Self::Listener, SpyError>;

    fn unlisten(&self, listener: Self::Listener);
}

/// RAII guard around a registered scroll listener.
pub struct ScrollSubscription<E: ScrollEvents> {
    events: E,
    listener: Option<E::Listener>,
}

impl<E: ScrollEvents> ScrollSubscription<E> {
    pub fn attach(events: E, callback: impl FnMut() + 'static) -> Result<Self, SpyError> {
        let listener = events.listen(Box::new(callback))?;
        tracing::debug!("Scroll listener attached");
        Ok(Self {
            events,
            listener: Some(listener),
        })
    }

    pub fn is_attached(&self) -> bool {
        self.listener.is_some()
    }

    /// Remove the listener now. Later calls and the eventual drop do nothing.
    pub fn detach(&mut self) {
        if let Some(listener) = self.listener.take() {
            self.events.unlisten(listener);
            tracing::debug!("Scroll listener detached");
        }
    }
}

impl<E: ScrollEvents> Drop for ScrollSubscription<E> {
    fn drop(&mut self) {
        self.detach();
    }
}
