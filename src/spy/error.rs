//! Scroll-spy failure modes.
//!
//! All of these are recoverable: the view logs them and keeps its last good
//! state. None is ever shown to the user.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpyError {
    /// A section id has no matching anchor in the page
    #[error("no anchor for section '{0}'")]
    MissingAnchor(String),

    /// The menu button for a section is not mounted or has no layout yet
    #[error("menu button for '{0}' is not measurable")]
    MissingButton(String),

    /// The browser refused the scroll listener
    #[error("failed to register scroll listener: {0}")]
    Listener(String),
}
