//! Section navigator: menu and call-to-action clicks scroll the viewport.
//!
//! The indicator is not touched here. The resulting scroll events drive the
//! tracker, which moves the highlight once the target crosses the line.

use super::{AnchorLookup, SpyError, Viewport};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SectionNavigator;

impl SectionNavigator {
    /// Scroll to the top of section `id` and return the requested offset.
    ///
    /// A missing anchor is an error and nothing is scrolled.
    pub fn go_to(
        &self,
        id: &str,
        viewport: &impl Viewport,
        anchors: &impl AnchorLookup,
    ) -> Result<f64, SpyError> {
        let top = anchors
            .anchor_top(id)
            .ok_or_else(|| SpyError::MissingAnchor(id.to_string()))?;
        tracing::debug!("Navigating to section '{}' at {}px", id, top);
        viewport.smooth_scroll_to(top);
        Ok(top)
    }
}
