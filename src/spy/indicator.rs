//! Indicator positioner: keeps the highlight under the active menu button.

use std::collections::HashMap;

use super::{NavigationState, SpyError};

/// Horizontal position and size of the highlight, relative to the menu
/// container. Always replaced as a whole.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IndicatorGeometry {
    pub offset: f64,
    pub width: f64,
}

impl IndicatorGeometry {
    pub fn new(offset: f64, width: f64) -> Self {
        Self { offset, width }
    }

    /// Inline CSS for the highlight element.
    pub fn style(&self, transition_ms: u32, easing: &str) -> String {
        format!(
            "left: {}px; width: {}px; transition: left {transition_ms}ms {easing}, width {transition_ms}ms {easing};",
            self.offset, self.width
        )
    }
}

/// A rendered menu button that can report its layout box.
pub trait Measurable {
    /// `None` while the button has no usable layout (not attached, hidden).
    fn measure(&self) -> Option<IndicatorGeometry>;
}

/// Section id → button handle, owned by the navigation view.
///
/// Filled as buttons mount and emptied as they unmount; event handlers only
/// read it.
#[derive(Debug)]
pub struct MenuButtons<H> {
    handles: HashMap<String, H>,
}

impl<H> Default for MenuButtons<H> {
    fn default() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }
}

impl<H> MenuButtons<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the handle for `id`, replacing a previous one.
    pub fn insert(&mut self, id: impl Into<String>, handle: H) {
        self.handles.insert(id.into(), handle);
    }

    /// Forget the handle for `id` once its button unmounts.
    pub fn remove(&mut self, id: &str) -> Option<H> {
        self.handles.remove(id)
    }
}

impl<H: Measurable> MenuButtons<H> {
    /// Measure the button for `id`. Zero-width boxes count as not measurable.
    pub fn measure(&self, id: &str) -> Result<IndicatorGeometry, SpyError> {
        self.handles
            .get(id)
            .and_then(Measurable::measure)
            .filter(|geometry| geometry.width > 0.0)
            .ok_or_else(|| SpyError::MissingButton(id.to_string()))
    }

    /// Move the indicator under the active button.
    ///
    /// Returns `Ok(true)` when the geometry changed. On error the state is
    /// left untouched, so the highlight stays at its last known position.
    pub fn reposition(&self, state: &mut NavigationState) -> Result<bool, SpyError> {
        let geometry = self.measure(&state.active)?;
        if state.indicator == Some(geometry) {
            return Ok(false);
        }
        state.indicator = Some(geometry);
        Ok(true)
    }
}
