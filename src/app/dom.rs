//! Browser bindings for the scroll-spy traits.
//!
//! On wasm32 these wrap `web_sys::Window` and menu button elements. Every
//! other target (server-side rendering, host tests) gets inert stand-ins:
//! there is no window, no anchors and nothing to measure.

use dioxus::prelude::MountedData;

use crate::spy::{
    AnchorLookup, IndicatorGeometry, Measurable, ScrollEvents, SpyError, Viewport,
};

#[cfg(target_arch = "wasm32")]
pub use browser::{ButtonRef, PageWindow};
#[cfg(not(target_arch = "wasm32"))]
pub use headless::{ButtonRef, PageWindow};

// ============ WASM-only bindings ============

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::*;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    /// The browser window: viewport, anchors and scroll/resize events.
    #[derive(Clone)]
    pub struct PageWindow {
        window: web_sys::Window,
    }

    impl PageWindow {
        pub fn current() -> Option<Self> {
            web_sys::window().map(|window| Self { window })
        }
    }

    impl Viewport for PageWindow {
        fn scroll_y(&self) -> f64 {
            self.window.scroll_y().unwrap_or(0.0)
        }

        fn inner_height(&self) -> f64 {
            self.window
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or(0.0)
        }

        fn smooth_scroll_to(&self, top: f64) {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            self.window.scroll_to_with_scroll_to_options(&options);
        }
    }

    impl AnchorLookup for PageWindow {
        fn anchor_top(&self, id: &str) -> Option<f64> {
            let element = self.window.document()?.get_element_by_id(id)?;
            let element = element.dyn_into::<web_sys::HtmlElement>().ok()?;
            Some(f64::from(element.offset_top()))
        }
    }

    /// Resizing moves the activation line and can show or hide the
    /// desktop menu, so it refreshes like a scroll does.
    const EVENTS: [&str; 2] = ["scroll", "resize"];

    impl ScrollEvents for PageWindow {
        type Listener = Closure<dyn FnMut()>;

        fn listen(&self, callback: Box<dyn FnMut()>) -> Result<Self::Listener, SpyError> {
            let closure = Closure::wrap(callback);
            let options = web_sys::AddEventListenerOptions::new();
            options.set_passive(true);
            for (i, event) in EVENTS.iter().enumerate() {
                let added = self
                    .window
                    .add_event_listener_with_callback_and_add_event_listener_options(
                        event,
                        closure.as_ref().unchecked_ref(),
                        &options,
                    );
                if let Err(e) = added {
                    // Roll back the ones already registered
                    for registered in &EVENTS[..i] {
                        self.remove(registered, &closure);
                    }
                    return Err(SpyError::Listener(format!("{}: {:?}", event, e)));
                }
            }
            Ok(closure)
        }

        fn unlisten(&self, listener: Self::Listener) {
            for event in EVENTS {
                self.remove(event, &listener);
            }
        }
    }

    impl PageWindow {
        fn remove(&self, event: &str, listener: &Closure<dyn FnMut()>) {
            if let Err(e) = self
                .window
                .remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
            {
                tracing::warn!("Failed to remove {} listener: {:?}", event, e);
            }
        }
    }

    /// A mounted desktop menu button.
    #[derive(Clone)]
    pub struct ButtonRef(web_sys::HtmlElement);

    impl ButtonRef {
        pub fn from_mounted(data: &MountedData) -> Option<Self> {
            let element = data.downcast::<web_sys::Element>()?.clone();
            element.dyn_into::<web_sys::HtmlElement>().ok().map(Self)
        }
    }

    impl Measurable for ButtonRef {
        // Offsets are relative to the menu container (the positioned parent)
        fn measure(&self) -> Option<IndicatorGeometry> {
            Some(IndicatorGeometry::new(
                f64::from(self.0.offset_left()),
                f64::from(self.0.offset_width()),
            ))
        }
    }
}

// ============ Non-browser stand-ins ============

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use super::*;

    /// No window outside the browser; [`PageWindow::current`] is always `None`.
    #[derive(Clone, Copy, Debug)]
    pub struct PageWindow;

    impl PageWindow {
        pub fn current() -> Option<Self> {
            None
        }
    }

    impl Viewport for PageWindow {
        fn scroll_y(&self) -> f64 {
            0.0
        }

        fn inner_height(&self) -> f64 {
            0.0
        }

        fn smooth_scroll_to(&self, _top: f64) {}
    }

    impl AnchorLookup for PageWindow {
        fn anchor_top(&self, _id: &str) -> Option<f64> {
            None
        }
    }

    impl ScrollEvents for PageWindow {
        type Listener = ();

        fn listen(&self, _callback: Box<dyn FnMut()>) -> Result<(), SpyError> {
            Ok(())
        }

        fn unlisten(&self, _listener: ()) {}
    }

    #[derive(Clone, Copy, Debug)]
    pub struct ButtonRef;

    impl ButtonRef {
        pub fn from_mounted(_data: &MountedData) -> Option<Self> {
            None
        }
    }

    impl Measurable for ButtonRef {
        fn measure(&self) -> Option<IndicatorGeometry> {
            None
        }
    }
}
