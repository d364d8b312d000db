use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::scroll::{Section, Viewport};

/// `Viewport` backed by the live `window` and `document`. Only call from
/// event handlers or effects; there is no window during SSR.
#[derive(Debug, Clone, Copy)]
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn scroll_y(&self) -> f64 {
        window().scroll_y().unwrap_or_default()
    }

    fn section_top(&self, section: Section) -> Option<f64> {
        document()
            .get_element_by_id(section.id())?
            .dyn_into::<HtmlElement>()
            .ok()
            .map(|el| f64::from(el.offset_top()))
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    }
}
