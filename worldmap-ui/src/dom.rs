// worldmap-ui/src/dom.rs
//!
//! `ViewportHost` backed by live DOM elements.
//!
//! The controller never touches the DOM itself: it sees the widget only
//! through this host. Geometry is read fresh from `getBoundingClientRect`
//! on every call, so the boxes always reflect the currently rendered
//! transform.

use wasm_bindgen::JsValue;
use web_sys::HtmlElement;
use worldmap_core::{Point, Rect, Transform, ViewportHost};

/// Class toggled on the container while a drag is active.
const GRABBING_CLASS: &str = "grabbing";

pub struct DomHost {
    layer: HtmlElement,
    container: Option<HtmlElement>,
    readout: Option<HtmlElement>,
}

impl DomHost {
    /// Wire the host to its elements. The image layer is mandatory; the
    /// container and the zoom readout degrade gracefully when absent.
    ///
    /// The layer gets `transform-origin: 0 0` so that scale grows the
    /// box away from its top-left corner, which is the geometry the
    /// zoom anchoring math assumes.
    pub fn new(
        layer: HtmlElement,
        container: Option<HtmlElement>,
        readout: Option<HtmlElement>,
    ) -> Self {
        if let Err(e) = layer.style().set_property("transform-origin", "0 0") {
            log::warn!("failed to set transform-origin on map layer: {e:?}");
        }
        Self {
            layer,
            container,
            readout,
        }
    }
}

impl ViewportHost for DomHost {
    fn layer_rect(&self) -> Option<Rect> {
        Some(rect_from_dom(&self.layer.get_bounding_client_rect()))
    }

    fn container_rect(&self) -> Option<Rect> {
        self.container
            .as_ref()
            .map(|el| rect_from_dom(&el.get_bounding_client_rect()))
    }

    fn window_center(&self) -> Point {
        let Some(window) = web_sys::window() else {
            return Point::default();
        };
        Point::new(
            js_f64(window.inner_width()) / 2.0,
            js_f64(window.inner_height()) / 2.0,
        )
    }

    fn apply(&self, transform: &Transform) {
        if let Err(e) = self
            .layer
            .style()
            .set_property("transform", &css_transform_value(transform))
        {
            log::warn!("failed to apply map transform: {e:?}");
        }
        if let Some(readout) = &self.readout {
            readout.set_inner_text(&zoom_readout(transform));
        }
    }

    fn set_grabbing(&self, grabbing: bool) {
        let Some(container) = &self.container else {
            return;
        };
        let result = if grabbing {
            container.class_list().add_1(GRABBING_CLASS)
        } else {
            container.class_list().remove_1(GRABBING_CLASS)
        };
        if let Err(e) = result {
            log::warn!("failed to toggle {GRABBING_CLASS} class: {e:?}");
        }
    }
}

fn rect_from_dom(rect: &web_sys::DomRect) -> Rect {
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

fn js_f64(value: Result<JsValue, JsValue>) -> f64 {
    value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

/// CSS `transform` property value for a viewport transform. Translate
/// comes before scale so the translation is in untransformed pixels.
pub fn css_transform_value(t: &Transform) -> String {
    format!(
        "translate({}px, {}px) scale({})",
        t.translate_x, t.translate_y, t.scale
    )
}

/// Text shown in the zoom readout element.
pub fn zoom_readout(t: &Transform) -> String {
    format!("Zoom: {}%", t.zoom_percent())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_value_for_identity() {
        let t = Transform::identity();
        assert_eq!(css_transform_value(&t), "translate(0px, 0px) scale(1)");
    }

    #[test]
    fn css_value_orders_translate_before_scale() {
        let t = Transform::new(1.2, -130.5, 48.0);
        assert_eq!(
            css_transform_value(&t),
            "translate(-130.5px, 48px) scale(1.2)"
        );
    }

    #[test]
    fn readout_shows_whole_percent() {
        assert_eq!(zoom_readout(&Transform::identity()), "Zoom: 100%");
        let zoomed = Transform::new(0.3 + 0.2 + 0.2 + 0.2, 0.0, 0.0);
        assert_eq!(zoom_readout(&zoomed), "Zoom: 90%");
    }
}
