use serde::{Deserialize, Serialize};

/// The viewport transform applied to the image layer: a translation
/// followed by a uniform scale.
///
/// The controller is the only writer; the render step and the zoom
/// readout are the readers. Scale is kept within the configured bounds
/// by the controller (see `ViewportConfig`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Transform {
    pub fn new(scale: f64, translate_x: f64, translate_y: f64) -> Self {
        Self {
            scale,
            translate_x,
            translate_y,
        }
    }

    /// The default view: unscaled, untranslated.
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Zoom level for the textual readout, as a whole percentage.
    pub fn zoom_percent(&self) -> i64 {
        (self.scale * 100.0).round() as i64
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
