//! Viewport policy constants.
//!
//! These are fixed policy values, not runtime-mutable settings. They are
//! carried in a struct (rather than module-level consts) so tests and
//! alternate hardware tunings can inject different values.

/// Interaction tuning for a viewport controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportConfig {
    /// Lower bound for the zoom scale.
    pub min_scale: f64,
    /// Upper bound for the zoom scale.
    pub max_scale: f64,
    /// Scale change per zoom button press or wheel notch.
    pub zoom_step: f64,
    /// Divisor applied to the inter-touch distance delta during a pinch.
    /// Tuned empirically for typical touch hardware; no derivation exists.
    pub pinch_sensitivity: f64,
    /// Pan distance in pixels per arrow keypress.
    pub pan_step: f64,
}

impl ViewportConfig {
    /// Clamp a candidate scale into `[min_scale, max_scale]`.
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.5,
            max_scale: 5.0,
            zoom_step: 0.2,
            pinch_sensitivity: 200.0,
            pan_step: 30.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = ViewportConfig::default();
        assert_eq!(config.min_scale, 0.5);
        assert_eq!(config.max_scale, 5.0);
        assert_eq!(config.zoom_step, 0.2);
        assert_eq!(config.pinch_sensitivity, 200.0);
        assert_eq!(config.pan_step, 30.0);
    }

    #[test]
    fn clamp_scale_within_bounds() {
        let config = ViewportConfig::default();
        assert_eq!(config.clamp_scale(1.7), 1.7);
    }

    #[test]
    fn clamp_scale_at_bounds() {
        let config = ViewportConfig::default();
        assert_eq!(config.clamp_scale(0.1), 0.5);
        assert_eq!(config.clamp_scale(9.0), 5.0);
        assert_eq!(config.clamp_scale(5.0), 5.0);
    }
}
