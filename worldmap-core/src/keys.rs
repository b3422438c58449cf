/// A keyboard shortcut resolved to a viewport command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyCommand {
    ZoomIn,
    ZoomOut,
    Reset,
    /// Translate by (dx, dy) pixels without changing scale.
    Pan { dx: f64, dy: f64 },
}

impl KeyCommand {
    /// Map a `KeyboardEvent.key` value to a command, or `None` for keys
    /// the viewport does not handle.
    ///
    /// Arrows move the view in the pressed direction, so the image layer
    /// translates the opposite way (ArrowRight pans the view right by
    /// shifting the image left).
    pub fn parse(key: &str, pan_step: f64) -> Option<Self> {
        match key {
            "+" | "=" => Some(Self::ZoomIn),
            "-" | "_" => Some(Self::ZoomOut),
            "0" => Some(Self::Reset),
            "ArrowRight" => Some(Self::Pan { dx: -pan_step, dy: 0.0 }),
            "ArrowLeft" => Some(Self::Pan { dx: pan_step, dy: 0.0 }),
            "ArrowDown" => Some(Self::Pan { dx: 0.0, dy: -pan_step }),
            "ArrowUp" => Some(Self::Pan { dx: 0.0, dy: pan_step }),
            _ => None,
        }
    }
}
