pub mod map_viewport;
pub mod zoom_controls;

pub use map_viewport::MapViewport;
pub use zoom_controls::ZoomControls;
