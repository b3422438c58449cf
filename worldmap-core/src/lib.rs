pub mod config;
pub mod controller;
pub mod gestures;
pub mod keys;
pub mod points;
pub mod transform;

pub use config::ViewportConfig;
pub use controller::{ViewportController, ViewportHost};
pub use gestures::{DragState, PinchState};
pub use keys::KeyCommand;
pub use points::{Point, Rect};
pub use transform::Transform;
