pub mod easing;
pub mod frame;
pub mod keyframes;
pub mod style;
pub mod ticker;
pub mod tween;

pub use easing::Ease;
pub use keyframes::Keyframes;
pub use style::{Channel, ElementStyle, StyleTarget};
