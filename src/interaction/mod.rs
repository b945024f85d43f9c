pub mod magnetic;
pub mod pointer;
pub mod tilt;

pub use magnetic::MagneticConfig;
pub use pointer::{use_pointer_behavior, Behavior};
pub use tilt::TiltConfig;
