pub mod custom_cursor;
pub mod film_grain;
pub mod liquid_gradient;
pub mod magnetic_button;
pub mod reveal;
pub mod theme_switcher;
pub mod tilt_card;
