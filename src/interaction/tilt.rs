use crate::geometry::{Point, Rect};
use crate::motion::Ease;

/// 3D tilt toward the pointer, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    pub max_tilt: f64,
    pub perspective: f64,
    pub move_duration: f64,
    pub return_duration: f64,
    pub move_ease: Ease,
    pub return_ease: Ease,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_tilt: 15.0,
            perspective: 1000.0,
            move_duration: 0.5,
            return_duration: 0.6,
            move_ease: Ease::Power2Out,
            return_ease: Ease::SPRING,
        }
    }
}

impl TiltConfig {
    /// Quicker settings used on cards.
    pub fn card() -> Self {
        Self {
            move_duration: 0.3,
            return_duration: 0.4,
            ..Self::default()
        }
    }

    /// `(rotate_x, rotate_y)`; pointing at the top edge tips the top away.
    pub fn rotation(&self, rect: &Rect, pointer: Point) -> (f64, f64) {
        if rect.is_degenerate() {
            return (0.0, 0.0);
        }
        let (half_w, half_h) = rect.half_size();
        let d = rect.displacement(pointer);
        let rotate_x = (d.y / half_h) * -self.max_tilt;
        let rotate_y = (d.x / half_w) * self.max_tilt;
        (rotate_x, rotate_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_flat() {
        let rect = Rect::new(0.0, 0.0, 300.0, 400.0);
        assert_eq!(TiltConfig::default().rotation(&rect, rect.center()), (0.0, 0.0));
    }

    #[test]
    fn edges_reach_max_tilt() {
        let rect = Rect::new(0.0, 0.0, 300.0, 400.0);
        let tilt = TiltConfig::default();
        assert_eq!(tilt.rotation(&rect, Point::new(300.0, 200.0)), (0.0, 15.0));
        assert_eq!(tilt.rotation(&rect, Point::new(150.0, 0.0)), (15.0, 0.0));
        assert_eq!(tilt.rotation(&rect, Point::new(0.0, 400.0)), (-15.0, -15.0));
    }

    #[test]
    fn zero_sized_element_does_not_tilt() {
        let rect = Rect::new(10.0, 10.0, 0.0, 0.0);
        assert_eq!(TiltConfig::default().rotation(&rect, Point::new(50.0, 50.0)), (0.0, 0.0));
    }
}
