//! Plain geometry shared by the pointer behaviors and the scroll tracks.

use web_sys::DomRect;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

/// Viewport-relative box, as returned by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn half_size(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Offset of `pointer` from the center of the box.
    pub fn displacement(&self, pointer: Point) -> Point {
        let center = self.center();
        Point::new(pointer.x - center.x, pointer.y - center.y)
    }
}

impl From<&DomRect> for Rect {
    fn from(rect: &DomRect) -> Self {
        Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displacement_is_zero_at_center() {
        let rect = Rect::new(100.0, 50.0, 200.0, 80.0);
        assert_eq!(rect.displacement(Point::new(200.0, 90.0)), Point::new(0.0, 0.0));
    }

    #[test]
    fn displacement_points_toward_pointer() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let d = rect.displacement(Point::new(0.0, 100.0));
        assert_eq!(d, Point::new(-50.0, 50.0));
    }

    #[test]
    fn zero_sized_rect_is_degenerate() {
        assert!(Rect::new(10.0, 10.0, 0.0, 40.0).is_degenerate());
        assert!(!Rect::new(10.0, 10.0, 1.0, 1.0).is_degenerate());
    }
}
