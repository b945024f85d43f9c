use crate::geometry::{Point, Rect};
use crate::motion::Ease;

/// Pull toward the pointer. The element moves by `displacement * strength`
/// and springs back when the pointer leaves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagneticConfig {
    pub strength: f64,
    /// Moves farther than this from the center are ignored.
    pub pull_radius: Option<f64>,
    pub move_duration: f64,
    pub return_duration: f64,
    pub move_ease: Ease,
    pub return_ease: Ease,
    /// Track the pointer over the parent element instead of the element.
    pub listen_on_parent: bool,
    /// Child that follows at a fraction of the offset, e.g. a button label.
    pub follower: Option<(&'static str, f64)>,
}

impl Default for MagneticConfig {
    fn default() -> Self {
        Self {
            strength: 0.3,
            pull_radius: None,
            move_duration: 0.3,
            return_duration: 0.5,
            move_ease: Ease::Power2Out,
            return_ease: Ease::SPRING,
            listen_on_parent: false,
            follower: None,
        }
    }
}

impl MagneticConfig {
    pub fn with_strength(strength: f64) -> Self {
        Self {
            strength,
            ..Self::default()
        }
    }

    pub fn durations(mut self, move_duration: f64, return_duration: f64) -> Self {
        self.move_duration = move_duration;
        self.return_duration = return_duration;
        self
    }

    pub fn follower(mut self, selector: &'static str, ratio: f64) -> Self {
        self.follower = Some((selector, ratio));
        self
    }

    /// Offset for the element given the pointer position, or `None` when the
    /// pointer is outside the pull radius.
    pub fn offset(&self, rect: &Rect, pointer: Point) -> Option<Point> {
        let d = rect.displacement(pointer);
        if let Some(radius) = self.pull_radius {
            if d.length() >= radius {
                return None;
            }
        }
        Some(Point::new(d.x * self.strength, d.y * self.strength))
    }
}
