use super::easing::Ease;

/// A single value moving from `from` to `to` over `duration_ms`, starting at
/// `start_ms` on the frame clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start_ms: f64,
    pub duration_ms: f64,
    pub ease: Ease,
}

impl Tween {
    pub fn new(from: f64, to: f64, start_ms: f64, duration_secs: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: (duration_secs * 1000.0).max(0.0),
            ease,
        }
    }

    /// Normalized time in `[0, 1]`.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn sample(&self, now_ms: f64) -> f64 {
        let t = self.progress(now_ms);
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.ease.apply(t)
    }

    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lands_exactly_on_target() {
        let tween = Tween::new(12.5, -3.25, 100.0, 0.5, Ease::SPRING);
        assert_eq!(tween.sample(600.0), -3.25);
        assert_eq!(tween.sample(10_000.0), -3.25);
        assert!(tween.is_complete(600.0));
    }

    #[test]
    fn holds_start_value_before_start() {
        let tween = Tween::new(4.0, 8.0, 1000.0, 1.0, Ease::Linear);
        assert_eq!(tween.sample(0.0), 4.0);
        assert_eq!(tween.sample(1500.0), 6.0);
    }

    #[test]
    fn zero_duration_jumps() {
        let tween = Tween::new(0.0, 1.0, 50.0, 0.0, Ease::Power2Out);
        assert_eq!(tween.sample(50.0), 1.0);
        assert!(tween.is_complete(0.0));
    }
}
