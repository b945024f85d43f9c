use std::f64::consts::{PI, TAU};

/// Easing curves used across the site. Each maps `0 -> 0` and `1 -> 1`
/// exactly; only `BackOut` and `ElasticOut` leave `[0, 1]` in between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    Power2Out,
    Power3Out,
    Power4Out,
    Power4InOut,
    SineInOut,
    BackOut(f64),
    ElasticOut { amplitude: f64, period: f64 },
    /// `min(1, 1.001 - 2^(-10t))`, the wheel smooth-scroll curve.
    ExpoOut,
}

impl Ease {
    /// Springy return used when a pointer leaves an element.
    pub const SPRING: Ease = Ease::ElasticOut {
        amplitude: 1.0,
        period: 0.3,
    };

    pub fn apply(self, t: f64) -> f64 {
        if !(t > 0.0) {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Ease::Linear => t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::Power4Out => 1.0 - (1.0 - t).powi(5),
            Ease::Power4InOut => {
                if t < 0.5 {
                    16.0 * t.powi(5)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(5) / 2.0
                }
            }
            Ease::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Ease::BackOut(overshoot) => {
                let u = t - 1.0;
                1.0 + (overshoot + 1.0) * u.powi(3) + overshoot * u.powi(2)
            }
            Ease::ElasticOut { amplitude, period } => {
                let a = amplitude.max(1.0);
                let p = if period > 0.0 { period } else { 0.3 };
                let shift = p / TAU * (1.0 / a).asin();
                a * 2f64.powf(-10.0 * t) * ((t - shift) * TAU / p).sin() + 1.0
            }
            Ease::ExpoOut => (1.001 - 2f64.powf(-10.0 * t)).min(1.0),
        }
    }

    /// The CSS timing function for transitions and keyframe animations that
    /// run in the stylesheet instead of the ticker. `BackOut` maps its
    /// overshoot onto the first control point; `ElasticOut` has no cubic
    /// form and falls back to `ExpoOut`.
    pub fn css_timing(self) -> String {
        let (x1, y1, x2, y2) = match self {
            Ease::Linear => return "linear".to_string(),
            Ease::Power2Out => (0.33, 1.0, 0.68, 1.0),
            Ease::Power3Out => (0.25, 1.0, 0.5, 1.0),
            Ease::Power4Out => (0.22, 1.0, 0.36, 1.0),
            Ease::Power4InOut => (0.83, 0.0, 0.17, 1.0),
            Ease::SineInOut => (0.37, 0.0, 0.63, 1.0),
            Ease::BackOut(overshoot) => (0.34, 1.0 + overshoot * 0.33, 0.64, 1.0),
            Ease::ElasticOut { .. } | Ease::ExpoOut => (0.16, 1.0, 0.3, 1.0),
        };
        format!("cubic-bezier({}, {}, {}, {})", x1, round2(y1), x2, y2)
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

impl Default for Ease {
    fn default() -> Self {
        Ease::Power2Out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 9] = [
        Ease::Linear,
        Ease::Power2Out,
        Ease::Power3Out,
        Ease::Power4Out,
        Ease::Power4InOut,
        Ease::SineInOut,
        Ease::BackOut(1.7),
        Ease::SPRING,
        Ease::ExpoOut,
    ];

    fn samples() -> impl Iterator<Item = f64> {
        (0..=200).map(|i| i as f64 / 200.0)
    }

    #[test]
    fn endpoints_are_exact() {
        for ease in ALL {
            assert_eq!(ease.apply(0.0), 0.0, "{:?}", ease);
            assert_eq!(ease.apply(1.0), 1.0, "{:?}", ease);
        }
    }

    #[test]
    fn input_outside_unit_interval_is_clamped() {
        for ease in ALL {
            assert_eq!(ease.apply(-0.5), 0.0);
            assert_eq!(ease.apply(3.0), 1.0);
            assert_eq!(ease.apply(f64::NAN), 0.0);
        }
    }

    #[test]
    fn non_overshooting_curves_are_monotonic_and_bounded() {
        let overshoots = |e: &Ease| matches!(e, Ease::BackOut(_) | Ease::ElasticOut { .. });
        for ease in ALL.into_iter().filter(|e| !overshoots(e)) {
            let mut previous = 0.0;
            for t in samples() {
                let v = ease.apply(t);
                assert!(v >= previous - 1e-12, "{:?} decreased at {}", ease, t);
                assert!((0.0..=1.0).contains(&v), "{:?} left [0,1] at {}", ease, t);
                previous = v;
            }
        }
    }

    #[test]
    fn elastic_out_overshoots_then_settles() {
        let peak = samples().map(|t| Ease::SPRING.apply(t)).fold(0.0, f64::max);
        assert!(peak > 1.0);
        assert!((Ease::SPRING.apply(0.99) - 1.0).abs() < 0.01);
    }

    #[test]
    fn power_out_curves_get_steeper() {
        let t = 0.25;
        assert!(Ease::Power2Out.apply(t) < Ease::Power3Out.apply(t));
        assert!(Ease::Power3Out.apply(t) < Ease::Power4Out.apply(t));
    }

    #[test]
    fn sine_in_out_is_symmetric() {
        let a = Ease::SineInOut.apply(0.3);
        let b = Ease::SineInOut.apply(0.7);
        assert!((a + b - 1.0).abs() < 1e-12);
    }

    #[test]
    fn css_timing_matches_the_curve_shape() {
        assert_eq!(Ease::Linear.css_timing(), "linear");
        assert_eq!(Ease::Power3Out.css_timing(), "cubic-bezier(0.25, 1, 0.5, 1)");
        assert_eq!(Ease::SineInOut.css_timing(), "cubic-bezier(0.37, 0, 0.63, 1)");
        assert_eq!(Ease::BackOut(1.7).css_timing(), "cubic-bezier(0.34, 1.56, 0.64, 1)");
    }

    #[test]
    fn spring_has_a_css_fallback() {
        assert_eq!(Ease::SPRING.css_timing(), Ease::ExpoOut.css_timing());
        for ease in ALL.into_iter().filter(|e| *e != Ease::Linear) {
            assert!(ease.css_timing().starts_with("cubic-bezier("), "{:?}", ease);
        }
    }
}
