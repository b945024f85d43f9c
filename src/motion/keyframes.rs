/// Piecewise-linear map from an input range to output values, clamped at
/// both ends: `[0, 0.2, 0.8, 1] -> [0, 1, 1, 0]` fades in, holds, fades out.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframes {
    stops: Vec<(f64, f64)>,
}

impl Keyframes {
    /// Pairs `input[i]` with `output[i]`. Extra entries in the longer slice
    /// are ignored; inputs are expected in ascending order.
    pub fn new(input: &[f64], output: &[f64]) -> Self {
        let stops = input.iter().copied().zip(output.iter().copied()).collect();
        Self { stops }
    }

    /// Straight line from `from` at 0 to `to` at 1.
    pub fn linear(from: f64, to: f64) -> Self {
        Self::new(&[0.0, 1.0], &[from, to])
    }

    pub fn sample(&self, input: f64) -> f64 {
        let (Some(&(lo_in, lo_out)), Some(&(hi_in, hi_out))) =
            (self.stops.first(), self.stops.last())
        else {
            return 0.0;
        };
        if input.is_nan() || input <= lo_in {
            return lo_out;
        }
        if input >= hi_in {
            return hi_out;
        }
        for pair in self.stops.windows(2) {
            let (a_in, a_out) = pair[0];
            let (b_in, b_out) = pair[1];
            if input <= b_in {
                let span = b_in - a_in;
                if span <= f64::EPSILON {
                    return b_out;
                }
                return a_out + (b_out - a_out) * (input - a_in) / span;
            }
        }
        hi_out
    }
}
