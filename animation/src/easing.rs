//! Easing functions applied to normalized progress.
//!
//! Adapted from: <https://github.com/pistondevelopers/interpolation> version 0.3.0

/// How to shape progress before it scales the target value.
///
/// `Linear` leaves progress untouched, so the displayed value moves at constant speed. The other
/// curves are the usual decelerating picks for counters.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum Easing {
    #[default]
    Linear,

    QuadraticIn,
    QuadraticOut,
    QuadraticInOut,

    CubicOut,

    SineOut,
}

impl Easing {
    /// Calculate the eased progress, normalized.
    ///
    /// Input outside 0..=1 is clamped first.
    pub fn apply(self, progress: f64) -> f64 {
        let p = clamp(progress);
        match self {
            Easing::Linear => p,
            Easing::QuadraticIn => p * p,
            Easing::QuadraticOut => -(p * (p - 2.0)),
            Easing::QuadraticInOut => {
                if p < 0.5 {
                    2.0 * p * p
                } else {
                    (-2.0 * p * p) + (4.0 * p) - 1.0
                }
            }
            Easing::CubicOut => {
                let f = p - 1.0;
                f * f * f + 1.0
            }
            Easing::SineOut => {
                use std::f64::consts::PI;
                (p * PI / 2.0).sin()
            }
        }
    }
}

fn clamp(p: f64) -> f64 {
    match () {
        _ if p > 1.0 => 1.0,
        _ if p < 0.0 => 0.0,
        _ => p,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_curves_are_anchored() {
        for easing in [
            Easing::Linear,
            Easing::QuadraticIn,
            Easing::QuadraticOut,
            Easing::QuadraticInOut,
            Easing::CubicOut,
            Easing::SineOut,
        ] {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-12, "{easing:?} at 1");
        }
    }

    #[test]
    fn linear_is_identity() {
        assert_eq!(Easing::Linear.apply(0.25), 0.25);
        assert_eq!(Easing::Linear.apply(0.55), 0.55);
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(Easing::QuadraticOut.apply(-0.5), 0.0);
        assert_eq!(Easing::QuadraticOut.apply(1.5), 1.0);
    }
}
