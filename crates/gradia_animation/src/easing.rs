//! Easing functions
//!
//! Progress curves applied to the settling interpolation. Input and
//! output are in `[0, 1]`; inputs outside the range are clamped.

/// Easing curve
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseInCubic,
    EaseOutCubic,
    #[default]
    EaseInOutCubic,
}

impl Easing {
    /// Apply the curve to a progress value
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInCubic => t * t * t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        for easing in [
            Easing::Linear,
            Easing::EaseInCubic,
            Easing::EaseOutCubic,
            Easing::EaseInOutCubic,
        ] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn ease_in_out_cubic_midpoint() {
        assert!((Easing::EaseInOutCubic.apply(0.5) - 0.5).abs() < 1e-6);
        // Slow start, fast middle
        assert!(Easing::EaseInOutCubic.apply(0.25) < 0.25);
        assert!(Easing::EaseInOutCubic.apply(0.75) > 0.75);
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(Easing::EaseInOutCubic.apply(-1.0), 0.0);
        assert_eq!(Easing::EaseInOutCubic.apply(2.0), 1.0);
    }
}
