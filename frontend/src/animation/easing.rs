/// Interpolation curve applied to animation progress.
///
/// Every curve is monotonic on `[0, 1]` and pins both ends, so an animation
/// driven through it always lands exactly on its target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    #[default]
    EaseOutQuart,
}

impl Easing {
    pub fn apply(self, progress: f64) -> f64 {
        let p = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => p,
            Easing::EaseOutQuart => 1.0 - (1.0 - p).powi(4),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curves_pin_both_ends() {
        for easing in [Easing::Linear, Easing::EaseOutQuart] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in [Easing::Linear, Easing::EaseOutQuart] {
            let mut last = 0.0;
            for step in 0..=1000 {
                let value = easing.apply(step as f64 / 1000.0);
                assert!(value >= last, "{easing:?} dipped at step {step}");
                last = value;
            }
        }
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(Easing::EaseOutQuart.apply(-3.0), 0.0);
        assert_eq!(Easing::EaseOutQuart.apply(7.5), 1.0);
        assert_eq!(Easing::Linear.apply(f64::NAN), 0.0);
    }

    #[test]
    fn ease_out_front_loads_progress() {
        assert!(Easing::EaseOutQuart.apply(0.5) > Easing::Linear.apply(0.5));
        assert!((Easing::EaseOutQuart.apply(0.5) - 0.9375).abs() < 1e-12);
    }
}
