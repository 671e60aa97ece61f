use super::easing::Easing;

pub const DEFAULT_DURATION_MS: u32 = 2000;

/// One sampled state of a running counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: u64,
    pub finished: bool,
}

/// Drives a displayed integer from 0 up to `target` against a frame clock.
///
/// The animator does not own a clock: callers feed it the timestamps they
/// receive from `requestAnimationFrame`. The first timestamp fixes the start.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimator {
    target: u64,
    duration_ms: f64,
    easing: Easing,
    started_at: Option<f64>,
    last: u64,
}

impl CounterAnimator {
    pub fn new(target: u64, duration_ms: u32, easing: Easing) -> Self {
        Self {
            target,
            duration_ms: f64::from(duration_ms),
            easing,
            started_at: None,
            last: 0,
        }
    }

    pub fn sample(&mut self, now_ms: f64) -> CounterFrame {
        let started_at = *self.started_at.get_or_insert(now_ms);
        let elapsed = (now_ms - started_at).max(0.0);

        let progress = if self.duration_ms <= 0.0 {
            1.0
        } else {
            (elapsed / self.duration_ms).min(1.0)
        };

        if progress >= 1.0 {
            self.last = self.target;
            return CounterFrame { value: self.target, finished: true };
        }

        let eased = self.easing.apply(progress);
        let value = ((eased * self.target as f64).floor() as u64).min(self.target);
        // timestamps can arrive out of order after a tab switch
        self.last = self.last.max(value);
        CounterFrame { value: self.last, finished: false }
    }
}

/// Renders a counter value with its prefix/suffix, grouping thousands.
pub fn format_counter(value: u64, prefix: &str, suffix: &str) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{prefix}{grouped}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hundred_over_two_seconds() {
        for easing in [Easing::Linear, Easing::EaseOutQuart] {
            let mut counter = CounterAnimator::new(100, 2000, easing);
            assert_eq!(counter.sample(5_000.0), CounterFrame { value: 0, finished: false });

            let midway = counter.sample(6_000.0);
            assert!(midway.value < 100);
            assert!(!midway.finished);

            let done = counter.sample(7_000.0);
            assert_eq!(done, CounterFrame { value: 100, finished: true });
            assert_eq!(counter.sample(9_000.0).value, 100);
        }
    }

    #[test]
    fn linear_midpoint_is_proportional() {
        let mut counter = CounterAnimator::new(100, 2000, Easing::Linear);
        counter.sample(0.0);
        assert_eq!(counter.sample(1000.0).value, 50);
        assert_eq!(counter.sample(1500.0).value, 75);
    }

    #[test]
    fn value_never_decreases_or_overshoots() {
        for target in [0u64, 1, 7, 99, 100, 12_345, 1_000_000] {
            let mut counter = CounterAnimator::new(target, 1800, Easing::EaseOutQuart);
            let mut last = 0;
            let mut t = 0.0;
            loop {
                let frame = counter.sample(t);
                assert!(frame.value >= last);
                assert!(frame.value <= target);
                last = frame.value;
                if frame.finished {
                    assert_eq!(frame.value, target);
                    break;
                }
                t += 16.7;
            }
        }
    }

    #[test]
    fn zero_target_stays_zero() {
        let mut counter = CounterAnimator::new(0, 2000, Easing::Linear);
        for t in [0.0, 10.0, 999.0, 1999.0] {
            assert_eq!(counter.sample(t).value, 0);
        }
        assert!(counter.sample(2000.0).finished);
    }

    #[test]
    fn exact_target_despite_float_rounding() {
        let mut counter = CounterAnimator::new(u64::from(u32::MAX), 3, Easing::EaseOutQuart);
        counter.sample(0.0);
        assert_eq!(counter.sample(3.0).value, u64::from(u32::MAX));
    }

    #[test]
    fn clock_going_backwards_holds_value() {
        let mut counter = CounterAnimator::new(1000, 1000, Easing::Linear);
        counter.sample(100.0);
        let ahead = counter.sample(600.0).value;
        assert_eq!(counter.sample(300.0).value, ahead);
        assert_eq!(counter.sample(50.0).value, ahead);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let mut counter = CounterAnimator::new(42, 0, Easing::Linear);
        assert_eq!(counter.sample(10.0), CounterFrame { value: 42, finished: true });
    }

    #[test]
    fn formatting_groups_thousands() {
        assert_eq!(format_counter(0, "", ""), "0");
        assert_eq!(format_counter(999, "", "+"), "999+");
        assert_eq!(format_counter(1000, "$", "M"), "$1,000M");
        assert_eq!(format_counter(1_234_567, "", "%"), "1,234,567%");
    }
}
