//! Frame-paced metric counters.
//!
//! A ramp adds a fixed increment per animation frame and shows the floor of its
//! accumulator until it reaches the target, at which point it shows the target exactly.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: u64,
    pub finished: bool,
}

#[derive(Clone, Debug)]
pub struct CounterRamp {
    target: u64,
    increment: f64,
    accumulator: f64,
    displayed: u64,
    finished: bool,
}

impl CounterRamp {
    pub fn new(target: u64, duration_ms: f64, frame_interval_ms: f64) -> Self {
        let frames = duration_ms / frame_interval_ms;
        let increment = if frames.is_finite() && frames >= 1.0 {
            target as f64 / frames
        } else {
            target as f64
        };

        Self {
            target,
            increment,
            accumulator: 0.0,
            displayed: 0,
            finished: false,
        }
    }

    pub fn step(&mut self) -> CounterFrame {
        if !self.finished {
            self.accumulator += self.increment;

            if self.accumulator < self.target as f64 {
                self.displayed = (self.accumulator.floor() as u64).min(self.target);
            } else {
                self.displayed = self.target;
                self.finished = true;
            }
        }

        CounterFrame {
            value: self.displayed,
            finished: self.finished,
        }
    }

    pub fn displayed(&self) -> u64 {
        self.displayed
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// The metrics region: a one-shot guard plus one ramp per counter.
#[derive(Clone, Debug)]
pub struct MetricCounters {
    started: bool,
    ramps: Vec<CounterRamp>,
}

impl MetricCounters {
    pub fn new(
        targets: impl IntoIterator<Item = u64>,
        duration_ms: f64,
        frame_interval_ms: f64,
    ) -> Self {
        Self {
            started: false,
            ramps: targets
                .into_iter()
                .map(|target| CounterRamp::new(target, duration_ms, frame_interval_ms))
                .collect(),
        }
    }

    /// Runs the first step of every ramp. Returns `false` if the region already started.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }

        self.started = true;
        for ramp in &mut self.ramps {
            ramp.step();
        }
        true
    }

    /// Advances every unfinished ramp by one frame. Returns whether any ramp is still running.
    pub fn advance(&mut self) -> bool {
        if !self.started {
            return false;
        }

        for ramp in self.ramps.iter_mut().filter(|ramp| !ramp.is_finished()) {
            ramp.step();
        }
        self.is_running()
    }

    pub fn is_running(&self) -> bool {
        self.started && self.ramps.iter().any(|ramp| !ramp.is_finished())
    }

    pub fn displayed(&self, index: usize) -> Option<u64> {
        self.ramps.get(index).map(CounterRamp::displayed)
    }
}

/// en-US digit grouping: `1234567` → `"1,234,567"`.
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{COUNTER_DURATION_MS, COUNTER_FRAME_INTERVAL_MS};
    use proptest::prelude::*;

    fn run_to_end(target: u64) -> Vec<u64> {
        let mut ramp = CounterRamp::new(target, COUNTER_DURATION_MS, COUNTER_FRAME_INTERVAL_MS);
        let mut values = Vec::new();

        loop {
            let frame = ramp.step();
            values.push(frame.value);
            if frame.finished {
                break;
            }
            assert!(values.len() < 10_000, "ramp for {target} never finished");
        }

        values
    }

    #[test]
    fn zero_target_is_immediately_terminal() {
        let mut ramp = CounterRamp::new(0, COUNTER_DURATION_MS, COUNTER_FRAME_INTERVAL_MS);

        assert_eq!(
            ramp.step(),
            CounterFrame {
                value: 0,
                finished: true
            }
        );
    }

    #[test]
    fn ramp_takes_about_duration_over_frame_interval_frames() {
        let values = run_to_end(500);

        assert_eq!(values.len(), 125);
        assert_eq!(values[0], 4);
        assert_eq!(values.last(), Some(&500));
    }

    #[test]
    fn finished_ramp_keeps_reporting_target() {
        let mut ramp = CounterRamp::new(3, 32.0, 16.0);

        ramp.step();
        ramp.step();
        assert!(ramp.is_finished());
        assert_eq!(ramp.step().value, 3);
    }

    #[test]
    fn region_starts_only_once() {
        let mut counters = MetricCounters::new([100, 0], COUNTER_DURATION_MS, COUNTER_FRAME_INTERVAL_MS);

        assert!(counters.start());
        let after_first = counters.displayed(0);
        assert!(!counters.start());
        assert_eq!(counters.displayed(0), after_first);
        assert_eq!(counters.displayed(1), Some(0));
    }

    #[test]
    fn advance_before_start_is_a_no_op() {
        let mut counters = MetricCounters::new([100], COUNTER_DURATION_MS, COUNTER_FRAME_INTERVAL_MS);

        assert!(!counters.advance());
        assert_eq!(counters.displayed(0), Some(0));
    }

    #[test]
    fn grouping_inserts_commas_every_three_digits() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(1_000), "1,000");
        assert_eq!(format_grouped(1_234_567), "1,234,567");
    }

    proptest! {
        #[test]
        fn ramp_is_monotonic_bounded_and_ends_at_target(target in 0u64..5_000_000) {
            let values = run_to_end(target);

            prop_assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
            prop_assert!(values.iter().all(|value| *value <= target));
            prop_assert_eq!(values.last().copied(), Some(target));
        }
    }
}
