//! Collection of timing samples during a run.
//!
//! One unit is timed at a time: [`TimingCollector::record_start`] stores a
//! single start instant which the next [`TimingCollector::record_finish`]
//! consumes.

use std::io::Write;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::data::duration::format_millis;
use crate::data::{DisplayNamePolicy, Sample};

/// Accumulates samples in the order units finish.
#[derive(Debug, Default)]
pub struct TimingCollector {
    samples: Vec<Sample>,
    started_at: Option<Instant>,
    policy: DisplayNamePolicy,
}

impl TimingCollector {
    /// Create a collector storing names according to `policy`.
    pub fn new(policy: DisplayNamePolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    /// Mark the start of the current unit, replacing any previous start.
    pub fn record_start(&mut self) {
        self.started_at = Some(Instant::now());
    }

    /// Record the end of the current unit and return its sample.
    ///
    /// The start instant is consumed. Without a preceding
    /// [`record_start`](Self::record_start) the duration is zero.
    pub fn record_finish(&mut self, identifier: &str) -> Sample {
        let duration = match self.started_at.take() {
            Some(start) => Instant::now().saturating_duration_since(start),
            None => {
                warn!(test = identifier, "test finished without a recorded start");
                Duration::ZERO
            }
        };
        self.record(identifier, duration)
    }

    /// Record a unit whose duration is already known.
    pub fn record(&mut self, identifier: &str, duration: Duration) -> Sample {
        let sample = Sample::new(self.policy.apply(identifier), duration);
        debug!(test = %sample.name, ?duration, "recorded sample");
        self.samples.push(sample.clone());
        sample
    }

    /// All samples recorded so far, in completion order.
    pub fn snapshot(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Hand over the collected samples, leaving the collector empty.
    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }
}

/// Format the live line printed right after a unit finishes.
pub fn individual_timing_line(sample: &Sample) -> String {
    format!("  ⏱  {}: {}\n", sample.name, format_millis(sample.duration))
}

/// Write the live line for `sample` to `out`.
pub fn write_individual_timing<W: Write>(out: &mut W, sample: &Sample) {
    if let Err(e) = out.write_all(individual_timing_line(sample).as_bytes()) {
        warn!(error = %e, "failed to write individual timing");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_collector_starts_empty() {
        let collector = TimingCollector::default();
        assert!(collector.is_empty());
        assert!(collector.snapshot().is_empty());
    }

    #[test]
    fn test_record_finish_measures_elapsed_time() {
        let mut collector = TimingCollector::default();
        collector.record_start();
        thread::sleep(Duration::from_millis(10));
        let sample = collector.record_finish("slow_test");

        assert_eq!(sample.name, "slow_test");
        assert!(sample.duration >= Duration::from_millis(10));
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn test_finish_without_start_is_zero() {
        let mut collector = TimingCollector::default();
        let sample = collector.record_finish("orphan");
        assert_eq!(sample.duration, Duration::ZERO);
    }

    #[test]
    fn test_second_finish_does_not_reuse_start() {
        let mut collector = TimingCollector::default();
        collector.record_start();
        thread::sleep(Duration::from_millis(10));
        assert!(collector.record_finish("first").duration >= Duration::from_millis(10));
        assert_eq!(collector.record_finish("second").duration, Duration::ZERO);
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn test_snapshot_keeps_completion_order() {
        let mut collector = TimingCollector::default();
        for name in ["c", "a", "b"] {
            collector.record_start();
            collector.record_finish(name);
        }
        let names: Vec<&str> = collector.snapshot().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_same_name_recorded_twice() {
        let mut collector = TimingCollector::default();
        collector.record("retry", Duration::from_millis(1));
        collector.record("retry", Duration::from_millis(2));
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn test_short_name_policy_applied_at_record_time() {
        let mut collector = TimingCollector::new(DisplayNamePolicy::Short);
        let sample = collector.record("App.Tests.FooTest::testBar", Duration::ZERO);
        assert_eq!(sample.name, "FooTest::testBar");
    }

    #[test]
    fn test_restart_overwrites_start() {
        let mut collector = TimingCollector::default();
        collector.record_start();
        thread::sleep(Duration::from_millis(50));
        collector.record_start();
        let sample = collector.record_finish("t");
        assert!(sample.duration < Duration::from_millis(50));
    }

    #[test]
    fn test_individual_timing_line() {
        let sample = Sample::new("FooTest::testBar", Duration::from_millis(1500));
        assert_eq!(
            individual_timing_line(&sample),
            "  ⏱  FooTest::testBar: 1500.00 ms\n"
        );

        let mut out = Vec::new();
        write_individual_timing(&mut out, &sample);
        assert_eq!(String::from_utf8(out).unwrap(), individual_timing_line(&sample));
    }

    #[test]
    fn test_into_samples() {
        let mut collector = TimingCollector::default();
        collector.record("a", Duration::from_secs(1));
        assert_eq!(collector.into_samples(), vec![Sample::new("a", Duration::from_secs(1))]);
    }
}
