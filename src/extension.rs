//! Lifecycle entry points for a host test runner.
//!
//! A host adapter calls [`ExecutionTimeExtension::on_unit_start`] when a test
//! starts preparing, [`ExecutionTimeExtension::on_unit_finish`] when it ends
//! and [`ExecutionTimeExtension::finish_run`] once the run is over.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use tracing::{debug, warn};

use crate::collector::{write_individual_timing, TimingCollector};
use crate::data::Sample;
use crate::report::{render, Painter};
use crate::settings::Settings;

/// Collects timings for one run and prints the slowest-tests report.
#[derive(Debug)]
pub struct ExecutionTimeExtension<W: Write = Stdout> {
    settings: Settings,
    collector: TimingCollector,
    painter: Box<dyn Painter>,
    out: W,
}

impl ExecutionTimeExtension<Stdout> {
    /// Create an extension writing to stdout, colored per `settings.colors`.
    pub fn new(settings: Settings) -> Self {
        let painter = settings.colors.painter();
        Self::with_output(settings, io::stdout(), painter)
    }
}

impl<W: Write> ExecutionTimeExtension<W> {
    /// Create an extension writing live lines and the report to `out`.
    pub fn with_output(settings: Settings, out: W, painter: Box<dyn Painter>) -> Self {
        debug!(?settings, "execution timing enabled");
        Self {
            collector: TimingCollector::new(settings.display_name_policy()),
            settings,
            painter,
            out,
        }
    }

    /// A unit started preparing.
    pub fn on_unit_start(&mut self) {
        self.collector.record_start();
    }

    /// A unit finished; records and returns its sample.
    pub fn on_unit_finish(&mut self, identifier: &str) -> Sample {
        let sample = self.collector.record_finish(identifier);
        self.after_record(&sample);
        sample
    }

    /// A unit finished with a duration measured by the host.
    pub fn on_unit_timed(&mut self, identifier: &str, duration: Duration) -> Sample {
        let sample = self.collector.record(identifier, duration);
        self.after_record(&sample);
        sample
    }

    fn after_record(&mut self, sample: &Sample) {
        if self.settings.show_individual_timings {
            write_individual_timing(&mut self.out, sample);
        }
    }

    /// The run finished; returns the report text (empty when suppressed).
    pub fn on_run_end(&self) -> String {
        render(
            self.collector.snapshot(),
            &self.settings.report_config(),
            self.painter.as_ref(),
        )
    }

    /// Render the report and write it to the output.
    ///
    /// Write failures are logged and never propagated to the host.
    pub fn finish_run(&mut self) {
        let report = self.on_run_end();
        if report.is_empty() {
            debug!(samples = self.collector.len(), "no report to print");
            return;
        }

        if let Err(e) = self
            .out
            .write_all(report.as_bytes())
            .and_then(|_| self.out.flush())
        {
            warn!(error = %e, "failed to write execution time report");
        }
    }

    pub fn samples(&self) -> &[Sample] {
        self.collector.snapshot()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Consume the extension and return its output sink.
    pub fn into_output(self) -> W {
        self.out
    }
}
