//! # exec-timing
//!
//! Collects per-test execution times during a test run and prints a ranked,
//! color-coded report of the slowest tests when the run ends.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                   ExecutionTimeExtension                     │
//! │                                                              │
//! │  on_unit_start ──┐                                           │
//! │  on_unit_finish ─┼──▶ collector ──snapshot──▶ report ──▶ out │
//! │  on_unit_timed ──┘   (Samples)               (render)        │
//! │        ▲                                        ▲            │
//! │        │                                        │            │
//! │  source (files, stdin, libtest JSON)    Settings + Painter   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`collector`]**: records one sample per finished test, in completion order
//! - **[`report`]**: selects the slowest samples, aligns and colors the report
//! - **[`data`]**: [`Sample`], [`Thresholds`], [`Severity`] and duration formatting
//! - **[`settings`]**: [`Settings`] parsed from a flat option mapping, a config file
//!   or the environment
//! - **[`source`]**: [`SampleSource`] implementations for timings recorded elsewhere
//! - **[`extension`]**: the lifecycle entry points a host runner calls
//!
//! ## Usage
//!
//! ### Driving the lifecycle from a host runner
//!
//! ```
//! use exec_timing::{ExecutionTimeExtension, PlainPainter, Settings};
//!
//! let settings = Settings::from_parameters([("topN", "5"), ("showFQCN", "false")]);
//! let mut ext = ExecutionTimeExtension::with_output(settings, Vec::new(), Box::new(PlainPainter));
//!
//! ext.on_unit_start();
//! ext.on_unit_finish("App.Tests.FooTest::testBar");
//!
//! let report = ext.on_run_end();
//! assert!(report.contains("Top 1 slowest tests:"));
//! assert!(report.contains("FooTest::testBar"));
//! ```
//!
//! ### Rendering samples directly
//!
//! ```
//! use std::time::Duration;
//! use exec_timing::{render, PlainPainter, ReportConfig, Sample};
//!
//! let samples = vec![
//!     Sample::new("A", Duration::from_millis(100)),
//!     Sample::new("B", Duration::from_millis(2500)),
//! ];
//! let report = render(&samples, &ReportConfig::default(), &PlainPainter);
//! assert!(report.find("B").unwrap() < report.find("A ").unwrap());
//! ```
//!
//! ### As a CLI tool
//!
//! ```bash
//! cargo test -- -Z unstable-options --format json --report-time | exec-timing --top-n 5
//! exec-timing timings.json --warning 500ms --danger 2s
//! ```

pub mod collector;
pub mod data;
pub mod error;
pub mod extension;
pub mod report;
pub mod settings;
pub mod source;

// Re-export main types for convenience
pub use collector::TimingCollector;
pub use data::{DisplayNamePolicy, Sample, Severity, Thresholds};
pub use error::TimingError;
pub use extension::ExecutionTimeExtension;
pub use report::{
    render, select_slowest, AnsiPainter, ColorMode, Painter, PlainPainter, ReportConfig,
};
pub use settings::Settings;
pub use source::{FileSource, ReaderSource, SampleSource};
