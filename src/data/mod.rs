//! Data models shared by the collector and the report.
//!
//! ## Submodules
//!
//! - [`duration`]: Parsing of threshold strings (e.g., "1s", "500ms") and the
//!   millisecond/second formatting used in reports
//! - [`sample`]: The [`Sample`] record and the [`DisplayNamePolicy`]
//! - [`severity`]: [`Thresholds`] and the [`Severity`] each entry is classified into
//!
//! ## Data Flow
//!
//! ```text
//! unit finishes
//!        │
//!        ▼
//! DisplayNamePolicy::apply() ──▶ Sample { name, duration }
//!        │
//!        ▼
//! report::render() ──▶ Thresholds::classify() ──▶ Severity
//! ```

pub mod duration;
pub mod sample;
pub mod severity;

pub use sample::{DisplayNamePolicy, Sample};
pub use severity::{Severity, Thresholds};
