//! Sources of timing samples recorded outside this process.
//!
//! When the host runner can export its own timings (a JSON file, or libtest's
//! JSON event stream), a [`SampleSource`] reads them so they can be fed to the
//! collector as if the units had been timed live.

mod file;
mod input;
mod reader;

pub use file::FileSource;
pub use input::{parse_input, LibtestEvent, ParsedInput};
pub use reader::ReaderSource;

use std::fmt::Debug;

use crate::data::Sample;
use crate::error::TimingError;

/// Trait for reading timing samples from various inputs.
///
/// # Example
///
/// ```no_run
/// use exec_timing::{FileSource, SampleSource};
///
/// let mut source = FileSource::new("timings.json");
/// let samples = source.read_samples().unwrap();
/// println!("Got {} samples from {}", samples.len(), source.description());
/// ```
pub trait SampleSource: Debug {
    /// Read every sample the source holds, in the order they were written.
    ///
    /// Names are the raw identifiers; display-name reduction is applied by
    /// the collector.
    fn read_samples(&mut self) -> Result<Vec<Sample>, TimingError>;

    /// Returns a human-readable description of the source.
    fn description(&self) -> &str;

    /// Number of input lines skipped during the last read.
    fn skipped(&self) -> usize;
}
