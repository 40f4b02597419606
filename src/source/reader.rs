//! Reader-based sample source, used for stdin and pipes.

use std::io::Read;

use super::{parse_input, SampleSource};
use crate::data::Sample;
use crate::error::TimingError;

/// A source that drains any [`Read`] implementation.
///
/// ```
/// use std::io::Cursor;
/// use exec_timing::{ReaderSource, SampleSource};
///
/// let input = Cursor::new(r#"{"name":"a","duration":0.5}"#);
/// let mut source = ReaderSource::new(input, "example");
/// assert_eq!(source.read_samples().unwrap().len(), 1);
/// ```
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    description: String,
    skipped: usize,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R, description: &str) -> Self {
        Self {
            reader,
            description: description.to_string(),
            skipped: 0,
        }
    }
}

impl<R: Read + std::fmt::Debug> SampleSource for ReaderSource<R> {
    fn read_samples(&mut self) -> Result<Vec<Sample>, TimingError> {
        let mut content = String::new();
        self.reader.read_to_string(&mut content)?;
        let parsed = parse_input(&content)?;
        self.skipped = parsed.skipped;
        Ok(parsed.samples)
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn skipped(&self) -> usize {
        self.skipped
    }
}
