//! File-based sample source.

use std::fs;
use std::path::{Path, PathBuf};

use super::{parse_input, SampleSource};
use crate::data::Sample;
use crate::error::TimingError;

/// A source that reads samples from a JSON or JSON-lines file.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    description: String,
    skipped: usize,
}

impl FileSource {
    /// Create a new file source for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("file: {}", path.display());
        Self {
            path,
            description,
            skipped: 0,
        }
    }

    /// Returns the path being read.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SampleSource for FileSource {
    fn read_samples(&mut self) -> Result<Vec<Sample>, TimingError> {
        let content = fs::read_to_string(&self.path).map_err(|source| TimingError::Read {
            path: self.path.clone(),
            source,
        })?;
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
