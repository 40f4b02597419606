//! Input formats accepted by the sample sources.
//!
//! Two shapes are understood:
//!
//! - a JSON array of `{ "name": .., "duration": <seconds> }` objects
//! - JSON lines, where each line is either such an object or a libtest JSON
//!   event as printed by `cargo test -- -Z unstable-options --format json --report-time`

use serde::Deserialize;
use tracing::{debug, warn};

use crate::data::sample::clamp_secs;
use crate::data::Sample;
use crate::error::TimingError;

/// One event of libtest's JSON output.
#[derive(Debug, Clone, Deserialize)]
pub struct LibtestEvent {
    #[serde(rename = "type")]
    pub kind: String,
    pub event: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Seconds, present on finished tests when `--report-time` is set.
    #[serde(default)]
    pub exec_time: Option<f64>,
}

impl LibtestEvent {
    /// The sample for a finished test, if this event is one.
    pub fn into_sample(self) -> Option<Sample> {
        if self.kind != "test" || !matches!(self.event.as_str(), "ok" | "failed" | "timeout") {
            return None;
        }
        let name = self.name?;
        let Some(secs) = self.exec_time else {
            debug!(test = %name, "libtest event without exec_time, was --report-time passed?");
            return None;
        };
        Some(Sample::new(name, clamp_secs(secs)))
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InputLine {
    Sample(Sample),
    Libtest(LibtestEvent),
}

/// Samples parsed from one input, plus how many lines were unusable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedInput {
    pub samples: Vec<Sample>,
    pub skipped: usize,
}

/// Parse a whole input, picking the format from its first character.
pub fn parse_input(content: &str) -> Result<ParsedInput, TimingError> {
    if content.trim_start().starts_with('[') {
        let samples: Vec<Sample> = serde_json::from_str(content)?;
        return Ok(ParsedInput {
            samples,
            skipped: 0,
        });
    }

    let mut parsed = ParsedInput::default();
    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<InputLine>(line) {
            Ok(InputLine::Sample(sample)) => parsed.samples.push(sample),
            Ok(InputLine::Libtest(event)) => {
                if let Some(sample) = event.into_sample() {
                    parsed.samples.push(sample);
                }
            }
            Err(e) => {
                warn!(line = index + 1, error = %e, "skipping unreadable input line");
                parsed.skipped += 1;
            }
        }
    }
    Ok(parsed)
}
