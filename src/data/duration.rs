use std::time::Duration;

use super::sample::clamp_secs;
use crate::error::TimingError;

/// Suffix to seconds multiplier (order matters: longer suffixes first)
const UNITS: &[(&str, f64)] = &[
    ("ns", 1e-9),
    ("µs", 1e-6),
    ("us", 1e-6),
    ("ms", 1e-3),
    ("s", 1.0),
];

/// Parse duration strings like "1.5s", "500ms", "750us" or bare seconds ("2.5").
///
/// Negative values clamp to zero and oversized ones (`inf`, `1e20`)
/// saturate at `Duration::MAX`.
pub fn parse_duration(s: &str) -> Result<Duration, TimingError> {
    let s = s.trim();

    for (suffix, multiplier) in UNITS {
        if let Some(val_str) = s.strip_suffix(suffix) {
            let val: f64 = val_str
                .trim()
                .parse()
                .map_err(|_| TimingError::InvalidDuration(s.to_string()))?;
            return Ok(clamp_secs(val * multiplier));
        }
    }

    s.parse::<f64>()
        .map(clamp_secs)
        .map_err(|_| TimingError::InvalidDuration(s.to_string()))
}

/// Format as milliseconds with two decimals, e.g. `1500.00 ms`.
pub fn format_millis(d: Duration) -> String {
    format!("{:.2} ms", d.as_secs_f64() * 1000.0)
}

/// Format as parenthesised seconds with three decimals, e.g. `(1.500 s)`.
pub fn format_secs(d: Duration) -> String {
    format!("({:.3} s)", d.as_secs_f64())
}
