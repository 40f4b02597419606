//! Severity classification of sample durations.

use std::time::Duration;

/// Thresholds for severity classification.
///
/// The two values are independent; nothing requires `warning <= danger`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Duration at or above which a sample is a warning.
    pub warning: Duration,
    /// Duration at or above which a sample is dangerous.
    pub danger: Duration,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            warning: Duration::from_secs(1),
            danger: Duration::from_secs(5),
        }
    }
}

impl Thresholds {
    pub fn new(warning: Duration, danger: Duration) -> Self {
        Self { warning, danger }
    }

    /// Classify a single duration.
    ///
    /// Danger is checked first, so it wins when the thresholds are inverted.
    pub fn classify(&self, duration: Duration) -> Severity {
        if duration >= self.danger {
            Severity::Danger
        } else if duration >= self.warning {
            Severity::Warning
        } else {
            Severity::Normal
        }
    }
}

/// Severity of one report entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Normal,
    Warning,
    Danger,
}

impl Severity {
    /// Returns a short symbol for display.
    pub fn symbol(&self) -> &'static str {
        match self {
            Severity::Normal => "OK",
            Severity::Warning => "WARN",
            Severity::Danger => "DANGER",
        }
    }

    /// Whether entries of this severity are drawn with color.
    pub fn is_colored(&self) -> bool {
        !matches!(self, Severity::Normal)
    }
}
