//! Ranked report of the slowest samples.

use tracing::debug;

use crate::data::duration::{format_millis, format_secs};
use crate::data::{Sample, Thresholds};

use super::theme::Painter;

/// Settings for one report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportConfig {
    /// Number of entries to show. Zero or negative disables the report.
    pub limit: i64,
    pub thresholds: Thresholds,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            limit: 10,
            thresholds: Thresholds::default(),
        }
    }
}

/// Widths used to align every entry line of one report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub rank: usize,
    pub name: usize,
}

impl ColumnWidths {
    pub fn for_entries(entries: &[&Sample]) -> Self {
        Self {
            rank: digit_count(entries.len()),
            name: entries.iter().map(|s| s.name.chars().count()).max().unwrap_or(0),
        }
    }
}

fn digit_count(n: usize) -> usize {
    n.to_string().len()
}

/// Pick the `limit` slowest samples, slowest first.
///
/// The sort is stable, so equal durations keep their completion order.
pub fn select_slowest(samples: &[Sample], limit: i64) -> Vec<&Sample> {
    if limit <= 0 {
        return Vec::new();
    }

    let mut sorted: Vec<&Sample> = samples.iter().collect();
    sorted.sort_by(|a, b| b.duration.cmp(&a.duration));
    sorted.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
    sorted
}

/// Render the report, or an empty string when there is nothing to show.
pub fn render(samples: &[Sample], config: &ReportConfig, painter: &dyn Painter) -> String {
    if samples.is_empty() || config.limit <= 0 {
        return String::new();
    }

    let top = select_slowest(samples, config.limit);
    if top.is_empty() {
        return String::new();
    }

    let widths = ColumnWidths::for_entries(&top);

    let mut out = format!("\n\nTop {} slowest tests:\n\n", top.len());
    for (index, sample) in top.iter().enumerate() {
        out.push_str(&render_line(
            sample,
            index + 1,
            widths,
            &config.thresholds,
            painter,
        ));
    }
    out.push('\n');
    out
}

fn render_line(
    sample: &Sample,
    rank: usize,
    widths: ColumnWidths,
    thresholds: &Thresholds,
    painter: &dyn Painter,
) -> String {
    let severity = thresholds.classify(sample.duration);
    debug!(
        rank,
        test = %sample.name,
        severity = severity.symbol(),
        "report entry"
    );

    // Names are padded before painting so colored and plain rows align alike.
    let name = format!("{:<width$}", sample.name, width = widths.name);

    format!(
        "  {:>rank_width$}. {} : {} {}\n",
        rank,
        painter.paint(severity, &name),
        painter.paint(severity, &format_millis(sample.duration)),
        painter.paint(severity, &format_secs(sample.duration)),
        rank_width = widths.rank,
    )
}
