//! Rendering of the slowest-tests report.
//!
//! - [`render`]: selection, alignment and formatting of the ranked report
//! - [`theme`]: the [`Painter`] abstraction and its ANSI/plain implementations

pub mod render;
pub mod theme;

pub use render::{render, select_slowest, ColumnWidths, ReportConfig};
pub use theme::{AnsiPainter, ColorMode, Painter, PlainPainter};
