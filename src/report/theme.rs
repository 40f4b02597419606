//! Color handling for the report.
//!
//! Painting goes through the [`Painter`] trait so the renderer never depends
//! on a real terminal. [`AnsiPainter`] uses crossterm for escape sequences and
//! [`PlainPainter`] leaves text untouched.

use std::fmt::Debug;

use crossterm::style::{Attribute, Color, Stylize};
use crossterm::tty::IsTty;

use crate::data::Severity;

/// Maps a severity and a piece of text to the text to print.
pub trait Painter: Debug {
    fn paint(&self, severity: Severity, text: &str) -> String;
}

/// Painter that never adds color.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPainter;

impl Painter for PlainPainter {
    fn paint(&self, _severity: Severity, text: &str) -> String {
        text.to_string()
    }
}

/// Painter emitting ANSI colors through crossterm.
#[derive(Debug, Clone)]
pub struct AnsiPainter {
    /// Color for warning-level entries.
    pub warning: Color,
    /// Color for danger-level entries.
    pub danger: Color,
}

impl Default for AnsiPainter {
    fn default() -> Self {
        Self {
            warning: Color::Yellow,
            danger: Color::Red,
        }
    }
}

impl Painter for AnsiPainter {
    fn paint(&self, severity: Severity, text: &str) -> String {
        if !severity.is_colored() {
            return text.to_string();
        }
        match severity {
            Severity::Danger => text.with(self.danger).attribute(Attribute::Bold).to_string(),
            _ => text.with(self.warning).to_string(),
        }
    }
}

/// When the report should be colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Color only when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Parse `auto`, `always` or `never` (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" | "true" | "on" | "yes" | "1" => Some(Self::Always),
            "never" | "false" | "off" | "no" | "0" => Some(Self::Never),
            _ => None,
        }
    }

    /// Decide whether to color output written to stdout.
    pub fn enabled(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_tty(),
        }
    }

    /// Build the painter for this mode.
    pub fn painter(self) -> Box<dyn Painter> {
        if self.enabled() {
            Box::new(AnsiPainter::default())
        } else {
            Box::new(PlainPainter)
        }
    }
}
