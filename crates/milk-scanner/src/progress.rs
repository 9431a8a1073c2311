//! Single-line terminal progress display.
//!
//! Each update redraws one line of the form
//! `<completed>, <current>, <remaining>`. When the visible text reaches the
//! terminal width the line has wrapped onto a second row, so the cursor is
//! moved up one row before redrawing to keep the block from growing.

use crate::state::{CodeStatus, ScanState};
use colored::Colorize;
use milk_core::AreaCode;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::io::{self, IsTerminal, Write};

/// Header printed before the first progress line.
pub const HEADER: &str = "Searching these area codes or patterns:";

static ANSI_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[[0-9;]*[a-zA-Z]").expect("valid ANSI escape regex"));

/// Remove ANSI styling sequences from `text`.
#[must_use]
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    ANSI_REGEX.replace_all(text, "")
}

/// Number of characters a terminal shows for `text`.
#[must_use]
pub fn visible_width(text: &str) -> usize {
    strip_ansi(text).chars().count()
}

/// Standard stream a renderer draws on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalStream {
    Stdout,
    Stderr,
}

impl TerminalStream {
    fn is_terminal(self) -> bool {
        match self {
            Self::Stdout => io::stdout().is_terminal(),
            Self::Stderr => io::stderr().is_terminal(),
        }
    }
}

/// Where the terminal column count comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthSource {
    /// Query the terminal when the given stream is interactive.
    Detect(TerminalStream),
    /// Use a fixed column count.
    Fixed(usize),
    /// Width is never known.
    Unknown,
}

impl Default for WidthSource {
    fn default() -> Self {
        Self::Detect(TerminalStream::Stdout)
    }
}

impl WidthSource {
    /// Current terminal width in columns, if it can be determined.
    #[must_use]
    pub fn columns(self) -> Option<usize> {
        let columns = match self {
            Self::Detect(stream) => {
                if !stream.is_terminal() {
                    return None;
                }
                crossterm::terminal::size()
                    .ok()
                    .map(|(columns, _rows)| usize::from(columns))
            }
            Self::Fixed(columns) => Some(columns),
            Self::Unknown => None,
        };
        columns.filter(|&columns| columns > 0)
    }
}

/// How a progress line is drawn over the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedrawMode {
    /// Carriage return and overwrite the current row.
    Overwrite,
    /// Move up one row, then overwrite.
    CursorUp,
}

impl RedrawMode {
    /// Pick the redraw mode for a line of `visible` characters.
    ///
    /// An unknown width always overwrites in place.
    #[must_use]
    pub fn select(visible: usize, width: Option<usize>) -> Self {
        match width {
            Some(width) if visible >= width => Self::CursorUp,
            _ => Self::Overwrite,
        }
    }

    /// Control sequence written before the line.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Overwrite => "\r  ",
            Self::CursorUp => "\r\x1b[A  ",
        }
    }
}

/// Build the styled progress line for `state`.
///
/// Completed codes are green or red, the in-flight code blinks blue and the
/// remaining codes are blue. Empty groups are left out.
#[must_use]
pub fn progress_line(state: &ScanState) -> String {
    let mut parts: Vec<String> = state
        .outcomes()
        .iter()
        .map(|outcome| match outcome.status {
            CodeStatus::Success => outcome.code.as_str().green().to_string(),
            CodeStatus::Failure => outcome.code.as_str().red().to_string(),
        })
        .collect();

    if let Some(current) = state.current() {
        parts.push(current.as_str().blue().blink().to_string());
    }

    let remaining = state.remaining();
    if !remaining.is_empty() {
        let todo = remaining
            .iter()
            .map(AreaCode::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        parts.push(todo.blue().to_string());
    }

    parts.join(", ")
}

/// Renders [`ScanState`] updates to an output stream.
pub struct ProgressRenderer<W: Write> {
    out: W,
    width: WidthSource,
}

impl ProgressRenderer<io::Stdout> {
    /// Renderer on standard output with detected terminal width.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout(), WidthSource::Detect(TerminalStream::Stdout))
    }
}

impl ProgressRenderer<io::Stderr> {
    /// Renderer on standard error, sized by the terminal stderr is attached to.
    ///
    /// Used when stdout carries machine-readable output.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr(), WidthSource::Detect(TerminalStream::Stderr))
    }
}

impl<W: Write> ProgressRenderer<W> {
    pub fn new(out: W, width: WidthSource) -> Self {
        Self { out, width }
    }

    /// Print the header line.
    pub fn begin(&mut self) -> io::Result<()> {
        writeln!(self.out, "{HEADER}")?;
        self.out.flush()
    }

    /// Redraw the progress line for `state`.
    pub fn render(&mut self, state: &ScanState) -> io::Result<RedrawMode> {
        let line = progress_line(state);
        let mode = RedrawMode::select(visible_width(&line), self.width.columns());

        write!(self.out, "{}{line}", mode.prefix())?;
        self.out.flush()?;
        Ok(mode)
    }

    /// End the progress block with a blank line.
    pub fn finish(&mut self) -> io::Result<()> {
        write!(self.out, "\n\n")?;
        self.out.flush()
    }

    #[must_use]
    pub fn width_source(&self) -> WidthSource {
        self.width
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }
}
