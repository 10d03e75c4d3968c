//! Presentation-neutral output lines.
//!
//! Renderers in this crate produce `Vec<Line>`; the application maps each
//! [`Tone`] to a terminal color (or none).

/// Visual role of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Section or record heading (cyan)
    Heading,
    /// Informational hint (blue)
    Info,
    /// Secondary detail text (gray)
    Detail,
    /// Positive result (green)
    Success,
    /// Attention / caveat (yellow)
    Warning,
    /// Failure or injected issue (red)
    Error,
    /// No styling
    Plain,
}

/// A single printable line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub tone: Tone,
    pub text: String,
}

impl Line {
    pub fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            tone,
            text: text.into(),
        }
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self::new(Tone::Heading, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(Tone::Info, text)
    }

    pub fn detail(text: impl Into<String>) -> Self {
        Self::new(Tone::Detail, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(Tone::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Tone::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Tone::Error, text)
    }

    /// An empty separator line
    pub fn blank() -> Self {
        Self::new(Tone::Plain, "")
    }
}

/// Bulleted detail lines ("• item")
pub fn bullets<'a>(items: impl IntoIterator<Item = &'a str>) -> Vec<Line> {
    items
        .into_iter()
        .map(|item| Line::detail(format!("• {}", item)))
        .collect()
}

/// Join lines into plain text, one line per row (tones dropped)
pub fn plain_text(lines: &[Line]) -> String {
    lines
        .iter()
        .map(|l| l.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
