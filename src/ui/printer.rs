use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use ghas_demo_core::{Line, Tone};

/// Writes [`Line`]s to a terminal (or any writer), coloring by tone
pub struct Printer<W> {
    out: W,
    color: bool,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Write one line
    pub fn line(&mut self, line: &Line) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{}", paint(line.tone, &line.text))
        } else {
            writeln!(self.out, "{}", line.text)
        }
    }

    /// Write lines in order
    pub fn lines(&mut self, lines: &[Line]) -> io::Result<()> {
        for line in lines {
            self.line(line)?;
        }
        self.out.flush()
    }

    /// Shorthand for a single line with the given tone
    pub fn say(&mut self, tone: Tone, text: impl Into<String>) -> io::Result<()> {
        self.line(&Line::new(tone, text))
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn paint(tone: Tone, text: &str) -> ColoredString {
    match tone {
        Tone::Heading => text.cyan(),
        Tone::Info => text.blue(),
        Tone::Detail => text.bright_black(),
        Tone::Success => text.green(),
        Tone::Warning => text.yellow(),
        Tone::Error => text.red(),
        Tone::Plain => text.normal(),
    }
}
