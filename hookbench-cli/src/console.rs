//! User-facing report output.
//!
//! Kept apart from tracing: the report always goes to the writer handed in by
//! the caller (stdout for the binary), logs go to stderr.

use std::fmt::Display;
use std::io::Write;

/// Width of the `=` rule framing the diff and summary sections
pub const WIDE_RULE: usize = 60;

/// Width of the `-` rule framing the unstaged section
pub const NARROW_RULE: usize = 40;

/// Line-oriented writer for report output
pub struct Console<'a> {
    out: &'a mut dyn Write,
}

impl<'a> Console<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        Self { out }
    }

    /// Write one line.
    pub fn line(&mut self, text: impl Display) {
        // Report output is best-effort; a closed stdout must not fail the run.
        let _ = writeln!(self.out, "{}", text);
    }

    pub fn blank(&mut self) {
        let _ = writeln!(self.out);
    }

    /// Write a horizontal rule of `width` copies of `ch`
    pub fn rule(&mut self, ch: char, width: usize) {
        let _ = writeln!(self.out, "{}", ch.to_string().repeat(width));
    }

    /// Write captured process text without its trailing newlines
    pub fn block(&mut self, text: &str) {
        self.line(text.trim_end_matches(['\n', '\r']));
    }

    pub fn flush(&mut self) {
        let _ = self.out.flush();
    }
}
