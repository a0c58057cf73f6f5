//! Terminal-backed line writer.

use super::LineWriter;
use console::Term;
use indicatif::TermLike;
use std::fmt;
use std::io;

/// Draws the progress line on a terminal.
///
/// Any [`TermLike`] implementation works; [`console::Term`] is used for
/// standard output and standard error.
pub struct TermWriter {
    term: Box<dyn TermLike>,
}

impl fmt::Debug for TermWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TermWriter")
            .field("term", &self.term)
            .finish()
    }
}

impl TermWriter {
    /// Create a new [`TermWriter`] on top of `term`.
    pub fn new(term: impl TermLike + 'static) -> Self {
        Self {
            term: Box::new(term),
        }
    }

    /// Draw on the standard output.
    pub fn stdout() -> Self {
        TermWriter::new(Term::stdout())
    }

    /// Draw on the standard error.
    pub fn stderr() -> Self {
        TermWriter::new(Term::stderr())
    }
}

impl Default for TermWriter {
    fn default() -> Self {
        TermWriter::stdout()
    }
}

impl LineWriter for TermWriter {
    fn columns(&self) -> usize {
        usize::from(self.term.width())
    }

    fn move_to_start(&mut self) -> io::Result<()> {
        self.term.write_str("\r")
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.term.write_str(line)?;
        self.term.flush()
    }

    fn terminate_line(&mut self) -> io::Result<()> {
        // `TermLike::write_line` appends the newline for us.
        self.term.write_line("")?;
        self.term.flush()
    }
}
