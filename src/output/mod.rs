//! Output module containing the line writer capability.
//!
//! A progress bar never talks to the terminal directly. It goes through a
//! [`LineWriter`], which knows the current width and how to overwrite the
//! current row. This keeps the bar testable without a real terminal.
//!
//! # Overview
//!
//! - [`term`] - [`TermWriter`], backed by any [`indicatif::TermLike`]
//! - [`capture`] - [`CaptureWriter`], an in-memory recorder for tests and
//!   [`SinkWriter`], which discards everything
//!
//! # Examples
//!
//! ```rust
//! use rainbar::output::{CaptureWriter, LineWriter};
//!
//! # fn example() -> std::io::Result<()> {
//! let mut writer = CaptureWriter::new(40);
//! writer.move_to_start()?;
//! writer.write_line("hello")?;
//! writer.terminate_line()?;
//! assert_eq!(writer.output(), "\rhello\n");
//! # Ok(())
//! # }
//! ```

pub mod capture;
pub mod term;

pub use capture::{CaptureWriter, SinkWriter, WriterEvent};
pub use term::TermWriter;

use std::io;

/// Somewhere a single progress line can be drawn and redrawn in place.
pub trait LineWriter: Send {
    /// Current width of the output, in columns.
    fn columns(&self) -> usize;

    /// Move the cursor back to column 0 of the current row.
    fn move_to_start(&mut self) -> io::Result<()>;

    /// Write the line contents, without any terminator.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// End the current row so that later output starts on a fresh line.
    fn terminate_line(&mut self) -> io::Result<()>;
}

impl<W: LineWriter + ?Sized> LineWriter for Box<W> {
    fn columns(&self) -> usize {
        (**self).columns()
    }

    fn move_to_start(&mut self) -> io::Result<()> {
        (**self).move_to_start()
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }

    fn terminate_line(&mut self) -> io::Result<()> {
        (**self).terminate_line()
    }
}
