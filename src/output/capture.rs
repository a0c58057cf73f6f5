//! In-memory line writers.

use super::LineWriter;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A single call recorded by a [`CaptureWriter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterEvent {
    /// The cursor went back to column 0.
    MoveToStart,
    /// A frame was written.
    Line(String),
    /// The row was terminated.
    Terminate,
}

/// Records everything a progress bar draws, with a fixed width.
///
/// Clones share the same record, so a clone can be handed to a bar while
/// the original is kept around for inspection.
#[derive(Debug, Clone)]
pub struct CaptureWriter {
    columns: usize,
    events: Arc<Mutex<Vec<WriterEvent>>>,
}

impl CaptureWriter {
    /// Create a new [`CaptureWriter`] reporting `columns` as its width.
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn record(&self) -> MutexGuard<'_, Vec<WriterEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get a copy of every recorded call, in order.
    pub fn events(&self) -> Vec<WriterEvent> {
        self.record().clone()
    }

    /// Get the frames written so far.
    pub fn frames(&self) -> Vec<String> {
        self.record()
            .iter()
            .filter_map(|event| match event {
                WriterEvent::Line(line) => Some(line.clone()),
                _ => None,
            })
            .collect()
    }

    /// Get the last frame written, if any.
    pub fn last_frame(&self) -> Option<String> {
        self.frames().pop()
    }

    /// Number of line terminators written so far.
    pub fn terminations(&self) -> usize {
        self.record()
            .iter()
            .filter(|event| **event == WriterEvent::Terminate)
            .count()
    }

    /// Rebuild the raw output as a terminal would have received it.
    pub fn output(&self) -> String {
        self.record()
            .iter()
            .map(|event| match event {
                WriterEvent::MoveToStart => "\r",
                WriterEvent::Line(line) => line.as_str(),
                WriterEvent::Terminate => "\n",
            })
            .collect()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.record().clear();
    }
}

impl LineWriter for CaptureWriter {
    fn columns(&self) -> usize {
        self.columns
    }

    fn move_to_start(&mut self) -> io::Result<()> {
        self.record().push(WriterEvent::MoveToStart);
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.record().push(WriterEvent::Line(line.to_owned()));
        Ok(())
    }

    fn terminate_line(&mut self) -> io::Result<()> {
        self.record().push(WriterEvent::Terminate);
        Ok(())
    }
}

/// Discards everything, reporting a fixed width.
#[derive(Debug, Clone, Copy)]
pub struct SinkWriter {
    columns: usize,
}

impl SinkWriter {
    /// Width reported by the default sink.
    pub const DEFAULT_COLUMNS: usize = 80;

    /// Create a new [`SinkWriter`] reporting `columns` as its width.
    pub fn new(columns: usize) -> Self {
        Self { columns }
    }
}

impl Default for SinkWriter {
    fn default() -> Self {
        SinkWriter::new(SinkWriter::DEFAULT_COLUMNS)
    }
}

impl LineWriter for SinkWriter {
    fn columns(&self) -> usize {
        self.columns
    }

    fn move_to_start(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn write_line(&mut self, _line: &str) -> io::Result<()> {
        Ok(())
    }

    fn terminate_line(&mut self) -> io::Result<()> {
        Ok(())
    }
}
