//! Rainbar draws a single-line animated progress indicator in a terminal,
//! driven either by a repeating timer or by byte counts from an HTTP
//! transfer.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rainbar::{ProgressBar, RefreshMethod};
//!
//! # fn main() -> Result<(), rainbar::Error> {
//! let bar = ProgressBar::new("Download", 100);
//! bar.set_refresh_method(RefreshMethod::Event);
//! for value in (0..=100).step_by(10) {
//!     bar.update(value)?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`bar`] - The `ProgressBar` handle, its builder and configuration
//! - [`progress`] - Trail styling and line formatting
//! - [`output`] - The `LineWriter` capability and its terminal/in-memory implementations
//! - [`adapters`] - Transfer event and HTTP response adapters
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`utils`] - Shared utility functions

pub mod adapters;
pub mod bar;
pub mod error;
pub mod output;
pub mod progress;
pub mod utils;

pub use adapters::{ResponseProgress, TransferEvent, TransferProgress};
pub use bar::{BarConfig, BarState, ProgressBar, ProgressBarBuilder, RefreshMethod};
pub use error::{Error, Result};
pub use output::{CaptureWriter, LineWriter, SinkWriter, TermWriter};
pub use progress::{ColorMode, Palette, TrailStyle};
pub use utils::content_length::{content_length_of, parse_content_length};
