//! Builder pattern implementation for creating ProgressBar instances.
//!
//! # Examples
//!
//! ## Basic Builder Usage
//!
//! ```rust
//! use rainbar::bar::{ProgressBarBuilder, RefreshMethod};
//!
//! let bar = ProgressBarBuilder::new("Download", 100)
//!     .refresh_method(RefreshMethod::Event)
//!     .build();
//! ```
//!
//! ## Capturing Output
//!
//! ```rust
//! use rainbar::bar::{ProgressBarBuilder, RefreshMethod};
//! use rainbar::output::CaptureWriter;
//!
//! # fn example() -> Result<(), rainbar::Error> {
//! let capture = CaptureWriter::new(80);
//! let bar = ProgressBarBuilder::new("Download", 100)
//!     .refresh_method(RefreshMethod::Event)
//!     .writer(capture.clone())
//!     .build();
//!
//! bar.update(50)?;
//! assert!(capture.last_frame().unwrap().ends_with("50%"));
//! # Ok(())
//! # }
//! ```

use super::config::{BarConfig, RefreshMethod};
use super::progress_bar::ProgressBar;
use crate::output::{LineWriter, SinkWriter, TermWriter};
use crate::progress::TrailStyle;

/// A builder used to create a [`ProgressBar`].
///
/// ```rust
/// # fn main()  {
/// use rainbar::bar::ProgressBarBuilder;
/// use rainbar::progress::TrailStyle;
///
/// let bar = ProgressBarBuilder::new("Download", 1024)
///     .style(TrailStyle::plain())
///     .build();
/// # }
/// ```
pub struct ProgressBarBuilder {
    name: String,
    max: u64,
    config: BarConfig,
    writer: Option<Box<dyn LineWriter>>,
}

impl ProgressBarBuilder {
    /// Creates a builder with the default options.
    pub fn new(name: impl Into<String>, max: u64) -> Self {
        Self {
            name: name.into(),
            max,
            config: BarConfig::default(),
            writer: None,
        }
    }

    /// Convenience function to discard the output.
    pub fn hidden(name: impl Into<String>, max: u64) -> Self {
        ProgressBarBuilder::new(name, max).writer(SinkWriter::default())
    }

    /// Set what triggers a redraw.
    pub fn refresh_method(mut self, refresh_method: RefreshMethod) -> Self {
        self.config.refresh_method = refresh_method;
        self
    }

    /// Set the trail style.
    pub fn style(mut self, style: TrailStyle) -> Self {
        self.config.style = style;
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: BarConfig) -> Self {
        self.config = config;
        self
    }

    /// Set where the line is drawn. Defaults to the standard output.
    pub fn writer(mut self, writer: impl LineWriter + 'static) -> Self {
        self.writer = Some(Box::new(writer));
        self
    }

    /// Create the [`ProgressBar`] with the specified options.
    pub fn build(self) -> ProgressBar {
        let writer = self
            .writer
            .unwrap_or_else(|| Box::new(TermWriter::stdout()));
        ProgressBar::with_parts(self.name, self.max, self.config, writer)
    }
}
