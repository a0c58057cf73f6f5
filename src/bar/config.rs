//! Configuration structures and defaults for progress bars.
//!
//! This module provides the refresh method enumeration and the configuration
//! structure used by [`ProgressBarBuilder`](super::ProgressBarBuilder).
//!
//! # Examples
//!
//! ```rust
//! use rainbar::bar::{BarConfig, RefreshMethod};
//! use rainbar::progress::TrailStyle;
//!
//! let config = BarConfig {
//!     refresh_method: RefreshMethod::Event,
//!     style: TrailStyle::plain(),
//! };
//! ```

use crate::progress::TrailStyle;

/// What triggers a redraw of the progress line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshMethod {
    /// Redraw on every tick of a repeating timer, see
    /// [`ProgressBar::start`](super::ProgressBar::start).
    #[default]
    Interval,
    /// Redraw on every call to [`ProgressBar::update`](super::ProgressBar::update).
    Event,
}

/// Configuration structure for a progress bar.
#[derive(Debug, Clone, Default)]
pub struct BarConfig {
    /// What triggers a redraw.
    pub refresh_method: RefreshMethod,
    /// Look of the trail.
    pub style: TrailStyle,
}
