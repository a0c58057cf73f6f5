//! Progress module containing the trail styling and line formatting.
//!
//! # Overview
//!
//! The progress module is organized into two main components:
//!
//! - `style` - Trail glyph, emblem, palette and color encoding
//! - `line` - Pure functions turning a bar snapshot into a printable line
//!
//! # Examples
//!
//! ## Custom Trail Styling
//!
//! ```rust
//! use rainbar::progress::{ColorMode, Palette, TrailStyle};
//!
//! let style = TrailStyle::new('~', ":3", Palette::rainbow(), ColorMode::Always);
//! assert_eq!(style.emblem(), ":3");
//! ```
//!
//! ## Uncolored Output
//!
//! ```rust
//! use rainbar::progress::{paint_trail, TrailStyle};
//!
//! let trail = paint_trail(4, 0, &TrailStyle::plain());
//! assert_eq!(trail, "~~~~");
//! ```

pub(crate) mod line;
pub(crate) mod style;

pub use line::{
    available_trail_width, format_line, paint_trail, percent, trail_color_index, LineInput,
};
pub use style::{ColorMode, Palette, TrailStyle};
