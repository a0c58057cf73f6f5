//! Progress line formatting.
//!
//! Everything here is a pure function of its inputs: the animation state
//! (`trail_offset`) is owned by the bar and passed in explicitly.
//!
//! ```rust
//! use rainbar::progress::{format_line, LineInput, TrailStyle};
//!
//! let style = TrailStyle::plain().with_emblem(">");
//! let line = format_line(
//!     &LineInput {
//!         name: "Download",
//!         value: 50,
//!         max: Some(100),
//!         columns: 40,
//!         trail_offset: 0,
//!     },
//!     &style,
//! );
//! assert_eq!(line, "Download ~~~~~~~~> 50%");
//! ```

use super::style::TrailStyle;

/// Snapshot of the bar state needed to format one frame.
#[derive(Debug, Clone, Copy)]
pub struct LineInput<'a> {
    /// Display label.
    pub name: &'a str,
    /// Current progress.
    pub value: u64,
    /// Target total, `None` when unknown.
    pub max: Option<u64>,
    /// Terminal width in columns.
    pub columns: usize,
    /// Animation offset applied to the palette.
    pub trail_offset: u64,
}

/// Completion ratio in `[0, 1]`.
///
/// An unknown or zero total is treated as indeterminate progress and yields 0.
pub fn percent(value: u64, max: Option<u64>) -> f64 {
    match max {
        Some(max) if max > 0 => (value as f64 / max as f64).clamp(0.0, 1.0),
        _ => 0.0,
    }
}

/// Palette index of the glyph at `position` for a given animation `offset`.
pub fn trail_color_index(position: usize, offset: u64, palette_len: usize) -> usize {
    let len = palette_len as u64;
    ((position as u64 % len + offset % len) % len) as usize
}

/// Draw `len` trail glyphs, each colored by its palette entry.
pub fn paint_trail(len: usize, offset: u64, style: &TrailStyle) -> String {
    let palette = style.palette();
    let glyph = style.glyph();
    let mut trail = String::with_capacity(len);
    for position in 0..len {
        let color = palette.color(trail_color_index(position, offset, palette.len()));
        trail.push_str(&style.to_style(color).apply_to(glyph).to_string());
    }
    trail
}

/// Columns left for the trail once the name and decorations are accounted for.
pub fn available_trail_width(name: &str, columns: usize, style: &TrailStyle) -> usize {
    columns
        .saturating_sub(console::measure_text_width(name))
        .saturating_sub(style.reserved_columns())
}

/// Format a full progress line: `name trail+emblem NN%`.
pub fn format_line(input: &LineInput<'_>, style: &TrailStyle) -> String {
    let percent = percent(input.value, input.max);
    let progress = (percent * 100.0).floor() as u64;
    let available = available_trail_width(input.name, input.columns, style);
    let trail_len = (available as f64 * percent).floor() as usize;

    let trail = paint_trail(trail_len, input.trail_offset, style);
    format!("{} {}{} {}%", input.name, trail, style.emblem(), progress)
}
