//! Trail styling options.
//!
//! This module defines how the animated trail of a progress line looks: the
//! glyph it is made of, the emblem that follows it, the palette it cycles
//! through and whether colors are emitted at all.
//!
//! # Examples
//!
//! ## Default Styling
//!
//! ```rust
//! use rainbar::progress::TrailStyle;
//!
//! // A rainbow of `~` followed by the nyan emblem.
//! let style = TrailStyle::default();
//! assert_eq!(style.glyph(), '~');
//! ```
//!
//! ## Custom Styling
//!
//! ```rust
//! use console::Color;
//! use rainbar::progress::{ColorMode, Palette, TrailStyle};
//!
//! # fn example() -> Result<(), rainbar::Error> {
//! let palette = Palette::new(vec![Color::Cyan, Color::Magenta])?;
//! let style = TrailStyle::new('=', ">", palette, ColorMode::Always);
//! # Ok(())
//! # }
//! ```

use crate::error::{Error, Result};
use console::{Color, Style};

/// Decide how trail glyphs are encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Let `console` decide based on the terminal and the environment.
    #[default]
    Auto,
    /// Always emit ANSI color sequences.
    Always,
    /// Never emit ANSI color sequences.
    Never,
}

/// An ordered, non-empty list of colors the trail cycles through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Palette::rainbow()
    }
}

impl Palette {
    /// Orange as the nearest 256-color entry to `#FF7F00`.
    pub const ORANGE: Color = Color::Color256(208);
    /// Violet as the nearest 256-color entry to `#8B00FF`.
    pub const VIOLET: Color = Color::Color256(93);

    /// Create a new [`Palette`].
    ///
    /// Fails with [`Error::EmptyPalette`] if `colors` is empty, since the
    /// trail indexes the palette modulo its length.
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        if colors.is_empty() {
            return Err(Error::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Red, orange, yellow, green, blue, violet.
    pub fn rainbow() -> Self {
        Self {
            colors: vec![
                Color::Red,
                Palette::ORANGE,
                Color::Yellow,
                Color::Green,
                Color::Blue,
                Palette::VIOLET,
            ],
        }
    }

    /// Number of colors in the palette. Never zero.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get the color at `index`, wrapping around the palette.
    pub fn color(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    /// Get a reference to the palette colors.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

/// Define the look of the animated trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailStyle {
    /// Character repeated to draw the trail.
    glyph: char,
    /// Marker drawn right after the trail.
    emblem: String,
    /// Colors cycled through along the trail.
    palette: Palette,
    /// Color encoding.
    color_mode: ColorMode,
}

impl Default for TrailStyle {
    fn default() -> Self {
        Self {
            glyph: TrailStyle::GLYPH_WAVE,
            emblem: TrailStyle::EMBLEM_NYAN.into(),
            palette: Palette::rainbow(),
            color_mode: ColorMode::Auto,
        }
    }
}

impl TrailStyle {
    /// A cat riding toast through the sparkles: `🐱🍞✨`.
    pub const EMBLEM_NYAN: &'static str = "🐱🍞✨";
    /// A plain ASCII arrow head: `>`.
    pub const EMBLEM_ARROW: &'static str = ">";
    /// A wave segment: `~`.
    pub const GLYPH_WAVE: char = '~';
    /// Columns kept free before the emblem (name separator and spacing).
    pub const RESERVED_BEFORE_EMBLEM: usize = 10;
    /// Columns kept free after the emblem (percentage text).
    pub const RESERVED_AFTER_EMBLEM: usize = 5;

    /// Create a new [`TrailStyle`].
    pub fn new(
        glyph: char,
        emblem: impl Into<String>,
        palette: Palette,
        color_mode: ColorMode,
    ) -> Self {
        Self {
            glyph,
            emblem: emblem.into(),
            palette,
            color_mode,
        }
    }

    /// Default rainbow trail without any color sequence.
    pub fn plain() -> Self {
        Self {
            color_mode: ColorMode::Never,
            ..TrailStyle::default()
        }
    }

    /// Replace the emblem.
    pub fn with_emblem(self, emblem: impl Into<String>) -> Self {
        Self {
            emblem: emblem.into(),
            ..self
        }
    }

    /// Replace the color mode.
    pub fn with_color_mode(self, color_mode: ColorMode) -> Self {
        Self { color_mode, ..self }
    }

    /// Get the trail glyph.
    pub fn glyph(&self) -> char {
        self.glyph
    }

    /// Get the emblem.
    pub fn emblem(&self) -> &str {
        &self.emblem
    }

    /// Get a reference to the palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Get the color mode.
    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    /// Columns reserved for everything on the line except the name and the trail.
    pub fn reserved_columns(&self) -> usize {
        TrailStyle::RESERVED_BEFORE_EMBLEM
            + console::measure_text_width(&self.emblem)
            + TrailStyle::RESERVED_AFTER_EMBLEM
    }

    /// Create a [`Style`] painting with `color` according to the color mode.
    pub(crate) fn to_style(&self, color: Color) -> Style {
        let style = Style::new().fg(color);
        match self.color_mode {
            ColorMode::Auto => style,
            ColorMode::Always => style.force_styling(true),
            ColorMode::Never => style.force_styling(false),
        }
    }
}
