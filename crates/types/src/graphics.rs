//! Glyph and colour data for drawable entities.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const GREY: Rgb = Rgb::new(110, 110, 120);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// What a single cell looks like: a glyph with foreground and background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graphics {
    pub glyph: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

impl Graphics {
    /// Black space on black.
    pub const EMPTY: Graphics = Graphics::new(' ', Rgb::BLACK, Rgb::BLACK);

    pub const fn new(glyph: char, fg: Rgb, bg: Rgb) -> Self {
        Self { glyph, fg, bg }
    }

    /// Glyph in `fg` on a black background.
    pub const fn glyph(glyph: char, fg: Rgb) -> Self {
        Self::new(glyph, fg, Rgb::BLACK)
    }
}

impl Default for Graphics {
    fn default() -> Self {
        Self::EMPTY
    }
}
