//! Custom character glyphs
//!
//! HD44780-style controllers render each cell as a 5x8 dot matrix. Eight
//! user-defined bitmaps can be uploaded; a splash icon spans three columns
//! and two rows of them:
//!
//! ```text
//!   012
//!   345
//! ```

/// Number of glyphs making up one splash icon
pub const ICON_GLYPHS: usize = 6;

/// Columns spanned by a splash icon
pub const ICON_COLS: u8 = 3;

/// A 5x8 bitmap, one byte per pixel row, low five bits used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph(pub [u8; 8]);

impl Glyph {
    /// A glyph with no pixels lit
    pub const BLANK: Glyph = Glyph([0; 8]);

    /// Row bytes, masked to the five visible columns
    pub fn rows(&self) -> [u8; 8] {
        let mut rows = self.0;
        for row in &mut rows {
            *row &= 0b1_1111;
        }
        rows
    }

    /// Check whether a pixel is lit (`x` 0-4 from the left, `y` 0-7 from the top)
    pub fn pixel(&self, x: u8, y: u8) -> bool {
        if x > 4 || y > 7 {
            return false;
        }
        self.0[y as usize] & (0b1_0000 >> x) != 0
    }
}

/// Splash icons
pub mod icons {
    use super::{Glyph, ICON_GLYPHS};

    /// Circled "i" shown on the About splash
    pub const ABOUT: [Glyph; ICON_GLYPHS] = [
        Glyph([0b00000, 0b00011, 0b00100, 0b01000, 0b01000, 0b10000, 0b10000, 0b10000]),
        Glyph([0b11111, 0b00000, 0b00000, 0b00100, 0b00000, 0b01100, 0b00100, 0b00100]),
        Glyph([0b00000, 0b11000, 0b00100, 0b00010, 0b00010, 0b00001, 0b00001, 0b00001]),
        Glyph([0b10000, 0b10000, 0b01000, 0b01000, 0b00100, 0b00011, 0b00000, 0b00000]),
        Glyph([0b00100, 0b00100, 0b00100, 0b01110, 0b00000, 0b00000, 0b11111, 0b00000]),
        Glyph([0b00001, 0b00001, 0b00010, 0b00010, 0b00100, 0b11000, 0b00000, 0b00000]),
    ];

    /// Peak above waves, for altitude above mean sea level
    pub const SEA: [Glyph; ICON_GLYPHS] = [
        Glyph([0b00000, 0b00000, 0b00000, 0b00001, 0b00011, 0b00110, 0b01100, 0b11000]),
        Glyph([0b00100, 0b01110, 0b11111, 0b10111, 0b00011, 0b00001, 0b00000, 0b00000]),
        Glyph([0b00000, 0b00000, 0b00000, 0b10000, 0b11000, 0b11100, 0b11110, 0b01111]),
        Glyph([0b00000, 0b01100, 0b10010, 0b00001, 0b00000, 0b01100, 0b10010, 0b00001]),
        Glyph([0b00000, 0b01100, 0b10010, 0b00001, 0b00000, 0b01100, 0b10010, 0b00001]),
        Glyph([0b00000, 0b01100, 0b10010, 0b00001, 0b00000, 0b01100, 0b10010, 0b00001]),
    ];

    /// Bench mark (bar over arrow), for datum-corrected altitude
    pub const DATUM: [Glyph; ICON_GLYPHS] = [
        Glyph([0b00000, 0b00000, 0b00111, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000]),
        Glyph([0b00000, 0b00000, 0b11111, 0b00000, 0b00100, 0b00100, 0b01010, 0b01010]),
        Glyph([0b00000, 0b00000, 0b11100, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000]),
        Glyph([0b00000, 0b00000, 0b00001, 0b00001, 0b00010, 0b00010, 0b00100, 0b11111]),
        Glyph([0b10001, 0b10001, 0b00000, 0b00000, 0b00100, 0b00100, 0b00100, 0b11111]),
        Glyph([0b00000, 0b00000, 0b10000, 0b10000, 0b01000, 0b01000, 0b00100, 0b11111]),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_addressing() {
        let g = Glyph([0b10001, 0, 0, 0, 0, 0, 0, 0b00100]);
        assert!(g.pixel(0, 0));
        assert!(g.pixel(4, 0));
        assert!(!g.pixel(2, 0));
        assert!(g.pixel(2, 7));
        assert!(!g.pixel(5, 0));
    }

    #[test]
    fn test_rows_masked() {
        let g = Glyph([0xFF; 8]);
        assert_eq!(g.rows(), [0b1_1111; 8]);
    }

    #[test]
    fn test_icons_seam() {
        // The bench mark bar runs unbroken across the top three glyphs
        assert_eq!(icons::DATUM[1].0[2], 0b11111);
        assert!(icons::DATUM[0].pixel(4, 2));
        assert!(icons::DATUM[2].pixel(0, 2));
    }
}
