//! Display backend trait
//!
//! Defines the interface for character-cell displays.

/// Number of character columns on the LCD
pub const LCD_COLS: u8 = 8;

/// Number of character rows on the LCD
pub const LCD_ROWS: u8 = 2;

/// Number of custom glyph slots (CGRAM) the controller provides
pub const MAX_GLYPHS: u8 = 8;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Cursor position outside the display
    InvalidCoordinates,
    /// Glyph slot outside the controller's CGRAM
    InvalidGlyphSlot,
}

/// Character display trait
///
/// Text is written at the cursor, which advances one column per character.
/// Writes past the last column are dropped.
pub trait CharDisplay {
    /// Clear the display and home the cursor
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Move the cursor
    ///
    /// - `col`: Column (0-7)
    /// - `row`: Row (0-1)
    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError>;

    /// Print ASCII text at the cursor
    fn print(&mut self, text: &str) -> Result<(), DisplayError>;

    /// Upload a custom glyph bitmap into `slot` (0-7)
    fn define_glyph(&mut self, slot: u8, glyph: &crate::Glyph) -> Result<(), DisplayError>;

    /// Write the custom glyph in `slot` at the cursor
    fn write_glyph(&mut self, slot: u8) -> Result<(), DisplayError>;

    /// Display dimensions as (columns, rows)
    fn dimensions(&self) -> (u8, u8) {
        (LCD_COLS, LCD_ROWS)
    }
}

/// Helper trait for drawing common UI elements
pub trait CharDisplayExt: CharDisplay {
    /// Print text starting at a position
    fn print_at(&mut self, col: u8, row: u8, text: &str) -> Result<(), DisplayError> {
        self.set_cursor(col, row)?;
        self.print(text)
    }

    /// Replace a whole row, padding with spaces so stale characters vanish
    fn draw_row(&mut self, row: u8, text: &str) -> Result<(), DisplayError> {
        let (cols, _) = self.dimensions();
        let mut buf = [b' '; LCD_COLS as usize];
        let width = (cols as usize).min(buf.len());

        let bytes = text.as_bytes();
        let len = bytes.len().min(width);
        buf[..len].copy_from_slice(&bytes[..len]);

        // Safe because we only use ASCII
        let line = core::str::from_utf8(&buf[..width]).unwrap_or("");
        self.print_at(0, row, line)
    }
}

// Blanket implementation for all CharDisplay types (including trait objects)
impl<T: CharDisplay + ?Sized> CharDisplayExt for T {}
