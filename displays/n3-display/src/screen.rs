//! Screen buffer
//!
//! An in-memory character display. Host tests render into it and assert on
//! what the windows drew; the device draws straight to the LCD.

use heapless::String;

use crate::backend::{CharDisplay, DisplayError, LCD_COLS, LCD_ROWS, MAX_GLYPHS};
use crate::glyph::Glyph;

/// Number of character rows
pub const SCREEN_ROWS: usize = LCD_ROWS as usize;

/// Number of character columns
pub const SCREEN_COLS: usize = LCD_COLS as usize;

/// Character shown by [`Screen::row_text`] for a custom glyph cell
pub const GLYPH_PLACEHOLDER: char = '#';

/// Screen buffer for a 2x8 character display
///
/// Cells hold raw character codes: 0-7 refer to custom glyph slots, anything
/// else is ASCII.
#[derive(Clone)]
pub struct Screen {
    /// Current display content
    cells: [[u8; SCREEN_COLS]; SCREEN_ROWS],
    /// Uploaded custom glyphs
    glyphs: [Glyph; MAX_GLYPHS as usize],
    /// Cursor as (col, row)
    cursor: (u8, u8),
    /// Number of print/glyph writes since creation
    writes: u32,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a new blank screen
    pub const fn new() -> Self {
        Self {
            cells: [[b' '; SCREEN_COLS]; SCREEN_ROWS],
            glyphs: [Glyph::BLANK; MAX_GLYPHS as usize],
            cursor: (0, 0),
            writes: 0,
        }
    }

    /// Raw character code at a cell
    pub fn cell(&self, col: usize, row: usize) -> Option<u8> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Row content as text, custom glyphs shown as [`GLYPH_PLACEHOLDER`]
    pub fn row_text(&self, row: usize) -> String<SCREEN_COLS> {
        let mut text = String::new();
        if let Some(cells) = self.cells.get(row) {
            for &code in cells {
                let ch = if code < MAX_GLYPHS {
                    GLYPH_PLACEHOLDER
                } else {
                    code as char
                };
                let _ = text.push(ch);
            }
        }
        text
    }

    /// Glyph currently uploaded in a slot
    pub fn glyph(&self, slot: u8) -> Option<&Glyph> {
        self.glyphs.get(slot as usize)
    }

    /// Current cursor as (col, row)
    pub fn cursor(&self) -> (u8, u8) {
        self.cursor
    }

    /// Total number of text/glyph writes, useful to detect redraws
    pub fn write_count(&self) -> u32 {
        self.writes
    }

    fn put(&mut self, code: u8) {
        let (col, row) = self.cursor;
        if (col as usize) < SCREEN_COLS {
            self.cells[row as usize][col as usize] = code;
            self.cursor.0 = col + 1;
        }
    }
}

impl CharDisplay for Screen {
    fn clear(&mut self) -> Result<(), DisplayError> {
        for row in &mut self.cells {
            row.fill(b' ');
        }
        self.cursor = (0, 0);
        Ok(())
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        if col >= LCD_COLS || row >= LCD_ROWS {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.cursor = (col, row);
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<(), DisplayError> {
        for byte in text.bytes() {
            // Non-printable bytes would alias glyph slots
            let code = if (0x20..0x7F).contains(&byte) { byte } else { b'?' };
            self.put(code);
        }
        self.writes += 1;
        Ok(())
    }

    fn define_glyph(&mut self, slot: u8, glyph: &Glyph) -> Result<(), DisplayError> {
        if slot >= MAX_GLYPHS {
            return Err(DisplayError::InvalidGlyphSlot);
        }
        self.glyphs[slot as usize] = *glyph;
        Ok(())
    }

    fn write_glyph(&mut self, slot: u8) -> Result<(), DisplayError> {
        if slot >= MAX_GLYPHS {
            return Err(DisplayError::InvalidGlyphSlot);
        }
        self.put(slot);
        self.writes += 1;
        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for row in 0..SCREEN_ROWS {
            if row > 0 {
                defmt::write!(f, " / ");
            }
            defmt::write!(f, "{}", self.row_text(row).as_str());
        }
        defmt::write!(f, "]");
    }
}
