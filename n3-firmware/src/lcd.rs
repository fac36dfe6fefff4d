//! HD44780 character LCD in 4-bit mode
//!
//! Write-only: R/W is tied low, so every command is followed by a fixed
//! delay instead of polling the busy flag.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use n3_display::{CharDisplay, DisplayError, Glyph, LCD_COLS, LCD_ROWS, MAX_GLYPHS};

const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_MODE_INC: u8 = 0x06;
const CMD_DISPLAY_ON: u8 = 0x0C;
const CMD_FUNCTION_4BIT_2LINE: u8 = 0x28;
const CMD_SET_CGRAM: u8 = 0x40;
const CMD_SET_DDRAM: u8 = 0x80;

/// DDRAM address of the first column of each row
const ROW_OFFSETS: [u8; LCD_ROWS as usize] = [0x00, 0x40];

/// Most commands complete within 37 us
const COMMAND_DELAY_US: u32 = 50;
/// Clear and home take up to 1.52 ms
const CLEAR_DELAY_US: u32 = 2_000;

pub struct Hd44780<P, D> {
    rs: P,
    en: P,
    /// D4..D7
    data: [P; 4],
    delay: D,
}

impl<P: OutputPin, D: DelayNs> Hd44780<P, D> {
    pub fn new(rs: P, en: P, data: [P; 4], delay: D) -> Self {
        Self {
            rs,
            en,
            data,
            delay,
        }
    }

    /// Power-on initialisation into 4-bit, two-line mode
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.delay.delay_ms(50);
        self.rs.set_low().map_err(bus)?;

        // Three 8-bit function sets resynchronise the controller
        // whatever state it woke up in
        self.write_nibble(0x3)?;
        self.delay.delay_us(4_500);
        self.write_nibble(0x3)?;
        self.delay.delay_us(150);
        self.write_nibble(0x3)?;
        self.delay.delay_us(COMMAND_DELAY_US);
        self.write_nibble(0x2)?;
        self.delay.delay_us(COMMAND_DELAY_US);

        self.command(CMD_FUNCTION_4BIT_2LINE)?;
        self.command(CMD_DISPLAY_ON)?;
        self.clear()?;
        self.command(CMD_ENTRY_MODE_INC)
    }

    fn pulse_enable(&mut self) -> Result<(), DisplayError> {
        self.en.set_high().map_err(bus)?;
        self.delay.delay_us(1);
        self.en.set_low().map_err(bus)?;
        self.delay.delay_us(1);
        Ok(())
    }

    fn write_nibble(&mut self, nibble: u8) -> Result<(), DisplayError> {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            if nibble & (1 << bit) != 0 {
                pin.set_high().map_err(bus)?;
            } else {
                pin.set_low().map_err(bus)?;
            }
        }
        self.pulse_enable()
    }

    fn write_byte(&mut self, byte: u8, is_data: bool) -> Result<(), DisplayError> {
        if is_data {
            self.rs.set_high().map_err(bus)?;
        } else {
            self.rs.set_low().map_err(bus)?;
        }
        self.write_nibble(byte >> 4)?;
        self.write_nibble(byte & 0x0F)?;
        self.delay.delay_us(COMMAND_DELAY_US);
        Ok(())
    }

    fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.write_byte(cmd, false)
    }
}

fn bus<E>(_: E) -> DisplayError {
    DisplayError::Communication
}

impl<P: OutputPin, D: DelayNs> CharDisplay for Hd44780<P, D> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.command(CMD_CLEAR)?;
        self.delay.delay_us(CLEAR_DELAY_US);
        Ok(())
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        if col >= LCD_COLS || row >= LCD_ROWS {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.command(CMD_SET_DDRAM | (ROW_OFFSETS[row as usize] + col))
    }

    fn print(&mut self, text: &str) -> Result<(), DisplayError> {
        for byte in text.bytes() {
            // Codes below 8 would show custom glyphs
            let byte = if (0x20..0x7F).contains(&byte) { byte } else { b'?' };
            self.write_byte(byte, true)?;
        }
        Ok(())
    }

    fn define_glyph(&mut self, slot: u8, glyph: &Glyph) -> Result<(), DisplayError> {
        if slot >= MAX_GLYPHS {
            return Err(DisplayError::InvalidGlyphSlot);
        }
        self.command(CMD_SET_CGRAM | (slot << 3))?;
        for row in glyph.rows() {
            self.write_byte(row, true)?;
        }
        // Leave the address counter in DDRAM so the next print lands on screen
        self.command(CMD_SET_DDRAM)
    }

    fn write_glyph(&mut self, slot: u8) -> Result<(), DisplayError> {
        if slot >= MAX_GLYPHS {
            return Err(DisplayError::InvalidGlyphSlot);
        }
        self.write_byte(slot, true)
    }
}
