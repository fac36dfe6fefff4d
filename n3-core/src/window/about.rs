//! About window: version and credits, cycling through fixed pages

use core::fmt::Write;

use heapless::String;
use n3_display::glyph::icons;
use n3_display::{CharDisplayExt, Glyph, LCD_COLS};
use n3_hal::{elapsed_ms, Millis};

use super::{Context, Window};
use crate::config::VERSION;
use crate::gps::GpsSource;

/// Number of pages cycled through
pub const PAGE_COUNT: usize = 3;

pub struct AboutWindow {
    page_index: usize,
    last_page_change: Millis,
    needs_redraw: bool,
    page_ms: Millis,
}

impl AboutWindow {
    pub fn new(page_ms: Millis) -> Self {
        Self {
            page_index: 0,
            last_page_change: 0,
            needs_redraw: true,
            page_ms,
        }
    }

    /// Page currently shown
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    fn draw_page(&self, cx: &mut Context<'_>) {
        let mut title: String<{ LCD_COLS as usize }> = String::new();
        let (top, bottom) = match self.page_index {
            0 => {
                // A version too long for the row is cut off by draw_row
                let _ = write!(title, "N3 {}", VERSION);
                (title.as_str(), "(C) JDH")
            }
            1 => ("  For  ", "R H'cte"),
            _ => ("A Great", "  Dad  "),
        };
        cx.display.draw_row(0, top).ok();
        cx.display.draw_row(1, bottom).ok();
    }
}

impl Window for AboutWindow {
    fn focus(&mut self, _cx: &mut Context<'_>) {
        self.page_index = 0;
        self.needs_redraw = true;
    }

    fn update(&mut self, cx: &mut Context<'_>) {
        if self.needs_redraw {
            self.needs_redraw = false;
        } else if elapsed_ms(cx.now, self.last_page_change) >= self.page_ms {
            self.page_index = (self.page_index + 1) % PAGE_COUNT;
        } else {
            return;
        }
        self.last_page_change = cx.now;
        self.draw_page(cx);
    }

    fn unfocus(&mut self) {}

    fn is_valid(&self, _gps: &dyn GpsSource) -> bool {
        true
    }

    fn splash_icon(&self, pos: usize) -> Glyph {
        icons::ABOUT.get(pos).copied().unwrap_or(Glyph::BLANK)
    }

    fn splash_text(&self, line: usize) -> &'static str {
        match line {
            0 => "About",
            1 => " N3  ",
            _ => "",
        }
    }
}
