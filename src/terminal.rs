//! Character-cell side of the stage.
//!
//! Everything is written as escape sequences through crossterm commands and
//! flushed right away, so partial output is visible before the driver blocks
//! on the next key.

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo, RestorePosition, SavePosition, Show},
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

pub struct Terminal {
    out: Box<dyn Write>,
}

impl Terminal {
    pub fn new(out: Box<dyn Write>) -> Self {
        Self { out }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    pub fn write(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }

    /// Write `text` at 1-based `(col, row)` without moving the text cursor.
    pub fn write_at(
        &mut self,
        col: u16,
        row: u16,
        text: &str,
        fg: Option<u8>,
        bg: Option<u8>,
    ) -> io::Result<()> {
        queue!(
            self.out,
            SavePosition,
            MoveTo(col.saturating_sub(1), row.saturating_sub(1))
        )?;
        if let Some(fg) = fg {
            queue!(self.out, SetForegroundColor(Color::AnsiValue(fg)))?;
        }
        if let Some(bg) = bg {
            queue!(self.out, SetBackgroundColor(Color::AnsiValue(bg)))?;
        }
        queue!(self.out, Print(text), ResetColor, RestorePosition)?;
        self.out.flush()
    }

    pub fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.out.flush()
    }

    pub(crate) fn enter_presentation_screen(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            Hide,
            EnterAlternateScreen,
            Clear(ClearType::All),
            MoveTo(0, 0)
        )?;
        self.out.flush()
    }

    pub(crate) fn leave_presentation_screen(&mut self) -> io::Result<()> {
        queue!(self.out, LeaveAlternateScreen, Show)?;
        self.out.flush()
    }
}
