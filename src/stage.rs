use std::io::{self, Read};

use crate::canvas::Canvas;
use crate::error::Result;
use crate::terminal::Terminal;

/// The terminal and the overlay canvas, handled as one surface.
///
/// A run has exactly one stage. The session owns it; slides and the driver
/// only ever borrow it.
pub struct Stage {
    pub columns: u16,
    pub lines: u16,
    pub canvas: Box<dyn Canvas>,
    terminal: Terminal,
    input: Box<dyn Read>,
}

impl Stage {
    pub fn new(
        terminal: Terminal,
        canvas: Box<dyn Canvas>,
        input: Box<dyn Read>,
        (columns, lines): (u16, u16),
    ) -> Self {
        Self {
            columns,
            lines,
            canvas,
            terminal,
            input,
        }
    }

    /// Bind `canvas` to the process' stdin/stdout, capturing the current
    /// terminal size.
    pub fn create(canvas: Box<dyn Canvas>) -> Result<Self> {
        let size = crossterm::terminal::size()?;
        log::debug!("terminal size {}x{}", size.0, size.1);
        Ok(Self::new(
            Terminal::stdout(),
            canvas,
            Box::new(io::stdin()),
            size,
        ))
    }

    pub fn write(&mut self, text: &str) -> Result<()> {
        Ok(self.terminal.write(text)?)
    }

    pub fn write_at(
        &mut self,
        col: u16,
        row: u16,
        text: &str,
        fg: Option<u8>,
        bg: Option<u8>,
    ) -> Result<()> {
        Ok(self.terminal.write_at(col, row, text, fg, bg)?)
    }

    /// Clear the terminal screen. The overlay is left alone.
    pub fn clear(&mut self) -> Result<()> {
        Ok(self.terminal.clear()?)
    }

    /// Block until one input byte arrives. `None` once input is exhausted.
    pub fn read_byte(&mut self) -> Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.input.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    pub(crate) fn terminal_mut(&mut self) -> &mut Terminal {
        &mut self.terminal
    }
}
