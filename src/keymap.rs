//! Input alphabet of the driver.

use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Advance,
    Rewind,
    Quit,
    Other(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keymap {
    pub next: u8,
    pub prev: u8,
    pub quit: u8,
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            next: KEY_NEXT,
            prev: KEY_PREV,
            quit: KEY_CTRL_C,
        }
    }
}

impl Keymap {
    pub fn classify(&self, byte: u8) -> Input {
        if byte == self.quit {
            Input::Quit
        } else if byte == self.next {
            Input::Advance
        } else if byte == self.prev {
            Input::Rewind
        } else {
            Input::Other(byte)
        }
    }
}
