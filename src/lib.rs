//! Terminal presentation runner.
//!
//! A [`stage::Stage`] pairs a raw terminal with a transparent overlay window.
//! Slides are [`engine::StepSequence`]s that reveal one step per key press;
//! [`navigation::Driver`] routes keys to steps and slides while
//! [`session::Session`] keeps the terminal restorable.

pub mod canvas;
pub mod cli;
pub mod constants;
pub mod countdown;
pub mod engine;
pub mod error;
pub mod keymap;
pub mod navigation;
#[cfg(feature = "overlay")]
pub mod overlay;
pub mod projection;
pub mod session;
pub mod slide;
pub mod slides;
pub mod stage;
pub mod state;
pub mod terminal;

#[cfg(test)]
mod testing;

pub use error::{Error, Result};

use canvas::Canvas;

/// The overlay surface for this build.
#[cfg(feature = "overlay")]
pub fn open_canvas() -> Result<Box<dyn Canvas>> {
    Ok(Box::new(overlay::OverlayCanvas::open()?))
}

/// Without the `overlay` feature drawings only live in a display list.
#[cfg(not(feature = "overlay"))]
pub fn open_canvas() -> Result<Box<dyn Canvas>> {
    let (columns, lines) = crossterm::terminal::size()?;
    Ok(Box::new(canvas::HeadlessCanvas::new(
        columns as f32 * 8.0,
        lines as f32 * 16.0,
    )))
}
