//! Scoped raw-mode session.
//!
//! Owns the stage for the whole run. On the way out, whether through
//! [`Session::close`], an error, or a panic unwinding through the driver, the
//! line discipline is restored, the alternate screen is left, the cursor is
//! shown again and the overlay window is destroyed.

use std::io;

use crate::error::Result;
use crate::stage::Stage;

/// Terminal line-discipline switch.
pub trait LineDiscipline {
    /// Remember the current settings and switch to unechoed byte-at-a-time input.
    fn make_raw(&mut self) -> io::Result<()>;

    /// Put the remembered settings back.
    fn restore(&mut self) -> io::Result<()>;
}

/// Raw mode of the controlling terminal; crossterm keeps the original termios.
#[derive(Debug, Default)]
pub struct CrosstermDiscipline;

impl LineDiscipline for CrosstermDiscipline {
    fn make_raw(&mut self) -> io::Result<()> {
        crossterm::terminal::enable_raw_mode()
    }

    fn restore(&mut self) -> io::Result<()> {
        crossterm::terminal::disable_raw_mode()
    }
}

pub struct Session {
    stage: Stage,
    discipline: Box<dyn LineDiscipline>,
    raw: bool,
    open: bool,
}

impl Session {
    pub fn open(stage: Stage, discipline: Box<dyn LineDiscipline>) -> Result<Self> {
        let mut session = Self {
            stage,
            discipline,
            raw: false,
            open: true,
        };
        session.stage.terminal_mut().enter_presentation_screen()?;
        session.discipline.make_raw()?;
        session.raw = true;
        log::info!(
            "session open on {}x{} terminal",
            session.stage.columns,
            session.stage.lines
        );
        Ok(session)
    }

    /// Open a session around `stage`, hand the stage to `body` and always
    /// close the session afterwards.
    ///
    /// An error from `body` wins over a teardown error, which is then only
    /// logged.
    pub fn run<T>(
        stage: Stage,
        discipline: Box<dyn LineDiscipline>,
        body: impl FnOnce(&mut Stage) -> Result<T>,
    ) -> Result<T> {
        let mut session = Self::open(stage, discipline)?;
        let result = body(session.stage());
        let closed = session.close();
        match (result, closed) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(e)) => Err(e),
            (Err(e), closed) => {
                if let Err(teardown) = closed {
                    log::error!("terminal teardown failed after error: {}", teardown);
                }
                Err(e)
            }
        }
    }

    pub fn stage(&mut self) -> &mut Stage {
        &mut self.stage
    }

    pub fn close(mut self) -> Result<()> {
        self.teardown()
    }

    fn teardown(&mut self) -> Result<()> {
        if !self.open {
            return Ok(());
        }
        self.open = false;

        // Every step runs even if an earlier one failed; the first error is reported
        let restored = if self.raw {
            self.discipline.restore()
        } else {
            Ok(())
        };
        let reset = self.stage.terminal_mut().leave_presentation_screen();
        self.stage.canvas.destroy();
        log::info!("session closed");

        restored?;
        reset?;
        Ok(())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Err(e) = self.teardown() {
            log::error!("terminal teardown failed: {}", e);
        }
    }
}
