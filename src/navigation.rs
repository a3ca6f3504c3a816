//! Navigation state machine.
//!
//! One key does double duty: `n` reveals the next step while the current
//! slide has steps left and moves to the next slide once it is exhausted.
//! `N` only goes back while the current slide still sits at its first step;
//! intra-slide reveals are never replayed backwards.

use crate::countdown::Countdown;
use crate::engine::Progress;
use crate::error::{Error, Result};
use crate::keymap::{Input, Keymap};
use crate::slide::{Slide, clean_slate};
use crate::stage::Stage;
use crate::state::{DriverState, NavigationState};

pub struct Driver<'d> {
    slides: &'d [Box<dyn Slide>],
    keymap: Keymap,
    countdown: Countdown,
    nav: NavigationState,
    state: DriverState,
}

fn content_error(slides: &[Box<dyn Slide>], index: usize, e: Error) -> Error {
    match e {
        Error::Slide { .. } => e,
        other => Error::Slide {
            index,
            name: slides[index].name().to_string(),
            message: other.to_string(),
        },
    }
}

impl<'d> Driver<'d> {
    pub fn new(slides: &'d [Box<dyn Slide>], countdown: Countdown, keymap: Keymap) -> Self {
        Self {
            slides,
            keymap,
            countdown,
            nav: NavigationState::default(),
            state: DriverState::Running,
        }
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Instantiate the first slide and draw the countdown.
    pub fn start(&mut self, stage: &mut Stage) -> Result<()> {
        if self.slides.is_empty() {
            log::warn!("no slides to present");
            self.state = DriverState::Terminated;
            return Ok(());
        }
        self.instantiate(stage, 0)?;
        self.countdown.refresh(stage)
    }

    /// Read and handle input until the quit key arrives or input runs out.
    pub fn run(&mut self, stage: &mut Stage) -> Result<()> {
        self.start(stage)?;
        while self.state == DriverState::Running {
            let byte = stage.read_byte()?;
            self.handle(stage, byte)?;
        }
        Ok(())
    }

    /// Apply one input byte. `None` means the input stream has ended.
    pub fn handle(&mut self, stage: &mut Stage, byte: Option<u8>) -> Result<DriverState> {
        let Some(byte) = byte else {
            log::info!("input closed, stopping");
            self.state = DriverState::Terminated;
            return Ok(self.state);
        };

        let input = self.keymap.classify(byte);
        if input == Input::Quit {
            log::info!("quit requested on slide {}", self.nav.slide_index);
            self.state = DriverState::Terminated;
            return Ok(self.state);
        }

        self.countdown.refresh(stage)?;

        let delta = match input {
            Input::Advance => {
                let slides = self.slides;
                let index = self.nav.slide_index;
                match self.nav.active_run.as_mut() {
                    Some(run) => {
                        let progress = run
                            .advance(stage)
                            .map_err(|e| content_error(slides, index, e))?;
                        match progress {
                            Progress::Completed => {
                                log::debug!("slide {} exhausted", index);
                                self.nav.active_run = None;
                            }
                            Progress::Suspended => self.nav.at_first_step = false,
                        }
                        return Ok(self.state);
                    }
                    None => 1,
                }
            }
            Input::Rewind if self.nav.at_first_step => -1,
            Input::Rewind => {
                log::debug!("rewind ignored past the first step");
                return Ok(self.state);
            }
            Input::Quit | Input::Other(_) => return Ok(self.state),
        };

        self.change_slide(stage, delta)?;
        Ok(self.state)
    }

    fn change_slide(&mut self, stage: &mut Stage, delta: isize) -> Result<()> {
        let target = self
            .nav
            .slide_index
            .checked_add_signed(delta)
            .filter(|&i| i < self.slides.len());
        let Some(target) = target else {
            log::debug!("slide {} is at the edge, ignoring {:+}", self.nav.slide_index, delta);
            return Ok(());
        };

        self.instantiate(stage, target)?;
        // The clean slate wiped the label
        self.countdown.refresh(stage)
    }

    fn instantiate(&mut self, stage: &mut Stage, index: usize) -> Result<()> {
        let slide = &self.slides[index];
        log::debug!("instantiating slide {} ({})", index, slide.name());

        let mut run = clean_slate(&**slide);
        let progress = run
            .advance(stage)
            .map_err(|e| content_error(self.slides, index, e))?;

        self.nav.slide_index = index;
        self.nav.active_run = match progress {
            Progress::Suspended => Some(run),
            Progress::Completed => None,
        };
        self.nav.at_first_step = true;
        Ok(())
    }
}

/// Present `slides` on `stage` until the quit key.
pub fn drive_slides(
    stage: &mut Stage,
    slides: &[Box<dyn Slide>],
    countdown: Countdown,
    keymap: Keymap,
) -> Result<()> {
    Driver::new(slides, countdown, keymap).run(stage)
}
