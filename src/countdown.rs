//! Remaining-time label in the bottom right corner.
//!
//! Only redrawn when the driver handles input; nothing ticks in the background.

use chrono::{DateTime, TimeDelta, Utc};

use crate::constants::*;
use crate::error::Result;
use crate::stage::Stage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub text: String,
    pub fg: Option<u8>,
    pub bg: Option<u8>,
}

impl Label {
    /// ` MM:SS ` with floor division, so negative time keeps counting down
    /// (`-5` seconds renders as ` -1:55 `).
    pub fn for_remaining(seconds: i64) -> Self {
        let minutes = seconds.div_euclid(60);
        let secs = seconds.rem_euclid(60);
        let text = format!(" {:02}:{:02} ", minutes, secs);
        let (fg, bg) = if seconds > WARNING_THRESHOLD_SECS {
            (Some(COUNTDOWN_FG), None)
        } else {
            (Some(WARNING_FG), Some(WARNING_BG))
        };
        Self { text, fg, bg }
    }

    /// 1-based column that puts the last character on the last column.
    pub fn column(&self, columns: u16) -> u16 {
        let width = self.text.chars().count() as i32;
        (columns as i32 - width + 1).max(1) as u16
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    deadline: i64,
}

impl Countdown {
    pub fn start(duration: TimeDelta) -> Self {
        Self::starting_at(Utc::now(), duration)
    }

    pub fn starting_at(start: DateTime<Utc>, duration: TimeDelta) -> Self {
        Self {
            deadline: start.timestamp() + duration.num_seconds(),
        }
    }

    /// Whole seconds left at `now`; negative once the deadline has passed.
    pub fn remaining_at(&self, now: DateTime<Utc>) -> i64 {
        self.deadline - now.timestamp()
    }

    pub fn refresh(&self, stage: &mut Stage) -> Result<()> {
        self.refresh_at(stage, Utc::now())
    }

    pub fn refresh_at(&self, stage: &mut Stage, now: DateTime<Utc>) -> Result<()> {
        let label = Label::for_remaining(self.remaining_at(now));
        let col = label.column(stage.columns);
        let row = stage.lines;
        stage.write_at(col, row, &label.text, label.fg, label.bg)
    }
}
