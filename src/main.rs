use anyhow::{Context, Result};
use chrono::TimeDelta;
use clap::Parser;

use stagelight::cli::Cli;
use stagelight::countdown::Countdown;
use stagelight::keymap::Keymap;
use stagelight::navigation::drive_slides;
use stagelight::session::{CrosstermDiscipline, Session};
use stagelight::slides;
use stagelight::stage::Stage;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_logging()?;

    // The clock starts before any window shows up
    let countdown = Countdown::start(TimeDelta::minutes(i64::from(cli.countdown)));
    let slides = slides::deck();

    let canvas = stagelight::open_canvas().context("failed to open the overlay window")?;
    let stage = Stage::create(canvas).context("failed to bind the terminal")?;

    Session::run(stage, Box::new(CrosstermDiscipline), |stage| {
        drive_slides(stage, &slides, countdown, Keymap::default())
    })?;

    log::info!("presentation finished");
    Ok(())
}
