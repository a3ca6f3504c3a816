use std::fs::OpenOptions;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use crate::constants::COUNTDOWN_MINUTES;

/// Terminal presentation runner: `n` reveals the next step or slide, `N` goes
/// back from a slide's first step, Ctrl-C quits.
#[derive(Parser, Debug)]
#[command(name = "stagelight", version, about)]
pub struct Cli {
    /// Length of the talk in minutes
    #[arg(long, default_value_t = COUNTDOWN_MINUTES)]
    pub countdown: u32,

    /// Append logs to this file; nothing is logged without it
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}

impl Cli {
    /// The terminal is the presentation surface, so logs only ever go to a file.
    pub fn init_logging(&self) -> Result<()> {
        let Some(path) = &self.log_file else {
            return Ok(());
        };
        let log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;

        env_logger::Builder::new()
            .filter_level(self.log_level)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .init();
        Ok(())
    }
}
