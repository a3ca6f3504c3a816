use std::io;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),

    #[error("overlay window: {0}")]
    Overlay(String),

    /// The driver never resumes a finished run; hitting this is a bug in the caller.
    #[error("step sequence already completed")]
    SequenceCompleted,

    #[error("slide {index} ({name}) failed: {message}")]
    Slide {
        index: usize,
        name: String,
        message: String,
    },
}
