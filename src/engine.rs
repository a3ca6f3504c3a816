//! Suspend/resume protocol for slides.
//!
//! A step sequence is a list of segments. Running a segment and stopping
//! afterwards is a suspension point, except after the last segment, where the
//! sequence reports [`Progress::Completed`] instead. A slide with `k`
//! suspension points is therefore built from `k + 1` segments.

use std::collections::VecDeque;
use std::fmt;

use crate::error::{Error, Result};
use crate::stage::Stage;

pub type Segment = Box<dyn FnOnce(&mut Stage) -> Result<()>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Suspended,
    Completed,
}

#[derive(Default)]
pub struct StepSequence {
    segments: VecDeque<Segment>,
    finished: bool,
}

impl StepSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a segment. Every segment but the last ends in a suspension point.
    pub fn then(mut self, segment: impl FnOnce(&mut Stage) -> Result<()> + 'static) -> Self {
        self.segments.push_back(Box::new(segment));
        self
    }

    /// Run `prelude` right before the first segment, inside the same step.
    pub fn before_first(
        mut self,
        prelude: impl FnOnce(&mut Stage) -> Result<()> + 'static,
    ) -> Self {
        let composed: Segment = match self.segments.pop_front() {
            Some(first) => Box::new(move |stage: &mut Stage| {
                prelude(stage)?;
                first(stage)
            }),
            None => Box::new(prelude),
        };
        self.segments.push_front(composed);
        self
    }

    /// Resume until the next suspension point or the end of the sequence.
    pub fn advance(&mut self, stage: &mut Stage) -> Result<Progress> {
        if self.finished {
            return Err(Error::SequenceCompleted);
        }
        let Some(segment) = self.segments.pop_front() else {
            self.finished = true;
            return Ok(Progress::Completed);
        };
        if let Err(e) = segment(stage) {
            self.finished = true;
            return Err(e);
        }
        if self.segments.is_empty() {
            self.finished = true;
            Ok(Progress::Completed)
        } else {
            Ok(Progress::Suspended)
        }
    }

    /// Segments not yet run.
    pub fn remaining(&self) -> usize {
        self.segments.len()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl fmt::Debug for StepSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepSequence")
            .field("remaining", &self.segments.len())
            .field("finished", &self.finished)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Fixture;

    fn three_segments() -> StepSequence {
        StepSequence::new()
            .then(|stage| stage.write("a"))
            .then(|stage| stage.write("b"))
            .then(|stage| stage.write("c"))
    }

    #[test]
    fn suspends_between_segments_and_completes_on_last() {
        let mut fx = Fixture::new(b"");
        let mut run = three_segments();

        assert_eq!(run.advance(&mut fx.stage).unwrap(), Progress::Suspended);
        assert_eq!(fx.out.contents(), "a");
        assert_eq!(run.advance(&mut fx.stage).unwrap(), Progress::Suspended);
        assert_eq!(run.advance(&mut fx.stage).unwrap(), Progress::Completed);
        assert_eq!(fx.out.contents(), "abc");
        assert!(run.is_finished());
    }

    #[test]
    fn resuming_a_completed_sequence_is_an_error() {
        let mut fx = Fixture::new(b"");
        let mut run = StepSequence::new().then(|stage| stage.write("only"));

        assert_eq!(run.advance(&mut fx.stage).unwrap(), Progress::Completed);
        assert!(matches!(
            run.advance(&mut fx.stage),
            Err(Error::SequenceCompleted)
        ));
    }

    #[test]
    fn empty_sequence_completes_immediately() {
        let mut fx = Fixture::new(b"");
        let mut run = StepSequence::new();
        assert_eq!(run.advance(&mut fx.stage).unwrap(), Progress::Completed);
    }

    #[test]
    fn prelude_joins_the_first_step() {
        let mut fx = Fixture::new(b"");
        let mut run = three_segments().before_first(|stage| stage.write(">"));

        assert_eq!(run.remaining(), 3);
        assert_eq!(run.advance(&mut fx.stage).unwrap(), Progress::Suspended);
        assert_eq!(fx.out.contents(), ">a");
    }

    #[test]
    fn prelude_on_empty_sequence_is_the_only_step() {
        let mut fx = Fixture::new(b"");
        let mut run = StepSequence::new().before_first(|stage| stage.write(">"));

        assert_eq!(run.advance(&mut fx.stage).unwrap(), Progress::Completed);
        assert_eq!(fx.out.contents(), ">");
    }

    #[test]
    fn failing_segment_ends_the_run() {
        let mut fx = Fixture::new(b"");
        let mut run = StepSequence::new()
            .then(|_| Err(Error::Overlay("boom".to_string())))
            .then(|stage| stage.write("never"));

        assert!(run.advance(&mut fx.stage).is_err());
        assert!(run.is_finished());
        assert_eq!(fx.out.contents(), "");
    }
}
