use crate::engine::StepSequence;

/// A named step sequence constructor.
///
/// Every call to [`Slide::steps`] starts a fresh run; slides keep no state
/// between activations.
pub trait Slide {
    fn name(&self) -> &str;
    fn steps(&self) -> StepSequence;
}

/// The only way the driver instantiates a slide: wipe the overlay, redraw it
/// empty and clear the terminal, then carry on with the slide's first step.
pub fn clean_slate(slide: &dyn Slide) -> StepSequence {
    slide.steps().before_first(|stage| {
        stage.canvas.delete_all();
        stage.canvas.update()?;
        stage.clear()
    })
}
