use crate::engine::StepSequence;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum DriverState {
    Running,    // Waiting for the next key
    Terminated, // Quit requested or input closed
}

#[derive(Debug, Default)]
pub struct NavigationState {
    pub slide_index: usize,
    /// Run of the current slide; `None` once it has been driven to completion.
    pub active_run: Option<StepSequence>,
    /// True from (re)instantiation until the first advance that suspends again.
    pub at_first_step: bool,
}
