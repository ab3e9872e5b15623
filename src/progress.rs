// src/progress.rs
use crate::error::Outcome;

/// Lightweight progress reporting for a batch run.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of identifiers.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called once per identifier, success or not. `done` is the running count (1-based).
    fn item_done(&mut self, _done: usize, _id: &str, _outcome: &Outcome) {}

    /// Called at the end of the loop.
    fn finish(&mut self) {}
}
