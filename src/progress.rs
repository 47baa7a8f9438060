// src/progress.rs
/// Lightweight progress reporting for long-running batch operations
/// (currently the biography fetch). The CLI implements this to surface
/// per-item status; tests pass `NullProgress`.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one logical unit completes (e.g., one person fetched).
    fn item_done(&mut self, _idx: usize, _label: &str) {}

    /// Called when one logical unit fails; the batch keeps going.
    fn item_failed(&mut self, _idx: usize, _label: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
