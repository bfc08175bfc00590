//! Progress callbacks for grid generation.

/// Callbacks invoked by [`GridGenerator`][crate::GridGenerator] while rows are
/// written.  Purely observational: nothing an observer does affects the grid.
///
/// All methods have default no-op implementations.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl GridObserver for Progress {
///     fn on_row_written(&mut self, row: usize, total: usize) {
///         eprint!("\rWriting row {row} of {total}");
///     }
/// }
/// ```
pub trait GridObserver {
    /// Called after each data row is written.  `row` is 1-based.
    fn on_row_written(&mut self, _row: usize, _total: usize) {}

    /// Called once after the last row has been flushed to the sink.
    fn on_grid_end(&mut self, _dimension: usize) {}
}

/// A [`GridObserver`] that does nothing.
pub struct NoopObserver;

impl GridObserver for NoopObserver {}
