//! `gb-grid` — random weighted-grid synthesis for pathfinding benchmarks.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`config`]     | `GridConfig`, `GridDimension`, default weight pool       |
//! | [`grid`]       | `GridSpec` and the grid CSV writer helpers               |
//! | [`generator`]  | `GridGenerator` (in-memory, any sink, or atomic file)    |
//! | [`observer`]   | `GridObserver` progress callbacks, `NoopObserver`        |
//! | [`loader`]     | `load_grid_csv`, `load_grid_reader`                      |
//!
//! # File format
//!
//! ```text
//! line 1:        <dimension>,<dimension>
//! line 2:        0,0,0,0
//! lines 3..N+2:  <dimension integers per row, each in {1,3,5,7,9,-1}>
//! ```
//!
//! `-1` marks an impassable cell.  The generator makes no attempt to keep the
//! grid connected; whether a path exists is the benchmark harness's concern.

pub mod config;
pub mod generator;
pub mod grid;
pub mod loader;
pub mod observer;


pub use config::{GridConfig, GridDimension, DEFAULT_OUTPUT_FILE, DEFAULT_WEIGHT_POOL, PLACEHOLDER_LEN};
pub use generator::GridGenerator;
pub use grid::{GridSpec, BLOCKED};
pub use loader::{load_grid_csv, load_grid_reader};
pub use observer::{GridObserver, NoopObserver};
