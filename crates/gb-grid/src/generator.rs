//! `GridGenerator` — draws random weighted grids.
//!
//! Every cell is an independent uniform draw from the configured weight pool.
//! There is no spatial correlation and no guarantee that any path exists.
//!
//! Three entry points share the same draw loop:
//!
//! | Method            | Output                                              |
//! |-------------------|-----------------------------------------------------|
//! | `generate_spec`   | in-memory [`GridSpec`]                              |
//! | `write_to`        | any `io::Write` sink, streamed row by row           |
//! | `generate`        | `config.output_path`, replaced atomically           |

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use gb_core::{GbError, GbResult, GridRng};

use crate::config::{GridConfig, GridDimension};
use crate::grid::{grid_writer, write_preamble, write_row, GridSpec};
use crate::observer::GridObserver;

pub struct GridGenerator {
    config: GridConfig,
    rng:    GridRng,
}

impl GridGenerator {
    /// Validate `config` and seed the RNG from `config.seed`.
    pub fn new(config: GridConfig) -> GbResult<Self> {
        config.validate()?;
        let rng = GridRng::from_seed_opt(config.seed);
        Ok(Self { config, rng })
    }

    /// Build a whole grid in memory.
    pub fn generate_spec(&mut self, dimension: usize) -> GbResult<GridSpec> {
        let dim = GridDimension::new(dimension)?.get();
        let rows = (0..dim).map(|_| self.draw_row(dim)).collect::<GbResult<_>>()?;
        Ok(GridSpec {
            dimension:       dim,
            placeholder_row: self.config.placeholder_row,
            rows,
        })
    }

    /// Stream a grid to `sink`, one row at a time.
    ///
    /// Nothing is written if `dimension` is invalid.  Only one row is held in
    /// memory, so very large grids do not need `O(dimension²)` RAM.
    pub fn write_to<W, O>(&mut self, dimension: usize, sink: W, observer: &mut O) -> GbResult<()>
    where
        W: Write,
        O: GridObserver + ?Sized,
    {
        let dim = GridDimension::new(dimension)?.get();
        let mut w = grid_writer(sink);
        write_preamble(&mut w, dim, &self.config.placeholder_row)?;

        for y in 0..dim {
            let row = self.draw_row(dim)?;
            write_row(&mut w, &row)?;
            observer.on_row_written(y + 1, dim);
        }

        w.flush()?;
        observer.on_grid_end(dim);
        Ok(())
    }

    /// Write a grid to `config.output_path`, replacing any existing file.
    ///
    /// Rows go to a temporary file in the same directory, which is renamed
    /// over the target only after every row has been flushed.  On failure the
    /// temporary file is removed and the previous target is left as it was.
    /// An invalid `dimension` fails before the filesystem is touched.
    pub fn generate<O>(&mut self, dimension: usize, observer: &mut O) -> GbResult<PathBuf>
    where
        O: GridObserver + ?Sized,
    {
        let dim = GridDimension::new(dimension)?;
        let target = self.config.output_path.clone();

        let mut tmp = NamedTempFile::new_in(parent_dir(&target))?;
        debug!(tmp = %tmp.path().display(), "writing grid to temporary file");

        self.write_to(dim.get(), tmp.as_file_mut(), observer)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&target).map_err(|e| GbError::Io(e.error))?;

        info!(path = %target.display(), dimension = dim.get(), "grid written");
        Ok(target)
    }

    fn draw_row(&mut self, dimension: usize) -> GbResult<Vec<i32>> {
        let pool = &self.config.weight_pool;
        (0..dimension)
            .map(|_| {
                self.rng
                    .choose(pool)
                    .copied()
                    .ok_or_else(|| GbError::Config("weight pool must not be empty".into()))
            })
            .collect()
    }
}

/// Directory the temporary file is created in; `"."` for bare file names.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}
