//! Generator configuration and the validated grid dimension.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use gb_core::{GbError, GbResult};

use crate::grid::BLOCKED;

/// File written when no explicit output path is configured.
pub const DEFAULT_OUTPUT_FILE: &str = "randomgrid.csv";

/// Odd traversal costs 1..=9 plus the blocked sentinel.
pub const DEFAULT_WEIGHT_POOL: [i32; 6] = [1, 3, 5, 7, 9, BLOCKED];

/// Number of values in the start/goal placeholder row.
pub const PLACEHOLDER_LEN: usize = 4;

// ── GridDimension ─────────────────────────────────────────────────────────────

/// Side length of a square grid.  Always ≥ 1.
///
/// No upper bound is enforced: memory and time grow as `O(dimension²)` and
/// choosing a practical ceiling is left to the operator.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDimension(usize);

impl GridDimension {
    pub fn new(n: usize) -> GbResult<Self> {
        if n == 0 {
            return Err(GbError::InvalidDimension(n.to_string()));
        }
        Ok(GridDimension(n))
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for GridDimension {
    type Error = GbError;

    fn try_from(n: i64) -> GbResult<Self> {
        usize::try_from(n)
            .map_err(|_| GbError::InvalidDimension(n.to_string()))
            .and_then(GridDimension::new)
    }
}

impl FromStr for GridDimension {
    type Err = GbError;

    /// Accepts a decimal integer.  Non-integers, zero, and negatives are all
    /// `InvalidDimension`.
    fn from_str(s: &str) -> GbResult<Self> {
        let n: i64 = s
            .trim()
            .parse()
            .map_err(|_| GbError::InvalidDimension(s.to_owned()))?;
        GridDimension::try_from(n)
    }
}

impl fmt::Display for GridDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── GridConfig ────────────────────────────────────────────────────────────────

/// Everything the generator needs besides the dimension.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    /// Destination for [`GridGenerator::generate`][crate::GridGenerator::generate].
    /// Overwritten on every successful run.
    pub output_path: PathBuf,

    /// Values each cell is drawn from, uniformly and independently.
    /// Must be non-empty.
    pub weight_pool: Vec<i32>,

    /// Written verbatim as line 2.  Reserved for start/goal coordinates that
    /// this generator does not choose.
    pub placeholder_row: [i32; PLACEHOLDER_LEN],

    /// `Some` makes generation reproducible; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            output_path:     PathBuf::from(DEFAULT_OUTPUT_FILE),
            weight_pool:     DEFAULT_WEIGHT_POOL.to_vec(),
            placeholder_row: [0; PLACEHOLDER_LEN],
            seed:            None,
        }
    }
}

impl GridConfig {
    pub fn validate(&self) -> GbResult<()> {
        if self.weight_pool.is_empty() {
            return Err(GbError::Config("weight pool must not be empty".into()));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(GbError::Config("output path must not be empty".into()));
        }
        Ok(())
    }
}
