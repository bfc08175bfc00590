//! Column layout of a benchmark CSV line.
//!
//! Column identity is purely positional.  The twelve fields form four blocks
//! of `(distance, nodes expanded, elapsed time)`, one per algorithm:
//!
//! ```text
//!  col:  0    1    2  |  3    4    5  |  6    7    8  |  9   10   11
//!        Dijkstra     |  A*           |  A*(alt)      |  Greedy
//!        int  int  flt|  int  int  flt|  int  int  flt|  int  int  flt
//! ```
//!
//! Dijkstra's distance (column 0) is the optimal distance for the instance;
//! the other three distances are judged against it.

use gb_core::Algorithm;

/// Number of fields on every data line.
pub const FIELD_COUNT: usize = 12;

/// Column indices of one algorithm's block.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct AlgorithmColumns {
    pub algorithm: Algorithm,
    pub distance:  usize,
    pub nodes:     usize,
    pub time:      usize,
}

/// The whole schema, in report order.  Parsing and aggregation iterate this
/// table instead of naming columns one by one.
pub const SCHEMA: [AlgorithmColumns; 4] = [
    AlgorithmColumns { algorithm: Algorithm::Dijkstra, distance: 0, nodes: 1,  time: 2 },
    AlgorithmColumns { algorithm: Algorithm::AStar,    distance: 3, nodes: 4,  time: 5 },
    AlgorithmColumns { algorithm: Algorithm::AStarAlt, distance: 6, nodes: 7,  time: 8 },
    AlgorithmColumns { algorithm: Algorithm::Greedy,   distance: 9, nodes: 10, time: 11 },
];

/// One algorithm's outcome on one grid instance.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlgorithmResult {
    /// Length of the path found.
    pub distance:       i64,
    pub nodes_expanded: i64,
    /// Wall-clock time as reported by the harness (unit is the harness's).
    pub elapsed:        f64,
}

/// The results of all four algorithms on one grid instance.
///
/// Indexed by [`Algorithm::index`], so `results[0]` is always Dijkstra.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BenchmarkRecord {
    pub results: [AlgorithmResult; 4],
}

impl BenchmarkRecord {
    pub fn new(
        dijkstra:  AlgorithmResult,
        astar:     AlgorithmResult,
        astar_alt: AlgorithmResult,
        greedy:    AlgorithmResult,
    ) -> Self {
        Self { results: [dijkstra, astar, astar_alt, greedy] }
    }

    #[inline]
    pub fn result(&self, algorithm: Algorithm) -> &AlgorithmResult {
        &self.results[algorithm.index()]
    }

    /// Dijkstra's distance, the reference optimum.
    #[inline]
    pub fn optimal_distance(&self) -> i64 {
        self.result(Algorithm::Dijkstra).distance
    }

    /// `true` if `algorithm` found a path as short as Dijkstra's.
    ///
    /// Always `true` for Dijkstra itself.
    #[inline]
    pub fn succeeded(&self, algorithm: Algorithm) -> bool {
        self.result(algorithm).distance == self.optimal_distance()
    }
}
