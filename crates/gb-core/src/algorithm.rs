//! The four search algorithms a benchmark record reports on.
//!
//! Dijkstra is the reference: its path distance is taken as the optimal
//! distance for the grid instance, and it is never judged for success itself.

use std::fmt;
use std::str::FromStr;

/// One benchmarked search algorithm.
///
/// Variants are declared in report order; [`Algorithm::ALL`] preserves it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Dijkstra,
    AStar,
    /// The alternate A* variant (different heuristic in the harness).
    AStarAlt,
    Greedy,
}

impl Algorithm {
    /// All algorithms in fixed report order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Dijkstra,
        Algorithm::AStar,
        Algorithm::AStarAlt,
        Algorithm::Greedy,
    ];

    /// Position of this algorithm in [`Algorithm::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// `true` for the algorithm whose distance defines the optimum.
    #[inline]
    pub fn is_reference(self) -> bool {
        matches!(self, Algorithm::Dijkstra)
    }

    /// Human-readable label used in reports and plot legends.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::AStar    => "A*",
            Algorithm::AStarAlt => "A*(alt)",
            Algorithm::Greedy   => "Greedy",
        }
    }

    /// Lower-case identifier, useful for CSV column values and CLI flags.
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar    => "astar",
            Algorithm::AStarAlt => "astar-alt",
            Algorithm::Greedy   => "greedy",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.as_str() == needle || a.label().to_ascii_lowercase() == needle)
            .ok_or_else(|| {
                format!("unknown algorithm {s:?}: expected one of dijkstra, astar, astar-alt, greedy")
            })
    }
}
