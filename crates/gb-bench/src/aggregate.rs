//! Per-algorithm totals over a sequence of benchmark records.
//!
//! ```text
//! total_nodes(a)   = Σ record.nodes_expanded(a)
//! total_time(a)    = Σ record.elapsed(a)
//! success_count(a) = #{ record : record.distance(a) == record.distance(Dijkstra) }
//! ```
//!
//! Node totals are accumulated as `i128`, so no file of valid `i64` counts
//! can overflow them.  The result depends only on which records are present,
//! not their order.
//! An empty input gives all-zero totals.

use gb_core::Algorithm;

use crate::schema::{BenchmarkRecord, SCHEMA};

/// Totals for one algorithm.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlgorithmTotals {
    pub algorithm:     Algorithm,
    pub total_nodes:   i128,
    pub total_time:    f64,
    /// Records where this algorithm matched the optimal distance.
    /// `None` for Dijkstra, which defines the optimum.
    pub success_count: Option<u64>,
}

impl AlgorithmTotals {
    fn zero(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            total_nodes:   0,
            total_time:    0.0,
            success_count: (!algorithm.is_reference()).then_some(0),
        }
    }
}

/// Totals for all four algorithms.  Recomputed on every run, never persisted.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AggregateReport {
    pub record_count: usize,
    /// In [`Algorithm::ALL`] order.
    pub totals:       [AlgorithmTotals; 4],
}

impl AggregateReport {
    #[inline]
    pub fn get(&self, algorithm: Algorithm) -> &AlgorithmTotals {
        &self.totals[algorithm.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &AlgorithmTotals> {
        self.totals.iter()
    }
}

/// Reduce `records` to an [`AggregateReport`].
pub fn aggregate(records: &[BenchmarkRecord]) -> AggregateReport {
    let mut totals = Algorithm::ALL.map(AlgorithmTotals::zero);

    for record in records {
        for cols in &SCHEMA {
            let result = record.result(cols.algorithm);
            let t = &mut totals[cols.algorithm.index()];
            t.total_nodes += i128::from(result.nodes_expanded);
            t.total_time += result.elapsed;
            if let Some(count) = t.success_count.as_mut() {
                if record.succeeded(cols.algorithm) {
                    *count += 1;
                }
            }
        }
    }

    AggregateReport { record_count: records.len(), totals }
}
