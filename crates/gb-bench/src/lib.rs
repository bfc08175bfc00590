//! `gb-bench` — benchmark records and their aggregation.
//!
//! The external harness runs Dijkstra, A*, an alternate A*, and Greedy search
//! over each grid instance and writes one CSV line per instance.  This crate
//! parses those lines and reduces them to per-algorithm totals.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`schema`]    | `SCHEMA` column table, `AlgorithmResult`, `BenchmarkRecord` |
//! | [`loader`]    | `load_records_csv`, `load_records_reader`                  |
//! | [`aggregate`] | `aggregate`, `AggregateReport`, `AlgorithmTotals`          |

pub mod aggregate;
pub mod loader;
pub mod schema;


pub use aggregate::{aggregate, AggregateReport, AlgorithmTotals};
pub use loader::{load_records_csv, load_records_reader};
pub use schema::{AlgorithmColumns, AlgorithmResult, BenchmarkRecord, FIELD_COUNT, SCHEMA};
