//! `gb-core` — foundational types for the `gridbench` toolkit.
//!
//! This crate is a dependency of every other `gb-*` crate.  It has no `gb-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`algorithm`]   | `Algorithm` enum (Dijkstra, A*, A*(alt), Greedy)      |
//! | [`rng`]         | `GridRng` (seeded or entropy-backed `SmallRng`)       |
//! | [`error`]       | `GbError`, `GbResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod algorithm;
pub mod error;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use algorithm::Algorithm;
pub use error::{GbError, GbResult};
pub use rng::GridRng;
