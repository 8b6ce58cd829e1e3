//! Exhaustive rectangle packing by backtracking search
//!
//! Enumerates every exact placement of a sequence of rectangular pieces onto
//! a rectangular board. Branches near the root of the search tree can be
//! explored concurrently by a bounded pool of workers without losing or
//! duplicating solutions.

/// Placement engine, worker dispatch and solution collection
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Board, piece and sequence data model
pub mod spatial;

pub use io::error::{PackError, Result};
