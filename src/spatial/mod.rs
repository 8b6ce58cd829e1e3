//! Spatial data model for rectangle packing
//!
//! This module contains:
//! - The board grid with fit testing and region fill
//! - Piece descriptors and orientation candidates
//! - The immutable piece sequence consumed by the search

/// Board grid and cell contents
pub mod board;
/// Piece descriptors and candidate orientations
pub mod piece;
/// Ordered chain of remaining pieces
pub mod sequence;

pub use board::{Board, Cell};
pub use piece::{Piece, Shape};
pub use sequence::Sequence;
