//! Ordered, immutable chain of pieces still to be placed
//!
//! A sequence is a shared slice of pieces plus a cursor. Taking the tail only
//! advances the cursor on a cheap handle, so any number of concurrently
//! running branches can hold independent positions of the same chain.

use std::cmp::Reverse;
use std::sync::Arc;

use crate::spatial::piece::Piece;

/// Immutable chain of pieces in placement order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    pieces: Arc<[Piece]>,
    position: usize,
}

impl Sequence {
    /// Build a sequence from pieces in the given order
    pub fn new(pieces: Vec<Piece>) -> Self {
        Self {
            pieces: pieces.into(),
            position: 0,
        }
    }

    /// Build a sequence, optionally reordered largest first
    pub fn ordered(mut pieces: Vec<Piece>, sort_descending: bool) -> Self {
        if sort_descending {
            sort_descending_by_size(&mut pieces);
        }
        Self::new(pieces)
    }

    /// Current piece, or `None` once the chain is exhausted
    pub fn head(&self) -> Option<&Piece> {
        self.pieces.get(self.position)
    }

    /// Remaining work after the current piece
    ///
    /// The tail of an exhausted sequence is itself.
    #[must_use]
    pub fn tail(&self) -> Self {
        Self {
            pieces: Arc::clone(&self.pieces),
            position: (self.position + 1).min(self.pieces.len()),
        }
    }

    /// Whether no pieces remain
    pub fn is_empty(&self) -> bool {
        self.position >= self.pieces.len()
    }

    /// Number of pieces remaining
    pub fn len(&self) -> usize {
        self.pieces.len() - self.position
    }

    /// Remaining pieces in order
    pub fn remaining(&self) -> &[Piece] {
        self.pieces.get(self.position..).unwrap_or(&[])
    }
}

/// Stable sort by longest side, largest first
///
/// Only changes the order in which the search explores the tree; the set of
/// solutions is unaffected.
pub fn sort_descending_by_size(pieces: &mut [Piece]) {
    pieces.sort_by_key(|piece| Reverse(piece.longest_side()));
}
