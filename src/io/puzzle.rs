//! Parsing of textual puzzle descriptions
//!
//! The format is whitespace separated. Widths come before heights for both
//! the board and the pieces:
//!
//! ```text
//! <board-width> <board-height>
//! <piece-count>
//! <id> <width> <height>
//! ...
//! ```

use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::io::configuration::{MAX_BOARD_DIMENSION, STDIN_PATH};
use crate::io::error::{PackError, Result, invalid_puzzle};
use crate::spatial::Piece;

/// Board dimensions and the pieces to place, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// Number of board rows
    pub height: usize,
    /// Number of board columns
    pub width: usize,
    /// Pieces in the order they were listed
    pub pieces: Vec<Piece>,
}

impl Puzzle {
    /// Build a puzzle directly from its parts
    pub const fn new(height: usize, width: usize, pieces: Vec<Piece>) -> Self {
        Self {
            height,
            width,
            pieces,
        }
    }

    /// Total area of all pieces
    pub fn piece_area(&self) -> usize {
        self.pieces.iter().map(|piece| piece.shape().area()).sum()
    }

    /// Parse a puzzle description
    ///
    /// Piece identifiers must be single characters, distinct from each other
    /// and from the `background` marker.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::InvalidPuzzle`] naming the offending line
    pub fn parse(input: &str, background: char) -> Result<Self> {
        let mut tokens = Tokens::new(input);

        let width = tokens.dimension("board width", true)?;
        let height = tokens.dimension("board height", true)?;
        let count = tokens.number("piece count")?;

        let mut seen = HashSet::new();
        let mut pieces = Vec::new();
        for _ in 0..count {
            let (line, id) = tokens.identifier()?;
            if id == background {
                return Err(invalid_puzzle(
                    line,
                    &format!("piece id '{id}' collides with the background marker"),
                ));
            }
            if !seen.insert(id) {
                return Err(invalid_puzzle(line, &format!("duplicate piece id '{id}'")));
            }

            let piece_width = tokens.dimension("piece width", false)?;
            let piece_height = tokens.dimension("piece height", false)?;
            pieces.push(Piece::new(id, piece_height, piece_width));
        }

        if let Some((line, extra)) = tokens.next() {
            return Err(invalid_puzzle(
                line,
                &format!("unexpected trailing token '{extra}' after {count} pieces"),
            ));
        }

        Ok(Self::new(height, width, pieces))
    }

    /// Read and parse a puzzle from a file, or from stdin for `-`
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or fails to parse
    pub fn from_path(path: &Path, background: char) -> Result<Self> {
        let read = if path == Path::new(STDIN_PATH) {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map(|_| buffer)
        } else {
            fs::read_to_string(path)
        };

        let input = read.map_err(|source| PackError::FileSystem {
            path: path.to_path_buf(),
            operation: "read",
            source,
        })?;

        Self::parse(&input, background)
    }
}

/// Whitespace-separated tokens tagged with their 1-based line
struct Tokens<'a> {
    inner: Box<dyn Iterator<Item = (usize, &'a str)> + 'a>,
    last_line: usize,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        let inner = input
            .lines()
            .enumerate()
            .flat_map(|(index, line)| line.split_whitespace().map(move |token| (index + 1, token)));
        Self {
            inner: Box::new(inner),
            last_line: 1,
        }
    }

    fn next(&mut self) -> Option<(usize, &'a str)> {
        let next = self.inner.next();
        if let Some((line, _)) = next {
            self.last_line = line;
        }
        next
    }

    fn require(&mut self, what: &str) -> Result<(usize, &'a str)> {
        self.next()
            .ok_or_else(|| invalid_puzzle(self.last_line, &format!("missing {what}")))
    }

    fn number(&mut self, what: &str) -> Result<usize> {
        let (line, token) = self.require(what)?;
        token.parse().map_err(|error| {
            invalid_puzzle(line, &format!("{what} '{token}' is not a number: {error}"))
        })
    }

    fn dimension(&mut self, what: &str, allow_zero: bool) -> Result<usize> {
        let value = self.number(what)?;
        if value == 0 && !allow_zero {
            return Err(invalid_puzzle(self.last_line, &format!("{what} must be positive")));
        }
        if value > MAX_BOARD_DIMENSION {
            return Err(invalid_puzzle(
                self.last_line,
                &format!("{what} {value} exceeds {MAX_BOARD_DIMENSION}"),
            ));
        }
        Ok(value)
    }

    fn identifier(&mut self) -> Result<(usize, char)> {
        let (line, token) = self.require("piece id")?;
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(id), None) => Ok((line, id)),
            _ => Err(invalid_puzzle(
                line,
                &format!("piece id '{token}' must be a single character"),
            )),
        }
    }
}
