//! Rectangular piece descriptors and their candidate orientations

use std::fmt;

/// Height and width of a footprint on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Number of rows covered
    pub height: usize,
    /// Number of columns covered
    pub width: usize,
}

impl Shape {
    /// Create a shape from its dimensions
    pub const fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// Same footprint turned by 90 degrees
    #[must_use]
    pub const fn rotated(self) -> Self {
        Self {
            height: self.width,
            width: self.height,
        }
    }

    /// Whether rotating the shape leaves it unchanged
    pub const fn is_square(self) -> bool {
        self.height == self.width
    }

    /// Number of cells covered
    pub const fn area(self) -> usize {
        self.height * self.width
    }
}

/// Immutable rectangle to place, carrying a unique identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    id: char,
    shape: Shape,
}

impl Piece {
    /// Create a piece with the given identifier and dimensions
    pub const fn new(id: char, height: usize, width: usize) -> Self {
        Self {
            id,
            shape: Shape::new(height, width),
        }
    }

    /// Identifier written into covered cells
    pub const fn id(&self) -> char {
        self.id
    }

    /// Unrotated footprint
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    /// Longer of the two sides, used by the descending-size ordering
    pub fn longest_side(&self) -> usize {
        self.shape.height.max(self.shape.width)
    }

    /// Candidate footprints to try at each position
    ///
    /// The unrotated shape always comes first. With `rotations` enabled the
    /// rotated shape follows, unless the piece is square and both are equal.
    pub fn orientations(&self, rotations: bool) -> impl Iterator<Item = Shape> + use<> {
        let shape = self.shape;
        let rotated = (rotations && !shape.is_square()).then_some(shape.rotated());
        std::iter::once(shape).chain(rotated)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' {}x{}",
            self.id, self.shape.height, self.shape.width
        )
    }
}
