//! Planar headings and the moves built on them.
//!
//! Grids use screen coordinates: `x` grows to the east, `y` grows to the
//! south, and `(0, 0)` is the top-left cell.

/// A 2D cell coordinate `(x, y)`.
pub type Coord = (i32, i32);

/// One of the four compass headings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All headings in clockwise order starting from north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit offset of a single step in this heading.
    #[inline]
    pub const fn offset(self) -> Coord {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// The cell one step away from `from` in this heading.
    #[inline]
    pub const fn step(self, from: Coord) -> Coord {
        let (dx, dy) = self.offset();
        (from.0 + dx, from.1 + dy)
    }

    /// Quarter turn clockwise.
    #[inline]
    pub const fn turn_right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// Quarter turn counter-clockwise.
    #[inline]
    pub const fn turn_left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::East => Direction::North,
            Direction::South => Direction::East,
            Direction::West => Direction::South,
        }
    }

    /// Both headings perpendicular to this one.
    #[inline]
    pub const fn sideways(self) -> [Direction; 2] {
        [self.turn_left(), self.turn_right()]
    }

    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::East | Direction::West)
    }

    /// Heading after bouncing off a `/` mirror.
    ///
    /// The mirror swaps east with north and west with south.
    #[inline]
    pub const fn reflect_slash(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::North,
            Direction::South => Direction::West,
            Direction::West => Direction::South,
        }
    }

    /// Heading after bouncing off a `\` mirror.
    ///
    /// The mirror swaps east with south and west with north.
    #[inline]
    pub const fn reflect_backslash(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::North,
            Direction::South => Direction::East,
            Direction::East => Direction::South,
        }
    }
}
