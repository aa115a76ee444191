//! Rectangular tile grids parsed from puzzle text.
//!
//! The grid is stored as a flat row-major vector; `(x, y)` maps to index
//! `y * width + x`.

use crate::error::{Error, Result};
use crate::geometry::Coord;

/// A rectangular grid of tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

/// Drops trailing blank lines so that a final newline in an input file
/// doesn't produce an empty row.
pub fn significant_lines<'a>(lines: &'a [&'a str]) -> &'a [&'a str] {
    let end = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map_or(0, |last| last + 1);
    &lines[..end]
}

impl<T> Grid<T> {
    /// Parses one tile per character, rejecting characters `tile` maps to `None`.
    ///
    /// Every row must have the same width. Line and column numbers in errors
    /// are 1-based.
    pub fn parse(lines: &[&str], mut tile: impl FnMut(char) -> Option<T>) -> Result<Self> {
        let lines = significant_lines(lines);
        let Some(first) = lines.first() else {
            return Err(Error::MalformedInput {
                line: 1,
                reason: "grid is empty".to_string(),
            });
        };

        let width = first.chars().count();
        let mut cells = Vec::with_capacity(width * lines.len());

        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(Error::RaggedGrid {
                    line: row + 1,
                    expected: width,
                    found,
                });
            }
            for (column, character) in line.chars().enumerate() {
                let cell = tile(character).ok_or(Error::InvalidTile {
                    tile: character,
                    line: row + 1,
                    column: column + 1,
                })?;
                cells.push(cell);
            }
        }

        Ok(Self {
            width,
            height: lines.len(),
            cells,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns true if `coord` names a cell inside the grid.
    #[inline]
    pub fn contains(&self, (x, y): Coord) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Converts an in-bounds coordinate to its cell index.
    #[inline(always)]
    pub fn coord_to_idx(&self, (x, y): Coord) -> usize {
        y as usize * self.width + x as usize
    }

    /// Converts a cell index back to its coordinate.
    #[inline(always)]
    pub fn idx_to_coord(&self, cell_index: usize) -> Coord {
        (
            (cell_index % self.width) as i32,
            (cell_index / self.width) as i32,
        )
    }

    /// The tile at `coord`, or `None` off the grid.
    #[inline]
    pub fn get(&self, coord: Coord) -> Option<&T> {
        self.contains(coord)
            .then(|| &self.cells[self.coord_to_idx(coord)])
    }

    /// The tile at `coord` on an infinite tiling of this grid.
    #[inline]
    pub fn get_wrapped(&self, (x, y): Coord) -> &T {
        let wrapped = (
            x.rem_euclid(self.width as i32),
            y.rem_euclid(self.height as i32),
        );
        &self.cells[self.coord_to_idx(wrapped)]
    }

    /// Coordinates of every tile matching `predicate`, in row-major order.
    pub fn positions<'a>(
        &'a self,
        mut predicate: impl FnMut(&T) -> bool + 'a,
    ) -> impl Iterator<Item = Coord> + 'a {
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, cell)| predicate(cell))
            .map(|(cell_index, _)| self.idx_to_coord(cell_index))
    }

    /// Formats the grid one row per line, choosing each character with `glyph`.
    pub fn render(&self, mut glyph: impl FnMut(Coord, &T) -> char) -> String {
        let mut output = String::with_capacity((self.width + 1) * self.height);
        for (cell_index, cell) in self.cells.iter().enumerate() {
            output.push(glyph(self.idx_to_coord(cell_index), cell));
            if cell_index % self.width == self.width - 1 {
                output.push('\n');
            }
        }
        output
    }
}
