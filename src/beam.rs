//! Light beams bouncing around a contraption of mirrors and splitters.
//!
//! Beams are followed with an explicit work stack rather than recursion, since
//! a single beam can wind through every cell of the grid. A beam is a
//! `(position, heading)` pair; the visited set is checked before pushing, so
//! loops of mirrors terminate.

use rustc_hash::FxHashSet;

use crate::error::Result;
use crate::geometry::{Coord, Direction};
use crate::grid::Grid;
use crate::Puzzle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tile {
    Empty,
    /// `/`
    SlashMirror,
    /// `\`
    BackslashMirror,
    /// `|`
    VerticalSplitter,
    /// `-`
    HorizontalSplitter,
}

impl Tile {
    fn parse(c: char) -> Option<Self> {
        Some(match c {
            '.' => Tile::Empty,
            '/' => Tile::SlashMirror,
            '\\' => Tile::BackslashMirror,
            '|' => Tile::VerticalSplitter,
            '-' => Tile::HorizontalSplitter,
            _ => return None,
        })
    }

    /// Headings a beam leaves this tile with after entering it heading `heading`.
    fn exits(self, heading: Direction) -> ([Direction; 2], usize) {
        match self {
            Tile::SlashMirror => ([heading.reflect_slash(); 2], 1),
            Tile::BackslashMirror => ([heading.reflect_backslash(); 2], 1),
            Tile::VerticalSplitter if heading.is_horizontal() => {
                ([Direction::North, Direction::South], 2)
            }
            Tile::HorizontalSplitter if !heading.is_horizontal() => {
                ([Direction::West, Direction::East], 2)
            }
            _ => ([heading; 2], 1),
        }
    }
}

/// A beam at a tile, heading in a direction.
type Beam = (Coord, Direction);

pub struct Contraption {
    tiles: Grid<Tile>,
}

impl Contraption {
    pub fn parse(lines: &[&str]) -> Result<Self> {
        let tiles = Grid::parse(lines, Tile::parse)?;
        Ok(Self { tiles })
    }

    /// Number of distinct tiles a beam entering at `entry` passes through.
    pub fn energized(&self, entry: Beam) -> usize {
        if !self.tiles.contains(entry.0) {
            return 0;
        }

        let mut visited: FxHashSet<Beam> = FxHashSet::default();
        visited.insert(entry);
        let mut stack = vec![entry];

        while let Some((pos, heading)) = stack.pop() {
            let Some(&tile) = self.tiles.get(pos) else {
                continue;
            };
            let (exits, count) = tile.exits(heading);
            for &exit in &exits[..count] {
                let next = (exit.step(pos), exit);
                if self.tiles.contains(next.0) && visited.insert(next) {
                    stack.push(next);
                }
            }
        }

        let tiles: FxHashSet<Coord> = visited.iter().map(|&(pos, _)| pos).collect();
        tiles.len()
    }

    /// Every beam entering from an edge tile, heading into the grid.
    fn edge_entries(&self) -> impl Iterator<Item = Beam> + '_ {
        let right = self.tiles.width() as i32 - 1;
        let bottom = self.tiles.height() as i32 - 1;

        let columns = (0..=right).flat_map(move |x| {
            [((x, 0), Direction::South), ((x, bottom), Direction::North)]
        });
        let rows = (0..=bottom).flat_map(move |y| {
            [((0, y), Direction::East), ((right, y), Direction::West)]
        });
        columns.chain(rows)
    }

    /// The most tiles any edge entry energizes.
    #[tracing::instrument(skip(self))]
    pub fn best_energized(&self) -> usize {
        self.edge_entries()
            .map(|entry| self.energized(entry))
            .max()
            .unwrap_or(0)
    }
}

/// Day 16: The Floor Will Be Lava.
pub struct LavaFloor;

impl Puzzle for LavaFloor {
    fn day(&self) -> u8 {
        16
    }

    fn title(&self) -> &'static str {
        "The Floor Will Be Lava"
    }

    fn part1(&self, lines: &[&str]) -> Result<u64> {
        let contraption = Contraption::parse(lines)?;
        Ok(contraption.energized(((0, 0), Direction::East)) as u64)
    }

    fn part2(&self, lines: &[&str]) -> Result<u64> {
        Ok(Contraption::parse(lines)?.best_energized() as u64)
    }
}
