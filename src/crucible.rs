//! Heat-loss routing for crucibles that can't drive straight for long.
//!
//! A crucible node is its cell, its heading and how many cells it has moved
//! in that heading. Two nodes on the same cell with different headings or
//! runs are distinct, because they allow different moves next.

use crate::error::Result;
use crate::geometry::{Coord, Direction};
use crate::grid::Grid;
use crate::search::shortest_path;
use crate::Puzzle;

/// Movement limits for one class of crucible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrucibleRules {
    /// Cells that must be covered in a heading before turning or stopping.
    pub min_run: u8,
    /// Cells that may be covered in a heading before a turn is forced.
    pub max_run: u8,
}

impl CrucibleRules {
    /// Turns whenever it likes, at most three cells straight.
    pub const ORDINARY: Self = Self {
        min_run: 0,
        max_run: 3,
    };

    /// At least four cells before turning or stopping, at most ten.
    pub const ULTRA: Self = Self {
        min_run: 4,
        max_run: 10,
    };
}

/// A search node for heat-loss routing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct Crucible {
    pos: Coord,
    heading: Direction,
    run: u8,
}

/// City block map of per-cell heat loss.
pub struct HeatMap {
    losses: Grid<u8>,
}

impl HeatMap {
    pub fn parse(lines: &[&str]) -> Result<Self> {
        let losses = Grid::parse(lines, |c| c.to_digit(10).map(|d| d as u8))?;
        Ok(Self { losses })
    }

    /// Moves available from `node` with the heat lost entering each cell.
    fn successors(&self, node: &Crucible, rules: CrucibleRules) -> Vec<(Crucible, u64)> {
        let mut moves = Vec::with_capacity(3);

        if node.run < rules.max_run {
            moves.push((node.heading, node.run + 1));
        }
        if node.run >= rules.min_run {
            for side in node.heading.sideways() {
                moves.push((side, 1));
            }
        }

        moves
            .into_iter()
            .filter_map(|(heading, run)| {
                let pos = heading.step(node.pos);
                let loss = *self.losses.get(pos)?;
                Some((Crucible { pos, heading, run }, u64::from(loss)))
            })
            .collect()
    }

    /// Least heat lost driving from the top-left to the bottom-right cell.
    ///
    /// The starting cell's own loss is not counted.
    #[tracing::instrument(skip(self))]
    pub fn minimal_heat_loss(&self, rules: CrucibleRules) -> Result<u64> {
        let target = (
            self.losses.width() as i32 - 1,
            self.losses.height() as i32 - 1,
        );
        let seeds = [Direction::East, Direction::South].map(|heading| {
            let start = Crucible {
                pos: (0, 0),
                heading,
                run: 0,
            };
            (start, 0)
        });

        shortest_path(
            seeds,
            |node| self.successors(node, rules),
            |node| node.pos == target && node.run >= rules.min_run,
        )
    }
}

/// Day 17: Clumsy Crucible.
pub struct ClumsyCrucible;

impl Puzzle for ClumsyCrucible {
    fn day(&self) -> u8 {
        17
    }

    fn title(&self) -> &'static str {
        "Clumsy Crucible"
    }

    fn part1(&self, lines: &[&str]) -> Result<u64> {
        HeatMap::parse(lines)?.minimal_heat_loss(CrucibleRules::ORDINARY)
    }

    fn part2(&self, lines: &[&str]) -> Result<u64> {
        HeatMap::parse(lines)?.minimal_heat_loss(CrucibleRules::ULTRA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const SAMPLE: &[&str] = &[
        "2413432311323",
        "3215453535623",
        "3255245654254",
        "3446585845452",
        "4546657867536",
        "1438598798454",
        "4457876987766",
        "3637877979653",
        "4654967986887",
        "4564679986453",
        "1224686865563",
        "2546548887735",
        "4322674655533",
    ];

    #[test]
    fn test_ordinary_crucible_sample() {
        assert_eq!(ClumsyCrucible.part1(SAMPLE), Ok(102));
    }

    #[test]
    fn test_ultra_crucible_sample() {
        assert_eq!(ClumsyCrucible.part2(SAMPLE), Ok(94));
    }

    #[test]
    fn test_ultra_crucible_must_run_before_stopping() {
        let lines = [
            "111111111111",
            "999999999991",
            "999999999991",
            "999999999991",
            "999999999991",
        ];
        assert_eq!(ClumsyCrucible.part2(&lines), Ok(71));
    }

    #[test]
    fn test_single_row_is_limited_by_max_run() {
        // a single row longer than the maximum run can't be crossed
        let ordinary = HeatMap::parse(&["11111"]).unwrap();
        assert_eq!(
            ordinary.minimal_heat_loss(CrucibleRules::ORDINARY),
            Err(Error::NoPath)
        );

        let wide = HeatMap::parse(&["1111", "1111"]).unwrap();
        assert_eq!(wide.minimal_heat_loss(CrucibleRules::ORDINARY), Ok(4));
    }

    #[test]
    fn test_rejects_non_digit_tiles() {
        assert!(matches!(
            HeatMap::parse(&["12", "3x"]),
            Err(Error::InvalidTile { tile: 'x', .. })
        ));
    }
}
