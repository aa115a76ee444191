//! A tilting platform of round and cube-shaped rocks.
//!
//! Cube rocks never move. Round rocks roll as far as they can whenever the
//! platform tilts. The fixed rocks are indexed once per lane (column for
//! north/south tilts, row for east/west tilts) as sorted lists bracketed by
//! sentinels just outside the platform. Each tilt copies those lists and
//! inserts every rock as it settles, so later rocks stop against earlier ones.

use crate::cycle::find_cycle;
use crate::error::Result;
use crate::geometry::{Coord, Direction};
use crate::grid::Grid;
use crate::Puzzle;

/// Spin cycles run for the load forecast.
pub const SPIN_CYCLES: usize = 1_000_000_000;

/// Order of tilts making up one spin cycle.
const SPIN: [Direction; 4] = [
    Direction::North,
    Direction::West,
    Direction::South,
    Direction::East,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tile {
    Empty,
    Cube,
    Round,
}

/// Positions of the round rocks, kept sorted so equal sets compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rocks(Vec<Coord>);

impl Rocks {
    fn new(mut positions: Vec<Coord>) -> Self {
        positions.sort_unstable();
        Self(positions)
    }

    pub fn positions(&self) -> &[Coord] {
        &self.0
    }
}

pub struct Platform {
    tiles: Grid<Tile>,
    /// Sorted `y` of cube rocks per column, with `-1` and `height` sentinels.
    columns: Vec<Vec<i32>>,
    /// Sorted `x` of cube rocks per row, with `-1` and `width` sentinels.
    rows: Vec<Vec<i32>>,
}

impl Platform {
    /// Parses the platform and the initial round rock positions.
    pub fn parse(lines: &[&str]) -> Result<(Self, Rocks)> {
        let tiles = Grid::parse(lines, |c| match c {
            '.' => Some(Tile::Empty),
            '#' => Some(Tile::Cube),
            'O' => Some(Tile::Round),
            _ => None,
        })?;

        let width = tiles.width() as i32;
        let height = tiles.height() as i32;
        let mut columns = vec![vec![-1]; tiles.width()];
        let mut rows = vec![vec![-1]; tiles.height()];

        // row-major scan keeps both lane lists sorted
        for (x, y) in tiles.positions(|&tile| tile == Tile::Cube) {
            columns[x as usize].push(y);
            rows[y as usize].push(x);
        }
        for column in &mut columns {
            column.push(height);
        }
        for row in &mut rows {
            row.push(width);
        }

        let rocks = Rocks::new(tiles.positions(|&tile| tile == Tile::Round).collect());
        Ok((
            Self {
                tiles,
                columns,
                rows,
            },
            rocks,
        ))
    }

    /// Where every round rock comes to rest after tilting toward `toward`.
    pub fn tilt(&self, rocks: &Rocks, toward: Direction) -> Rocks {
        let vertical = !toward.is_horizontal();
        let toward_origin = matches!(toward, Direction::North | Direction::West);

        // per-tilt copy; the fixed index is never mutated
        let mut lanes = if vertical {
            self.columns.clone()
        } else {
            self.rows.clone()
        };
        let split = |(x, y): Coord| if vertical { (x, y) } else { (y, x) };
        let join = |lane: i32, along: i32| if vertical { (lane, along) } else { (along, lane) };

        // rocks nearest the wall settle first
        let mut ordered: Vec<(i32, i32)> = rocks.0.iter().map(|&rock| split(rock)).collect();
        ordered.sort_unstable_by_key(|&(_, along)| along);
        if !toward_origin {
            ordered.reverse();
        }

        let settled = ordered
            .into_iter()
            .map(|(lane, along)| {
                let obstacles = &mut lanes[lane as usize];
                let ahead = obstacles.partition_point(|&o| o < along);
                let rest = if toward_origin {
                    obstacles[ahead - 1] + 1
                } else {
                    obstacles[ahead] - 1
                };
                let slot = obstacles.partition_point(|&o| o < rest);
                obstacles.insert(slot, rest);
                join(lane, rest)
            })
            .collect();

        Rocks::new(settled)
    }

    /// One spin cycle: tilt north, west, south, then east.
    pub fn spin(&self, rocks: &Rocks) -> Rocks {
        SPIN.iter()
            .fold(rocks.clone(), |rocks, &toward| self.tilt(&rocks, toward))
    }

    /// Total load on the north support beams.
    pub fn north_load(&self, rocks: &Rocks) -> u64 {
        let height = self.tiles.height() as u64;
        rocks.0.iter().map(|&(_, y)| height - y as u64).sum()
    }

    /// Rock positions after `cycles` spin cycles.
    #[tracing::instrument(skip(self, rocks))]
    pub fn after_spins(&self, rocks: &Rocks, cycles: usize) -> Result<Rocks> {
        let cycle = find_cycle(rocks, |state| self.spin(state))?;
        if cycles < cycle.mu {
            return Ok((0..cycles).fold(rocks.clone(), |state, _| self.spin(&state)));
        }
        cycle.state_at(cycles, |state| self.spin(state))
    }

    /// Draws the platform with the round rocks at `rocks`.
    pub fn render(&self, rocks: &Rocks) -> String {
        self.tiles.render(|pos, &tile| match tile {
            Tile::Cube => '#',
            _ if rocks.0.binary_search(&pos).is_ok() => 'O',
            _ => '.',
        })
    }
}

/// Day 14: Parabolic Reflector Dish.
pub struct ParabolicDish;

impl Puzzle for ParabolicDish {
    fn day(&self) -> u8 {
        14
    }

    fn title(&self) -> &'static str {
        "Parabolic Reflector Dish"
    }

    fn part1(&self, lines: &[&str]) -> Result<u64> {
        let (platform, rocks) = Platform::parse(lines)?;
        Ok(platform.north_load(&platform.tilt(&rocks, Direction::North)))
    }

    fn part2(&self, lines: &[&str]) -> Result<u64> {
        let (platform, rocks) = Platform::parse(lines)?;
        let rocks = platform.after_spins(&rocks, SPIN_CYCLES)?;
        Ok(platform.north_load(&rocks))
    }
}
