//! Garden plots an elf can stand on after an exact number of steps.
//!
//! A plot reachable in `d` steps is also reachable in `d + 2`, `d + 4`, ... by
//! stepping back and forth, so the plots reachable in exactly `n` steps are
//! those at shortest distance `d <= n` with `d` of the same parity as `n`.

use crate::error::{Error, Result};
use crate::geometry::{Coord, Direction};
use crate::grid::Grid;
use crate::search::count_within;
use crate::Puzzle;

/// Step count for the bounded garden.
pub const GARDEN_STEPS: u64 = 64;

/// Step count for the infinitely tiled garden.
pub const FAR_GARDEN_STEPS: u64 = 26_501_365;

/// How the map continues past its edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tiling {
    /// Off-map cells can't be entered.
    Bounded,
    /// The map repeats in every direction.
    Infinite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Plot {
    Open,
    Rock,
}

pub struct Garden {
    plots: Grid<Plot>,
    start: Coord,
}

impl Garden {
    /// Parses `.` plots, `#` rocks and the single `S` starting plot.
    pub fn parse(lines: &[&str]) -> Result<Self> {
        let mut start_index = None;
        let mut cell_index = 0;
        let plots = Grid::parse(lines, |c| {
            let plot = match c {
                '.' => Plot::Open,
                '#' => Plot::Rock,
                'S' => {
                    start_index.get_or_insert(cell_index);
                    Plot::Open
                }
                _ => return None,
            };
            cell_index += 1;
            Some(plot)
        })?;
        let start = start_index
            .map(|idx| plots.idx_to_coord(idx))
            .ok_or(Error::MissingMarker('S'))?;
        Ok(Self { plots, start })
    }

    fn is_open(&self, pos: Coord, tiling: Tiling) -> bool {
        match tiling {
            Tiling::Bounded => self.plots.get(pos) == Some(&Plot::Open),
            Tiling::Infinite => *self.plots.get_wrapped(pos) == Plot::Open,
        }
    }

    fn neighbours(
        &self,
        pos: Coord,
        tiling: Tiling,
    ) -> impl Iterator<Item = (Coord, u64)> + '_ {
        Direction::ALL
            .into_iter()
            .map(move |heading| heading.step(pos))
            .filter(move |&next| self.is_open(next, tiling))
            .map(|next| (next, 1))
    }

    /// Plots reachable in exactly `steps` steps from the start.
    #[tracing::instrument(skip(self))]
    pub fn reachable_plots(&self, steps: u64, tiling: Tiling) -> u64 {
        let parity = steps % 2;
        count_within(
            [(self.start, 0)],
            |&pos| self.neighbours(pos, tiling),
            steps,
            |_, distance| distance % 2 == parity,
        )
    }

    /// Plots reachable in exactly `steps` steps on the infinite tiling,
    /// extrapolated from three small samples.
    ///
    /// Only valid for square maps with the start in the centre and a step count
    /// that ends on a map edge (`steps ≡ start.x (mod width)`). On such inputs
    /// the count grows quadratically in the number of whole maps crossed.
    #[tracing::instrument(skip(self))]
    pub fn extrapolated_plots(&self, steps: u64) -> Result<u64> {
        let size = self.plots.width();
        if self.plots.height() != size {
            return Err(Error::UnsupportedInput(format!(
                "garden is {}x{}, not square",
                size,
                self.plots.height()
            )));
        }
        let centre = (size / 2) as i32;
        if self.start != (centre, centre) {
            return Err(Error::UnsupportedInput(format!(
                "start {:?} is not at the centre of the garden",
                self.start
            )));
        }
        let size = size as u64;
        let edge = centre as u64;
        if steps % size != edge {
            return Err(Error::UnsupportedInput(format!(
                "{steps} steps don't end on a garden edge"
            )));
        }

        let samples =
            [0, 1, 2].map(|maps| self.reachable_plots(edge + maps * size, Tiling::Infinite) as i64);
        tracing::debug!(?samples, "sampled infinite garden");

        let plots = extrapolate_quadratic(samples, (steps / size) as i64);
        u64::try_from(plots).map_err(|_| {
            Error::UnsupportedInput(format!("extrapolated a negative plot count {plots}"))
        })
    }
}

/// Evaluates at `x` the quadratic through `(0, y0)`, `(1, y1)` and `(2, y2)`.
///
/// Uses Newton forward differences, which stay integral for integral samples.
pub fn extrapolate_quadratic([y0, y1, y2]: [i64; 3], x: i64) -> i64 {
    let first = y1 - y0;
    let second = y2 - 2 * y1 + y0;
    y0 + x * first + x * (x - 1) / 2 * second
}

/// Day 21: Step Counter.
pub struct StepCounter;

impl Puzzle for StepCounter {
    fn day(&self) -> u8 {
        21
    }

    fn title(&self) -> &'static str {
        "Step Counter"
    }

    fn part1(&self, lines: &[&str]) -> Result<u64> {
        Ok(Garden::parse(lines)?.reachable_plots(GARDEN_STEPS, Tiling::Bounded))
    }

    fn part2(&self, lines: &[&str]) -> Result<u64> {
        Garden::parse(lines)?.extrapolated_plots(FAR_GARDEN_STEPS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &[&str] = &[
        "...........",
        ".....###.#.",
        ".###.##..#.",
        "..#.#...#..",
        "....#.#....",
        ".##..S####.",
        ".##..#...#.",
        ".......##..",
        ".##.#.####.",
        ".##..##.##.",
        "...........",
    ];

    const OPEN: &[&str] = &[".....", ".....", "..S..", ".....", "....."];

    #[test]
    fn test_bounded_sample() {
        let garden = Garden::parse(SAMPLE).unwrap();
        assert_eq!(garden.start, (5, 5));
        assert_eq!(garden.reachable_plots(6, Tiling::Bounded), 16);
    }

    #[test]
    fn test_infinite_sample() {
        let garden = Garden::parse(SAMPLE).unwrap();
        assert_eq!(garden.reachable_plots(6, Tiling::Infinite), 16);
        assert_eq!(garden.reachable_plots(10, Tiling::Infinite), 50);
        assert_eq!(garden.reachable_plots(50, Tiling::Infinite), 1594);
        assert_eq!(garden.reachable_plots(100, Tiling::Infinite), 6536);
    }

    #[test]
    fn test_zero_steps_counts_only_the_start() {
        let garden = Garden::parse(SAMPLE).unwrap();
        assert_eq!(garden.reachable_plots(0, Tiling::Bounded), 1);
    }

    #[test]
    fn test_open_garden_extrapolation_matches_direct_count() {
        // on an empty plane the count after n steps is (n + 1)^2
        let garden = Garden::parse(OPEN).unwrap();
        assert_eq!(garden.reachable_plots(52, Tiling::Infinite), 53 * 53);
        assert_eq!(garden.extrapolated_plots(52), Ok(53 * 53));
        assert_eq!(garden.extrapolated_plots(5 * 1000 + 2), Ok(5003 * 5003));
    }

    #[test]
    fn test_extrapolation_rejects_off_edge_step_counts() {
        let garden = Garden::parse(SAMPLE).unwrap();
        assert!(matches!(
            garden.extrapolated_plots(FAR_GARDEN_STEPS),
            Err(Error::UnsupportedInput(_))
        ));
    }

    #[test]
    fn test_extrapolation_rejects_off_centre_start() {
        let garden = Garden::parse(&["S....", ".....", ".....", ".....", "....."]).unwrap();
        assert!(matches!(
            garden.extrapolated_plots(52),
            Err(Error::UnsupportedInput(_))
        ));
    }

    #[test]
    fn test_quadratic_through_samples() {
        // y = 3x^2 - 2x + 7
        let f = |x: i64| 3 * x * x - 2 * x + 7;
        for x in [0, 1, 2, 5, 100, 202_300] {
            assert_eq!(extrapolate_quadratic([f(0), f(1), f(2)], x), f(x));
        }
    }

    #[test]
    fn test_missing_start_is_reported() {
        assert!(matches!(
            Garden::parse(&["...", ".#.", "..."]),
            Err(Error::MissingMarker('S'))
        ));
    }
}
