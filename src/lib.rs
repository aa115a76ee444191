//! Grid Search and Cycle Detection Library
//!
//! Two reusable engines and the calendar puzzles built on them:
//! - [`search`]: Dijkstra over implicit graphs whose nodes are generated lazily
//! - [`cycle`]: Floyd cycle detection over deterministic state machines
//!
//! Each puzzle module adapts one day's rules to an engine and exposes a
//! [`Puzzle`] implementation; [`PUZZLES`] lists them all.

pub mod beam;
pub mod crucible;
pub mod cycle;
pub mod error;
pub mod garden;
pub mod geometry;
pub mod grid;
pub mod network;
pub mod platform;
pub mod search;

pub use error::{Error, Result};

/// A calendar day with two integer answers.
///
/// Implementations are unit structs, so the registry can hold them as trait
/// objects and callers can pick a day at runtime.
pub trait Puzzle: Sync {
    fn day(&self) -> u8;
    fn title(&self) -> &'static str;
    fn part1(&self, lines: &[&str]) -> Result<u64>;
    fn part2(&self, lines: &[&str]) -> Result<u64>;

    /// Runs part 1 or part 2.
    fn solve(&self, part: Part, lines: &[&str]) -> Result<u64> {
        match part {
            Part::One => self.part1(lines),
            Part::Two => self.part2(lines),
        }
    }
}

/// Which half of a puzzle to answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Part {
    One,
    Two,
}

/// Every supported puzzle, ordered by day.
pub static PUZZLES: &[&dyn Puzzle] = &[
    &network::HauntedWasteland,
    &platform::ParabolicDish,
    &beam::LavaFloor,
    &crucible::ClumsyCrucible,
    &garden::StepCounter,
];

/// Looks up the puzzle for `day`.
pub fn puzzle(day: u8) -> Option<&'static dyn Puzzle> {
    PUZZLES.iter().copied().find(|puzzle| puzzle.day() == day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_sorted_and_unique() {
        let days: Vec<u8> = PUZZLES.iter().map(|p| p.day()).collect();
        assert_eq!(days, vec![8, 14, 16, 17, 21]);
    }

    #[test]
    fn test_lookup_by_day() {
        assert_eq!(puzzle(17).map(|p| p.title()), Some("Clumsy Crucible"));
        assert!(puzzle(1).is_none());
    }

    #[test]
    fn test_solve_dispatches_by_part() {
        let lines = ["11", "11"];
        let crucible = puzzle(17).unwrap();
        assert_eq!(crucible.solve(Part::One, &lines), Ok(2));
        // the ultra crucible can't stop after only two cells
        assert_eq!(crucible.solve(Part::Two, &lines), Err(Error::NoPath));
    }
}
