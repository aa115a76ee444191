//! Walking a left/right node network by a repeating instruction list.
//!
//! A walker's future depends on its node and on where it is in the instruction
//! list, so `(instruction, node)` is the state fed to the cycle detector.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::cycle::find_cycle;
use crate::error::{Error, Result};
use crate::grid::significant_lines;
use crate::Puzzle;

const START: &str = "AAA";
const GOAL: &str = "ZZZ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Turn {
    Left = 0,
    Right = 1,
}

/// A walker on the network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct Walker {
    /// Index of the next instruction to follow.
    instruction: usize,
    node: usize,
}

pub struct Network {
    turns: Vec<Turn>,
    names: Vec<String>,
    /// `[left, right]` successors per node index.
    links: Vec<[usize; 2]>,
}

fn malformed(line: usize, reason: impl Into<String>) -> Error {
    Error::MalformedInput {
        line,
        reason: reason.into(),
    }
}

impl Network {
    /// Parses the instruction line followed by `AAA = (BBB, CCC)` node lines.
    ///
    /// Blank lines are skipped.
    pub fn parse(lines: &[&str]) -> Result<Self> {
        let lines = significant_lines(lines);
        let Some((instructions, nodes)) = lines.split_first() else {
            return Err(malformed(1, "missing instruction line"));
        };

        let turns = instructions
            .trim()
            .chars()
            .map(|c| match c {
                'L' => Ok(Turn::Left),
                'R' => Ok(Turn::Right),
                _ => Err(malformed(1, format!("unexpected instruction {c:?}"))),
            })
            .collect::<Result<Vec<_>>>()?;
        if turns.is_empty() {
            return Err(malformed(1, "no instructions"));
        }

        let mut definitions = Vec::new();
        for (offset, line) in nodes.iter().enumerate() {
            let line_number = offset + 2;
            if line.trim().is_empty() {
                continue;
            }
            let (name, targets) = line
                .split_once(" = ")
                .ok_or_else(|| malformed(line_number, "expected `NODE = (LEFT, RIGHT)`"))?;
            let (left, right) = targets
                .trim()
                .strip_prefix('(')
                .and_then(|t| t.strip_suffix(')'))
                .and_then(|t| t.split_once(", "))
                .ok_or_else(|| malformed(line_number, "expected `(LEFT, RIGHT)`"))?;
            definitions.push((name.trim(), left.trim(), right.trim()));
        }

        let index: FxHashMap<&str, usize> = definitions
            .iter()
            .enumerate()
            .map(|(idx, &(name, _, _))| (name, idx))
            .collect();
        let lookup = |name: &str| {
            index
                .get(name)
                .copied()
                .ok_or_else(|| Error::UnknownNode(name.to_string()))
        };

        let links = definitions
            .iter()
            .map(|&(_, left, right)| Ok([lookup(left)?, lookup(right)?]))
            .collect::<Result<Vec<_>>>()?;
        let names = definitions
            .iter()
            .map(|&(name, _, _)| name.to_string())
            .collect();

        Ok(Self {
            turns,
            names,
            links,
        })
    }

    fn node(&self, name: &str) -> Result<usize> {
        self.names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| Error::UnknownNode(name.to_string()))
    }

    fn advance(&self, walker: &Walker) -> Walker {
        let turn = self.turns[walker.instruction];
        Walker {
            instruction: (walker.instruction + 1) % self.turns.len(),
            node: self.links[walker.node][turn as usize],
        }
    }

    /// Steps needed to walk from `AAA` to `ZZZ`.
    #[tracing::instrument(skip(self))]
    pub fn steps_to_goal(&self) -> Result<u64> {
        let goal = self.node(GOAL)?;
        let mut walker = Walker {
            instruction: 0,
            node: self.node(START)?,
        };

        // past this many steps some state has repeated without the goal
        let state_count = self.names.len() * self.turns.len();
        for steps in 0..=state_count {
            if walker.node == goal {
                return Ok(steps as u64);
            }
            walker = self.advance(&walker);
        }
        Err(Error::NoPath)
    }

    /// How often a ghost starting at `start` stands on a node ending in `Z`.
    ///
    /// Only ghosts that arrive at exactly every `p`-th step, forever, have a
    /// period; anything else is unsupported.
    fn ghost_period(&self, start: usize) -> Result<u64> {
        let initial = Walker {
            instruction: 0,
            node: start,
        };
        let cycle = find_cycle(&initial, |walker| self.advance(walker))?;

        // steps 1..=mu+lambda cover the preamble and one full period
        let horizon = cycle.mu + cycle.lambda;
        let mut arrivals = Vec::new();
        let mut walker = initial;
        for step in 1..=horizon {
            walker = self.advance(&walker);
            if self.names[walker.node].ends_with('Z') {
                arrivals.push(step);
            }
        }

        let name = &self.names[start];
        debug!(ghost = %name, mu = cycle.mu, lambda = cycle.lambda, ?arrivals, "ghost cycle");

        let Some(&period) = arrivals.first() else {
            return Err(Error::UnsupportedInput(format!(
                "ghost from {name} never reaches a Z node"
            )));
        };
        let regular = (period..=horizon).step_by(period);
        if cycle.lambda % period != 0 || !arrivals.iter().copied().eq(regular) {
            return Err(Error::UnsupportedInput(format!(
                "ghost from {name} doesn't arrive at Z nodes every {period} steps"
            )));
        }
        Ok(period as u64)
    }

    /// Steps until every ghost, starting on all nodes ending in `A` at once,
    /// stands on a node ending in `Z`.
    #[tracing::instrument(skip(self))]
    pub fn ghost_steps(&self) -> Result<u64> {
        let starts: Vec<usize> = (0..self.names.len())
            .filter(|&node| self.names[node].ends_with('A'))
            .collect();
        if starts.is_empty() {
            return Err(Error::UnsupportedInput("no node ends in A".to_string()));
        }

        starts
            .into_iter()
            .map(|start| self.ghost_period(start))
            .try_fold(1, |steps, period| Ok(lcm(steps, period?)))
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn lcm(a: u64, b: u64) -> u64 {
    a / gcd(a, b) * b
}

/// Day 8: Haunted Wasteland.
pub struct HauntedWasteland;

impl Puzzle for HauntedWasteland {
    fn day(&self) -> u8 {
        8
    }

    fn title(&self) -> &'static str {
        "Haunted Wasteland"
    }

    fn part1(&self, lines: &[&str]) -> Result<u64> {
        Network::parse(lines)?.steps_to_goal()
    }

    fn part2(&self, lines: &[&str]) -> Result<u64> {
        Network::parse(lines)?.ghost_steps()
    }
}
