//! Shortest-path search over implicit graphs.
//!
//! Nodes are never enumerated up front. The caller supplies an expansion
//! function producing `(successor, edge_weight)` pairs and the search pulls
//! nodes out of a min-heap in cost order:
//! - Duplicates are allowed in the frontier; suppression happens at pop time
//! - A popped node is settled once and its cost is never revised
//! - Edge weights are non-negative, so the first settled goal is optimal

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::{Error, Result};

/// A frontier entry wrapping a node with its accumulated cost.
///
/// `BinaryHeap` is a max-heap, so the key is reversed to pop the cheapest
/// entry first. The sequence number only makes the order total.
struct FrontierEntry<N> {
    key: Reverse<(u64, u64)>,
    node: N,
}

impl<N> FrontierEntry<N> {
    #[inline]
    fn cost(&self) -> u64 {
        self.key.0 .0
    }
}

impl<N> PartialEq for FrontierEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<N> Eq for FrontierEntry<N> {}

impl<N> PartialOrd for FrontierEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for FrontierEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Counters describing how much work a search did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Entries pushed onto the frontier, seeds included.
    pub pushed: usize,
    /// Distinct nodes settled.
    pub settled: usize,
    /// Popped entries skipped because their node was already settled.
    pub stale: usize,
}

/// Generalized Dijkstra over nodes of type `N`.
pub struct Dijkstra<N> {
    frontier: BinaryHeap<FrontierEntry<N>>,
    settled: FxHashMap<N, u64>,
    stats: SearchStats,
}

impl<N: Clone + Eq + Hash> Dijkstra<N> {
    pub fn new() -> Self {
        Self {
            frontier: BinaryHeap::new(),
            settled: FxHashMap::default(),
            stats: SearchStats::default(),
        }
    }

    /// Creates a search whose frontier starts with every `(node, cost)` seed.
    pub fn with_seeds(seeds: impl IntoIterator<Item = (N, u64)>) -> Self {
        let mut search = Self::new();
        for (node, cost) in seeds {
            search.push(node, cost);
        }
        search
    }

    /// Adds a frontier entry. Visitation is not checked here.
    pub fn push(&mut self, node: N, cost: u64) {
        let sequence = self.stats.pushed as u64;
        self.stats.pushed += 1;
        self.frontier.push(FrontierEntry {
            key: Reverse((cost, sequence)),
            node,
        });
    }

    /// Pops the cheapest entry whose node is not yet settled and settles it.
    ///
    /// Returns `None` once the frontier is exhausted.
    pub fn settle_next(&mut self) -> Option<(N, u64)> {
        while let Some(entry) = self.frontier.pop() {
            if self.settled.contains_key(&entry.node) {
                self.stats.stale += 1;
                continue;
            }
            let cost = entry.cost();
            self.settled.insert(entry.node.clone(), cost);
            self.stats.settled += 1;
            return Some((entry.node, cost));
        }
        None
    }

    /// Pushes every successor of a node settled at `cost`.
    pub fn relax(&mut self, cost: u64, successors: impl IntoIterator<Item = (N, u64)>) {
        for (next, weight) in successors {
            self.push(next, cost + weight);
        }
    }

    /// The finalized cost of `node`, if it has been settled.
    pub fn cost_of(&self, node: &N) -> Option<u64> {
        self.settled.get(node).copied()
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

impl<N: Clone + Eq + Hash> Default for Dijkstra<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimal cost from any seed to a node satisfying `is_goal`.
///
/// Returns [`Error::NoPath`] if the reachable space is exhausted first, which
/// is distinct from a goal reached at cost zero.
pub fn shortest_path<N, I>(
    seeds: impl IntoIterator<Item = (N, u64)>,
    mut expand: impl FnMut(&N) -> I,
    mut is_goal: impl FnMut(&N) -> bool,
) -> Result<u64>
where
    N: Clone + Eq + Hash,
    I: IntoIterator<Item = (N, u64)>,
{
    let mut search = Dijkstra::with_seeds(seeds);

    while let Some((node, cost)) = search.settle_next() {
        if is_goal(&node) {
            let stats = search.stats();
            debug!(cost, settled = stats.settled, stale = stats.stale, "goal reached");
            return Ok(cost);
        }
        search.relax(cost, expand(&node));
    }

    let stats = search.stats();
    debug!(settled = stats.settled, stale = stats.stale, "frontier exhausted");
    Err(Error::NoPath)
}

/// Counts settled nodes within `budget` for which `counts(node, cost)` holds.
///
/// The search stops at the first settled entry whose cost exceeds `budget`.
pub fn count_within<N, I>(
    seeds: impl IntoIterator<Item = (N, u64)>,
    mut expand: impl FnMut(&N) -> I,
    budget: u64,
    mut counts: impl FnMut(&N, u64) -> bool,
) -> u64
where
    N: Clone + Eq + Hash,
    I: IntoIterator<Item = (N, u64)>,
{
    let mut search = Dijkstra::with_seeds(seeds);
    let mut counted = 0;

    while let Some((node, cost)) = search.settle_next() {
        if cost > budget {
            break;
        }
        if counts(&node, cost) {
            counted += 1;
        }
        search.relax(cost, expand(&node));
    }

    let stats = search.stats();
    debug!(budget, counted, settled = stats.settled, "budget exhausted");
    counted
}
