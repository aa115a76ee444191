//! Floyd cycle detection over deterministic state machines.
//!
//! The detector only needs to clone and compare states, so it never stores the
//! history of a simulation. Once `mu` and `lambda` are known, the state after
//! an arbitrarily large number of steps is reached from the cycle entry in at
//! most `lambda - 1` further advances.

use tracing::debug;

use crate::error::{Error, Result};

/// Advance budget used by [`find_cycle`].
pub const DEFAULT_STEP_LIMIT: usize = 10_000_000;

/// Shape of an eventually periodic sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cycle<S> {
    /// Steps taken before the sequence first enters its cycle.
    pub mu: usize,
    /// Period of the cycle.
    pub lambda: usize,
    /// State after `mu` steps, the first state on the cycle.
    pub entry: S,
}

impl<S: Clone> Cycle<S> {
    /// Advances past the entry needed to reach `step`, or `None` before the cycle.
    pub fn offset(&self, step: usize) -> Option<usize> {
        step.checked_sub(self.mu)
            .map(|into_cycle| into_cycle % self.lambda)
    }

    /// The state after `step` advances from the initial state.
    pub fn state_at(&self, step: usize, advance: impl Fn(&S) -> S) -> Result<S> {
        let offset = self.offset(step).ok_or(Error::BeforeCycle { step, mu: self.mu })?;
        let mut state = self.entry.clone();
        for _ in 0..offset {
            state = advance(&state);
        }
        Ok(state)
    }
}

/// Counts `advance` applications against a fixed budget.
struct Budget<F> {
    advance: F,
    used: usize,
    limit: usize,
}

impl<F> Budget<F> {
    fn step<S>(&mut self, state: &S) -> Result<S>
    where
        F: Fn(&S) -> S,
    {
        if self.used >= self.limit {
            return Err(Error::CycleNotFound {
                step_limit: self.limit,
            });
        }
        self.used += 1;
        Ok((self.advance)(state))
    }
}

/// Finds the cycle reached from `initial` using [`DEFAULT_STEP_LIMIT`].
pub fn find_cycle<S, F>(initial: &S, advance: F) -> Result<Cycle<S>>
where
    S: Clone + PartialEq,
    F: Fn(&S) -> S,
{
    find_cycle_within(initial, advance, DEFAULT_STEP_LIMIT)
}

/// Finds the cycle reached from `initial`, applying `advance` at most
/// `step_limit` times in total.
///
/// `advance` must be a pure function of the state. Sequences that never
/// repeat exhaust the budget and yield [`Error::CycleNotFound`].
pub fn find_cycle_within<S, F>(initial: &S, advance: F, step_limit: usize) -> Result<Cycle<S>>
where
    S: Clone + PartialEq,
    F: Fn(&S) -> S,
{
    let mut budget = Budget {
        advance,
        used: 0,
        limit: step_limit,
    };

    // hare runs twice as fast; they meet somewhere on the cycle
    let mut tortoise = budget.step(initial)?;
    let first = budget.step(initial)?;
    let mut hare = budget.step(&first)?;
    while tortoise != hare {
        tortoise = budget.step(&tortoise)?;
        let half = budget.step(&hare)?;
        hare = budget.step(&half)?;
    }

    // the meeting point is a multiple of lambda ahead, so walking both in
    // lockstep from the start makes them coincide at the cycle entry
    let mut mu = 0;
    let mut tortoise = initial.clone();
    while tortoise != hare {
        tortoise = budget.step(&tortoise)?;
        hare = budget.step(&hare)?;
        mu += 1;
    }

    let entry = tortoise;
    let mut lambda = 1;
    let mut cursor = budget.step(&entry)?;
    while cursor != entry {
        cursor = budget.step(&cursor)?;
        lambda += 1;
    }

    debug!(mu, lambda, advances = budget.used, "cycle found");
    Ok(Cycle { mu, lambda, entry })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts up through a preamble of `preamble` values, then cycles mod 7.
    ///
    /// Values `100..100 + preamble` are the preamble; value `100 + preamble`
    /// jumps to 0.
    fn preamble_then_mod7(preamble: u32) -> impl Fn(&u32) -> u32 {
        move |&state| {
            if state >= 100 {
                if state + 1 >= 100 + preamble {
                    0
                } else {
                    state + 1
                }
            } else {
                (state + 1) % 7
            }
        }
    }

    fn simulate(initial: u32, steps: usize, advance: impl Fn(&u32) -> u32) -> u32 {
        (0..steps).fold(initial, |state, _| advance(&state))
    }

    #[test]
    fn test_pure_cycle_has_zero_mu() {
        let cycle = find_cycle(&3u32, |&s| (s + 1) % 7).unwrap();
        assert_eq!((cycle.mu, cycle.lambda, cycle.entry), (0, 7, 3));
    }

    #[test]
    fn test_recovers_known_mu_and_lambda() {
        for preamble in 1..12 {
            let cycle = find_cycle(&100, preamble_then_mod7(preamble)).unwrap();
            assert_eq!(cycle.mu, preamble as usize, "preamble {preamble}");
            assert_eq!(cycle.lambda, 7, "preamble {preamble}");
            assert_eq!(cycle.entry, 0);
        }
    }

    #[test]
    fn test_fixed_point_has_unit_period() {
        let cycle = find_cycle(&10u32, |&s| s.saturating_sub(3)).unwrap();
        assert_eq!(cycle.mu, 4);
        assert_eq!(cycle.lambda, 1);
        assert_eq!(cycle.entry, 0);
    }

    #[test]
    fn test_projection_matches_direct_simulation() {
        let advance = preamble_then_mod7(5);
        let cycle = find_cycle(&100, &advance).unwrap();

        for multiple in 0..6 {
            for remainder in 0..7 {
                let step = 5 + multiple * 7 + remainder;
                let projected = cycle.state_at(step, &advance).unwrap();
                assert_eq!(projected, simulate(100, step, &advance), "step {step}");
            }
        }
    }

    #[test]
    fn test_projection_before_cycle_is_rejected() {
        let advance = preamble_then_mod7(5);
        let cycle = find_cycle(&100, &advance).unwrap();
        assert_eq!(cycle.offset(4), None);
        assert_eq!(
            cycle.state_at(4, &advance),
            Err(Error::BeforeCycle { step: 4, mu: 5 })
        );
        assert_eq!(cycle.offset(5), Some(0));
    }

    #[test]
    fn test_aperiodic_sequence_hits_step_limit() {
        let result = find_cycle_within(&0u64, |&s| s + 1, 1_000);
        assert_eq!(result, Err(Error::CycleNotFound { step_limit: 1_000 }));
    }

    #[test]
    fn test_large_step_projection() {
        let advance = preamble_then_mod7(3);
        let cycle = find_cycle(&100, &advance).unwrap();
        // after the 3-step preamble the value is (step - 3) mod 7
        let state = cycle.state_at(1_000_000_000, &advance).unwrap();
        assert_eq!(state, ((1_000_000_000 - 3) % 7) as u32);
    }
}
