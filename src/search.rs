use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{
    error::{Error, Result},
    grid::Grid,
    snapshot::Snapshot,
};

/// Where a board settled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinalState {
    pub grid: Grid,
    /// Transitions taken from the initial board to `grid`.
    pub generation: usize,
    /// Generations between the two occurrences of `grid`; `1` for a fixed
    /// point.
    pub period: usize,
}

impl FinalState {
    pub fn is_fixed_point(&self) -> bool {
        self.period == 1
    }
}

/// Steps `initial` until a generation repeats, taking at most `max_steps`
/// transitions.
///
/// The repeated generation itself is returned, which for an oscillator is
/// whichever phase comes round first rather than the phase the cycle started
/// on.
pub fn settle(initial: &Grid, max_steps: usize) -> Result<FinalState> {
    let mut history: HashMap<Snapshot, usize> = HashMap::from([(initial.snapshot(), 0)]);
    let mut current = initial.clone();
    for generation in 1..=max_steps {
        let next = current.step();
        if next == current {
            debug!(generation, "reached a fixed point");
            return Ok(FinalState {
                grid: next,
                generation,
                period: 1,
            });
        }
        let snapshot = next.snapshot();
        if let Some(&seen) = history.get(&snapshot) {
            let period = generation - seen;
            debug!(generation, period, "reached a cycle");
            return Ok(FinalState {
                grid: next,
                generation,
                period,
            });
        }
        trace!(generation, population = next.population(), "stepped");
        history.insert(snapshot, generation);
        current = next;
    }
    debug!(max_steps, "no repeat within budget");
    Err(Error::NotStabilized { max_steps })
}

/// The first repeated generation reachable from `initial` within
/// `max_steps` transitions.
pub fn find_final_state(initial: &Grid, max_steps: usize) -> Result<Grid> {
    settle(initial, max_steps).map(|state| state.grid)
}
