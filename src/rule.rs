use std::collections::HashMap;

use itertools::Itertools;

use crate::grid::Grid;

/// B3/S23: survive on 2 or 3 neighbours, birth on exactly 3.
pub fn next_state(alive: bool, neighbours: u8) -> bool {
    matches!((alive, neighbours), (true, 2 | 3) | (false, 3))
}

pub fn neighbours((x, y): (isize, isize)) -> impl Iterator<Item = (isize, isize)> {
    (-1..=1)
        .cartesian_product(-1..=1)
        .filter(|&d| d != (0, 0))
        .map(move |(dx, dy)| (x + dx, y + dy))
}

impl Grid {
    /// Live neighbours of `(x, y)`. The board does not wrap.
    pub fn live_neighbours(&self, x: isize, y: isize) -> u8 {
        neighbours((x, y)).filter(|&(x, y)| self.get(x, y)).count() as u8
    }

    /// The next generation.
    ///
    /// Only coordinates adjacent to a live cell can be alive next, so counts
    /// are accumulated around live cells and the rule is applied to those.
    pub fn step(&self) -> Self {
        let mut counts: HashMap<(isize, isize), u8> = HashMap::new();
        for (x, y) in self.live_cells() {
            for p in neighbours((x as isize, y as isize)) {
                if self.contains(p) {
                    *counts.entry(p).or_default() += 1;
                }
            }
        }
        let mut next = self.blank();
        for ((x, y), count) in counts {
            if next_state(self.get(x, y), count) {
                next.set(x, y, true);
            }
        }
        debug_assert_eq!(next.dimensions(), self.dimensions());
        next
    }

    /// The next generation, evaluating every cell. Must agree with
    /// [`Grid::step`].
    pub fn step_exhaustive(&self) -> Self {
        let mut next = self.blank();
        for (y, x) in (0..self.height() as isize).cartesian_product(0..self.width() as isize) {
            if next_state(self.get(x, y), self.live_neighbours(x, y)) {
                next.set(x, y, true);
            }
        }
        debug_assert_eq!(next.dimensions(), self.dimensions());
        next
    }

    /// Applies [`Grid::step`] exactly `generations` times.
    pub fn advance(&self, generations: usize) -> Self {
        (0..generations).fold(self.clone(), |grid, _| grid.step())
    }

    fn contains(&self, (x, y): (isize, isize)) -> bool {
        (0..self.width() as isize).contains(&x) && (0..self.height() as isize).contains(&y)
    }
}
