//! Conversions between [`Grid`] and its external forms.
//!
//! [`Snapshot`] is the canonical packed form used to compare generations and
//! to key the search history. [`BoardState`] is the row-major `0`/`1` matrix
//! exchanged with callers.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    grid::Grid,
};

const WORD_BITS: usize = u64::BITS as usize;

/// Dimensions plus row-major cells packed 64 to a word.
///
/// Bits past the last cell are always zero, so two snapshots are equal
/// exactly when their grids are.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Snapshot {
    width: usize,
    height: usize,
    words: Box<[u64]>,
}

impl Grid {
    pub fn snapshot(&self) -> Snapshot {
        let words = self
            .cells()
            .chunks(WORD_BITS)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .filter(|&(_, &alive)| alive)
                    .fold(0u64, |word, (bit, _)| word | 1 << bit)
            })
            .collect();
        Snapshot {
            width: self.width(),
            height: self.height(),
            words,
        }
    }
}

impl Snapshot {
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn to_grid(&self) -> Result<Grid> {
        let mut grid = Grid::new(self.width, self.height)?;
        for i in 0..self.width * self.height {
            if self.words[i / WORD_BITS] >> (i % WORD_BITS) & 1 == 1 {
                grid.set((i % self.width) as isize, (i / self.width) as isize, true);
            }
        }
        Ok(grid)
    }
}

/// A board as exchanged with callers: `cells[y][x]`, `1` alive, `0` dead.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: Vec<Vec<i64>>,
}

impl From<&Grid> for BoardState {
    fn from(grid: &Grid) -> Self {
        let cells = grid
            .rows()
            .map(|row| row.iter().map(|&alive| i64::from(alive)).collect())
            .collect();
        Self { cells }
    }
}

impl BoardState {
    /// `(width, height)` of the grid this state decodes to: the first row
    /// fixes the width.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.cells.first().map_or(0, Vec::len), self.cells.len())
    }
}

/// The first row fixes the width. Only `1` is alive; short rows are padded
/// with dead cells and long rows are cut.
impl TryFrom<&BoardState> for Grid {
    type Error = Error;

    fn try_from(state: &BoardState) -> Result<Self> {
        let (width, height) = state.dimensions();
        let live = state.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .positions(|&cell| cell == 1)
                .map(move |x| (x as isize, y as isize))
        });
        Grid::from_live_cells(width, height, live)
    }
}
