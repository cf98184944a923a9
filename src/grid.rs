use std::{
    fmt::{Display, Write},
    str::FromStr,
};

use itertools::Itertools;

use crate::error::{Error, Result};

/// One generation of a bounded board.
///
/// Cells are stored row-major. Coordinates are `(x, y)` with `x` the column
/// and `y` the row; anything outside the board reads as dead and ignores
/// writes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = width
            .checked_mul(height)
            .filter(|&len| len > 0 && len <= isize::MAX as usize)
            .ok_or(Error::InvalidDimensions { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![false; len],
        })
    }

    pub fn from_live_cells(
        width: usize,
        height: usize,
        cells: impl IntoIterator<Item = (isize, isize)>,
    ) -> Result<Self> {
        let mut grid = Self::new(width, height)?;
        for (x, y) in cells {
            grid.set(x, y, true);
        }
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: isize, y: isize) -> bool {
        self.index(x, y).is_some_and(|i| self.cells[i])
    }

    pub fn set(&mut self, x: isize, y: isize, alive: bool) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = alive;
        }
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Live cells in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .positions(|&alive| alive)
            .map(move |i| (i % width, i / width))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.width)
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// An all-dead grid with the same dimensions.
    pub fn blank(&self) -> Self {
        Self {
            cells: vec![false; self.cells.len()],
            ..*self
        }
    }

    pub(crate) fn cells(&self) -> &[bool] {
        &self.cells
    }

    fn index(&self, x: isize, y: isize) -> Option<usize> {
        let x = usize::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(y * self.width + x)
    }
}

/// Text form: one line per row, `o` alive and `.` dead. Surrounding
/// whitespace and blank lines are skipped; short rows are padded with dead
/// cells.
impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lines = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect_vec();
        let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
        let mut grid = Grid::new(width, lines.len())?;
        for (y, line) in lines.iter().enumerate() {
            for (x, c) in line.chars().enumerate() {
                match c {
                    '.' => (),
                    'o' => grid.set(x as isize, y as isize, true),
                    _ => return Err(Error::ParseBoard(c)),
                }
            }
        }
        Ok(grid)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                f.write_char('\n')?;
            }
            for &alive in row {
                f.write_char(if alive { 'o' } else { '.' })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_dimensions() {
        assert_eq!(
            Grid::new(0, 3),
            Err(Error::InvalidDimensions {
                width: 0,
                height: 3
            })
        );
        assert!(Grid::new(3, 0).is_err());
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn test_rejects_unaddressable_dimensions() {
        assert_eq!(
            Grid::new(usize::MAX, 2),
            Err(Error::InvalidDimensions {
                width: usize::MAX,
                height: 2
            })
        );
        assert!(Grid::new(isize::MAX as usize + 1, 1).is_err());
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = Grid::new(3, 2).unwrap();
        for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 2), (isize::MAX, isize::MIN)] {
            grid.set(x, y, true);
            assert!(!grid.get(x, y));
        }
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(4, 3).unwrap();
        grid.set(3, 2, true);
        grid.set(0, 1, true);
        assert!(grid.get(3, 2));
        assert!(!grid.get(2, 3));
        assert_eq!(grid.live_cells().collect_vec(), [(0, 1), (3, 2)]);
        grid.set(3, 2, false);
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn test_value_equality() {
        let a = Grid::from_live_cells(4, 4, [(1, 1), (2, 2)]).unwrap();
        let mut b = Grid::new(4, 4).unwrap();
        b.set(2, 2, true);
        b.set(1, 1, true);
        assert_eq!(a, b);
        // Same cells, different shape.
        let c = Grid::from_live_cells(4, 5, [(1, 1), (2, 2)]).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_text_form() {
        let grid = Grid::from_str(
            "
            .o..
            ..o
            ooo.
        ",
        )
        .unwrap();
        assert_eq!((grid.width(), grid.height()), (4, 3));
        assert_eq!(grid.to_string(), ".o..\n..o.\nooo.");
        assert_eq!(Grid::from_str("o x"), Err(Error::ParseBoard(' ')));
        assert!(matches!(
            Grid::from_str("\n  \n"),
            Err(Error::InvalidDimensions { .. })
        ));
    }
}
