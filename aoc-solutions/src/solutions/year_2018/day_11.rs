use aoc_core::{AocParser, ParseError, PartSolver, SolveError};
use aoc_macros::{AocSolver, AutoRegisterSolver};
use rayon::prelude::*;

const GRID_SIZE: usize = 300;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(parts = 2)]
#[aoc(year = 2018, day = 11, tags = ["2018", "grid"])]
pub struct Solver;

/// Fuel cell power levels as a summed-area table, so any square total is
/// four lookups regardless of size.
#[derive(Debug)]
pub struct PowerGrid {
    // (GRID_SIZE + 1)^2, row-major, row and column 0 are zero
    sums: Vec<i64>,
}

impl PowerGrid {
    fn new(serial: i64) -> Self {
        let width = GRID_SIZE + 1;
        let mut sums = vec![0i64; width * width];

        for y in 1..=GRID_SIZE {
            for x in 1..=GRID_SIZE {
                let power = cell_power(serial, x as i64, y as i64);
                sums[y * width + x] = power
                    + sums[(y - 1) * width + x]
                    + sums[y * width + x - 1]
                    - sums[(y - 1) * width + x - 1];
            }
        }
        Self { sums }
    }

    /// Total power of the square with top-left (x, y) and the given size
    fn square(&self, x: usize, y: usize, size: usize) -> i64 {
        let width = GRID_SIZE + 1;
        let (x0, y0) = (x - 1, y - 1);
        let (x1, y1) = (x0 + size, y0 + size);
        self.sums[y1 * width + x1] + self.sums[y0 * width + x0]
            - self.sums[y0 * width + x1]
            - self.sums[y1 * width + x0]
    }

    /// Best square of the given size as (total, x, y)
    fn best_of_size(&self, size: usize) -> (i64, usize, usize) {
        let mut best = (i64::MIN, 0, 0);
        for y in 1..=GRID_SIZE - size + 1 {
            for x in 1..=GRID_SIZE - size + 1 {
                let total = self.square(x, y, size);
                if total > best.0 {
                    best = (total, x, y);
                }
            }
        }
        best
    }
}

fn cell_power(serial: i64, x: i64, y: i64) -> i64 {
    let rack = x + 10;
    ((rack * y + serial) * rack / 100) % 10 - 5
}

impl AocParser for Solver {
    type SharedData<'a> = PowerGrid;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let serial = input
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidFormat(format!("bad serial: {}", input.trim())))?;
        Ok(PowerGrid::new(serial))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (_, x, y) = shared.best_of_size(3);
        Ok(format!("{},{}", x, y))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (_, x, y, size) = (1..=GRID_SIZE)
            .into_par_iter()
            .map(|size| {
                let (total, x, y) = shared.best_of_size(size);
                (total, x, y, size)
            })
            .max()
            .unwrap_or((0, 0, 0, 0));
        Ok(format!("{},{},{}", x, y, size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn published_cell_powers() {
        assert_eq!(cell_power(8, 3, 5), 4);
        assert_eq!(cell_power(57, 122, 79), -5);
        assert_eq!(cell_power(39, 217, 196), 0);
        assert_eq!(cell_power(71, 101, 153), 4);
    }

    #[test]
    fn best_three_by_three() {
        let grid = PowerGrid::new(18);
        assert_eq!(grid.best_of_size(3), (29, 33, 45));

        let grid = PowerGrid::new(42);
        assert_eq!(grid.best_of_size(3), (30, 21, 61));
    }

    #[test]
    fn best_of_any_size() {
        let grid = PowerGrid::new(18);
        let best = (1..=GRID_SIZE)
            .map(|size| {
                let (total, x, y) = grid.best_of_size(size);
                (total, x, y, size)
            })
            .max()
            .unwrap();
        assert_eq!(best, (113, 90, 269, 16));
    }
}
