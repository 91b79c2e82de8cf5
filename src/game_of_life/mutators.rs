//! Pure grid mutators: single-cell toggling and random boards

use super::{Cell, Grid, GridError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Probability of a cell starting alive on a random board
pub const DEFAULT_ALIVE_PROBABILITY: f64 = 0.25;

/// Return a copy of `grid` with the cell at (row, col) flipped
pub fn toggle_cell(grid: &Grid, row: usize, col: usize) -> Result<Grid, GridError> {
    let current = grid.get(row, col)?;
    let mut next = grid.clone();
    next.set(row, col, current.toggled())?;
    Ok(next)
}

/// Build a board where each cell is independently alive with `alive_probability`.
///
/// The same `seed` always produces the same board. Without a seed the
/// generator is seeded from OS entropy.
pub fn random_grid(
    rows: usize,
    cols: usize,
    alive_probability: f64,
    seed: Option<u64>,
) -> Result<Grid, GridError> {
    if !(0.0..=1.0).contains(&alive_probability) {
        return Err(GridError::InvalidProbability(alive_probability));
    }

    let mut grid = Grid::new(rows, cols)?;
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    for cell in grid.cells_mut() {
        *cell = Cell::from(rng.gen_bool(alive_probability));
    }

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_toggle_flips_single_cell() {
        let grid = Grid::new(4, 4).unwrap();
        let toggled = toggle_cell(&grid, 2, 3).unwrap();

        assert_eq!(toggled.living_cells(), vec![(2, 3)]);
        assert!(grid.is_empty(), "input grid must be left untouched");
    }

    #[test]
    fn test_toggle_out_of_bounds() {
        let grid = Grid::new(4, 4).unwrap();
        assert!(matches!(
            toggle_cell(&grid, 4, 0),
            Err(GridError::OutOfBounds { row: 4, col: 0, .. })
        ));
    }

    #[test]
    fn test_random_grid_is_reproducible() {
        let a = random_grid(30, 40, DEFAULT_ALIVE_PROBABILITY, Some(7)).unwrap();
        let b = random_grid(30, 40, DEFAULT_ALIVE_PROBABILITY, Some(7)).unwrap();
        let c = random_grid(30, 40, DEFAULT_ALIVE_PROBABILITY, Some(8)).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.dimensions(), (30, 40));
    }

    #[test]
    fn test_random_grid_density() {
        let grid = random_grid(100, 100, DEFAULT_ALIVE_PROBABILITY, Some(42)).unwrap();
        let density = grid.population() as f64 / 10_000.0;

        assert!((0.2..0.3).contains(&density), "density {density}");
    }

    #[test]
    fn test_random_grid_extremes() {
        assert!(random_grid(5, 5, 0.0, None).unwrap().is_empty());
        assert_eq!(random_grid(5, 5, 1.0, None).unwrap().population(), 25);
    }

    #[test]
    fn test_random_grid_rejects_bad_input() {
        assert_eq!(
            random_grid(5, 5, 1.5, Some(1)),
            Err(GridError::InvalidProbability(1.5))
        );
        assert!(random_grid(5, 5, f64::NAN, Some(1)).is_err());
        assert!(matches!(
            random_grid(0, 5, 0.5, Some(1)),
            Err(GridError::InvalidDimension { .. })
        ));
    }

    proptest! {
        #[test]
        fn toggle_is_its_own_inverse(seed in any::<u64>(), row in 0usize..8, col in 0usize..9) {
            let grid = random_grid(8, 9, 0.5, Some(seed)).unwrap();
            let twice = toggle_cell(&toggle_cell(&grid, row, col).unwrap(), row, col).unwrap();
            prop_assert_eq!(twice, grid);
        }
    }
}
