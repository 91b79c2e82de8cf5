//! Grid representation and neighbor counting for Game of Life

use super::GridError;

/// State of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// The opposite state
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

/// A fixed-size rectangular Game of Life board with hard (non-wrapping) edges.
///
/// Dimensions never change after construction. Engine operations take a grid
/// by reference and hand back a new one, so a grid can be rendered while the
/// next generation is being computed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell dead
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimension { rows, cols });
        }

        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        })
    }

    /// Create a grid from rows of booleans (`true` is alive)
    pub fn from_cells(cells: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimension { rows, cols });
        }

        if let Some(row) = cells.iter().find(|row| row.len() != cols) {
            return Err(GridError::DimensionMismatch {
                expected_rows: rows,
                expected_cols: cols,
                actual_rows: rows,
                actual_cols: row.len(),
            });
        }

        Ok(Self {
            rows,
            cols,
            cells: cells.into_iter().flatten().map(Cell::from).collect(),
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// (rows, cols)
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if self.contains(row, col) {
            Ok(self.index(row, col))
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Get the cell at coordinates
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GridError> {
        let idx = self.check_bounds(row, col)?;
        Ok(self.cells[idx])
    }

    /// Set the cell at coordinates. Only used while building a fresh grid.
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GridError> {
        let idx = self.check_bounds(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    pub(crate) fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Count living cells in the Moore neighborhood of (row, col).
    ///
    /// Offsets that fall outside the grid count as dead; the board does not wrap.
    pub fn count_neighbors(&self, row: usize, col: usize) -> Result<u8, GridError> {
        self.check_bounds(row, col)?;
        Ok(self.neighbors_unchecked(row, col))
    }

    /// Neighbor count for a coordinate already known to be in range
    pub(crate) fn neighbors_unchecked(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;

        for dr in [-1isize, 0, 1] {
            for dc in [-1isize, 0, 1] {
                if dr == 0 && dc == 0 {
                    continue;
                }

                let r = row as isize + dr;
                let c = col as isize + dc;

                if self.is_neighbor_alive(r, c) {
                    count += 1;
                }
            }
        }

        count
    }

    fn is_neighbor_alive(&self, row: isize, col: isize) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        let (row, col) = (row as usize, col as usize);
        self.contains(row, col) && self.cells[self.index(row, col)].is_alive()
    }

    /// Coordinates of all living cells in row-major order
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(idx, _)| (idx / self.cols, idx % self.cols))
            .collect()
    }

    /// Number of living cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// True when no cell is alive
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.cells().len(), 12);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(GridError::InvalidDimension { rows: 0, cols: 5 })
        );
        assert!(Grid::new(5, 0).is_err());
        assert!(Grid::from_cells(vec![]).is_err());
        assert!(Grid::from_cells(vec![vec![]]).is_err());
    }

    #[test]
    fn test_grid_from_cells() {
        let cells = vec![
            vec![true, false, true],
            vec![false, true, false],
            vec![true, false, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        assert_eq!(grid.dimensions(), (3, 3));
        assert_eq!(grid.population(), 5);
        assert_eq!(grid.get(1, 1), Ok(Cell::Alive));
        assert_eq!(grid.get(0, 1), Ok(Cell::Dead));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let cells = vec![vec![true, false], vec![true]];
        assert!(matches!(
            Grid::from_cells(cells),
            Err(GridError::DimensionMismatch { actual_cols: 1, .. })
        ));
    }

    #[test]
    fn test_out_of_bounds_access() {
        let grid = Grid::new(2, 3).unwrap();
        assert_eq!(
            grid.get(2, 0),
            Err(GridError::OutOfBounds { row: 2, col: 0, rows: 2, cols: 3 })
        );
        assert!(grid.get(0, 3).is_err());
        assert!(grid.count_neighbors(5, 5).is_err());
    }

    #[test]
    fn test_neighbor_counting() {
        let cells = vec![
            vec![true, true, true],
            vec![true, false, true],
            vec![true, true, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();

        assert_eq!(grid.count_neighbors(1, 1), Ok(8));
        // Corner sees two ring cells; the center is dead
        assert_eq!(grid.count_neighbors(0, 0), Ok(2));
        assert_eq!(grid.count_neighbors(0, 1), Ok(4));
    }

    #[test]
    fn test_single_corner_cell_does_not_wrap() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(0, 0, Cell::Alive).unwrap();

        assert_eq!(grid.count_neighbors(0, 0), Ok(0));
        for (r, c) in [(0, 1), (1, 0), (1, 1)] {
            assert_eq!(grid.count_neighbors(r, c), Ok(1));
        }
        // Opposite edges would see (0, 0) on a torus
        for (r, c) in [(4, 4), (0, 4), (4, 0), (4, 1), (1, 4)] {
            assert_eq!(grid.count_neighbors(r, c), Ok(0));
        }
    }

    #[test]
    fn test_living_cells_row_major() {
        let cells = vec![vec![false, true], vec![true, true]];
        let grid = Grid::from_cells(cells).unwrap();
        assert_eq!(grid.living_cells(), vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_cell_toggle() {
        assert_eq!(Cell::Alive.toggled(), Cell::Dead);
        assert_eq!(Cell::Dead.toggled(), Cell::Alive);
        assert_eq!(Cell::from(true), Cell::Alive);
    }

    proptest! {
        #[test]
        fn neighbor_count_never_exceeds_eight(
            cells in prop::collection::vec(prop::collection::vec(any::<bool>(), 6), 6),
            row in 0usize..6,
            col in 0usize..6,
        ) {
            let grid = Grid::from_cells(cells).unwrap();
            let count = grid.count_neighbors(row, col).unwrap();
            prop_assert!(count <= 8);
        }
    }
}
