//! Built-in pattern registry and board seeding

use super::{Cell, Grid, GridError};
use std::fmt;
use std::str::FromStr;

/// Side length of the reference box every pattern is centered by
const REFERENCE_BOX: usize = 15;

/// A named starting configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    Glider,
    Blinker,
    Block,
    Beacon,
    Pulsar,
}

const GLIDER: &[(usize, usize)] = &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
const BLINKER: &[(usize, usize)] = &[(1, 0), (1, 1), (1, 2)];
const BLOCK: &[(usize, usize)] = &[(0, 0), (0, 1), (1, 0), (1, 1)];
const BEACON: &[(usize, usize)] = &[(0, 0), (0, 1), (1, 0), (2, 3), (3, 2), (3, 3)];
#[rustfmt::skip]
const PULSAR: &[(usize, usize)] = &[
    (2, 4), (2, 5), (2, 6), (2, 10), (2, 11), (2, 12),
    (4, 2), (4, 7), (4, 9), (4, 14),
    (5, 2), (5, 7), (5, 9), (5, 14),
    (6, 2), (6, 7), (6, 9), (6, 14),
    (7, 4), (7, 5), (7, 6), (7, 10), (7, 11), (7, 12),
    (9, 4), (9, 5), (9, 6), (9, 10), (9, 11), (9, 12),
    (10, 2), (10, 7), (10, 9), (10, 14),
    (11, 2), (11, 7), (11, 9), (11, 14),
    (12, 2), (12, 7), (12, 9), (12, 14),
    (14, 4), (14, 5), (14, 6), (14, 10), (14, 11), (14, 12),
];

impl Pattern {
    /// Every registered pattern, in display order
    pub const ALL: [Pattern; 5] = [
        Pattern::Glider,
        Pattern::Blinker,
        Pattern::Block,
        Pattern::Beacon,
        Pattern::Pulsar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Glider => "Glider",
            Pattern::Blinker => "Blinker",
            Pattern::Block => "Block",
            Pattern::Beacon => "Beacon",
            Pattern::Pulsar => "Pulsar",
        }
    }

    /// Live cells as (row, col) offsets from the pattern origin
    pub fn cells(self) -> &'static [(usize, usize)] {
        match self {
            Pattern::Glider => GLIDER,
            Pattern::Blinker => BLINKER,
            Pattern::Block => BLOCK,
            Pattern::Beacon => BEACON,
            Pattern::Pulsar => PULSAR,
        }
    }

    /// Look a pattern up by its exact registry name
    pub fn from_name(name: &str) -> Result<Self, GridError> {
        Self::ALL
            .iter()
            .find(|p| p.name() == name)
            .copied()
            .ok_or_else(|| GridError::UnknownPattern(name.to_string()))
    }

    /// Seed an empty `rows` x `cols` grid with this pattern.
    ///
    /// The pattern origin is placed at `(rows / 2 - 7, cols / 2 - 7)`, which
    /// centers a 15x15 box regardless of the pattern's own extent. Cells that
    /// land outside the grid on any side are skipped.
    pub fn place(self, rows: usize, cols: usize) -> Result<Grid, GridError> {
        let mut grid = Grid::new(rows, cols)?;
        let half = (REFERENCE_BOX / 2) as isize;
        let offset_r = (rows / 2) as isize - half;
        let offset_c = (cols / 2) as isize - half;

        for &(dr, dc) in self.cells() {
            let r = dr as isize + offset_r;
            let c = dc as isize + offset_c;
            if r < 0 || c < 0 {
                continue;
            }
            let (r, c) = (r as usize, c as usize);
            if grid.contains(r, c) {
                grid.set(r, c, Cell::Alive)?;
            }
        }

        Ok(grid)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Build a fresh grid seeded with the named pattern
pub fn load_pattern(name: &str, rows: usize, cols: usize) -> Result<Grid, GridError> {
    Pattern::from_name(name)?.place(rows, cols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(Pattern::from_name("Glider"), Ok(Pattern::Glider));
        assert_eq!("Pulsar".parse::<Pattern>(), Ok(Pattern::Pulsar));
        assert_eq!(
            "pulsar".parse::<Pattern>(),
            Err(GridError::UnknownPattern("pulsar".to_string()))
        );
        assert_eq!(
            Pattern::from_name("Nonexistent"),
            Err(GridError::UnknownPattern("Nonexistent".to_string()))
        );
    }

    #[test]
    fn test_registry_sizes() {
        let sizes: Vec<_> = Pattern::ALL.iter().map(|p| p.cells().len()).collect();
        assert_eq!(sizes, vec![5, 3, 4, 6, 48]);
    }

    #[test]
    fn test_glider_placement_offset() {
        let grid = load_pattern("Glider", 50, 50).unwrap();
        let expected: Vec<_> = GLIDER.iter().map(|&(r, c)| (r + 18, c + 18)).collect();

        assert_eq!(grid.living_cells(), expected);
    }

    #[test]
    fn test_odd_dimensions_floor() {
        let grid = load_pattern("Block", 31, 21).unwrap();
        assert_eq!(grid.living_cells(), vec![(8, 3), (8, 4), (9, 3), (9, 4)]);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        for name in ["glider", "GLIDER", "bLinker", "block ", ""] {
            assert_eq!(
                load_pattern(name, 50, 50),
                Err(GridError::UnknownPattern(name.to_string())),
                "{name:?} must not resolve"
            );
        }
    }

    #[test]
    fn test_loading_replaces_previous_pattern() {
        let blinker = load_pattern("Blinker", 50, 50).unwrap();
        let glider = load_pattern("Glider", 50, 50).unwrap();

        let expected: Vec<_> = GLIDER.iter().map(|&(r, c)| (r + 18, c + 18)).collect();
        assert_eq!(glider.living_cells(), expected);

        let blinker_only: Vec<_> = blinker
            .living_cells()
            .into_iter()
            .filter(|cell| !expected.contains(cell))
            .collect();
        assert!(!blinker_only.is_empty());
        for (r, c) in blinker_only {
            assert_eq!(glider.get(r, c), Ok(Cell::Dead), "({r}, {c}) carried over");
        }
    }

    #[test]
    fn test_unknown_pattern_returns_no_grid() {
        let result = load_pattern("Nonexistent", 50, 50);
        assert!(matches!(result, Err(GridError::UnknownPattern(name)) if name == "Nonexistent"));
    }

    #[test]
    fn test_undersized_grid_clips() {
        // offsets are 5 - 7 = -2; pulsar rows/cols below 2 and above 11 fall off
        let grid = load_pattern("Pulsar", 10, 10).unwrap();
        let expected: Vec<_> = PULSAR
            .iter()
            .filter(|&&(r, c)| (2..12).contains(&r) && (2..12).contains(&c))
            .map(|&(r, c)| (r - 2, c - 2))
            .collect();

        assert_eq!(grid.living_cells(), expected);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(
            load_pattern("Block", 0, 50),
            Err(GridError::InvalidDimension { .. })
        ));
    }
}
