//! Display and output formatting utilities

use crate::config::DisplayStyle;
use crate::game_of_life::Grid;
use crate::session::SurveyEntry;

/// Renders boards and reports as terminal text
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in the requested style
    pub fn format_grid(grid: &Grid, style: DisplayStyle) -> String {
        match style {
            DisplayStyle::Compact => Self::format_grid_compact(grid),
            DisplayStyle::Coordinates => Self::format_grid_with_coords(grid),
        }
    }

    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        let mut output = String::with_capacity(grid.rows() * (grid.cols() + 1) * 2);
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                output.push(if Self::alive(grid, row, col) { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for col in 0..grid.cols() {
            output.push_str(&format!("{:2}", col % 10));
        }
        output.push('\n');

        for row in 0..grid.rows() {
            output.push_str(&format!("{:2} ", row));
            for col in 0..grid.cols() {
                output.push_str(if Self::alive(grid, row, col) { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// One-line status shown under each frame
    pub fn format_status(generation: u64, grid: &Grid) -> String {
        let total = grid.rows() * grid.cols();
        format!(
            "Gen: {} | Population: {} | Density: {:.1}%",
            generation,
            grid.population(),
            grid.population() as f64 / total as f64 * 100.0
        )
    }

    /// Format pattern survey results as a table
    pub fn format_survey(entries: &[SurveyEntry]) -> String {
        let mut output = String::new();

        output.push_str("Pattern  | Cells | Placed | Behavior\n");
        output.push_str("---------|-------|--------|---------------------------\n");

        for entry in entries {
            output.push_str(&format!(
                "{:8} | {:5} | {:6} | {}\n",
                entry.pattern, entry.cells, entry.placed_cells, entry.behavior
            ));
        }

        output
    }

    fn alive(grid: &Grid, row: usize, col: usize) -> bool {
        grid.get(row, col).is_ok_and(|cell| cell.is_alive())
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }

    /// Generation counter accent
    pub fn highlight(text: &str) -> String {
        Self::colored(text, Color::Magenta)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::{load_pattern, Behavior};

    #[test]
    fn test_grid_formatting() {
        let cells = vec![
            vec![true, false, true],
            vec![false, true, false],
            vec![true, false, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();

        let compact = GridFormatter::format_grid_compact(&grid);
        assert_eq!(compact, "█·█\n·█·\n█·█\n");

        let with_coords = GridFormatter::format_grid(&grid, DisplayStyle::Coordinates);
        assert!(with_coords.starts_with("    0 1 2\n"));
        assert!(with_coords.contains(" 1 ··██··"));
    }

    #[test]
    fn test_status_line() {
        let grid = load_pattern("Block", 10, 10).unwrap();
        assert_eq!(
            GridFormatter::format_status(3, &grid),
            "Gen: 3 | Population: 4 | Density: 4.0%"
        );
    }

    #[test]
    fn test_survey_table() {
        let entries = vec![SurveyEntry {
            pattern: "Blinker".to_string(),
            cells: 3,
            placed_cells: 3,
            behavior: Behavior::Oscillator { period: 2 },
        }];
        let table = GridFormatter::format_survey(&entries);
        assert!(table.contains("Blinker  |     3 |      3 | oscillator (period 2)"));
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        assert!(colored.contains("test"));
        assert!(ColorOutput::success("OK").contains("OK"));
    }
}
