// grid.rs - Grid types for the animated pixel grid

use crate::palette::CellColor;

// Compile-time grid size configuration
pub const ROWS: usize = 10;                           // Number of rows
pub const COLS: usize = 20;                           // Number of columns
pub const CELL_COUNT: usize = ROWS * COLS;

pub type TRow = [Cell; COLS];
pub type TGrid = [TRow; ROWS];

/// A single clickable pixel holding a palette color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    color: CellColor,
}

impl Cell {
    pub fn color(&self) -> CellColor {
        self.color
    }

    pub fn color_index(&self) -> usize {
        self.color.index()
    }

    /// Advance to the next palette color.
    pub fn toggle_color(&mut self) {
        self.color = self.color.next();
    }

    pub fn is_active(&self) -> bool {
        self.color != CellColor::White
    }

    /// Binary reset: active cells become black, inactive ones white.
    /// Only ever lands on palette index 0 or 1.
    pub fn set_active(&mut self, active: bool) {
        self.color = if active { CellColor::Black } else { CellColor::White };
    }
}

/// Fixed ROWS x COLS matrix of cells, addressed by (row, col).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    cells: TGrid,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(row)?.get(col)
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.cells.get_mut(row)?.get_mut(col)
    }

    pub fn row(&self, row: usize) -> Option<&TRow> {
        self.cells.get(row)
    }

    pub fn rows(&self) -> impl Iterator<Item = &TRow> {
        self.cells.iter()
    }

    /// Toggle only the addressed cell. Returns false for out-of-range coordinates.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> bool {
        match self.cell_mut(row, col) {
            Some(cell) => {
                cell.toggle_color();
                true
            }
            None => false,
        }
    }

    /// Rotate every row one column to the right; the last column wraps to column 0.
    pub fn shift_right(&mut self) {
        for row in self.cells.iter_mut() {
            let last = row[COLS - 1];
            for col in (1..COLS).rev() {
                row[col] = row[col - 1];
            }
            row[0] = last;
        }
    }

    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            cell.set_active(false);
        }
    }

    pub fn active_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_active()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(grid: &Grid, row: usize) -> Vec<usize> {
        grid.row(row).unwrap().iter().map(Cell::color_index).collect()
    }

    #[test]
    fn toggle_eight_times_is_identity() {
        for start in CellColor::ALL {
            let mut cell = Cell { color: start };
            for _ in 0..8 {
                cell.toggle_color();
            }
            assert_eq!(cell.color(), start);
        }
    }

    #[test]
    fn set_active_is_binary_regardless_of_prior_color() {
        for start in CellColor::ALL {
            let mut cell = Cell { color: start };
            cell.set_active(true);
            assert_eq!(cell.color_index(), 1);
            assert!(cell.is_active());

            cell = Cell { color: start };
            cell.set_active(false);
            assert_eq!(cell.color_index(), 0);
            assert!(!cell.is_active());
        }
    }

    #[test]
    fn only_white_is_inactive() {
        for color in CellColor::ALL {
            let cell = Cell { color };
            assert_eq!(cell.is_active(), color.index() != 0);
        }
    }

    #[test]
    fn toggle_cell_touches_only_that_cell() {
        let mut grid = Grid::new();
        assert!(grid.toggle_cell(3, 7));
        assert!(grid.toggle_cell(3, 7));

        assert_eq!(grid.cell(3, 7).unwrap().color(), CellColor::Red);
        assert_eq!(grid.active_count(), 1);
        assert!(!grid.cell(3, 6).unwrap().is_active());
        assert!(!grid.cell(2, 7).unwrap().is_active());
    }

    #[test]
    fn toggle_cell_out_of_range_is_ignored() {
        let mut grid = Grid::new();
        assert!(!grid.toggle_cell(ROWS, 0));
        assert!(!grid.toggle_cell(0, COLS));
        assert_eq!(grid, Grid::new());
    }

    #[test]
    fn shift_right_moves_last_column_to_first() {
        let mut grid = Grid::new();
        grid.toggle_cell(0, COLS - 1);
        grid.toggle_cell(0, 0);
        grid.toggle_cell(0, 0);
        grid.toggle_cell(4, 5);

        grid.shift_right();

        assert_eq!(grid.cell(0, 0).unwrap().color(), CellColor::Black);
        assert_eq!(grid.cell(0, 1).unwrap().color(), CellColor::Red);
        assert!(!grid.cell(0, COLS - 1).unwrap().is_active());
        assert!(grid.cell(4, 6).unwrap().is_active());
        assert!(!grid.cell(4, 5).unwrap().is_active());
    }

    #[test]
    fn shift_right_cols_times_restores_every_row() {
        let mut grid = Grid::new();
        for row in 0..ROWS {
            for _ in 0..=row % 7 {
                grid.toggle_cell(row, (row * 3) % COLS);
            }
            grid.toggle_cell(row, COLS - 1);
        }
        let original = grid.clone();

        for step in 1..=COLS {
            grid.shift_right();
            if step < COLS {
                assert_ne!(grid, original);
            }
        }
        assert_eq!(grid, original);
    }

    #[test]
    fn shift_right_preserves_row_contents() {
        let mut grid = Grid::new();
        for col in 0..COLS {
            for _ in 0..col % 8 {
                grid.toggle_cell(2, col);
            }
        }
        let before = indices(&grid, 2);
        grid.shift_right();
        let after = indices(&grid, 2);

        assert_eq!(after[0], before[COLS - 1]);
        assert_eq!(&after[1..], &before[..COLS - 1]);
    }

    #[test]
    fn clear_resets_every_cell() {
        let mut grid = Grid::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                for _ in 0..(row + col) % 8 {
                    grid.toggle_cell(row, col);
                }
            }
        }
        assert!(grid.active_count() > 0);

        grid.clear();

        assert_eq!(grid.active_count(), 0);
        for row in grid.rows() {
            for cell in row {
                assert_eq!(cell.color_index(), 0);
                assert!(!cell.is_active());
            }
        }
    }
}
