use std::str::FromStr;

use crate::error::{GridError, GridResult};

/// Dense row-major matrix of cell values.
///
/// Cells are `i32` while totals are summed in `i64`, so no grid that fits in
/// memory can overflow a total.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<i32>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize, cells: Vec<i32>) -> GridResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidInput(format!(
                "grid dimensions must be positive, got {rows}x{cols}"
            )));
        }
        let expected = rows.checked_mul(cols).ok_or_else(|| {
            GridError::InvalidInput(format!("grid dimensions {rows}x{cols} overflow"))
        })?;
        if cells.len() != expected {
            return Err(GridError::InvalidInput(format!(
                "expected {expected} cells for a {rows}x{cols} grid, got {}",
                cells.len()
            )));
        }
        Ok(Self { rows, cols, cells })
    }

    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> GridResult<Self> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(GridError::InvalidInput(format!(
                    "row {i} has {} cells, expected {cols}",
                    row.len()
                )));
            }
            cells.extend_from_slice(row);
        }
        Self::new(rows.len(), cols, cells)
    }

    /// Reads `n m` followed by `n * m` whitespace-separated values in row-major
    /// order. Tokens after the last cell are ignored.
    pub fn parse(input: &str) -> GridResult<Self> {
        let mut tokens = input.split_ascii_whitespace();
        let rows = parse_dimension(tokens.next(), "row count")?;
        let cols = parse_dimension(tokens.next(), "column count")?;
        let total = rows.checked_mul(cols).ok_or_else(|| {
            GridError::InvalidInput(format!("grid dimensions {rows}x{cols} overflow"))
        })?;

        let mut cells = Vec::with_capacity(total.min(1 << 20));
        for index in 0..total {
            let token = tokens.next().ok_or_else(|| {
                GridError::InvalidInput(format!(
                    "input ended after {index} of {total} cell values"
                ))
            })?;
            let value = token.parse::<i32>().map_err(|err| {
                GridError::InvalidInput(format!(
                    "cell ({}, {}) is not a 32-bit integer ({token:?}): {err}",
                    index / cols,
                    index % cols
                ))
            })?;
            cells.push(value);
        }
        Self::new(rows, cols, cells)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value at `(row, col)`, both 0-based; `None` outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    #[inline]
    pub fn row(&self, row: usize) -> Option<&[i32]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Widened cell value for the DP; callers keep `(row, col)` in bounds.
    #[inline]
    pub(crate) fn cell(&self, row: usize, col: usize) -> i64 {
        assert!(col < self.cols, "column {col} out of bounds");
        i64::from(self.cells[row * self.cols + col])
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_dimension(token: Option<&str>, what: &str) -> GridResult<usize> {
    let token = token.ok_or_else(|| GridError::InvalidInput(format!("missing {what}")))?;
    let value = token.parse::<i64>().map_err(|err| {
        GridError::InvalidInput(format!("{what} is not an integer ({token:?}): {err}"))
    })?;
    if value < 1 {
        return Err(GridError::InvalidInput(format!(
            "{what} must be at least 1, got {value}"
        )));
    }
    usize::try_from(value)
        .map_err(|_| GridError::InvalidInput(format!("{what} {value} does not fit in memory")))
}
