use thiserror::Error;

/// A single grid square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Land,
    Water,
}

/// A rectangular map of [`Cell`]s stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

/// Errors that can occur when parsing a [`Grid`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unexpected {found:?} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, found: char },
}

impl Grid {
    /// Parses rows written with `'1'` for land and `'0'` for water.
    ///
    /// # Errors
    ///
    /// Returns an error if rows differ in width or contain any other character.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, |row| row.as_ref().chars().count());
        let mut cells = Vec::with_capacity(rows.len() * cols);

        for (row, text) in rows.iter().enumerate() {
            let text = text.as_ref();
            let found = text.chars().count();
            if found != cols {
                return Err(GridError::Ragged {
                    row,
                    expected: cols,
                    found,
                });
            }
            for (col, found) in text.chars().enumerate() {
                let cell = match found {
                    '1' => Cell::Land,
                    '0' => Cell::Water,
                    _ => return Err(GridError::InvalidCell { row, col, found }),
                };
                cells.push(cell);
            }
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the cell at `(row, col)`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Returns the in-bounds orthogonal neighbours of `(row, col)`.
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        let up = row.checked_sub(1).map(|r| (r, col));
        let down = Some((row + 1, col));
        let left = col.checked_sub(1).map(|c| (row, c));
        let right = Some((row, col + 1));
        [up, down, left, right]
            .into_iter()
            .flatten()
            .filter(|&(r, c)| r < self.rows && c < self.cols)
    }
}
