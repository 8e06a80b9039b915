use drills_core::{Cell, Grid};

/// Returns the number of islands: groups of land cells joined horizontally
/// or vertically.
///
/// Each unvisited land cell starts a depth-first flood fill over a separate
/// visited mask, so the grid itself is left untouched.
#[must_use]
pub fn count_islands(grid: &Grid) -> usize {
    let cols = grid.cols();
    let mut visited = vec![false; grid.rows() * cols];
    let mut islands = 0;
    let mut stack = Vec::new();

    for row in 0..grid.rows() {
        for col in 0..cols {
            if visited[row * cols + col] || grid.get(row, col) != Some(Cell::Land) {
                continue;
            }

            islands += 1;
            visited[row * cols + col] = true;
            stack.push((row, col));

            while let Some((r, c)) = stack.pop() {
                for (nr, nc) in grid.neighbors(r, c) {
                    let seen = &mut visited[nr * cols + nc];
                    if !*seen && grid.get(nr, nc) == Some(Cell::Land) {
                        *seen = true;
                        stack.push((nr, nc));
                    }
                }
            }
        }
    }

    islands
}

#[cfg(test)]
mod tests {
    use super::*;

    fn islands(rows: &[&str]) -> usize {
        count_islands(&Grid::parse(rows).unwrap())
    }

    #[test]
    fn one_big_island() {
        assert_eq!(islands(&["11110", "11010", "11000", "00000"]), 1);
    }

    #[test]
    fn three_islands() {
        assert_eq!(islands(&["11000", "11000", "00100", "00011"]), 3);
    }

    #[test]
    fn diagonal_cells_are_separate() {
        assert_eq!(islands(&["101", "010", "101"]), 5);
    }

    #[test]
    fn winding_island_counts_once() {
        assert_eq!(islands(&["111", "001", "111", "100", "111"]), 1);
    }

    #[test]
    fn no_land() {
        assert_eq!(islands(&[]), 0);
        assert_eq!(islands(&["000"]), 0);
    }

    #[test]
    fn grid_is_not_modified() {
        let grid = Grid::parse(&["110", "011"]).unwrap();
        let before = grid.clone();

        assert_eq!(count_islands(&grid), 1);
        assert_eq!(grid, before);
    }
}
