use crate::cell::Cell;
use crate::grid::{Coordinate, Grid};

/// Repaints the 4-connected region of `target` cells around `seed` with
/// `replacement`, returning the new snapshot. `grid` itself is never touched.
///
/// Returns an unchanged copy when `target == replacement` or when the seed
/// does not hold `target`.
pub fn flood_fill(grid: &Grid, seed: Coordinate, target: Cell, replacement: Cell) -> Grid {
    let mut result = grid.clone();

    if target == replacement {
        log::trace!("fill at {} skipped: already {}", seed, replacement);
        return result;
    }
    if result.get(seed) != target {
        log::trace!("fill at {} skipped: seed is not {}", seed, target);
        return result;
    }

    let cells_per_axis = result.cells_per_axis();
    let mut pending = vec![seed];

    while let Some(at) = pending.pop() {
        // Clamped edge neighbours land here again and stop on this check.
        if result.get(at) != target {
            continue;
        }
        result.set(at, replacement);
        pending.extend(at.clamped_neighbours(cells_per_axis));
    }

    result
}

/// Coordinates of the same-colored 4-connected region holding `seed`, in
/// row-major order.
pub fn connected_region(grid: &Grid, seed: Coordinate) -> Vec<Coordinate> {
    let cells_per_axis = grid.cells_per_axis();
    let color = grid.get(seed);
    let mut visited = vec![false; grid.cells().len()];
    let mut pending = vec![seed];
    let mut region = Vec::new();

    while let Some(at) = pending.pop() {
        let index = at.index(cells_per_axis);
        if visited[index] || grid.get(at) != color {
            continue;
        }
        visited[index] = true;
        region.push(at);
        pending.extend(at.clamped_neighbours(cells_per_axis));
    }

    region.sort();
    region
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn at(row: usize, column: usize) -> Coordinate {
        Coordinate { row, column }
    }

    #[test]
    fn fills_whole_uniform_board() {
        let grid = Grid::filled(3, Cell::White);
        let filled = flood_fill(&grid, at(1, 1), Cell::White, Cell::Blue);
        assert_eq!(filled, Grid::filled(3, Cell::Blue));

        let again = flood_fill(&filled, at(0, 0), Cell::Blue, Cell::Blue);
        assert_eq!(again, filled);
    }

    #[test]
    fn stops_at_region_boundary() {
        use Cell::{Green as A, Red as B, Yellow as C};
        let grid = Grid::from_cells(3, vec![A, A, B, A, A, B, B, B, B]).unwrap();
        let filled = flood_fill(&grid, at(0, 0), A, C);
        assert_eq!(filled.cells(), &[C, C, B, C, C, B, B, B, B]);
    }

    #[test]
    fn seed_not_matching_target_is_noop() {
        let grid = Grid::filled(3, Cell::Red);
        let filled = flood_fill(&grid, at(2, 2), Cell::Green, Cell::Blue);
        assert_eq!(filled, grid);
    }

    #[test]
    fn does_not_cross_diagonals() {
        use Cell::{Black as K, White as W};
        let grid = Grid::from_cells(3, vec![W, K, W, K, W, K, W, K, W]).unwrap();
        let filled = flood_fill(&grid, at(1, 1), W, Cell::Red);
        assert_eq!(filled.cells(), &[W, K, W, K, Cell::Red, K, W, K, W]);
    }

    #[test]
    fn original_grid_is_untouched() {
        let grid = Grid::empty(3);
        let _ = flood_fill(&grid, at(0, 0), Cell::Empty, Cell::Red);
        assert_eq!(grid, Grid::empty(3));
    }

    #[test]
    fn handles_large_boards_without_recursion() {
        let grid = Grid::empty(256);
        let filled = flood_fill(&grid, at(0, 0), Cell::Empty, Cell::Green);
        assert!(filled.cells().iter().all(|c| *c == Cell::Green));
    }

    #[test]
    fn single_cell_board() {
        let grid = Grid::empty(1);
        let filled = flood_fill(&grid, at(0, 0), Cell::Empty, Cell::Purple);
        assert_eq!(filled.cells(), &[Cell::Purple]);
    }

    #[test]
    fn region_is_sorted_row_major() {
        use Cell::{Green as A, Red as B};
        let grid = Grid::from_cells(3, vec![A, A, B, A, A, B, B, B, B]).unwrap();
        assert_eq!(
            connected_region(&grid, at(1, 1)),
            vec![at(0, 0), at(0, 1), at(1, 0), at(1, 1)]
        );
        assert_eq!(connected_region(&grid, at(2, 2)).len(), 5);
    }
}
