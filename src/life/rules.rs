//! Transition rules for advancing the board one generation

use super::Grid;
use rayon::prelude::*;

/// Next state of a single cell given its current state and live-neighbor
/// count: survival on 2 or 3 neighbors, birth on exactly 3, death otherwise.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
}

/// Compute the next generation from a snapshot of the current grid.
///
/// The whole next buffer is materialized before anything replaces the
/// current grid; neighbor counts never observe a partially updated board.
pub fn evolve(current: &Grid) -> Grid {
    let width = current.width();
    let height = current.height();

    let next_cells: Vec<bool> = (0..width)
        .into_par_iter()
        .flat_map(|x| {
            (0..height)
                .into_par_iter()
                .map(move |y| next_state(current.get(x, y), current.moore_count(x, y)))
        })
        .collect();

    Grid::from_flat(width, height, next_cells)
}

/// Advance a grid a fixed number of generations.
pub fn evolve_generations(mut grid: Grid, generations: usize) -> Grid {
    for _ in 0..generations {
        grid = evolve(&grid);
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(width: usize, height: usize, cells: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(width, height);
        for &(x, y) in cells {
            grid.set(x, y, true).unwrap();
        }
        grid
    }

    #[test]
    fn test_rule_table() {
        assert!(next_state(true, 2));
        assert!(next_state(true, 3));
        assert!(next_state(false, 3));
        assert!(!next_state(true, 1));
        assert!(!next_state(true, 4));
        assert!(!next_state(false, 2));
        assert!(!next_state(false, 0));
    }

    #[test]
    fn test_empty_grid_stays_empty() {
        let grid = Grid::new(10, 10);
        let evolved = evolve_generations(grid, 5);
        assert!(evolved.is_empty());
    }

    #[test]
    fn test_lone_cell_dies() {
        let grid = grid_with(10, 10, &[(4, 4)]);
        let evolved = evolve(&grid);
        assert!(evolved.is_empty());
    }

    #[test]
    fn test_block_is_stable() {
        let grid = grid_with(10, 10, &[(4, 4), (5, 4), (4, 5), (5, 5)]);
        let evolved = evolve(&grid);
        assert_eq!(evolved, grid);
    }

    #[test]
    fn test_blinker_oscillates_with_period_two() {
        // Horizontal blinker at (x, y), (x+1, y), (x+2, y).
        let (x, y) = (4, 5);
        let horizontal = grid_with(10, 10, &[(x, y), (x + 1, y), (x + 2, y)]);
        let vertical = grid_with(10, 10, &[(x + 1, y - 1), (x + 1, y), (x + 1, y + 1)]);

        let once = evolve(&horizontal);
        assert_eq!(once, vertical);

        let twice = evolve(&once);
        assert_eq!(twice, horizontal);
    }

    #[test]
    fn test_evolve_is_deterministic() {
        let grid = grid_with(12, 12, &[(3, 3), (4, 3), (5, 3), (5, 4), (4, 5)]);
        let a = evolve_generations(grid.clone(), 7);
        let b = evolve_generations(grid, 7);
        assert_eq!(a, b);
    }
}
