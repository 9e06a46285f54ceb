//! The Life engine: grid state, generation counter, and mutation surface

use super::{rules, Grid};
use crate::error::GridError;

/// Owns the board and the generation counter.
///
/// Play/pause is not a concept here. An external driver decides when
/// [`LifeEngine::step`] runs, an input layer paints cells through
/// [`LifeEngine::set_cell`], and a renderer reads state on its own schedule.
#[derive(Debug, Clone)]
pub struct LifeEngine {
    grid: Grid,
    generation: u64,
}

impl LifeEngine {
    /// Create an engine with an all-dead `width` x `height` board.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: Grid::new(width, height),
            generation: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Generations advanced since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Read-only view of the board.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cell state for renderers. Out-of-range reads as dead.
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.grid.get(x, y)
    }

    /// Count of living cells on the board.
    pub fn live_count(&self) -> usize {
        self.grid.live_count()
    }

    /// Raise the cell at `(x, y)` to alive.
    ///
    /// With `force_alive` the cell is painted alive outright (preset
    /// loading). The toggle path is one-way: a dead cell comes alive and a
    /// live cell stays alive. Neither path can clear a cell; the public
    /// surface has no erase operation. A failed call leaves the grid
    /// untouched.
    pub fn set_cell(&mut self, x: usize, y: usize, force_alive: bool) -> Result<(), GridError> {
        if force_alive {
            return self.grid.set(x, y, true);
        }
        // One-way toggle: dead comes alive, alive is left alone.
        self.grid.set(x, y, true)
    }

    /// Live-neighbor count at `(x, y)` against the current board.
    pub fn live_neighbors(&self, x: usize, y: usize) -> Result<u8, GridError> {
        self.grid.live_neighbors(x, y)
    }

    /// Advance the board exactly one generation.
    ///
    /// The next board is computed in full from the pre-step snapshot and
    /// swapped in atomically; the generation counter moves only after the
    /// commit.
    pub fn step(&mut self) {
        self.grid = rules::evolve(&self.grid);
        self.generation += 1;
    }

    /// Coordinates of every living cell, `x` outer and `y` inner.
    pub fn export(&self) -> Vec<(usize, usize)> {
        self.grid.alive_cells()
    }

    /// The export list serialized as JSON `[x, y]` pairs, e.g. `[[1,2],[3,4]]`.
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.export())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine_is_dead_at_generation_zero() {
        let engine = LifeEngine::new(50, 50);
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.live_count(), 0);
        assert_eq!(engine.width(), 50);
        assert_eq!(engine.height(), 50);
    }

    #[test]
    fn test_set_cell_toggle_never_clears() {
        let mut engine = LifeEngine::new(10, 10);

        engine.set_cell(2, 3, false).unwrap();
        assert!(engine.is_alive(2, 3));

        // Toggling an already-live cell leaves it alive.
        engine.set_cell(2, 3, false).unwrap();
        assert!(engine.is_alive(2, 3));

        // Forcing always lands on alive regardless of prior state.
        engine.set_cell(2, 3, true).unwrap();
        assert!(engine.is_alive(2, 3));
        engine.set_cell(4, 4, true).unwrap();
        assert!(engine.is_alive(4, 4));
    }

    #[test]
    fn test_set_cell_out_of_bounds() {
        let mut engine = LifeEngine::new(10, 10);
        assert!(engine.set_cell(10, 0, false).is_err());
        assert!(engine.set_cell(0, 10, true).is_err());
        assert_eq!(engine.live_count(), 0);
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn test_generation_counts_steps_only() {
        let mut engine = LifeEngine::new(10, 10);
        engine.set_cell(1, 1, true).unwrap();
        let _ = engine.export();
        assert_eq!(engine.generation(), 0);

        engine.step();
        assert_eq!(engine.generation(), 1);
        engine.step();
        engine.step();
        assert_eq!(engine.generation(), 3);
    }

    #[test]
    fn test_step_applies_rules() {
        let mut engine = LifeEngine::new(10, 10);
        // Block is a still life.
        for &(x, y) in &[(4, 4), (5, 4), (4, 5), (5, 5)] {
            engine.set_cell(x, y, true).unwrap();
        }
        engine.step();
        assert_eq!(engine.export(), vec![(4, 4), (4, 5), (5, 4), (5, 5)]);
    }

    #[test]
    fn test_export_scan_order_and_json() {
        let mut engine = LifeEngine::new(50, 50);
        engine.set_cell(3, 4, true).unwrap();
        engine.set_cell(1, 2, true).unwrap();

        assert_eq!(engine.export(), vec![(1, 2), (3, 4)]);
        assert_eq!(engine.export_json().unwrap(), "[[1,2],[3,4]]");
    }

    #[test]
    fn test_export_is_read_only() {
        let mut engine = LifeEngine::new(10, 10);
        engine.set_cell(5, 5, true).unwrap();
        let before = engine.grid().clone();
        let _ = engine.export();
        let _ = engine.export_json();
        assert_eq!(*engine.grid(), before);
    }
}
