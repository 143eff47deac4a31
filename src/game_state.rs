use crate::cell::Cell;
use crate::flood_fill::flood_fill;
use crate::grid::{Coordinate, Grid};

/// Result of a single fill move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillOutcome {
    pub target: Cell,
    pub repainted: usize,
}

/// Owns the snapshot history and the selected paint color.
#[derive(Debug, Clone)]
pub struct GridState {
    cells_per_axis: usize,
    replacement: Cell,
    snapshots: Vec<Grid>, // oldest first, never empty
}

impl GridState {
    /// Starts a game with a single empty snapshot.
    pub fn new(cells_per_axis: usize, replacement: Cell) -> Self {
        Self {
            cells_per_axis,
            replacement,
            snapshots: vec![Grid::empty(cells_per_axis)],
        }
    }

    pub fn cells_per_axis(&self) -> usize {
        self.cells_per_axis
    }

    pub fn replacement_color(&self) -> Cell {
        self.replacement
    }

    pub fn select_color(&mut self, color: Cell) {
        log::debug!("replacement color {} -> {}", self.replacement, color);
        self.replacement = color;
    }

    pub fn current_grid(&self) -> &Grid {
        // history is never empty, see undo()
        &self.snapshots[self.snapshots.len() - 1]
    }

    pub fn snapshots(&self) -> &[Grid] {
        &self.snapshots
    }

    pub fn history_len(&self) -> usize {
        self.snapshots.len()
    }

    /// Fills from `seed` with the selected color and records the result as a
    /// new snapshot. A fill that changes nothing is still recorded.
    pub fn apply_flood_fill(&mut self, seed: Coordinate) -> FillOutcome {
        let current = self.current_grid();
        let target = current.get(seed);
        let next = flood_fill(current, seed, target, self.replacement);
        let repainted = next.diff_count(current);

        log::debug!(
            "fill at {}: {} -> {}, {} cells repainted",
            seed,
            target,
            self.replacement,
            repainted
        );
        self.snapshots.push(next);

        FillOutcome { target, repainted }
    }

    /// Drops the latest snapshot. The starting snapshot is never removed.
    pub fn undo(&mut self) -> bool {
        if self.snapshots.len() > 1 {
            self.snapshots.pop();
            log::debug!("undo, {} snapshots left", self.snapshots.len());
            true
        } else {
            log::debug!("undo ignored at initial snapshot");
            false
        }
    }

    /// Throws away the history. The selected color is kept.
    pub fn restart(&mut self) {
        log::debug!("restart after {} snapshots", self.snapshots.len());
        self.snapshots = vec![Grid::empty(self.cells_per_axis)];
    }
}
