use crate::grid::{CellState, LifeGrid, Loc};

/// Live-neighbor counts for every interior cell, shaped like the padded grid.
///
/// The counts are always a snapshot of one whole generation: `compute_from`
/// fills every entry before `step` mutates any cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighborCounts {
    width: u32,
    height: u32,
    counts: Vec<u8>,
}

impl NeighborCounts {
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0);
        Self {
            width,
            height,
            counts: vec![0; (width as usize + 2) * (height as usize + 2)],
        }
    }

    pub fn compute(grid: &LifeGrid) -> Self {
        let mut result = Self::new(grid.width(), grid.height());
        result.compute_from(grid);
        result
    }

    pub fn compute_from(&mut self, grid: &LifeGrid) {
        assert_eq!(
            (self.width, self.height),
            (grid.width(), grid.height()),
            "neighbor counts sized for a different grid"
        );
        for loc in grid.interior_locs() {
            let index = self.index(loc);
            self.counts[index] = Self::num_live_neighbors(grid, loc);
        }
    }

    // The dead border stands in for off-board neighbors, so `x - 1` and
    // `y + 1` never leave the padded array.
    fn num_live_neighbors(grid: &LifeGrid, center: Loc) -> u8 {
        let mut result = 0;
        for y in center.y - 1..=center.y + 1 {
            for x in center.x - 1..=center.x + 1 {
                if (x, y) != (center.x, center.y) {
                    result += grid.padded_cell(x, y).value();
                }
            }
        }
        result
    }

    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.counts[self.index(Loc::new(x, y))]
    }

    fn index(&self, loc: Loc) -> usize {
        loc.interior_index(self.width, self.height)
            .unwrap_or_else(|| {
                panic!(
                    "Count {}, {} is outside the {}x{} interior",
                    loc.x, loc.y, self.width, self.height
                )
            })
    }
}

/// Applies B3/S23 to every interior cell from an already computed snapshot.
pub fn step(grid: &mut LifeGrid, counts: &NeighborCounts) {
    for loc in grid.interior_locs() {
        match counts.get(loc.x, loc.y) {
            2 => {}
            3 => grid[loc] = CellState::Alive,
            _ => grid[loc] = CellState::Dead,
        }
    }
    debug_assert!(grid.border_is_dead());
}

/// Advances `grid` one generation, using `counts` as scratch space.
pub fn tick(grid: &mut LifeGrid, counts: &mut NeighborCounts) {
    counts.compute_from(grid);
    step(grid, counts);
}
