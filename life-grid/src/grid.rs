use std::fmt;
use std::ops::{Index, IndexMut};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CellState {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    /// Contribution to a neighbor count.
    pub fn value(self) -> u8 {
        self as u8
    }
}

/// Logical board coordinate. Interior cells run from `1..=width` and
/// `1..=height`; `0` and `width + 1` / `height + 1` are the border.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Loc {
    pub x: u32,
    pub y: u32,
}

impl Loc {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    fn padded_index(&self, width: u32) -> usize {
        self.y as usize * (width as usize + 2) + self.x as usize
    }

    pub fn interior_index(&self, width: u32, height: u32) -> Option<usize> {
        if (1..=width).contains(&self.x) && (1..=height).contains(&self.y) {
            Some(self.padded_index(width))
        } else {
            None
        }
    }
}

/// The board, stored row-major with a one-cell border on every side.
///
/// The border is allocated DEAD and no method writes to it, so neighbor
/// counting can read one cell past any interior edge without a bounds check.
/// Only interior cells are reachable through `get`, `set` and indexing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LifeGrid {
    width: u32,
    height: u32,
    cells: Vec<CellState>,
}

impl LifeGrid {
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0);
        Self {
            width,
            height,
            cells: vec![CellState::Dead; Self::padded_len(width, height)],
        }
    }

    fn padded_len(width: u32, height: u32) -> usize {
        (width as usize + 2) * (height as usize + 2)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn num_cells(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn get(&self, x: u32, y: u32) -> CellState {
        self[Loc::new(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, state: CellState) {
        self[Loc::new(x, y)] = state;
    }

    fn cell(&self, loc: Loc) -> Option<&CellState> {
        loc.interior_index(self.width, self.height)
            .map(|index| &self.cells[index])
    }

    /// Reads any cell of the padded array, border included.
    pub(crate) fn padded_cell(&self, x: u32, y: u32) -> CellState {
        self.cells[Loc::new(x, y).padded_index(self.width)]
    }

    pub(crate) fn swap(&mut self, a: Loc, b: Loc) {
        let index_a = self.interior_index(a);
        let index_b = self.interior_index(b);
        self.cells.swap(index_a, index_b);
    }

    fn interior_index(&self, loc: Loc) -> usize {
        loc.interior_index(self.width, self.height)
            .unwrap_or_else(|| self.out_of_bounds(loc))
    }

    fn out_of_bounds(&self, loc: Loc) -> ! {
        panic!(
            "Cell {}, {} is outside the {}x{} interior",
            loc.x, loc.y, self.width, self.height
        )
    }

    pub fn is_border(&self, x: u32, y: u32) -> bool {
        x == 0 || y == 0 || x == self.width + 1 || y == self.height + 1
    }

    pub fn border_is_dead(&self) -> bool {
        (0..self.height + 2).all(|y| {
            (0..self.width + 2)
                .filter(|&x| self.is_border(x, y))
                .all(|x| !self.padded_cell(x, y).is_alive())
        })
    }

    /// Sets every interior cell DEAD.
    pub fn clear(&mut self) {
        for loc in self.interior_locs() {
            let index = self.interior_index(loc);
            self.cells[index] = CellState::Dead;
        }
    }

    pub fn interior_locs(&self) -> impl DoubleEndedIterator<Item = Loc> + Clone + use<> {
        let width = self.width;
        (1..=self.height).flat_map(move |y| (1..=width).map(move |x| Loc::new(x, y)))
    }

    /// Live interior cells in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = Loc> + '_ {
        self.interior_locs().filter(|&loc| self[loc].is_alive())
    }

    pub fn live_count(&self) -> usize {
        self.live_cells().count()
    }

    pub fn column_live_count(&self, x: u32) -> usize {
        (1..=self.height).filter(|&y| self.get(x, y).is_alive()).count()
    }

    pub fn row_live_count(&self, y: u32) -> usize {
        (1..=self.width).filter(|&x| self.get(x, y).is_alive()).count()
    }
}

impl Index<Loc> for LifeGrid {
    type Output = CellState;

    fn index(&self, loc: Loc) -> &Self::Output {
        self.cell(loc).unwrap_or_else(|| self.out_of_bounds(loc))
    }
}

impl IndexMut<Loc> for LifeGrid {
    fn index_mut(&mut self, loc: Loc) -> &mut Self::Output {
        let index = self.interior_index(loc);
        &mut self.cells[index]
    }
}

impl fmt::Display for LifeGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 1..=self.height {
            for x in 1..=self.width {
                let symbol = if self.get(x, y).is_alive() { '#' } else { '.' };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
