#![deny(clippy::all)]
#![forbid(unsafe_code)]

//! Conway's Game of Life on a fixed board padded with a permanently dead
//! border. Rendering and scheduling live outside this crate and drive it
//! through [`World`].

mod grid;
mod neighbors;
mod random;
mod seed;
mod simulation;

pub use grid::{CellState, LifeGrid, Loc};
pub use neighbors::{NeighborCounts, step, tick};
pub use random::Random;
pub use seed::{band_height, initialize_board, reseed, shuffle};
pub use simulation::{Command, RunState, Simulation};

pub trait World {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn live_cells(&self) -> impl Iterator<Item = Loc> + '_;
    fn is_running(&self) -> bool;
    fn generation(&self) -> u64;
    fn handle(&mut self, command: Command);
    fn update(&mut self);
}
