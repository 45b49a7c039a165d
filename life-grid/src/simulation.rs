use crate::World;
use crate::grid::{LifeGrid, Loc};
use crate::neighbors::{NeighborCounts, tick};
use crate::random::Random;
use crate::seed::{initialize_board, reseed, shuffle};
use log::{debug, info, trace};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
}

/// Control events delivered by the UI layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Pause,
    Toggle,
    /// Pauses, then lays down a new band and shuffles it from a fresh seed.
    Regenerate,
}

/// All simulation state, owned by the caller.
#[derive(Debug)]
pub struct Simulation {
    grid: LifeGrid,
    counts: NeighborCounts,
    live_ratio: f64,
    run_state: RunState,
    generation: u64,
}

impl Simulation {
    pub fn new(width: u32, height: u32, live_ratio: f64, mut rand: Random) -> Self {
        let mut grid = initialize_board(width, height, live_ratio);
        shuffle(&mut grid, &mut rand);
        info!(
            "New {width}x{height} board with {} live cells",
            grid.live_count()
        );
        Self {
            grid,
            counts: NeighborCounts::new(width, height),
            live_ratio,
            run_state: RunState::Idle,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &LifeGrid {
        &self.grid
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn live_ratio(&self) -> f64 {
        self.live_ratio
    }

    pub fn handle(&mut self, command: Command) {
        match (command, self.run_state) {
            (Command::Start, RunState::Idle) | (Command::Toggle, RunState::Idle) => {
                self.set_run_state(RunState::Running);
            }
            (Command::Pause, RunState::Running) | (Command::Toggle, RunState::Running) => {
                self.set_run_state(RunState::Idle);
            }
            (Command::Regenerate, _) => self.regenerate(&mut Random::new()),
            (Command::Start, RunState::Running) | (Command::Pause, RunState::Idle) => {}
        }
    }

    fn set_run_state(&mut self, run_state: RunState) {
        info!(
            "{:?} -> {:?} at generation {}",
            self.run_state, run_state, self.generation
        );
        self.run_state = run_state;
    }

    pub fn regenerate(&mut self, rand: &mut Random) {
        if self.run_state == RunState::Running {
            self.set_run_state(RunState::Idle);
        }
        reseed(&mut self.grid, self.live_ratio);
        shuffle(&mut self.grid, rand);
        self.generation = 0;
        info!("Regenerated board with {} live cells", self.grid.live_count());
    }

    /// Advances one generation while running; a no-op while idle.
    pub fn update(&mut self) -> bool {
        if self.run_state == RunState::Idle {
            return false;
        }
        tick(&mut self.grid, &mut self.counts);
        self.generation += 1;
        debug!(
            "Generation {}: {} live cells",
            self.generation,
            self.grid.live_count()
        );
        trace!("\n{}", self.grid);
        true
    }
}

impl World for Simulation {
    fn width(&self) -> u32 {
        self.grid.width()
    }

    fn height(&self) -> u32 {
        self.grid.height()
    }

    fn live_cells(&self) -> impl Iterator<Item = Loc> + '_ {
        self.grid.live_cells()
    }

    fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn handle(&mut self, command: Command) {
        Simulation::handle(self, command);
    }

    fn update(&mut self) {
        Simulation::update(self);
    }
}
