//! # grid_maze
//!
//! A grid maze engine. Carves a
//! [perfect maze](https://en.wikipedia.org/wiki/Maze_generation_algorithm#Randomized_depth-first_search)
//! into a rectangular grid by randomized backtracking and solves it between two fixed
//! endpoints with breadth-first or depth-first search. Movement is orthogonal and every open
//! cell costs the same.
//!
//! Generation and solving are exposed as lazy sequences of [Step]s, so a host can render the
//! grid after every step and pace the animation however it likes. [Maze] bundles a [Grid] with
//! a seedable random source and offers blocking entry points with a fixed delay per step.
pub mod cell;
pub mod generator;
pub mod grid;
pub mod solver;

pub use cell::{Cell, CellKind};
pub use generator::{generate, GenerationReport, MazeGenerator};
pub use grid::Grid;
pub use solver::{Algorithm, GridSolver, ParseAlgorithmError, Search, SolveOutcome};

use grid_util::Point;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::thread;
use std::time::Duration;

pub const DEFAULT_ROWS: usize = 30;
pub const DEFAULT_COLS: usize = 50;
/// Row and column offsets of the orthogonal neighbours: up, down, left, right.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
/// Row and column offsets between lattice rooms during generation: right, down, left, up.
pub const CARVE_OFFSETS: [(i32, i32); 4] = [(0, 2), (2, 0), (0, -2), (-2, 0)];
/// Lower bound on the pause after a path step when pacing is enabled.
pub const PATH_STEP_DELAY: Duration = Duration::from_millis(50);
pub const MAX_SPEED: u32 = 200;
pub const DEFAULT_SPEED: u32 = 100;

/// Builds a [Point] from row and column, stored as `y` and `x` respectively.
pub fn pos(row: i32, col: i32) -> Point {
    Point::new(col, row)
}

/// Maps an animation speed in `1..=MAX_SPEED` to a per-step delay, faster speeds giving
/// shorter delays. Out of range speeds are clamped.
pub fn delay_for_speed(speed: u32) -> Duration {
    let speed = speed.clamp(1, MAX_SPEED);
    Duration::from_millis((MAX_SPEED + 1 - speed) as u64)
}

/// One unit of observable progress. The affected cell has already been updated when the step
/// is handed out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// A wall cell was opened during generation.
    Carve(Point),
    /// A solver discovered a cell.
    Visit(Point),
    /// A cell was marked as part of the final path.
    Path(Point),
}

impl Step {
    pub fn point(&self) -> Point {
        match *self {
            Step::Carve(p) | Step::Visit(p) | Step::Path(p) => p,
        }
    }

    /// How long a paced run waits after this step. A zero `delay` disables pacing entirely.
    pub fn pause(&self, delay: Duration) -> Duration {
        match self {
            _ if delay.is_zero() => Duration::ZERO,
            Step::Path(_) => delay.max(PATH_STEP_DELAY),
            _ => delay,
        }
    }
}

/// [Maze] owns a [Grid] and the random source used to generate mazes into it. All mutation
/// goes through `&mut self`, so exactly one generator or solver works on the grid at a time.
#[derive(Clone, Debug)]
pub struct Maze {
    grid: Grid,
    rng: StdRng,
}

impl Default for Maze {
    fn default() -> Maze {
        Maze::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl Maze {
    /// An open grid with default endpoints and an entropy-seeded random source.
    pub fn new(rows: usize, cols: usize) -> Maze {
        Maze::from_grid(Grid::new(rows, cols), StdRng::from_entropy())
    }
    /// Same as [new](Self::new), but generation is reproducible.
    pub fn with_seed(rows: usize, cols: usize, seed: u64) -> Maze {
        Maze::from_grid(Grid::new(rows, cols), StdRng::seed_from_u64(seed))
    }
    pub fn from_grid(grid: Grid, rng: StdRng) -> Maze {
        Maze { grid, rng }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// See [Grid::toggle_wall].
    pub fn toggle_wall(&mut self, row: i32, col: i32) -> bool {
        self.grid.toggle_wall(row, col)
    }
    /// See [Grid::set_wall].
    pub fn set_wall(&mut self, row: i32, col: i32, wall: bool) -> bool {
        self.grid.set_wall(row, col, wall)
    }

    /// Clears solver state, and the walls as well unless `path_only` is set.
    pub fn reset_maze(&mut self, path_only: bool) {
        self.grid.reset(path_only);
    }

    /// Replaces the grid contents with a freshly carved maze.
    pub fn generate_random_maze(&mut self) -> GenerationReport {
        generate(&mut self.grid, &mut self.rng)
    }

    /// Lazy generation, see [MazeGenerator].
    pub fn generation_steps(&mut self) -> MazeGenerator<'_, '_, StdRng> {
        MazeGenerator::new(&mut self.grid, &mut self.rng)
    }

    /// Lazy solve, see [Search].
    pub fn solve_steps(&mut self, algorithm: Algorithm) -> Search<'_> {
        algorithm.steps(&mut self.grid)
    }

    /// Runs a solve to completion, handing every step and the updated grid to `on_step`.
    pub fn solve_with<F>(&mut self, algorithm: Algorithm, mut on_step: F) -> SolveOutcome
    where
        F: FnMut(&Grid, Step),
    {
        let mut search = algorithm.steps(&mut self.grid);
        while let Some(step) = search.next() {
            on_step(search.grid(), step);
        }
        search.finish()
    }

    /// Runs a solve to completion on the calling thread. Every step and the updated grid go to
    /// `on_step` first, then the thread sleeps as given by [Step::pause]. The delay only
    /// affects timing, never the result.
    pub fn solve_paced<F>(
        &mut self,
        algorithm: Algorithm,
        delay: Duration,
        mut on_step: F,
    ) -> SolveOutcome
    where
        F: FnMut(&Grid, Step),
    {
        info!("Solving with {} at {:?} per step", algorithm, delay);
        self.solve_with(algorithm, |grid, step| {
            on_step(grid, step);
            let pause = step.pause(delay);
            if !pause.is_zero() {
                thread::sleep(pause);
            }
        })
    }

    /// [solve_paced](Self::solve_paced) without an observer.
    pub fn solve(&mut self, algorithm: Algorithm, delay: Duration) -> SolveOutcome {
        self.solve_paced(algorithm, delay, |_, _| {})
    }
}
