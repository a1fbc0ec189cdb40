//! Randomized backtracking on a double-step lattice.
//!
//! Rooms sit at even row and column offsets from the start cell. Carving from one room to an
//! unvisited neighbouring room opens the connecting cell between them as well, which yields
//! corridors exactly one cell wide. The carve graph is a tree, so the open cells reachable
//! from the start form a perfect maze.
//!
//! An endpoint that does not fall on the lattice would close a loop if it were opened next to
//! two corridors. Carves that would surround such an endpoint with a second open cell are
//! refused, and the endpoint is attached as a leaf after the lattice is exhausted.
use crate::grid::Grid;
use crate::{pos, Step, CARVE_OFFSETS};
use grid_util::Point;
use log::{info, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

/// Summary of a finished generation pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationReport {
    /// Number of cells turned from wall into open.
    pub carved: usize,
    /// Number of lattice rooms reached by the backtracker.
    pub rooms: usize,
    pub end_reachable: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Carving,
    AttachStart,
    AttachEnd,
    Done,
    Finished,
}

/// Lazy maze generator. Each [Iterator::next] call opens exactly one cell and reports it as
/// [Step::Carve]. Creating the generator resets the grid and fills it with walls, so
/// dropping it early leaves a partially carved grid behind.
pub struct MazeGenerator<'g, 'r, R: Rng + ?Sized> {
    grid: &'g mut Grid,
    rng: &'r mut R,
    visited: Vec<bool>,
    stack: Vec<Point>,
    /// Cells queued for opening, popped from the back.
    pending: SmallVec<[Point; 2]>,
    phase: Phase,
    carved: usize,
    rooms: usize,
}

impl<'g, 'r, R: Rng + ?Sized> MazeGenerator<'g, 'r, R> {
    pub fn new(grid: &'g mut Grid, rng: &'r mut R) -> Self {
        grid.reset_all();
        grid.fill_walls();
        let start = grid.start();
        let mut visited = vec![false; grid.rows() * grid.cols()];
        visited[grid.get_ix_point(&start)] = true;
        let mut pending = SmallVec::new();
        pending.push(start);
        MazeGenerator {
            grid,
            rng,
            visited,
            stack: vec![start],
            pending,
            phase: Phase::Carving,
            carved: 0,
            rooms: 1,
        }
    }

    pub fn grid(&self) -> &Grid {
        self.grid
    }

    pub fn report(&self) -> GenerationReport {
        GenerationReport {
            carved: self.carved,
            rooms: self.rooms,
            end_reachable: self.grid.reachable(&self.grid.start(), &self.grid.end()),
        }
    }

    fn is_room(&self, point: &Point) -> bool {
        let start = self.grid.start();
        (point.x - start.x).rem_euclid(2) == 0 && (point.y - start.y).rem_euclid(2) == 0
    }

    /// True if opening `connector` and `room` would leave an off-lattice endpoint walled in
    /// with at least two open neighbours.
    fn closes_endpoint_loop(&self, connector: &Point, room: &Point) -> bool {
        [self.grid.start(), self.grid.end()].iter().any(|endpoint| {
            if self.is_room(endpoint)
                || endpoint == connector
                || endpoint == room
                || !self.grid.cell(endpoint).is_wall()
            {
                return false;
            }
            let open_after = self
                .grid
                .neighbors4(endpoint)
                .iter()
                .filter(|n| *n == connector || *n == room || !self.grid.cell(n).is_wall())
                .count();
            open_after >= 2
        })
    }

    /// Runs one backtracking step. Returns [false] once the stack is empty.
    fn advance(&mut self) -> bool {
        let Some(&current) = self.stack.last() else {
            return false;
        };
        let candidates = CARVE_OFFSETS
            .iter()
            .map(|(d_row, d_col)| {
                (
                    pos(current.y + d_row / 2, current.x + d_col / 2),
                    pos(current.y + d_row, current.x + d_col),
                )
            })
            .filter(|(connector, room)| {
                self.grid.in_bounds(room)
                    && !self.visited[self.grid.get_ix_point(room)]
                    && !self.closes_endpoint_loop(connector, room)
            })
            .collect::<SmallVec<[(Point, Point); 4]>>();
        match candidates.choose(&mut *self.rng) {
            Some(&(connector, room)) => {
                let ix = self.grid.get_ix_point(&room);
                self.visited[ix] = true;
                self.rooms += 1;
                self.stack.push(room);
                self.pending.push(room);
                self.pending.push(connector);
            }
            None => {
                self.stack.pop();
            }
        }
        true
    }

    /// Queues the cells needed to hang a walled endpoint onto the maze as a leaf.
    fn attach(&mut self, endpoint: Point) {
        if !self.grid.cell(&endpoint).is_wall() {
            return;
        }
        self.pending.push(endpoint);
        match self.grid.open_neighbors(&endpoint).len() {
            1 => {}
            0 => {
                let bridge = self.grid.neighbors4(&endpoint).into_iter().find(|n| {
                    self.grid.cell(n).is_wall() && self.grid.open_neighbors(n).len() == 1
                });
                match bridge {
                    Some(bridge) => self.pending.push(bridge),
                    None => warn!("Endpoint {:?} could not be connected to the maze", endpoint),
                }
            }
            n => warn!("Opening endpoint {:?} next to {} open cells", endpoint, n),
        }
    }

    fn open(&mut self, point: Point) {
        self.grid.cell_mut(&point).set_wall(false);
        self.carved += 1;
    }
}

impl<'g, 'r, R: Rng + ?Sized> Iterator for MazeGenerator<'g, 'r, R> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            if let Some(point) = self.pending.pop() {
                self.open(point);
                return Some(Step::Carve(point));
            }
            match self.phase {
                Phase::Carving => {
                    if !self.advance() {
                        self.phase = Phase::AttachStart;
                    }
                }
                Phase::AttachStart => {
                    let start = self.grid.start();
                    self.attach(start);
                    self.phase = Phase::AttachEnd;
                }
                Phase::AttachEnd => {
                    let end = self.grid.end();
                    self.attach(end);
                    self.phase = Phase::Done;
                }
                Phase::Done => {
                    self.grid.mark_endpoints();
                    self.phase = Phase::Finished;
                    let report = self.report();
                    info!(
                        "Generated {}x{} maze: {} rooms, {} cells carved, end reachable: {}",
                        self.grid.rows(),
                        self.grid.cols(),
                        report.rooms,
                        report.carved,
                        report.end_reachable
                    );
                    return None;
                }
                Phase::Finished => return None,
            }
        }
    }
}

/// Carves a fresh maze into `grid` and returns the summary.
pub fn generate<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> GenerationReport {
    let mut generator = MazeGenerator::new(grid, rng);
    generator.by_ref().for_each(drop);
    generator.report()
}
