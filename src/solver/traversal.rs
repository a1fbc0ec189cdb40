//! This module implements the lazy graph traversal shared by the breadth-first and depth-first
//! solvers. Both expand cells identically and only differ in the [Frontier] they use.
use crate::grid::Grid;
use crate::solver::path::{reconstruct_path, FxIndexMap, PathReconstructor};
use crate::solver::SolveOutcome;
use crate::Step;
use grid_util::Point;
use log::info;
use smallvec::IntoIter as SmallIntoIter;
use std::collections::VecDeque;

/// Container of cells that have been discovered but not yet expanded.
pub trait Frontier: Default {
    fn push(&mut self, point: Point);
    fn pop(&mut self) -> Option<Point>;
}

/// First in, first out.
impl Frontier for VecDeque<Point> {
    fn push(&mut self, point: Point) {
        self.push_back(point);
    }
    fn pop(&mut self) -> Option<Point> {
        self.pop_front()
    }
}

/// Last in, first out.
impl Frontier for Vec<Point> {
    fn push(&mut self, point: Point) {
        Vec::push(self, point);
    }
    fn pop(&mut self) -> Option<Point> {
        Vec::pop(self)
    }
}

enum Phase {
    Search,
    Mark(std::vec::IntoIter<Point>),
    Done,
}

/// One solve invocation as a pull-based sequence of [Step]s. Each [Step::Visit] has already
/// flagged its cell as visited, each [Step::Path] has already flagged its cell as path. The
/// grid can be inspected between steps through [grid](Self::grid).
///
/// The search stops as soon as the end cell is taken from the frontier. The path is then
/// marked from the end back to the start. Dropping the traversal early leaves the grid as it
/// was at that point.
pub struct Traversal<'g, F: Frontier> {
    grid: &'g mut Grid,
    name: &'static str,
    frontier: F,
    visited: Vec<bool>,
    parents: FxIndexMap<Point, Point>,
    expanding: Option<(Point, SmallIntoIter<[Point; 4]>)>,
    phase: Phase,
    visits: usize,
    outcome: Option<SolveOutcome>,
}

impl<'g, F: Frontier> Traversal<'g, F> {
    pub fn new(grid: &'g mut Grid, name: &'static str) -> Self {
        let start = grid.start();
        let mut visited = vec![false; grid.rows() * grid.cols()];
        visited[grid.get_ix_point(&start)] = true;
        let mut frontier = F::default();
        frontier.push(start);
        Traversal {
            grid,
            name,
            frontier,
            visited,
            parents: FxIndexMap::default(),
            expanding: None,
            phase: Phase::Search,
            visits: 0,
            outcome: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        self.grid
    }

    /// Number of visitation steps emitted so far.
    pub fn visits(&self) -> usize {
        self.visits
    }

    /// The parent of every discovered cell, in discovery order.
    pub fn parents(&self) -> &FxIndexMap<Point, Point> {
        &self.parents
    }

    /// The result, available once the sequence has ended.
    pub fn outcome(&self) -> Option<&SolveOutcome> {
        match self.phase {
            Phase::Done => self.outcome.as_ref(),
            _ => None,
        }
    }

    /// Drains the remaining steps and returns the result.
    pub fn finish(mut self) -> SolveOutcome {
        self.by_ref().for_each(drop);
        self.outcome.unwrap_or(SolveOutcome::NoPath)
    }

    /// Expands cells until one step is produced. Returns [None] once the search phase is over.
    fn search(&mut self) -> Option<Step> {
        let end = self.grid.end();
        loop {
            let (current, mut neighbors) = match self.expanding.take() {
                Some(expanding) => expanding,
                None => match self.frontier.pop() {
                    Some(current) if current == end => {
                        self.reached_end();
                        return None;
                    }
                    Some(current) => (current, self.grid.neighbors4(&current).into_iter()),
                    None => {
                        self.exhausted();
                        return None;
                    }
                },
            };
            let Some(next) = neighbors.next() else {
                continue;
            };
            self.expanding = Some((current, neighbors));
            let ix = self.grid.get_ix_point(&next);
            if self.visited[ix] || self.grid.cell(&next).is_wall() {
                continue;
            }
            self.visited[ix] = true;
            self.parents.insert(next, current);
            self.frontier.push(next);
            if next != end {
                self.grid.cell_mut(&next).set_visited(true);
                self.visits += 1;
                return Some(Step::Visit(next));
            }
        }
    }

    fn reached_end(&mut self) {
        let (start, end) = (self.grid.start(), self.grid.end());
        let interior = PathReconstructor::new(&self.parents, start, end).collect::<Vec<_>>();
        let path = reconstruct_path(&self.parents, start, end);
        info!(
            "{} reached {:?} after {} visits, path has {} edges",
            self.name,
            end,
            self.visits,
            interior.len() + 1
        );
        self.outcome = Some(match path {
            Some(path) => SolveOutcome::Found { path },
            None => SolveOutcome::NoPath,
        });
        self.phase = Phase::Mark(interior.into_iter());
    }

    fn exhausted(&mut self) {
        info!(
            "{} exhausted its frontier after {} visits, {:?} is not reachable from {:?}",
            self.name,
            self.visits,
            self.grid.end(),
            self.grid.start()
        );
        self.outcome = Some(SolveOutcome::NoPath);
        self.phase = Phase::Done;
    }
}

impl<'g, F: Frontier> Iterator for Traversal<'g, F> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            match &mut self.phase {
                Phase::Search => {
                    if let Some(step) = self.search() {
                        return Some(step);
                    }
                }
                Phase::Mark(interior) => match interior.next() {
                    Some(point) => {
                        self.grid.cell_mut(&point).set_path(true);
                        return Some(Step::Path(point));
                    }
                    None => self.phase = Phase::Done,
                },
                Phase::Done => return None,
            }
        }
    }
}
