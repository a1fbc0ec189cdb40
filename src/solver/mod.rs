use crate::grid::Grid;
use crate::Step;
use core::fmt;
use core::str::FromStr;
use grid_util::Point;
use std::collections::VecDeque;

pub mod bfs;
pub mod dfs;
pub mod path;
pub mod traversal;

use bfs::BfsSolver;
use dfs::DfsSolver;
use traversal::{Frontier, Traversal};

/// Result of one solve invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveOutcome {
    /// The path from start to end, both included.
    Found { path: Vec<Point> },
    /// The frontier ran empty before the end was reached.
    NoPath,
}

impl SolveOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SolveOutcome::Found { .. })
    }
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            SolveOutcome::Found { path } => Some(path),
            SolveOutcome::NoPath => None,
        }
    }
    pub fn into_path(self) -> Option<Vec<Point>> {
        match self {
            SolveOutcome::Found { path } => Some(path),
            SolveOutcome::NoPath => None,
        }
    }
    /// Path length counted in moves between cells.
    pub fn edge_count(&self) -> Option<usize> {
        self.path().map(|path| path.len() - 1)
    }
}

pub trait GridSolver {
    /// Container holding discovered cells. Its pop order decides the exploration order.
    type Frontier: Frontier;

    fn name(&self) -> &'static str;

    /// Starts a lazy solve on `grid`. Stale visited and path flags should be cleared with
    /// [Grid::reset_path_only] beforehand.
    fn steps<'g>(&self, grid: &'g mut Grid) -> Traversal<'g, Self::Frontier> {
        Traversal::new(grid, self.name())
    }

    /// Runs a solve to completion without pacing.
    fn solve(&self, grid: &mut Grid) -> SolveOutcome {
        self.steps(grid).finish()
    }

    fn get_path(&self, grid: &mut Grid) -> Option<Vec<Point>> {
        self.solve(grid).into_path()
    }
}

/// Solver choice as offered to a user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    #[default]
    Bfs,
    Dfs,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Bfs, Algorithm::Dfs];

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
        }
    }

    pub fn steps(self, grid: &mut Grid) -> Search<'_> {
        match self {
            Algorithm::Bfs => Search::Bfs(BfsSolver.steps(grid)),
            Algorithm::Dfs => Search::Dfs(DfsSolver.steps(grid)),
        }
    }

    pub fn solve(self, grid: &mut Grid) -> SolveOutcome {
        self.steps(grid).finish()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when parsing an [Algorithm] from an unknown label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown algorithm `{}`, expected BFS or DFS", self.0)
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseAlgorithmError(s.to_owned()))
    }
}

/// A running solve for either [Algorithm].
pub enum Search<'g> {
    Bfs(Traversal<'g, VecDeque<Point>>),
    Dfs(Traversal<'g, Vec<Point>>),
}

impl<'g> Search<'g> {
    pub fn grid(&self) -> &Grid {
        match self {
            Search::Bfs(traversal) => traversal.grid(),
            Search::Dfs(traversal) => traversal.grid(),
        }
    }
    pub fn outcome(&self) -> Option<&SolveOutcome> {
        match self {
            Search::Bfs(traversal) => traversal.outcome(),
            Search::Dfs(traversal) => traversal.outcome(),
        }
    }
    pub fn finish(self) -> SolveOutcome {
        match self {
            Search::Bfs(traversal) => traversal.finish(),
            Search::Dfs(traversal) => traversal.finish(),
        }
    }
}

impl<'g> Iterator for Search<'g> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        match self {
            Search::Bfs(traversal) => traversal.next(),
            Search::Dfs(traversal) => traversal.next(),
        }
    }
}
