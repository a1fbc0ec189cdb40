use grid_util::Point;

use crate::solver::GridSolver;

/// Depth-first search on an explicit stack. Cells are marked when pushed, so each keeps the
/// parent that discovered it first. The resulting path is whatever depth-first order finds
/// and is not necessarily a shortest one.
#[derive(Clone, Copy, Debug, Default)]
pub struct DfsSolver;

impl GridSolver for DfsSolver {
    type Frontier = Vec<Point>;

    fn name(&self) -> &'static str {
        "DFS"
    }
}
