use grid_util::Point;
use std::collections::VecDeque;

use crate::solver::GridSolver;

/// Breadth-first search. Cells leave the queue in non-decreasing distance from the start and
/// keep the parent they were first discovered from, so the reconstructed path is a shortest
/// one in number of moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    type Frontier = VecDeque<Point>;

    fn name(&self) -> &'static str {
        "BFS"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellKind;
    use crate::grid::Grid;
    use crate::solver::SolveOutcome;
    use crate::{pos, Step};

    /// Open 3x3 grid from corner to corner. Up, down, left, right ordering sends the search
    /// down the left column first.
    #[test]
    fn open_corner_to_corner() {
        let mut grid = Grid::with_endpoints(3, 3, pos(0, 0), pos(2, 2));
        let steps = BfsSolver.steps(&mut grid).collect::<Vec<_>>();
        let visits = [
            pos(1, 0),
            pos(0, 1),
            pos(2, 0),
            pos(1, 1),
            pos(0, 2),
            pos(2, 1),
            pos(1, 2),
        ]
        .map(Step::Visit);
        let marks = [pos(2, 1), pos(2, 0), pos(1, 0)].map(Step::Path);
        assert_eq!(&steps[..7], &visits);
        assert_eq!(&steps[7..], &marks);

        assert_eq!(grid.count_kind(CellKind::Path), 3);
        assert_eq!(grid.count_kind(CellKind::Visited), 4);
        let outcome = BfsSolver.solve(&mut grid);
        assert_eq!(outcome.edge_count(), Some(4));
    }

    /// Asserts that the optimal 4 step solution is found around a central obstacle.
    #[test]
    fn solve_simple_problem() {
        let mut grid = Grid::with_endpoints(3, 3, pos(0, 0), pos(2, 2));
        grid.set_wall(1, 1, true);
        let path = BfsSolver.get_path(&mut grid).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), Some(&pos(0, 0)));
        assert_eq!(path.last(), Some(&pos(2, 2)));
    }

    #[test]
    fn enclosed_end() {
        let mut grid = Grid::with_endpoints(5, 5, pos(0, 0), pos(2, 2));
        for (row, col) in [(1, 2), (3, 2), (2, 1), (2, 3)] {
            grid.set_wall(row, col, true);
        }
        let mut traversal = BfsSolver.steps(&mut grid);
        let visits = traversal.by_ref().count();
        assert_eq!(visits, 25 - 4 - 2);
        assert_eq!(traversal.visits(), visits);
        assert!(!traversal.parents().contains_key(&pos(2, 2)));
        assert_eq!(traversal.outcome(), Some(&SolveOutcome::NoPath));
        assert_eq!(grid.count_kind(CellKind::Path), 0);
    }

    #[test]
    fn outcome_only_after_last_step() {
        let mut grid = Grid::with_endpoints(1, 4, pos(0, 0), pos(0, 3));
        let mut traversal = BfsSolver.steps(&mut grid);
        assert_eq!(traversal.next(), Some(Step::Visit(pos(0, 1))));
        assert!(traversal.outcome().is_none());
        assert!(traversal.grid().cell(&pos(0, 1)).is_visited());
        assert_eq!(traversal.next(), Some(Step::Visit(pos(0, 2))));
        assert_eq!(traversal.visits(), 2);
        assert_eq!(traversal.next(), Some(Step::Path(pos(0, 2))));
        let parents = traversal.parents().iter().map(|(&p, &q)| (p, q)).collect::<Vec<_>>();
        assert_eq!(
            parents,
            vec![
                (pos(0, 1), pos(0, 0)),
                (pos(0, 2), pos(0, 1)),
                (pos(0, 3), pos(0, 2))
            ]
        );
        assert!(traversal.outcome().is_none());
        assert_eq!(traversal.next(), Some(Step::Path(pos(0, 1))));
        assert_eq!(traversal.next(), None);
        assert_eq!(
            traversal.outcome(),
            Some(&SolveOutcome::Found {
                path: vec![pos(0, 0), pos(0, 1), pos(0, 2), pos(0, 3)]
            })
        );
    }
}
