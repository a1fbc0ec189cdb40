/// How a renderer should draw a [Cell]. When several flags are set, the first matching
/// variant in declaration order wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    Start,
    End,
    Wall,
    Path,
    Visited,
    Plain,
}

impl CellKind {
    /// Single character used by the [Display](core::fmt::Display) impl of [Grid](crate::Grid).
    pub fn symbol(self) -> char {
        match self {
            CellKind::Start => 'S',
            CellKind::End => 'E',
            CellKind::Wall => '#',
            CellKind::Path => '*',
            CellKind::Visited => 'o',
            CellKind::Plain => '.',
        }
    }
}

/// Structural and solver state of one grid position. Cells are read-only outside this crate,
/// hosts edit walls through [Grid::set_wall](crate::Grid::set_wall).
///
/// ```compile_fail
/// use grid_maze::{pos, Grid};
/// let mut grid = Grid::new(5, 5);
/// grid.cell_mut(&pos(1, 1)).set_wall(true);
/// ```
///
/// ```compile_fail
/// use grid_maze::Cell;
/// let mut cell = Cell::default();
/// cell.set_start(true);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    wall: bool,
    start: bool,
    end: bool,
    path: bool,
    visited: bool,
}

impl Cell {
    pub fn is_wall(&self) -> bool {
        self.wall
    }
    pub fn is_start(&self) -> bool {
        self.start
    }
    pub fn is_end(&self) -> bool {
        self.end
    }
    pub fn is_path(&self) -> bool {
        self.path
    }
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub(crate) fn toggle_wall(&mut self) {
        self.wall = !self.wall;
    }
    pub(crate) fn set_wall(&mut self, wall: bool) {
        self.wall = wall;
    }
    pub(crate) fn set_start(&mut self, start: bool) {
        self.start = start;
    }
    pub(crate) fn set_end(&mut self, end: bool) {
        self.end = end;
    }
    /// Marks the cell as part of the final path. Always clears the visited flag.
    pub(crate) fn set_path(&mut self, path: bool) {
        self.path = path;
        self.visited = false;
    }
    pub(crate) fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    /// Clears start, end, path and visited state. Walls are kept.
    pub(crate) fn reset_path(&mut self) {
        self.start = false;
        self.end = false;
        self.path = false;
        self.visited = false;
    }
    /// Clears every flag, walls included.
    pub(crate) fn reset_all(&mut self) {
        *self = Cell::default();
    }

    pub fn kind(&self) -> CellKind {
        if self.start {
            CellKind::Start
        } else if self.end {
            CellKind::End
        } else if self.wall {
            CellKind::Wall
        } else if self.path {
            CellKind::Path
        } else if self.visited {
            CellKind::Visited
        } else {
            CellKind::Plain
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_clears_visited() {
        let mut cell = Cell::default();
        cell.set_visited(true);
        assert_eq!(cell.kind(), CellKind::Visited);
        cell.set_path(true);
        assert!(cell.is_path());
        assert!(!cell.is_visited());
        assert_eq!(cell.kind(), CellKind::Path);
    }

    #[test]
    fn reset_path_keeps_walls() {
        let mut cell = Cell::default();
        cell.set_wall(true);
        cell.set_start(true);
        cell.set_path(true);
        cell.reset_path();
        assert!(cell.is_wall());
        assert!(!cell.is_start());
        assert!(!cell.is_path());

        cell.reset_all();
        assert_eq!(cell, Cell::default());
    }

    #[test]
    fn kind_precedence() {
        let mut cell = Cell::default();
        assert_eq!(cell.kind(), CellKind::Plain);
        cell.toggle_wall();
        cell.set_visited(true);
        assert_eq!(cell.kind(), CellKind::Wall);
        cell.set_end(true);
        assert_eq!(cell.kind(), CellKind::End);
        cell.set_start(true);
        assert_eq!(cell.kind(), CellKind::Start);
        assert_eq!(cell.kind().symbol(), 'S');
    }
}
