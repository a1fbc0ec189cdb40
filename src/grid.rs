use crate::cell::{Cell, CellKind};
use crate::{pos, NEIGHBOR_OFFSETS};
use core::fmt;
use grid_util::Point;
use itertools::iproduct;
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// [Grid] is a fixed-size, row-major array of [Cell]s together with the start and end
/// coordinates. Points use `x` for the column and `y` for the row, see [pos].
///
/// The start and end cells are flagged and open after construction, after either reset and
/// after maze generation. Wall mutators refuse to touch them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    start: Point,
    end: Point,
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::new(crate::DEFAULT_ROWS, crate::DEFAULT_COLS)
    }
}

impl Grid {
    /// Creates an open grid with start at `(1, 1)` and end at `(rows - 2, cols - 2)`.
    pub fn new(rows: usize, cols: usize) -> Grid {
        assert!(
            rows >= 3 && cols >= 3,
            "a {rows}x{cols} grid has no room for inner endpoints"
        );
        let start = pos(1, 1);
        let end = pos(rows as i32 - 2, cols as i32 - 2);
        Grid::with_endpoints(rows, cols, start, end)
    }

    /// Creates an open grid with explicit endpoints.
    pub fn with_endpoints(rows: usize, cols: usize, start: Point, end: Point) -> Grid {
        assert!(rows > 0 && cols > 0, "grid dimensions must be non-zero");
        let mut grid = Grid {
            rows,
            cols,
            cells: vec![Cell::default(); rows * cols],
            start,
            end,
        };
        assert!(grid.in_bounds(&start), "start {start:?} lies outside the grid");
        assert!(grid.in_bounds(&end), "end {end:?} lies outside the grid");
        assert!(start != end, "start and end must differ");
        grid.mark_endpoints();
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn start(&self) -> Point {
        self.start
    }
    pub fn end(&self) -> Point {
        self.end
    }

    pub fn is_valid_position(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }
    pub fn in_bounds(&self, point: &Point) -> bool {
        self.is_valid_position(point.y, point.x)
    }

    pub fn get_ix_point(&self, point: &Point) -> usize {
        debug_assert!(self.in_bounds(point));
        point.y as usize * self.cols + point.x as usize
    }
    pub fn get_point_ix(&self, ix: usize) -> Point {
        pos((ix / self.cols) as i32, (ix % self.cols) as i32)
    }

    /// Panics if `point` is out of bounds.
    pub fn cell(&self, point: &Point) -> &Cell {
        &self.cells[self.get_ix_point(point)]
    }
    /// Panics if `point` is out of bounds.
    pub(crate) fn cell_mut(&mut self, point: &Point) -> &mut Cell {
        let ix = self.get_ix_point(point);
        &mut self.cells[ix]
    }
    /// All positions in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        iproduct!(0..self.rows as i32, 0..self.cols as i32).map(|(row, col)| pos(row, col))
    }
    /// All cells in row-major order, paired with their position.
    pub fn cells(&self) -> impl Iterator<Item = (Point, &Cell)> + '_ {
        self.points().zip(self.cells.iter())
    }
    pub fn count_kind(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|cell| cell.kind() == kind).count()
    }

    /// In bounds and not a wall.
    pub fn open(&self, point: &Point) -> bool {
        self.in_bounds(point) && !self.cell(point).is_wall()
    }

    /// The orthogonal neighbours of `point` that lie on the grid, always in the order up,
    /// down, left, right. Solvers depend on this order to pick between equally good paths.
    pub fn neighbors4(&self, point: &Point) -> SmallVec<[Point; 4]> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|(d_row, d_col)| pos(point.y + d_row, point.x + d_col))
            .filter(|p| self.in_bounds(p))
            .collect()
    }
    pub fn open_neighbors(&self, point: &Point) -> SmallVec<[Point; 4]> {
        self.neighbors4(point)
            .into_iter()
            .filter(|p| !self.cell(p).is_wall())
            .collect()
    }

    /// Re-asserts the start and end flags and makes sure neither is a wall.
    pub fn mark_endpoints(&mut self) {
        let (start, end) = (self.start, self.end);
        let start_cell = self.cell_mut(&start);
        start_cell.set_wall(false);
        start_cell.set_start(true);
        let end_cell = self.cell_mut(&end);
        end_cell.set_wall(false);
        end_cell.set_end(true);
    }

    /// Clears path and visited state while keeping the walls.
    pub fn reset_path_only(&mut self) {
        debug!("Resetting path state of {}x{} grid", self.rows, self.cols);
        self.cells.iter_mut().for_each(Cell::reset_path);
        self.mark_endpoints();
    }
    /// Clears everything, walls included.
    pub fn reset_all(&mut self) {
        debug!("Resetting {}x{} grid", self.rows, self.cols);
        self.cells.iter_mut().for_each(Cell::reset_all);
        self.mark_endpoints();
    }
    pub fn reset(&mut self, path_only: bool) {
        if path_only {
            self.reset_path_only();
        } else {
            self.reset_all();
        }
    }

    /// Turns every cell, endpoints included, into a wall. Used as the first generation step,
    /// callers have to restore the endpoints through [mark_endpoints](Self::mark_endpoints).
    pub(crate) fn fill_walls(&mut self) {
        self.cells.iter_mut().for_each(|cell| cell.set_wall(true));
    }

    /// Flips the wall state at `(row, col)`. Returns [false] without changing anything if the
    /// position is out of bounds or holds an endpoint.
    pub fn toggle_wall(&mut self, row: i32, col: i32) -> bool {
        match self.editable_cell(row, col) {
            Some(cell) => {
                cell.toggle_wall();
                true
            }
            None => false,
        }
    }
    /// Sets the wall state at `(row, col)`, with the same restrictions as
    /// [toggle_wall](Self::toggle_wall).
    pub fn set_wall(&mut self, row: i32, col: i32, wall: bool) -> bool {
        match self.editable_cell(row, col) {
            Some(cell) => {
                cell.set_wall(wall);
                true
            }
            None => false,
        }
    }
    fn editable_cell(&mut self, row: i32, col: i32) -> Option<&mut Cell> {
        if !self.is_valid_position(row, col) {
            return None;
        }
        let cell = self.cell_mut(&pos(row, col));
        if cell.is_start() || cell.is_end() {
            None
        } else {
            Some(cell)
        }
    }

    /// Builds a [UnionFind] structure linking every pair of orthogonally adjacent open cells.
    pub fn components(&self) -> UnionFind<usize> {
        let mut components = UnionFind::new(self.rows * self.cols);
        for point in self.points().filter(|p| !self.cell(p).is_wall()) {
            let ix = self.get_ix_point(&point);
            for neighbor in [pos(point.y + 1, point.x), pos(point.y, point.x + 1)] {
                if self.open(&neighbor) {
                    components.union(ix, self.get_ix_point(&neighbor));
                }
            }
        }
        components
    }

    /// Checks if both points are open and on the same connected component.
    pub fn reachable(&self, from: &Point, to: &Point) -> bool {
        self.open(from)
            && self.open(to)
            && self
                .components()
                .equiv(self.get_ix_point(from), self.get_ix_point(to))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line = row
                .iter()
                .map(|cell| cell.kind().symbol())
                .collect::<String>();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
