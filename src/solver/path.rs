use fxhash::FxBuildHasher;
use grid_util::Point;
use indexmap::IndexMap;

pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Walks a parent map from the end back toward the start. Yields every cell on the way except
/// the two endpoints, in end-to-start order. Iteration stops at the first cell without a
/// parent entry or when the start is reached.
pub struct PathReconstructor<'p> {
    parents: &'p FxIndexMap<Point, Point>,
    start: Point,
    current: Point,
}

impl<'p> PathReconstructor<'p> {
    pub fn new(parents: &'p FxIndexMap<Point, Point>, start: Point, end: Point) -> Self {
        PathReconstructor {
            parents,
            start,
            current: end,
        }
    }
}

impl<'p> Iterator for PathReconstructor<'p> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.current == self.start {
            return None;
        }
        let parent = *self.parents.get(&self.current)?;
        self.current = parent;
        (parent != self.start).then_some(parent)
    }
}

/// Turns a parent map into the full path from `start` to `end`, both included. Returns [None]
/// if the parent chain starting at `end` does not lead back to `start`.
pub fn reconstruct_path(
    parents: &FxIndexMap<Point, Point>,
    start: Point,
    end: Point,
) -> Option<Vec<Point>> {
    if start == end {
        return Some(vec![start]);
    }
    let mut path = vec![end];
    path.extend(PathReconstructor::new(parents, start, end));
    let last = path.last().copied()?;
    if parents.get(&last) != Some(&start) {
        return None;
    }
    path.push(start);
    path.reverse();
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pos;

    fn chain(points: &[Point]) -> FxIndexMap<Point, Point> {
        points
            .windows(2)
            .map(|pair| (pair[1], pair[0]))
            .collect::<FxIndexMap<_, _>>()
    }

    #[test]
    fn skips_endpoints() {
        let points = [pos(0, 0), pos(0, 1), pos(1, 1), pos(1, 2)];
        let parents = chain(&points);
        let interior = PathReconstructor::new(&parents, pos(0, 0), pos(1, 2))
            .collect::<Vec<_>>();
        assert_eq!(interior, vec![pos(1, 1), pos(0, 1)]);
        let path = reconstruct_path(&parents, pos(0, 0), pos(1, 2)).unwrap();
        assert_eq!(path, points.to_vec());
    }

    #[test]
    fn adjacent_endpoints() {
        let parents = chain(&[pos(2, 2), pos(2, 3)]);
        assert_eq!(
            PathReconstructor::new(&parents, pos(2, 2), pos(2, 3)).count(),
            0
        );
        assert_eq!(
            reconstruct_path(&parents, pos(2, 2), pos(2, 3)),
            Some(vec![pos(2, 2), pos(2, 3)])
        );
    }

    #[test]
    fn broken_chain() {
        let parents = chain(&[pos(0, 1), pos(0, 2), pos(0, 3)]);
        assert_eq!(reconstruct_path(&parents, pos(0, 0), pos(0, 3)), None);
        assert_eq!(reconstruct_path(&parents, pos(0, 0), pos(5, 5)), None);
        assert_eq!(
            reconstruct_path(&parents, pos(0, 0), pos(0, 0)),
            Some(vec![pos(0, 0)])
        );
    }
}
