//! Wall layout of a rectangular maze

use itertools::iproduct;
use rand::{seq::SliceRandom, Rng};

use crate::error::MazeError;

/// Smallest accepted width or height
pub const MIN_DIMENSION: usize = 2;
/// Largest accepted width or height; coordinates are stored as `i32`
pub const MAX_DIMENSION: usize = i32::MAX as usize - 1;

/// Cell location, `x` to the right and `y` downwards from the top-left cell.
///
/// Coordinates are signed so that a neighbor of a border cell may point one
/// step outside of the grid.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points
    pub fn distance(&self, other: &Point) -> f64 {
        f64::from(other.x - self.x).hypot(f64::from(other.y - self.y))
    }
}

/// Walls between the cells of a `width` x `height` maze, and the visit flags
/// of a traversal over it.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    /// `vertical[y][x]`: wall between `(x - 1, y)` and `(x, y)`, `x` in `0..=width`
    vertical: Vec<Vec<bool>>,
    /// `horizontal[y][x]`: wall between `(x, y - 1)` and `(x, y)`, `y` in `0..=height`
    horizontal: Vec<Vec<bool>>,
    /// Visit flags, surrounded by a border of sentinel cells that are
    /// already visited. `visited[y + 1][x + 1]` belongs to `(x, y)`.
    visited: Vec<Vec<bool>>,
}

/// Check that both sides are within [MIN_DIMENSION] and [MAX_DIMENSION]
pub fn check_dimensions(width: usize, height: usize) -> Result<(), MazeError> {
    let valid = MIN_DIMENSION..=MAX_DIMENSION;
    if valid.contains(&width) && valid.contains(&height) {
        Ok(())
    } else {
        Err(MazeError::InvalidDimension { width, height })
    }
}

impl Grid {
    /// Create a grid where every cell is walled in from all sides.
    ///
    /// Returns [MazeError::InvalidDimension] if either side is below 2.
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        check_dimensions(width, height)?;

        let visited = (0..height + 2)
            .map(|y| {
                (0..width + 2)
                    .map(|x| x == 0 || y == 0 || x > width || y > height)
                    .collect()
            })
            .collect();

        Ok(Self {
            width,
            height,
            vertical: vec![vec![true; width + 1]; height],
            horizontal: vec![vec![true; width]; height + 1],
            visited,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `p` is a cell of this grid
    pub fn contains(&self, p: Point) -> bool {
        usize::try_from(p.x).is_ok_and(|x| x < self.width)
            && usize::try_from(p.y).is_ok_and(|y| y < self.height)
    }

    /// Position of `p` in the padded visit matrix
    fn visit_index(&self, p: Point) -> Option<(usize, usize)> {
        let x = usize::try_from(p.x.checked_add(1)?).ok()?;
        let y = usize::try_from(p.y.checked_add(1)?).ok()?;
        Some((x, y))
    }

    /// Whether the traversal has reached `p`.
    ///
    /// Positions on the sentinel border, or further out, always read as
    /// visited.
    pub fn is_visited(&self, p: Point) -> bool {
        self.visit_index(p)
            .and_then(|(x, y)| self.visited.get(y)?.get(x).copied())
            .unwrap_or(true)
    }

    /// Mark `p` as reached. Positions outside of the grid are left untouched.
    pub fn mark_visited(&mut self, p: Point) {
        if !self.contains(p) {
            return;
        }
        if let Some((x, y)) = self.visit_index(p) {
            self.visited[y][x] = true;
        }
    }

    /// Remove the wall between `(x - 1, y)` and `(x, y)`; `x` in `1..width`
    pub fn open_vertical(&mut self, x: usize, y: usize) {
        debug_assert!((1..self.width).contains(&x) && y < self.height);
        self.vertical[y][x] = false;
    }

    /// Remove the wall between `(x, y - 1)` and `(x, y)`; `y` in `1..height`
    pub fn open_horizontal(&mut self, x: usize, y: usize) {
        debug_assert!(x < self.width && (1..self.height).contains(&y));
        self.horizontal[y][x] = false;
    }

    /// Remove the wall between two adjacent cells
    pub fn open_between(&mut self, a: Point, b: Point) {
        debug_assert!(self.contains(a) && self.contains(b));
        debug_assert_eq!((a.x - b.x).abs() + (a.y - b.y).abs(), 1);

        if a.y == b.y {
            self.open_vertical(a.x.max(b.x) as usize, a.y as usize);
        } else {
            self.open_horizontal(a.x as usize, a.y.max(b.y) as usize);
        }
    }

    /// Wall on the left side of cell `(x, y)`; `x == width` is the right border
    pub fn has_vertical_wall(&self, x: usize, y: usize) -> bool {
        self.vertical[y][x]
    }

    /// Wall on the top side of cell `(x, y)`; `y == height` is the bottom border
    pub fn has_horizontal_wall(&self, x: usize, y: usize) -> bool {
        self.horizontal[y][x]
    }

    /// Open adjacencies between cells, each pair listed once
    pub fn passages(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let across = iproduct!(0..self.height, 1..self.width)
            .filter(|&(y, x)| !self.vertical[y][x])
            .map(|(y, x)| (cell(x - 1, y), cell(x, y)));
        let down = iproduct!(1..self.height, 0..self.width)
            .filter(|&(y, x)| !self.horizontal[y][x])
            .map(|(y, x)| (cell(x, y - 1), cell(x, y)));
        across.chain(down)
    }

    /// The four axis-aligned neighbors of `p`, in a uniformly random order.
    ///
    /// Neighbors of border cells may lie outside of the grid; those read as
    /// visited.
    pub fn neighbors<R: Rng + ?Sized>(p: Point, random: &mut R) -> [Point; 4] {
        let mut neighbors = [
            Point::new(p.x - 1, p.y),
            Point::new(p.x + 1, p.y),
            Point::new(p.x, p.y - 1),
            Point::new(p.x, p.y + 1),
        ];
        neighbors.shuffle(random);
        neighbors
    }
}

/// Point from grid indices, which are bounded by [MAX_DIMENSION]
fn cell(x: usize, y: usize) -> Point {
    Point::new(x as i32, y as i32)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{rngs::StdRng, SeedableRng};

    use crate::error::MazeError;
    use crate::grid::{Grid, Point};

    #[test]
    fn reject_too_small_dimensions() {
        for (width, height) in [(1, 5), (5, 1), (0, 0), (1, 1)] {
            assert!(matches!(
                Grid::new(width, height),
                Err(MazeError::InvalidDimension { .. })
            ));
        }
        assert!(Grid::new(2, 2).is_ok());
    }

    #[test]
    fn new_grid_is_fully_walled() {
        let grid = Grid::new(4, 3).unwrap();

        for y in 0..3 {
            for x in 0..=4 {
                assert!(grid.has_vertical_wall(x, y));
            }
        }
        for y in 0..=3 {
            for x in 0..4 {
                assert!(grid.has_horizontal_wall(x, y));
            }
        }
        assert_eq!(grid.passages().count(), 0);
    }

    #[test]
    fn sentinel_border_reads_as_visited() {
        let grid = Grid::new(3, 2).unwrap();

        assert!(!grid.is_visited(Point::new(0, 0)));
        assert!(!grid.is_visited(Point::new(2, 1)));

        assert!(grid.is_visited(Point::new(3, 0)));
        assert!(grid.is_visited(Point::new(0, 2)));
        assert!(grid.is_visited(Point::new(-1, 1)));
        assert!(grid.is_visited(Point::new(1, -1)));
        assert!(grid.is_visited(Point::new(50, -7)));
    }

    #[test]
    fn mark_visited_ignores_outside_points() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.mark_visited(Point::new(1, 0));
        grid.mark_visited(Point::new(-1, 0));
        grid.mark_visited(Point::new(2, 2));

        assert!(grid.is_visited(Point::new(1, 0)));
        assert!(!grid.is_visited(Point::new(0, 0)));
        assert!(!grid.is_visited(Point::new(1, 1)));
    }

    #[test]
    fn open_between_picks_the_shared_wall() {
        let mut grid = Grid::new(3, 3).unwrap();

        grid.open_between(Point::new(2, 1), Point::new(1, 1));
        assert!(!grid.has_vertical_wall(2, 1));

        grid.open_between(Point::new(0, 1), Point::new(0, 2));
        assert!(!grid.has_horizontal_wall(0, 2));

        let passages: HashSet<_> = grid.passages().collect();
        assert_eq!(
            passages,
            HashSet::from([
                (Point::new(1, 1), Point::new(2, 1)),
                (Point::new(0, 1), Point::new(0, 2)),
            ])
        );
    }

    #[test]
    fn neighbors_are_a_permutation() {
        let mut random = StdRng::seed_from_u64(3);
        let p = Point::new(4, 7);
        let expected = HashSet::from([
            Point::new(3, 7),
            Point::new(5, 7),
            Point::new(4, 6),
            Point::new(4, 8),
        ]);

        let orders: HashSet<_> = (0..50)
            .map(|_| {
                let neighbors = Grid::neighbors(p, &mut random);
                assert_eq!(HashSet::from(neighbors), expected);
                neighbors
            })
            .collect();
        assert!(orders.len() > 1);
    }
}
