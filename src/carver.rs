//! Depth-first carving of passages

use log::debug;
use rand::Rng;

use crate::error::MazeError;
use crate::grid::{Grid, Point};

/// Pending step of the traversal, from a reached cell towards a neighbor
#[derive(Clone, Copy, Debug)]
struct Edge {
    from: Point,
    to: Point,
}

/// Carve a spanning tree into `grid`, starting from `start`.
///
/// Iterative depth-first traversal: the edges towards the neighbors of each
/// newly reached cell are pushed onto a stack in random order, and the most
/// recent one is followed first. An edge whose target has already been
/// reached is dropped, which is how the traversal backtracks. `end` is
/// never expanded, so it becomes a dead end of the maze.
///
/// `on_visit` is called with the partially carved grid after every newly
/// reached cell. Its errors abort the carving.
///
/// Returns the number of passages carved, which is `width * height - 1` for
/// a fresh grid.
pub fn carve<R, F>(
    grid: &mut Grid,
    start: Point,
    end: Point,
    random: &mut R,
    mut on_visit: F,
) -> Result<usize, MazeError>
where
    R: Rng + ?Sized,
    F: FnMut(&Grid) -> Result<(), MazeError>,
{
    grid.mark_visited(start);
    let mut stack: Vec<Edge> = Grid::neighbors(start, random)
        .into_iter()
        .map(|to| Edge { from: start, to })
        .collect();

    let mut carved = 0;
    while let Some(Edge { from, to }) = stack.pop() {
        if grid.is_visited(to) {
            continue;
        }
        grid.mark_visited(to);
        grid.open_between(from, to);
        carved += 1;

        on_visit(grid)?;

        if to == end {
            continue;
        }
        stack.extend(
            Grid::neighbors(to, random)
                .into_iter()
                .filter(|&next| !grid.is_visited(next))
                .map(|next| Edge { from: to, to: next }),
        );
    }

    debug!(
        "Carved {} passages in a {}x{} grid",
        carved,
        grid.width(),
        grid.height()
    );
    Ok(carved)
}
