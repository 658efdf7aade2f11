//! Maze generation

use log::debug;
use rand::{rngs::StdRng, SeedableRng};

use crate::{carver, error::MazeError, grid::Grid, points, Maze};

/// Perfect maze generator with its own random source
pub struct MazeGenerator {
    random: StdRng,
}

impl MazeGenerator {
    /// Create generator; with `seed`, the produced mazes are reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Generate a `width` x `height` maze
    pub fn generate_maze(&mut self, width: usize, height: usize) -> Result<Maze, MazeError> {
        self.generate_maze_with_progress(width, height, |_| Ok(()))
    }

    /// Generate a `width` x `height` maze, calling `on_visit` with the
    /// partially carved grid after every carved cell.
    ///
    /// 1. Create a fully walled grid
    /// 2. Pick distant start and end cells
    /// 3. Carve passages depth-first from the start cell
    pub fn generate_maze_with_progress<F>(
        &mut self,
        width: usize,
        height: usize,
        on_visit: F,
    ) -> Result<Maze, MazeError>
    where
        F: FnMut(&Grid) -> Result<(), MazeError>,
    {
        let mut grid = Grid::new(width, height)?;
        let (start, end) = points::select_points(width, height, &mut self.random)?;
        carver::carve(&mut grid, start, end, &mut self.random, on_visit)?;

        debug!(
            "Generated {}x{} maze from {:?} to {:?}",
            width, height, start, end
        );
        Ok(Maze { grid, start, end })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::{error::MazeError, maze_generator::MazeGenerator, points::distance_threshold};

    #[test]
    fn same_seed_gives_same_maze() {
        let first = MazeGenerator::new(Some(0)).generate_maze(20, 10).unwrap();
        let second = MazeGenerator::new(Some(0)).generate_maze(20, 10).unwrap();
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn layouts_vary_between_runs() {
        let mut gen = MazeGenerator::new(Some(9));
        let layouts: HashSet<String> = (0..10)
            .map(|_| gen.generate_maze(8, 8).unwrap().to_string())
            .collect();
        assert!(layouts.len() > 1);
    }

    #[test]
    fn generated_mazes_keep_invariants() {
        let mut gen = MazeGenerator::new(Some(2024));
        for _ in 0..25 {
            let maze = gen.generate_maze(12, 7).unwrap();
            assert_eq!(maze.grid().passages().count(), 12 * 7 - 1);
            assert!(maze.grid().contains(maze.start()));
            assert!(maze.grid().contains(maze.end()));
            assert_ne!(maze.start(), maze.end());
            assert!(maze.start().distance(&maze.end()) >= distance_threshold(12, 7));
        }
    }

    #[test]
    fn invalid_dimensions_call_no_progress() {
        let mut gen = MazeGenerator::new(Some(0));
        let mut calls = 0;
        let result = gen.generate_maze_with_progress(5, 1, |_| {
            calls += 1;
            Ok(())
        });
        assert!(matches!(result, Err(MazeError::InvalidDimension { .. })));
        assert_eq!(calls, 0);
    }
}
