//! Generate perfect mazes and draw them as text
//!
//! A perfect maze has exactly one path between any two of its cells. The
//! start cell is marked with `S` and the end cell with `E`; they are placed
//! far apart from each other.
//!
//! # Examples
//! ## Seeded maze
//! ```
//! use text_maze::maze_generator::MazeGenerator;
//!
//! let mut gen = MazeGenerator::new(Some(13));
//! let maze = gen.generate_maze(16, 8).unwrap();
//! let text = maze.to_string();
//!
//! assert_eq!(text.lines().count(), 2 * 8 + 1);
//! assert!(text.lines().all(|line| line.chars().count() == 3 * 16 + 1));
//! assert_eq!(maze.grid().passages().count(), 16 * 8 - 1);
//! ```
//!
//! ## Reading a maze back
//! ```
//! use text_maze::Maze;
//!
//! let text = "
//! +--+--+--+
//! |S    |  |
//! +--+  +  +
//! |E       |
//! +--+--+--+";
//! let maze = Maze::parse_text(text.trim()).unwrap();
//! assert_eq!((maze.grid().width(), maze.grid().height()), (3, 2));
//! assert_eq!(maze.grid().passages().count(), 5);
//! assert_eq!(maze.to_string(), text.trim());
//! ```

use std::fmt;
use std::io;

pub mod carver;
pub mod error;
pub mod grid;
pub mod maze_generator;
pub mod points;
pub mod progress;
pub mod render;

pub use error::MazeError;
pub use grid::{Grid, Point};

use maze_generator::MazeGenerator;
use progress::{TerminalAnimation, DEFAULT_FRAME_LENGTH};
use render::{Palette, CEILING, CORNER, EMPTY, END, START, WALL};

/// Carved grid together with its start and end cells
#[derive(Clone, Debug)]
pub struct Maze {
    grid: Grid,
    start: Point,
    end: Point,
}

impl Maze {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// Draw the maze, see [render::render]
    pub fn render(&self, palette: Palette) -> String {
        render::render(&self.grid, Some((self.start, self.end)), palette)
    }

    /// Parse maze from its plain text drawing
    ///
    /// - `text`: Output of [Maze::render] without colors. A trailing newline
    ///   is accepted.
    ///
    /// Returns [MazeError::UnknownGridPart] when a corner, wall, ceiling or
    /// cell position holds a character that does not belong there, with
    /// 1-based line and column. Returns [MazeError::MalformedText] when the
    /// lines do not form a rectangular grid, the outer border has an opening,
    /// or the markers are missing or repeated.
    pub fn parse_text(text: &str) -> Result<Self, MazeError> {
        let lines: Vec<Vec<char>> = text.lines().map(|line| line.chars().collect()).collect();

        let line_len = lines.first().map_or(0, Vec::len);
        if lines.len() % 2 == 0 || line_len % 3 != 1 {
            return Err(MazeError::MalformedText(format!(
                "{} lines of {} characters do not form a grid",
                lines.len(),
                line_len
            )));
        }
        let (width, height) = ((line_len - 1) / 3, (lines.len() - 1) / 2);
        let mut grid = Grid::new(width, height)?;
        let mut start = None;
        let mut end = None;

        for (line_no, line) in lines.iter().enumerate() {
            if line.len() != line_len {
                return Err(MazeError::MalformedText(format!(
                    "line {} has {} characters, expected {}",
                    line_no + 1,
                    line.len(),
                    line_len
                )));
            }
            let y = line_no / 2;

            for (x, part) in line.chunks(3).enumerate() {
                let unknown = |glyph: char, offset: usize| MazeError::UnknownGridPart {
                    glyph,
                    line: line_no + 1,
                    column: 3 * x + offset + 1,
                };

                if line_no % 2 == 0 {
                    // Corner and ceiling above row `y`
                    if part[0] != CORNER {
                        return Err(unknown(part[0], 0));
                    }
                    let &[_, left, right] = part else {
                        continue;
                    };
                    let open = match (left, right) {
                        (CEILING, CEILING) => false,
                        (EMPTY, EMPTY) => true,
                        (CEILING | EMPTY, glyph) => return Err(unknown(glyph, 2)),
                        (glyph, _) => return Err(unknown(glyph, 1)),
                    };
                    if open {
                        if y == 0 || y == height {
                            return Err(border_opening(line_no, 3 * x + 1));
                        }
                        grid.open_horizontal(x, y);
                    }
                } else {
                    // Wall left of cell `(x, y)`, then the cell body
                    match part[0] {
                        WALL => (),
                        EMPTY if x == 0 || x == width => {
                            return Err(border_opening(line_no, 3 * x))
                        }
                        EMPTY => grid.open_vertical(x, y),
                        glyph => return Err(unknown(glyph, 0)),
                    }
                    let &[_, body, rest] = part else {
                        continue;
                    };
                    if rest != EMPTY {
                        return Err(unknown(rest, 2));
                    }
                    let p = Point::new(x as i32, y as i32);
                    let marker = match body {
                        EMPTY => continue,
                        START => &mut start,
                        END => &mut end,
                        glyph => return Err(unknown(glyph, 1)),
                    };
                    if marker.replace(p).is_some() {
                        return Err(MazeError::MalformedText(format!(
                            "repeated marker `{}` at line {}",
                            body,
                            line_no + 1
                        )));
                    }
                }
            }
        }

        let missing = |glyph: char| MazeError::MalformedText(format!("marker `{}` not found", glyph));
        Ok(Maze {
            grid,
            start: start.ok_or_else(|| missing(START))?,
            end: end.ok_or_else(|| missing(END))?,
        })
    }
}

fn border_opening(line_no: usize, column: usize) -> MazeError {
    MazeError::MalformedText(format!(
        "outer border is open at line {}, column {}",
        line_no + 1,
        column + 1
    ))
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Palette::PLAIN))
    }
}

/// Generate a `width` x `height` maze and return its drawing
///
/// Markers are colored when standard output is a terminal. With
/// `show_progress`, the carving is animated on standard output before the
/// drawing is returned.
///
/// Returns [MazeError::InvalidDimension] if either side is below 2, before
/// anything is drawn.
pub fn generate_maze(width: usize, height: usize, show_progress: bool) -> Result<String, MazeError> {
    grid::check_dimensions(width, height)?;
    let palette = Palette::detect();
    let mut gen = MazeGenerator::new(None);

    let maze = if show_progress {
        let mut animation = TerminalAnimation::new(io::stdout(), palette, DEFAULT_FRAME_LENGTH);
        animation.begin()?;
        let maze = gen.generate_maze_with_progress(width, height, |grid| Ok(animation.frame(grid)?));
        animation.finish()?;
        maze?
    } else {
        gen.generate_maze(width, height)?
    };
    Ok(maze.render(palette))
}
