//! Text rendering of a maze grid
//!
//! Every cell is three characters wide: the wall on its left side followed by
//! a two-character body. Separator lines between the cell rows hold a corner
//! followed by the two-character ceiling of each cell. Each line is closed by
//! the right border, so every line is `3 * width + 1` characters long.

use std::env;
use std::io::{self, IsTerminal};

use crossterm::style::{style, Color, Stylize};

use crate::grid::{Grid, Point};

pub const CORNER: char = '+';
pub const WALL: char = '|';
pub const CEILING: char = '-';
pub const EMPTY: char = ' ';
pub const START: char = 'S';
pub const END: char = 'E';

/// Output capabilities that the renderer may use
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct Palette {
    /// Draw the start marker in green and the end marker in red
    pub color: bool,
}

impl Palette {
    /// Plain characters only
    pub const PLAIN: Palette = Palette { color: false };
    /// ANSI colored markers
    pub const COLORED: Palette = Palette { color: true };

    /// Color when standard output is a terminal and `NO_COLOR` is not set
    pub fn detect() -> Self {
        Palette {
            color: io::stdout().is_terminal() && env::var_os("NO_COLOR").is_none(),
        }
    }

    fn push_marker(&self, out: &mut String, glyph: char, color: Color) {
        if self.color {
            out.push_str(&style(glyph).with(color).to_string());
        } else {
            out.push(glyph);
        }
    }
}

/// Render `grid` as text, without trailing newline.
///
/// With `markers`, the start and end cells are labeled with [START] and
/// [END].
pub fn render(grid: &Grid, markers: Option<(Point, Point)>, palette: Palette) -> String {
    let (width, height) = (grid.width(), grid.height());
    let mut out = String::with_capacity((3 * width + 2) * (2 * height + 1));

    for y in 0..=height {
        for x in 0..width {
            let ceiling = if grid.has_horizontal_wall(x, y) {
                CEILING
            } else {
                EMPTY
            };
            out.extend([CORNER, ceiling, ceiling]);
        }
        out.push(CORNER);
        if y == height {
            break;
        }
        out.push('\n');

        for x in 0..width {
            out.push(wall(grid, x, y));
            let p = Point::new(x as i32, y as i32);
            match markers {
                Some((start, _)) if start == p => palette.push_marker(&mut out, START, Color::Green),
                Some((_, end)) if end == p => palette.push_marker(&mut out, END, Color::Red),
                _ => out.push(EMPTY),
            }
            out.push(EMPTY);
        }
        out.push(wall(grid, width, y));
        out.push('\n');
    }
    out
}

fn wall(grid: &Grid, x: usize, y: usize) -> char {
    if grid.has_vertical_wall(x, y) {
        WALL
    } else {
        EMPTY
    }
}
