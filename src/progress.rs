//! Animated display of the carving on a terminal

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    style::Print,
    terminal::{Clear, ClearType},
    QueueableCommand,
};

use crate::grid::Grid;
use crate::render::{render, Palette};

/// Delay between two frames of the animation
pub const DEFAULT_FRAME_LENGTH: Duration = Duration::from_micros(2500);

/// Terminal row where the maze is drawn
const ORIGIN_ROW: u16 = 1;

/// Redraws the partially carved grid in place, one frame per carved cell
pub struct TerminalAnimation<W: Write> {
    out: W,
    palette: Palette,
    frame_length: Duration,
    frames: usize,
}

impl<W: Write> TerminalAnimation<W> {
    pub fn new(out: W, palette: Palette, frame_length: Duration) -> Self {
        Self {
            out,
            palette,
            frame_length,
            frames: 0,
        }
    }

    /// Clear the screen and hide the cursor
    pub fn begin(&mut self) -> io::Result<()> {
        self.out.queue(Hide)?.queue(Clear(ClearType::All))?;
        self.out.flush()
    }

    /// Draw one frame, then wait for the frame length
    pub fn frame(&mut self, grid: &Grid) -> io::Result<()> {
        self.out
            .queue(MoveTo(0, ORIGIN_ROW))?
            .queue(Print(render(grid, None, self.palette)))?;
        self.out.flush()?;
        self.frames += 1;

        if !self.frame_length.is_zero() {
            thread::sleep(self.frame_length);
        }
        Ok(())
    }

    /// Show the cursor again at the top of the drawing, so that the next
    /// output replaces the last frame
    pub fn finish(&mut self) -> io::Result<()> {
        self.out.queue(MoveTo(0, ORIGIN_ROW))?.queue(Show)?;
        self.out.flush()
    }

    /// Number of frames drawn so far
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::grid::{Grid, Point};
    use crate::progress::TerminalAnimation;
    use crate::render::Palette;

    #[test]
    fn frames_are_drawn_in_place() {
        let mut animation = TerminalAnimation::new(Vec::new(), Palette::PLAIN, Duration::ZERO);
        let mut grid = Grid::new(2, 2).unwrap();

        animation.begin().unwrap();
        animation.frame(&grid).unwrap();
        grid.open_between(Point::new(0, 0), Point::new(1, 0));
        animation.frame(&grid).unwrap();
        animation.finish().unwrap();
        assert_eq!(animation.frames(), 2);

        let output = String::from_utf8(animation.into_inner()).unwrap();
        // Cursor hidden first and shown last; every frame starts at row 2, column 1
        assert!(output.starts_with("\x1b[?25l"));
        assert!(output.ends_with("\x1b[?25h"));
        assert_eq!(output.matches("\x1b[2;1H").count(), 3);
        assert!(output.contains("+--+--+\n|  |  |\n"));
        assert!(output.contains("+--+--+\n|     |\n"));
    }
}
