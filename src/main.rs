//! CLI for maze generation

use std::{io, time::Duration};

use clap::{Parser, ValueEnum};
use text_maze::{
    grid::check_dimensions, maze_generator::MazeGenerator, progress::TerminalAnimation,
    render::Palette,
};

/// Perfect maze generator with text output
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width in cells
    #[arg(long, default_value_t = 16)]
    width: usize,

    /// Maze height in cells
    #[arg(long, default_value_t = 8)]
    height: usize,

    /// Display the carving on the terminal
    #[arg(short, long)]
    progress: bool,

    /// Progress frame length in microseconds
    #[arg(short, long, default_value_t = 2500)]
    frame_length: u64,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Color the start and end markers
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl From<ColorChoice> for Palette {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Palette::detect(),
            ColorChoice::Always => Palette::COLORED,
            ColorChoice::Never => Palette::PLAIN,
        }
    }
}

/// Generate maze, print output
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    check_dimensions(args.width, args.height)?;
    let palette = Palette::from(args.color);

    let mut gen = MazeGenerator::new(args.seed);
    let maze = if args.progress {
        let frame_length = Duration::from_micros(args.frame_length);
        let mut animation = TerminalAnimation::new(io::stdout(), palette, frame_length);
        animation.begin()?;
        let maze = gen.generate_maze_with_progress(args.width, args.height, |grid| {
            Ok(animation.frame(grid)?)
        });
        animation.finish()?;
        maze?
    } else {
        gen.generate_maze(args.width, args.height)?
    };

    println!("{}", maze.render(palette));
    Ok(())
}
