//! Placement of the start and end markers

use log::{debug, trace};
use rand::Rng;

use crate::error::MazeError;
use crate::grid::{check_dimensions, Point};

/// Sampling rounds before falling back to opposite corners
pub const MAX_ATTEMPTS: usize = 10_000;

/// Minimum distance between start and end in a `width` x `height` maze.
///
/// Four fifths of the grid diagonal, less a small slack so that small mazes
/// remain easy to satisfy.
pub fn distance_threshold(width: usize, height: usize) -> f64 {
    4.0 * (width as f64).hypot(height as f64) / 5.0 - 3.0
}

/// Pick two distinct cells that are at least [distance_threshold] apart.
///
/// Pairs are drawn uniformly at random until one is accepted. After
/// [MAX_ATTEMPTS] rejected pairs, two opposite corners are returned instead;
/// their distance always exceeds the threshold.
pub fn select_points<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    random: &mut R,
) -> Result<(Point, Point), MazeError> {
    check_dimensions(width, height)?;
    let threshold = distance_threshold(width, height);

    for attempt in 1..=MAX_ATTEMPTS {
        let start = random_point(width, height, random);
        let end = random_point(width, height, random);
        let distance = start.distance(&end);

        if start != end && distance >= threshold {
            debug!(
                "Selected start {:?} and end {:?} after {} attempts (distance {:.2}, threshold {:.2})",
                start, end, attempt, distance, threshold
            );
            return Ok((start, end));
        }
        trace!("Rejected {:?} -> {:?}, distance {:.2}", start, end, distance);
    }

    debug!(
        "No pair accepted in {} attempts, using opposite corners",
        MAX_ATTEMPTS
    );
    Ok(opposite_corners(width, height, random))
}

fn random_point<R: Rng + ?Sized>(width: usize, height: usize, random: &mut R) -> Point {
    Point::new(
        random.gen_range(0..width) as i32,
        random.gen_range(0..height) as i32,
    )
}

/// Ends of one of the two diagonals, in random direction
fn opposite_corners<R: Rng + ?Sized>(width: usize, height: usize, random: &mut R) -> (Point, Point) {
    let (right, bottom) = (width as i32 - 1, height as i32 - 1);
    let (a, b) = if random.gen_bool(0.5) {
        (Point::new(0, 0), Point::new(right, bottom))
    } else {
        (Point::new(right, 0), Point::new(0, bottom))
    };
    if random.gen_bool(0.5) {
        (a, b)
    } else {
        (b, a)
    }
}
