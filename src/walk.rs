//! Walk from the origin and emit every visited point.

use crate::error::Result;
use crate::output::write_point;
use crate::point::Point;
use crate::strategy::Strategy;

use rand::Rng;

use std::io::Write;

/// Number of steps taken after the origin unless otherwise set.
pub const DEFAULT_STEP_COUNT: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq)]
/// How the previous point is copied before the next increment is added.
pub enum Construction {
    /// Every coordinate is copied from its own field.
    FieldWise,
    /// Every coordinate is copied from `x` of the previous point,
    /// reproducing the output of the first circuit generator.
    Collapsed,
}

impl Construction {
    fn copy(&self, point: Point) -> Point {
        let (x, y, z) = point.to_tuple();

        match *self {
            Construction::FieldWise => Point::new(x, y, z),
            Construction::Collapsed => Point::collapsed(x, y, z),
        }
    }
}

impl Default for Construction {
    fn default() -> Construction {
        Construction::FieldWise
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Configuration of a walk.
pub struct WalkConf {
    /// Number of points generated after the origin.
    pub step_count: usize,
    /// Strategy for drawing each increment.
    pub strategy: Strategy,
    /// How the previous point is copied before every step.
    pub construction: Construction,
}

impl Default for WalkConf {
    fn default() -> WalkConf {
        WalkConf {
            step_count: DEFAULT_STEP_COUNT,
            strategy: Strategy::default(),
            construction: Construction::default(),
        }
    }
}

/// An `Iterator` over the points of a walk.
///
/// Yields the origin followed by `step_count` points, each of which
/// is computed from the one before it.
///
/// # Examples
/// ```
/// # extern crate rand;
/// # extern crate gencircuit;
/// # use gencircuit::point::Point;
/// # use gencircuit::walk::{Walk, WalkConf};
/// # use rand::SeedableRng;
/// let mut rng = rand::rngs::StdRng::seed_from_u64(0);
/// let conf = WalkConf { step_count: 3, .. WalkConf::default() };
/// let points = Walk::new(conf, &mut rng).collect::<Vec<_>>();
///
/// assert_eq!(4, points.len());
/// assert_eq!(Point::ORIGIN, points[0]);
/// ```
pub struct Walk<'a, R: Rng + ?Sized + 'a> {
    conf: WalkConf,
    rng: &'a mut R,
    /// The last yielded point.
    current: Option<Point>,
    /// Number of points yielded so far.
    num_yielded: usize,
}

impl<'a, R: Rng + ?Sized + 'a> Walk<'a, R> {
    /// Start a walk which draws its increments from the input generator.
    pub fn new(conf: WalkConf, rng: &'a mut R) -> Walk<'a, R> {
        Walk {
            conf,
            rng,
            current: None,
            num_yielded: 0,
        }
    }

    fn num_points(&self) -> usize {
        self.conf.step_count + 1
    }
}

impl<'a, R: Rng + ?Sized + 'a> Iterator for Walk<'a, R> {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        if self.num_yielded >= self.num_points() {
            return None;
        }

        let point = match self.current {
            None => Point::ORIGIN,
            Some(previous) => {
                let copy = self.conf.construction.copy(previous);
                self.conf.strategy.apply(copy, &mut *self.rng)
            },
        };

        trace!("step {}: {}", self.num_yielded, point);

        self.current = Some(point);
        self.num_yielded += 1;

        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.num_points() - self.num_yielded;
        (remaining, Some(remaining))
    }
}

impl<'a, R: Rng + ?Sized + 'a> ExactSizeIterator for Walk<'a, R> {}

/// Walk from the origin and write every point as a line to the writer.
/// Returns the number of written lines, which is `step_count + 1`.
///
/// # Errors
/// Returns an error if the writer could not be written to.
pub fn run<R, W>(conf: &WalkConf, rng: &mut R, writer: &mut W) -> Result<usize>
        where R: Rng + ?Sized, W: Write {
    debug!("walking {} steps with the {} strategy ({:?} construction)",
           conf.step_count, conf.strategy, conf.construction);

    let mut num_lines = 0;

    for point in Walk::new(*conf, rng) {
        write_point(writer, &point)?;
        num_lines += 1;
    }

    writer.flush()?;
    debug!("wrote {} points", num_lines);

    Ok(num_lines)
}
