//! Implement the points which make up a circuit.

use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Sub};

#[derive(Clone, Copy, Debug)]
/// A three-dimensional carthesian point.
///
/// # Examples
/// ```
/// # use gencircuit::point::Point;
/// let point1 = Point::new(1.0, 0.0, 1.0);
/// let point2 = Point::new(0.5, 0.5, 0.5);
///
/// assert_eq!(Point::new(1.5, 0.5, 1.5), point1 + point2);
/// assert_eq!(Point::new(0.5, -0.5, 0.5), point1 - point2);
/// ```
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    /// The point at which every walk starts.
    pub const ORIGIN: Self = Point { x: 0.0, y: 0.0, z: 0.0 };

    /// Construct a new point.
    ///
    /// # Examples
    /// ```
    /// # use gencircuit::point::Point;
    /// let point = Point::new(0.0, 1.0, 2.0);
    /// assert_eq!(Point { x: 0.0, y: 1.0, z: 2.0 }, point);
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Point {
        Point { x, y, z }
    }

    /// Construct a point the way the first circuit generator did: every
    /// coordinate takes the value of `x`, the other two values are dropped.
    ///
    /// # Examples
    /// ```
    /// # use gencircuit::point::Point;
    /// let point = Point::collapsed(1.0, 2.0, 3.0);
    /// assert_eq!(Point::new(1.0, 1.0, 1.0), point);
    /// ```
    pub fn collapsed(x: f64, _y: f64, _z: f64) -> Point {
        Point { x, y: x, z: x }
    }

    /// Unpack the point into a tuple.
    pub fn to_tuple(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }
}

impl Default for Point {
    fn default() -> Point {
        Point::ORIGIN
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Self::Output {
        Point::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, other: Point) {
        *self = *self + other;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Self::Output {
        Point::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Point) -> bool {
        let atol = 1e-9;
        (self.x - other.x).abs() < atol
            && (self.y - other.y).abs() < atol
            && (self.z - other.z).abs() < atol
    }
}
