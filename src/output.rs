//! Write circuit points as `glm::vec3` source literals.

use crate::error::Result;
use crate::point::Point;

use std::io::Write;

/// Format a point as a line of C++ which appends it to a `circuit` vector.
///
/// # Examples
/// ```
/// # use gencircuit::output::format_point;
/// # use gencircuit::point::Point;
/// let line = format_point(&Point::new(1.0, -0.5, 2.346));
/// assert_eq!("circuit.push_back(glm::vec3(1.00f, -0.50f, 2.35f));", line);
/// ```
pub fn format_point(point: &Point) -> String {
    let (x, y, z) = point.to_tuple();
    format!("circuit.push_back(glm::vec3({:.2}f, {:.2}f, {:.2}f));", x, y, z)
}

/// Write a point as a single line.
///
/// # Errors
/// Returns an error if the writer could not be written to.
pub fn write_point<W: Write>(writer: &mut W, point: &Point) -> Result<()> {
    writer.write_fmt(format_args!("{}\n", format_point(point)))?;
    Ok(())
}
