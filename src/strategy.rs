//! Strategies for stepping from one circuit point to the next.

use crate::error::CircuitError;
use crate::point::Point;

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use std::f64::consts::FRAC_PI_2;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq)]
/// How the increment between two consecutive points is drawn.
pub enum Strategy {
    /// A unit length direction with polar angle `phi` uniform in `cos(phi)`
    /// and azimuth `theta` restricted to the first quarter turn.
    Spherical,
    /// A unit budget split over the three axes: `x` and `z` draw uniform
    /// shares and `y` takes what is left, which may be negative.
    Planar,
}

impl Strategy {
    /// Draw the increment to add to the current point.
    pub fn offset<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        let unit = Uniform::new(0.0f64, 1.0);

        match *self {
            Strategy::Spherical => {
                let theta = FRAC_PI_2 * unit.sample(rng);
                let phi = (2.0 * unit.sample(rng) - 1.0).acos();

                Point::new(theta.cos() * phi.sin(), theta.sin() * phi.sin(), phi.cos())
            },
            Strategy::Planar => {
                let mut budget = 1.0;

                let dx = unit.sample(rng);
                budget -= dx;

                let dz = unit.sample(rng);
                budget -= dz;

                Point::new(dx, budget, dz)
            },
        }
    }

    /// Return the input point moved by a freshly drawn increment.
    pub fn apply<R: Rng + ?Sized>(&self, point: Point, rng: &mut R) -> Point {
        point + self.offset(rng)
    }
}

impl Default for Strategy {
    fn default() -> Strategy {
        Strategy::Spherical
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Strategy::Spherical => write!(f, "spherical"),
            Strategy::Planar => write!(f, "planar"),
        }
    }
}

impl FromStr for Strategy {
    type Err = CircuitError;

    /// Parse a strategy from its name.
    ///
    /// # Errors
    /// Returns an error if the name does not match any strategy.
    ///
    /// # Examples
    /// ```
    /// # use gencircuit::strategy::Strategy;
    /// # use std::str::FromStr;
    /// assert_eq!(Strategy::Planar, Strategy::from_str("Barycentric").unwrap());
    /// assert!(Strategy::from_str("helix").is_err());
    /// ```
    fn from_str(input: &str) -> Result<Strategy, Self::Err> {
        match input.trim().to_lowercase().as_str() {
            "spherical" | "sphere" | "a" => Ok(Strategy::Spherical),
            "planar" | "barycentric" | "b" => Ok(Strategy::Planar),
            _ => Err(CircuitError::BadStrategy(input.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn spherical_offsets_have_unit_length_in_the_first_quadrant() {
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..1000 {
            let Point { x, y, z } = Strategy::Spherical.offset(&mut rng);

            assert_abs_diff_eq!(1.0, (x * x + y * y + z * z).sqrt(), epsilon = 1e-9);
            assert!(x >= 0.0 && y >= 0.0);
            assert!(z > -1.0 - 1e-12 && z <= 1.0 + 1e-12);
        }
    }

    #[test]
    fn planar_offsets_sum_to_one() {
        let mut rng = StdRng::seed_from_u64(2);

        for _ in 0..1000 {
            let Point { x, y, z } = Strategy::Planar.offset(&mut rng);

            assert_abs_diff_eq!(1.0, x + y + z, epsilon = 1e-12);
            assert!(x >= 0.0 && x < 1.0);
            assert!(z >= 0.0 && z < 1.0);
            assert!(y > -1.0 && y <= 1.0);
        }
    }

    #[test]
    fn planar_leftover_can_go_negative() {
        let mut rng = StdRng::seed_from_u64(3);

        let any_negative = (0..1000)
            .map(|_| Strategy::Planar.offset(&mut rng))
            .any(|offset| offset.y < 0.0);

        assert!(any_negative);
    }

    #[test]
    fn apply_adds_the_offset_drawn_from_the_same_sequence() {
        let start = Point::new(1.0, 2.0, 3.0);

        let mut rng1 = StdRng::seed_from_u64(4);
        let mut rng2 = StdRng::seed_from_u64(4);

        let offset = Strategy::Spherical.offset(&mut rng1);
        assert_eq!(start + offset, Strategy::Spherical.apply(start, &mut rng2));
    }

    #[test]
    fn parse_strategy_names() {
        assert_eq!(Strategy::Spherical, "spherical".parse::<Strategy>().unwrap());
        assert_eq!(Strategy::Spherical, " A ".parse::<Strategy>().unwrap());
        assert_eq!(Strategy::Planar, "PLANAR".parse::<Strategy>().unwrap());
        assert_eq!(Strategy::Planar, "b".parse::<Strategy>().unwrap());

        match "".parse::<Strategy>() {
            Err(CircuitError::BadStrategy(_)) => (),
            other => panic!("expected a bad strategy error, got {:?}", other),
        }
    }

    #[test]
    fn display_strategy_round_trips_through_parsing() {
        for &strategy in &[Strategy::Spherical, Strategy::Planar] {
            assert_eq!(strategy, strategy.to_string().parse::<Strategy>().unwrap());
        }
    }

    #[test]
    fn default_strategy_is_spherical() {
        assert_eq!(Strategy::Spherical, Strategy::default());
    }
}
