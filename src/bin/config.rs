//! Configure and run the program.

use crate::error::Result;

use gencircuit::strategy::Strategy;
use gencircuit::walk::{self, Construction, WalkConf, DEFAULT_STEP_COUNT};

use rand::rngs::StdRng;
use rand::SeedableRng;
use structopt::StructOpt;

use std::io;
use std::io::BufWriter;

#[derive(Debug, StructOpt)]
#[structopt(name = "gencircuit")]
/// Generate random walk circuits as glm::vec3 source literals.
pub struct Args {
    #[structopt(default_value = "spherical")]
    /// Step strategy: 'spherical' or 'planar'
    strategy: Strategy,
    #[structopt(long = "seed", value_name = "N")]
    /// Seed the random generator for reproducible circuits
    seed: Option<u64>,
    #[structopt(long = "collapse")]
    /// Copy every point from its x coordinate, like the first generator
    collapse: bool,
}

/// The program run configuration.
pub struct Config {
    /// Walk configuration.
    walk: WalkConf,
    /// Seed of the random generator, if it should not be seeded from entropy.
    seed: Option<u64>,
}

impl Config {
    /// Construct the run configuration from the parsed command line arguments.
    pub fn new(args: Args) -> Config {
        let construction = if args.collapse {
            Construction::Collapsed
        } else {
            Construction::FieldWise
        };

        Config {
            walk: WalkConf {
                step_count: DEFAULT_STEP_COUNT,
                strategy: args.strategy,
                construction,
            },
            seed: args.seed,
        }
    }

    /// Run the program, printing the circuit to standard output.
    ///
    /// # Errors
    /// Returns an error if the circuit could not be written.
    pub fn run(&self) -> Result<()> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let stdout = io::stdout();
        let mut writer = BufWriter::new(stdout.lock());

        walk::run(&self.walk, &mut rng, &mut writer)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_walk_spherically_with_field_wise_copies() {
        let config = Config::new(Args::from_iter(&["gencircuit"]));

        assert_eq!(WalkConf::default(), config.walk);
        assert_eq!(None, config.seed);
    }

    #[test]
    fn parse_strategy_seed_and_collapse() {
        let args = Args::from_iter(&["gencircuit", "planar", "--seed", "42", "--collapse"]);
        let config = Config::new(args);

        assert_eq!(Strategy::Planar, config.walk.strategy);
        assert_eq!(Construction::Collapsed, config.walk.construction);
        assert_eq!(DEFAULT_STEP_COUNT, config.walk.step_count);
        assert_eq!(Some(42), config.seed);
    }

    #[test]
    fn unknown_strategies_are_rejected() {
        assert!(Args::from_iter_safe(&["gencircuit", "helix"]).is_err());
        assert!(Args::from_iter_safe(&["gencircuit", "--seed", "minus-one"]).is_err());
    }
}
