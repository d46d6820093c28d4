//! Generate a circuit of points along a biased random walk.
//!
//! Every point is printed as a line of C++ which appends it to a vector:
//!
//! ```text
//! circuit.push_back(glm::vec3(0.00f, 0.00f, 0.00f));
//! circuit.push_back(glm::vec3(0.42f, 0.61f, 0.67f));
//! ...
//! ```
//!
//! # Usage
//! ```text
//! USAGE:
//!     gencircuit [FLAGS] [OPTIONS] [STRATEGY]
//!
//! FLAGS:
//!         --collapse    Copy every point from its x coordinate, like the first generator
//!     -h, --help        Prints help information
//!     -V, --version     Prints version information
//!
//! OPTIONS:
//!         --seed <N>    Seed the random generator for reproducible circuits
//!
//! ARGS:
//!     <STRATEGY>    Step strategy: 'spherical' or 'planar' [default: spherical]
//! ```
//!
//! # Strategies
//! ## Spherical
//! Every step moves the point a unit length in a random direction, with the
//! azimuth restricted to the first quarter turn.
//!
//! ## Planar
//! Every step splits a unit budget over the three axes. The shares along
//! x and z are drawn uniformly, y takes what is left.

mod config;
mod error;

use config::{Args, Config};

use structopt::StructOpt;

use std::io;
use std::io::Write;
use std::process;

fn main() {
    env_logger::init();

    let args = Args::from_args();

    if let Err(err) = Config::new(args).run() {
        let mut stderr = io::stderr();
        writeln!(&mut stderr, "{}", err).expect("could not write to stderr");
        process::exit(1);
    }
}
