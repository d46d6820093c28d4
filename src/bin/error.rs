//! Errors when executing the binary.

use gencircuit::error::CircuitError;

use colored::*;
use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::result;

/// Shorthand for our `Result` class.
pub type Result<T> = result::Result<T, CliError>;

#[derive(Debug)]
/// A class for configuration or runtime errors.
pub enum CliError {
    /// Something went wrong when generating the circuit.
    RunError(CircuitError),
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            CliError::RunError(ref err) => Some(err),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let red_error = "error:".color("red");

        match *self {
            CliError::RunError(ref err) => write!(f, "{} {}", red_error, err),
        }
    }
}

impl From<CircuitError> for CliError {
    fn from(err: CircuitError) -> CliError {
        CliError::RunError(err)
    }
}
