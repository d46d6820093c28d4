//! Implements the custom `CircuitError` class for the library.

use std::{error, fmt, io, result};

#[derive(Debug)]
/// A class for configuration or runtime errors.
pub enum CircuitError {
    /// Something went wrong when writing the points.
    IoError(io::Error),
    /// A strategy name could not be parsed.
    BadStrategy(String),
}

/// Shorthand for our `Result` class.
pub type Result<T> = result::Result<T, CircuitError>;

impl fmt::Display for CircuitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CircuitError::IoError(ref err) => write!(f, "could not write points: {}", err),
            CircuitError::BadStrategy(ref name) => {
                write!(f, "unknown strategy '{}' (expected 'spherical' or 'planar')", name)
            },
        }
    }
}

impl error::Error for CircuitError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            CircuitError::IoError(ref err) => Some(err),
            CircuitError::BadStrategy(_) => None,
        }
    }
}

impl From<io::Error> for CircuitError {
    fn from(err: io::Error) -> CircuitError {
        CircuitError::IoError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_strategy_message_names_the_input() {
        let err = CircuitError::BadStrategy("helix".to_string());
        assert!(err.to_string().contains("'helix'"));
    }

    #[test]
    fn io_errors_are_wrapped_with_a_source() {
        use std::error::Error;

        let err = CircuitError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("could not write points"));
    }
}
