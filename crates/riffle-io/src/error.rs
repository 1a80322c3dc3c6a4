//! Error types for the input readers.

use std::error::Error;
use std::fmt;
use std::io;

use riffle_lattice::LatticeError;

/// Errors from reading the parameter or obstacle file.
///
/// Every variant is fatal to initialisation; the process reports it on
/// stderr and exits non-zero.
#[derive(Debug)]
pub enum ReadError {
    /// An I/O error occurred while reading.
    Io(io::Error),
    /// The parameter file ended before the named field.
    MissingParam {
        /// The field that was expected next.
        name: &'static str,
    },
    /// A parameter token could not be parsed for the named field.
    MalformedParam {
        /// The field being parsed.
        name: &'static str,
        /// The offending token.
        token: String,
    },
    /// An obstacle line does not have the `x y flag` shape.
    ObstacleLine {
        /// 1-based line number.
        line: usize,
        /// What went wrong on the line.
        detail: String,
    },
    /// An obstacle flag was not 1.
    ObstacleFlag {
        /// 1-based line number.
        line: usize,
        /// The value found.
        found: i64,
    },
    /// An obstacle coordinate fell outside the grid.
    Lattice(LatticeError),
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::MissingParam { name } => {
                write!(f, "could not read parameter file: missing {name}")
            }
            Self::MalformedParam { name, token } => {
                write!(f, "could not read parameter file: bad {name} token '{token}'")
            }
            Self::ObstacleLine { line, detail } => {
                write!(f, "obstacle file line {line}: {detail}")
            }
            Self::ObstacleFlag { line, found } => {
                write!(f, "obstacle file line {line}: blocked value should be 1, got {found}")
            }
            Self::Lattice(e) => write!(f, "{e}"),
        }
    }
}

impl Error for ReadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Lattice(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ReadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<LatticeError> for ReadError {
    fn from(e: LatticeError) -> Self {
        Self::Lattice(e)
    }
}
