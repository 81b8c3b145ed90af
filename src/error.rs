use std::error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    InvalidDimensions { width: i32, height: i32 },
    StartOutsideGrid,
    DestinationOutsideGrid,
    StartSolid,
    UnknownAlgorithm,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidDimensions { width, height } => {
                write!(f, "invalid grid dimensions {}x{}", width, height)
            }
            Error::StartOutsideGrid => write!(f, "start is outside the grid"),
            Error::DestinationOutsideGrid => write!(f, "destination is outside the grid"),
            Error::StartSolid => write!(f, "start cell is not traversable"),
            Error::UnknownAlgorithm => write!(f, "unknown search algorithm"),
        }
    }
}

impl error::Error for Error {}
