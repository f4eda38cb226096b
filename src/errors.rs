use std::fmt::{self, Display, Formatter};
use std::io;

#[derive(Debug)]
pub enum PiError {
    InvalidDigits(String),
    MissingOutputDir(String),
    Io(io::Error),
}

impl Display for PiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PiError::InvalidDigits(msg) => write!(f, "InvalidDigits: {}", msg),
            PiError::MissingOutputDir(var) => write!(f, "MissingOutputDir: {} is not set", var),
            PiError::Io(e) => write!(f, "IO: {}", e),
        }
    }
}

impl std::error::Error for PiError {}

impl From<io::Error> for PiError {
    fn from(value: io::Error) -> Self { PiError::Io(value) }
}
