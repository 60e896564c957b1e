//! Specifies the output json model and the conversion error type.

#[cfg(test)]
#[path = "../../tests/unit/format/format_test.rs"]
mod format_test;

mod problem;
pub use self::problem::*;

use crate::utils::GenericError;
use std::fmt::{Display, Formatter};

/// Represents an error which can happen while converting a problem.
#[derive(Clone, Debug, PartialEq)]
pub enum ConvertError {
    /// Problem uses a format which is not supported, e.g. unknown edge weight type.
    UnsupportedFormat(GenericError),
    /// Problem definition is broken: missing section, bad dimension, malformed node data.
    MalformedInput(GenericError),
    /// Input cannot be read or output cannot be written.
    Io(GenericError),
}

impl ConvertError {
    /// Creates `MalformedInput` error from given message.
    pub fn malformed(msg: impl Into<GenericError>) -> Self {
        Self::MalformedInput(msg.into())
    }

    /// Creates `UnsupportedFormat` error from given message.
    pub fn unsupported(msg: impl Into<GenericError>) -> Self {
        Self::UnsupportedFormat(msg.into())
    }
}

impl Display for ConvertError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::UnsupportedFormat(err) => write!(f, "unsupported format: {err}"),
            ConvertError::MalformedInput(err) => write!(f, "malformed input: {err}"),
            ConvertError::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl std::error::Error for ConvertError {}

impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.into())
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() { Self::Io(err.to_string().into()) } else { Self::malformed(err.to_string()) }
    }
}
