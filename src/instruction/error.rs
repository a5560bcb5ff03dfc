use std::num::ParseIntError;

use thiserror::Error;

use crate::geometry::RangeError;

/// Errors produced while parsing reboot-step text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown state `{0}`: expected `on` or `off`")]
    UnknownState(String),

    #[error("Malformed region `{0}`: expected `x=<min>..<max>,y=<min>..<max>,z=<min>..<max>`")]
    MalformedRegion(String),

    #[error("Invalid coordinate `{text}`")]
    InvalidCoordinate {
        text: String,
        #[source]
        source: ParseIntError,
    },

    #[error(transparent)]
    Range(#[from] RangeError),

    #[error("Line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    /// Attaches a 1-based line number to this error.
    pub fn at_line(self, line: usize) -> Self {
        ParseError::AtLine {
            line,
            source: Box::new(self),
        }
    }
}
