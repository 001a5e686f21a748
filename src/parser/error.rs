use super::input::Location;
use crate::error::Error;
use std::fmt;

/// Errors produced while matching grammar rules against source text.
///
/// Every variant carries the location of the failure; alternation keeps
/// whichever failure reached the deepest offset.
#[derive(Debug, Clone)]
pub enum ParseError {
    /// The input at `location` does not match the expected construct
    Unexpected {
        expected: String,
        found: String,
        location: Location,
    },

    /// Input ended while the expected construct was still incomplete
    UnexpectedEndOfInput {
        expected: String,
        location: Location,
    },

    /// A rule matched a prefix of the input but leftover text remains
    Incomplete { location: Location },
}

impl ParseError {
    /// Create a new unexpected-input error
    pub fn unexpected(
        expected: impl Into<String>,
        found: impl Into<String>,
        location: Location,
    ) -> Self {
        ParseError::Unexpected {
            expected: expected.into(),
            found: found.into(),
            location,
        }
    }

    /// Create a new unexpected-end-of-input error
    pub fn end_of_input(expected: impl Into<String>, location: Location) -> Self {
        ParseError::UnexpectedEndOfInput {
            expected: expected.into(),
            location,
        }
    }

    /// Get the location of the error
    pub fn location(&self) -> Location {
        match self {
            ParseError::Unexpected { location, .. } => *location,
            ParseError::UnexpectedEndOfInput { location, .. } => *location,
            ParseError::Incomplete { location } => *location,
        }
    }

    /// Of two alternative failures, keep the one that got further into
    /// the input; ties keep `self` (the earlier alternative).
    pub fn furthest(self, other: ParseError) -> ParseError {
        if other.location().offset > self.location().offset {
            other
        } else {
            self
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Unexpected {
                expected,
                found,
                location,
            } => {
                write!(
                    f,
                    "Parse error at {}: expected {}, found {}",
                    location, expected, found
                )
            }
            ParseError::UnexpectedEndOfInput { expected, location } => {
                write!(
                    f,
                    "Parse error at {}: unexpected end of input, expected {}",
                    location, expected
                )
            }
            ParseError::Incomplete { location } => {
                write!(f, "Parse error at {}: unexpected trailing input", location)
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for Error {
    fn from(parse_error: ParseError) -> Self {
        let location = parse_error.location();
        let message = match parse_error {
            ParseError::Unexpected {
                expected, found, ..
            } => format!("expected {}, found {}", expected, found),
            ParseError::UnexpectedEndOfInput { expected, .. } => {
                format!("unexpected end of input, expected {}", expected)
            }
            ParseError::Incomplete { .. } => "unexpected trailing input".to_string(),
        };
        Error::parse_error(location.line, location.column, message)
    }
}
