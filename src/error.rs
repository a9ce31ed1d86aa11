/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing an expression and
/// converting it to postfix: unbalanced parentheses, unknown characters and
/// malformed numeric literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a postfix
/// sequence, such as division by zero or a missing operand.
pub mod runtime_error;

pub use parse_error::{Paren, ParseError, ParseResult};
pub use runtime_error::{EvalResult, RuntimeError};

/// Any failure of a full parse-then-evaluate run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The expression could not be converted to postfix.
    Parse(ParseError),
    /// The postfix sequence could not be evaluated.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
