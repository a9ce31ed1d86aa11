/// Result type used by the postfix evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a postfix sequence.
///
/// `index` fields refer to the position of the offending token in the postfix
/// sequence, not in the original expression.
pub enum RuntimeError {
    /// The postfix sequence is structurally broken: an operator without two
    /// operands, or a final value stack holding anything but one value.
    InvalidExpression {
        /// Details about what was wrong.
        details: String,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// Index of the `/` token.
        index: usize,
    },
    /// A token is neither an operator nor a decimal literal.
    InvalidLiteral {
        /// The token as given.
        literal: String,
        /// Index of the token.
        index:   usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidExpression { details } => write!(f, "Invalid expression: {details}."),
            Self::DivisionByZero { index } => {
                write!(f, "Error at token {index}: Division by zero.")
            },
            Self::InvalidLiteral { literal, index } => {
                write!(f, "Error at token {index}: '{literal}' is not a valid number.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
