/// Result type used by the tokenizer and the shunting-yard converter.
pub type ParseResult<T> = Result<T, ParseError>;

/// Which side of a parenthesis pair is missing its partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paren {
    /// A `(` that was never closed.
    Opening,
    /// A `)` with no `(` before it.
    Closing,
}

impl std::fmt::Display for Paren {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Opening => write!(f, "opening parenthesis '('"),
            Self::Closing => write!(f, "closing parenthesis ')'"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while converting an infix expression
/// to postfix.
///
/// Every variant carries the byte offset into the expression where the
/// problem was found.
pub enum ParseError {
    /// A parenthesis has no matching partner.
    MismatchedParentheses {
        /// The side that is unmatched.
        unmatched: Paren,
        /// Byte offset of the unmatched parenthesis.
        position:  usize,
    },
    /// Found a character that is not whitespace, a digit, a decimal point
    /// inside a number, an operator or a parenthesis.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        position:  usize,
    },
    /// A numeric literal contains more than one decimal point.
    MalformedNumber {
        /// The literal as written.
        literal:  String,
        /// Byte offset of the first character of the literal.
        position: usize,
    },
}

impl ParseError {
    /// Returns the byte offset in the expression where the error was found.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::MismatchedParentheses { position, .. }
            | Self::InvalidCharacter { position, .. }
            | Self::MalformedNumber { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MismatchedParentheses { unmatched, position } => {
                write!(f, "Error at position {position}: Mismatched parentheses: unmatched {unmatched}.")
            },
            Self::InvalidCharacter { character, position } => {
                write!(f, "Error at position {position}: Invalid character '{character}'.")
            },
            Self::MalformedNumber { literal, position } => write!(f,
                                                                  "Error at position {position}: Malformed number '{literal}': more than one decimal point."),
        }
    }
}

impl std::error::Error for ParseError {}
