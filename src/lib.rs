//! # shunt
//!
//! shunt evaluates infix arithmetic expressions written with `+`, `-`, `*`,
//! `/`, decimal literals and parentheses. Expressions are converted to
//! postfix (Reverse Polish) form with the shunting-yard algorithm, and the
//! postfix sequence is then reduced on a value stack to a single `f64`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides unified error types for conversion and evaluation.
///
/// This module defines all errors that can be raised while tokenizing an
/// expression, converting it to postfix, or evaluating the postfix sequence.
/// Each failure mode is its own variant so callers can match on it.
///
/// # Responsibilities
/// - Defines error enums for the conversion and evaluation stages.
/// - Attaches positions (byte offsets or postfix indices) for context.
/// - Combines both stages into a single `Error` for the full pipeline.
pub mod error;
/// Tokenizing, converting and evaluating expressions.
///
/// This module ties together the lexer, the shunting-yard converter and the
/// postfix evaluator. Data flows one way: text to postfix tokens to a value.
///
/// # Responsibilities
/// - Classifies characters into numbers, operators and parentheses.
/// - Reorders infix tokens into postfix by precedence.
/// - Reduces postfix sequences to a single number.
pub mod interpreter;
/// The expression holder exposed to embedders.
pub mod solver;
/// General utilities for numeric literals.
///
/// # Responsibilities
/// - Parse decimal literals without depending on locale or accepting anything
///   the tokenizer would not produce.
pub mod util;

pub use crate::{
    error::{Error, ParseError, RuntimeError},
    interpreter::evaluator::evaluate_postfix,
    solver::ExpressionSolver,
};

/// Converts an infix expression to its postfix token sequence.
///
/// # Errors
/// Returns a `ParseError` if the expression contains an invalid character, a
/// malformed number or unbalanced parentheses.
///
/// # Examples
/// ```
/// use shunt::to_postfix;
///
/// assert_eq!(to_postfix("2+3*4").unwrap(), ["2", "3", "4", "*", "+"]);
/// assert!(to_postfix("(2+3").is_err());
/// ```
pub fn to_postfix(source: &str) -> error::ParseResult<Vec<String>> {
    interpreter::converter::to_postfix(source)
}

/// Evaluates an infix expression.
///
/// This converts the expression to postfix and reduces the postfix sequence
/// to a single value.
///
/// # Errors
/// Returns an error if conversion fails or if the postfix sequence cannot be
/// evaluated, for example on division by zero or an empty expression.
///
/// # Examples
/// ```
/// use shunt::{Error, RuntimeError, evaluate};
///
/// assert_eq!(evaluate("(2 + 3) * 4").unwrap(), 20.0);
///
/// let err = evaluate("5 / 0").unwrap_err();
/// assert!(matches!(err, Error::Runtime(RuntimeError::DivisionByZero { .. })));
/// ```
pub fn evaluate(source: &str) -> Result<f64, Error> {
    let postfix = to_postfix(source)?;
    Ok(evaluate_postfix(&postfix)?)
}
