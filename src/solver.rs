use tracing::debug;

use crate::{
    error::{Error, ParseResult},
    interpreter::{converter, evaluator},
};

/// Holds an infix expression and evaluates it on demand.
///
/// The expression is stored verbatim and is not validated when it is set.
/// Every problem, including an empty expression, surfaces from
/// [`to_postfix`](Self::to_postfix) or [`evaluate`](Self::evaluate).
///
/// Both operations borrow the solver immutably and keep all of their working
/// state local, so a shared solver can be evaluated from several threads at
/// once. Replacing the expression needs `&mut self` and therefore cannot
/// overlap an evaluation.
///
/// ## Usage
/// ```
/// use shunt::ExpressionSolver;
///
/// let mut solver = ExpressionSolver::with_expression("2 + 3 * 4");
/// assert_eq!(solver.to_postfix().unwrap(), ["2", "3", "4", "*", "+"]);
/// assert_eq!(solver.evaluate().unwrap(), 14.0);
///
/// solver.set_expression("(2 + 3) * 4");
/// assert_eq!(solver.evaluate().unwrap(), 20.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpressionSolver {
    expression: String,
}

impl ExpressionSolver {
    /// Creates a solver with an empty expression.
    #[must_use]
    pub const fn new() -> Self {
        Self { expression: String::new() }
    }

    /// Creates a solver holding `expression`.
    #[must_use]
    pub fn with_expression(expression: impl Into<String>) -> Self {
        Self { expression: expression.into() }
    }

    /// Replaces the stored expression.
    pub fn set_expression(&mut self, expression: impl Into<String>) {
        self.expression = expression.into();
    }

    /// Returns the stored expression exactly as it was set.
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Converts the stored expression to postfix.
    ///
    /// # Errors
    /// Returns a `ParseError` for invalid characters, malformed numbers or
    /// unbalanced parentheses.
    pub fn to_postfix(&self) -> ParseResult<Vec<String>> {
        converter::to_postfix(&self.expression)
    }

    /// Converts the stored expression to postfix and evaluates it.
    ///
    /// # Errors
    /// Returns `Error::Parse` if conversion fails and `Error::Runtime` if the
    /// postfix sequence cannot be evaluated (empty expression, missing
    /// operands, division by zero).
    pub fn evaluate(&self) -> Result<f64, Error> {
        debug!(expression = %self.expression, "evaluating");
        let postfix = self.to_postfix()?;
        Ok(evaluator::evaluate_postfix(&postfix)?)
    }
}

impl From<&str> for ExpressionSolver {
    fn from(value: &str) -> Self {
        Self::with_expression(value)
    }
}

impl From<String> for ExpressionSolver {
    fn from(value: String) -> Self {
        Self::with_expression(value)
    }
}
