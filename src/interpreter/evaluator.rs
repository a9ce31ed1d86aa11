use tracing::{debug, trace};

use crate::{
    error::{EvalResult, RuntimeError},
    interpreter::operator::Operator,
    util::num::parse_decimal_checked,
};

/// Evaluates a postfix (Reverse Polish) sequence.
///
/// Tokens are consumed left to right against a value stack. A token that is
/// exactly one operator character pops the right operand, then the left one,
/// and pushes `left OP right`. Every other token must be a decimal literal.
///
/// # Parameters
/// - `postfix`: The postfix tokens, as produced by
///   [`to_postfix`](crate::interpreter::converter::to_postfix) or supplied by
///   the caller.
///
/// # Returns
/// The single value left on the stack.
///
/// # Errors
/// - `RuntimeError::InvalidExpression` if an operator finds fewer than two
///   values, or if the final stack does not hold exactly one value (this
///   includes an empty sequence).
/// - `RuntimeError::DivisionByZero` if a right operand of `/` is zero.
/// - `RuntimeError::InvalidLiteral` if a token is neither an operator nor a
///   decimal literal.
///
/// # Example
/// ```
/// use shunt::interpreter::evaluator::evaluate_postfix;
///
/// assert_eq!(evaluate_postfix(&["2", "3", "4", "*", "+"]).unwrap(), 14.0);
/// assert!(evaluate_postfix::<&str>(&[]).is_err());
/// ```
pub fn evaluate_postfix<S: AsRef<str>>(postfix: &[S]) -> EvalResult<f64> {
    let mut values: Vec<f64> = Vec::with_capacity(postfix.len());

    for (index, token) in postfix.iter().enumerate() {
        let token = token.as_ref();

        if let Some(op) = Operator::from_token(token) {
            let (Some(right), Some(left)) = (values.pop(), values.pop()) else {
                debug!(index, %op, "operator is missing an operand");
                return Err(RuntimeError::InvalidExpression { details: format!("operator '{op}' at token {index} needs two operands") });
            };
            let value = op.apply(left, right, index)?;
            trace!(index, left, %op, right, value, "reduced");
            values.push(value);
        } else {
            let value =
                parse_decimal_checked(token, || RuntimeError::InvalidLiteral { literal: token.to_string(),
                                                                               index })?;
            values.push(value);
        }
    }

    match values.as_slice() {
        [value] => Ok(*value),
        [] => Err(RuntimeError::InvalidExpression { details: "nothing to evaluate".to_string() }),
        _ => {
            debug!(?values, "operands left without an operator");
            Err(RuntimeError::InvalidExpression { details: format!("{} values left on the stack, expected 1",
                                                                   values.len()) })
        },
    }
}
