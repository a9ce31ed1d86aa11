/// The converter module turns infix expressions into postfix sequences.
///
/// It drives the lexer and runs the shunting-yard algorithm over the token
/// stream, using an operator stack to reorder operators by precedence and
/// parentheses.
///
/// # Responsibilities
/// - Emits numeric literals unchanged and operators as single characters.
/// - Resolves precedence and left associativity.
/// - Reports unbalanced parentheses with their position.
pub mod converter;
/// The evaluator module reduces postfix sequences to a value.
///
/// # Responsibilities
/// - Applies operators to the two most recent operands.
/// - Reports division by zero and structurally broken sequences.
pub mod evaluator;
/// The lexer module tokenizes infix expressions.
///
/// The lexer reads the raw expression text and produces numbers, operators
/// and parentheses, each paired with its byte offset. It rejects unknown
/// characters and numbers with more than one decimal point.
pub mod lexer;
/// Binary operators and their precedence.
pub mod operator;
