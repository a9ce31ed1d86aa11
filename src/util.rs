/// Numeric literal helpers.
///
/// This module provides the locale-independent decimal parser shared by the
/// converter and the evaluator. It accepts exactly the literals the tokenizer
/// produces (`digits ['.' digits*]`) and nothing else, so signs, exponents,
/// `inf` and `nan` are all rejected even though `f64::from_str` would take
/// them.
pub mod num;
