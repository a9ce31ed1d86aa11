use crate::error::{EvalResult, RuntimeError};

/// A binary arithmetic operator.
///
/// All four operators are left-associative. Precedence is a pure lookup on
/// the variant; there is no global table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Every operator, in no particular order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Returns the operator written as `c`, if any.
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// Returns the operator if `token` is exactly one operator character.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::operator::Operator;
    ///
    /// assert_eq!(Operator::from_token("*"), Some(Operator::Mul));
    /// assert_eq!(Operator::from_token("**"), None);
    /// assert_eq!(Operator::from_token("2"), None);
    /// ```
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_symbol(c),
            _ => None,
        }
    }

    /// The character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Binding strength; higher binds tighter.
    ///
    /// `+` and `-` are level 1, `*` and `/` are level 2.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Computes `left OP right`.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `index`: Index of the operator token, for error reporting.
    ///
    /// # Errors
    /// Returns `RuntimeError::DivisionByZero` if this is `Div` and `right` is
    /// exactly zero.
    pub fn apply(self, left: f64, right: f64, index: usize) -> EvalResult<f64> {
        Ok(match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => {
                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero { index });
                }
                left / right
            },
        })
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
            assert_eq!(Operator::from_token(&op.to_string()), Some(op));
        }
        assert_eq!(Operator::from_symbol('('), None);
        assert_eq!(Operator::from_token(""), None);
    }

    #[test]
    fn multiplicative_binds_tighter() {
        assert!(Operator::Mul.precedence() > Operator::Add.precedence());
        assert_eq!(Operator::Mul.precedence(), Operator::Div.precedence());
        assert_eq!(Operator::Add.precedence(), Operator::Sub.precedence());
    }

    #[test]
    fn division_by_zero_is_rejected() {
        assert_eq!(Operator::Div.apply(1.0, 0.0, 4),
                   Err(RuntimeError::DivisionByZero { index: 4 }));
        assert_eq!(Operator::Div.apply(1.0, -0.0, 4),
                   Err(RuntimeError::DivisionByZero { index: 4 }));
        assert_eq!(Operator::Div.apply(0.0, 2.0, 4), Ok(0.0));
        assert_eq!(Operator::Sub.apply(1.0, 3.0, 0), Ok(-2.0));
    }
}
