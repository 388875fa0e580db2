use crate::interpreter::error::EvalError;
use std::fmt;
use std::fmt::Formatter;

/// A binary arithmetic operator. All of them are left-associative.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub fn from_symbol(symbol: char) -> Option<BinaryOperator> {
        match symbol {
            '+' => Some(BinaryOperator::Add),
            '-' => Some(BinaryOperator::Subtract),
            '*' => Some(BinaryOperator::Multiply),
            '/' => Some(BinaryOperator::Divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
        }
    }

    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 1,
            BinaryOperator::Multiply | BinaryOperator::Divide => 2,
        }
    }

    pub(crate) fn precedence_ge(&self, other: &Self) -> bool {
        self.precedence().ge(&other.precedence())
    }

    /// Computes `a op b`, where `a` is the left operand.
    ///
    /// Results that overflow to infinity or NaN are rejected.
    pub fn apply(&self, a: f64, b: f64) -> Result<f64, EvalError> {
        let value = match self {
            BinaryOperator::Add => a + b,
            BinaryOperator::Subtract => a - b,
            BinaryOperator::Multiply => a * b,
            BinaryOperator::Divide => {
                if b == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                a / b
            }
        };
        if !value.is_finite() {
            return Err(EvalError::invalid(format!(
                "{} {} {} is out of range",
                a, self, b
            )));
        }
        Ok(value)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::error::ErrorKind;
    use parameterized_macro::parameterized;

    #[test]
    fn operator_ge_correspond_with_precedence() {
        let equal1 = BinaryOperator::Subtract;
        let equal2 = BinaryOperator::Add;
        assert!(equal1.precedence_ge(&equal2))
    }

    #[test]
    fn multiplication_has_higher_precedence_than_addition() {
        assert!(BinaryOperator::Multiply.precedence_ge(&BinaryOperator::Add));
        assert!(!BinaryOperator::Add.precedence_ge(&BinaryOperator::Multiply));
    }

    #[parameterized(
        operator = {
            BinaryOperator::Add,
            BinaryOperator::Subtract,
            BinaryOperator::Multiply,
            BinaryOperator::Divide,
        },
        expected = { 10.0, 6.0, 16.0, 4.0 }
    )]
    fn apply_uses_left_operand_first(operator: BinaryOperator, expected: f64) {
        assert_eq!(operator.apply(8.0, 2.0).unwrap(), expected);
    }

    #[test]
    fn dividing_by_zero_is_an_error() {
        assert_eq!(
            BinaryOperator::Divide.apply(1.0, 0.0),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn dividing_by_negative_zero_is_an_error() {
        assert_eq!(
            BinaryOperator::Divide.apply(1.0, -0.0),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn overflowing_result_is_an_error() {
        let error = BinaryOperator::Multiply.apply(f64::MAX, 10.0).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidExpression);
    }

    #[test]
    fn symbol_round_trips_through_from_symbol() {
        for operator in [
            BinaryOperator::Add,
            BinaryOperator::Subtract,
            BinaryOperator::Multiply,
            BinaryOperator::Divide,
        ] {
            assert_eq!(BinaryOperator::from_symbol(operator.symbol()), Some(operator));
        }
        assert_eq!(BinaryOperator::from_symbol('^'), None);
    }
}
