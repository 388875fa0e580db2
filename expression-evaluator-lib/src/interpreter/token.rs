use crate::interpreter::error::EvalError;
use crate::interpreter::operator::BinaryOperator;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of an expression
#[derive(Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(BinaryOperator),
    OpenParenthesis,
    CloseParenthesis,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::OpenParenthesis => write!(f, "("),
            Token::CloseParenthesis => write!(f, ")"),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl str::FromStr for Token {
    type Err = EvalError;

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        let mut chars = input.chars();
        if let (Some(symbol), None) = (chars.next(), chars.next()) {
            if let Some(operator) = BinaryOperator::from_symbol(symbol) {
                return Ok(Token::Operator(operator));
            }
            match symbol {
                '(' => return Ok(Token::OpenParenthesis),
                ')' => return Ok(Token::CloseParenthesis),
                _ => {}
            }
        }
        parse_number(input).map(Token::Number)
    }
}

/// Parses a run of digits containing at most one decimal point.
pub(crate) fn parse_number(text: &str) -> Result<f64, EvalError> {
    let is_numeric = !text.is_empty() && text.chars().all(|c| c.is_ascii_digit() || c == '.');
    if !is_numeric {
        return Err(EvalError::invalid(format!("'{}' is not a number", text)));
    }
    if text.matches('.').count() > 1 {
        return Err(EvalError::invalid(format!(
            "number '{}' has more than one decimal point",
            text
        )));
    }
    let value = text
        .parse::<f64>()
        .map_err(|_| EvalError::invalid(format!("'{}' is not a number", text)))?;
    if !value.is_finite() {
        return Err(EvalError::invalid(format!("number '{}' is too large", text)));
    }
    Ok(value)
}
