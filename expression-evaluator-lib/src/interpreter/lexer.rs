use crate::interpreter::error::EvalError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::{parse_number, Token};
use crate::interpreter::{EvaluatorConfig, LexingMode};
use itertools::Itertools;

/// Splits an infix expression into tokens, left to right.
///
/// Whitespace is removed before scanning, so `"1 2"` lexes as the single number `12`.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
/// * `config`: Decides what happens to characters that are not part of the grammar.
///
/// returns: The tokens of the expression, in the order they appear.
///
/// # Examples
///
/// ```
/// use expression_evaluator::interpreter::lexer::tokenize;
/// use expression_evaluator::interpreter::token::Token;
/// use expression_evaluator::EvaluatorConfig;
///
/// let tokens = tokenize("(2.5)", &EvaluatorConfig::default()).unwrap();
/// assert_eq!(
///     tokens,
///     vec![Token::OpenParenthesis, Token::Number(2.5), Token::CloseParenthesis]
/// );
/// ```
pub fn tokenize(expression: &str, config: &EvaluatorConfig) -> Result<Vec<Token>, EvalError> {
    let cleaned: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
    let mut chars = cleaned.chars().peekable();
    let mut tokens = vec![];

    while let Some(&next) = chars.peek() {
        if is_number_char(next) {
            let literal: String = chars.peeking_take_while(|&c| is_number_char(c)).collect();
            tokens.push(Token::Number(parse_number(&literal)?));
            continue;
        }

        chars.next();
        match next {
            '(' => tokens.push(Token::OpenParenthesis),
            ')' => tokens.push(Token::CloseParenthesis),
            symbol => match BinaryOperator::from_symbol(symbol) {
                Some(operator) => tokens.push(Token::Operator(operator)),
                None => match config.lexing {
                    LexingMode::Strict => {
                        return Err(EvalError::invalid(format!(
                            "unexpected character '{}'",
                            symbol
                        )))
                    }
                    LexingMode::Lenient => {}
                },
            },
        }
    }

    Ok(tokens)
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::error::ErrorKind;
    use pretty_assertions::assert_eq;

    fn strict() -> EvaluatorConfig {
        EvaluatorConfig::default()
    }

    fn lenient() -> EvaluatorConfig {
        EvaluatorConfig {
            lexing: LexingMode::Lenient,
        }
    }

    #[test]
    fn simple_expression_returns_tokens() {
        let actual = tokenize("2+3", &strict()).unwrap();
        let expected = vec![
            Token::Number(2.0),
            "+".parse().unwrap(),
            Token::Number(3.0),
        ];
        assert_eq!(actual, expected)
    }

    #[test]
    fn parenthesised_expression_with_whitespace_returns_tokens() {
        // 2 * (3 + 4) - 5
        let actual = tokenize(" 2 * (3 + 4) - 5 ", &strict()).unwrap();
        let expected = vec![
            Token::Number(2.0),
            "*".parse().unwrap(),
            Token::OpenParenthesis,
            Token::Number(3.0),
            "+".parse().unwrap(),
            Token::Number(4.0),
            Token::CloseParenthesis,
            "-".parse().unwrap(),
            Token::Number(5.0),
        ];
        assert_eq!(actual, expected)
    }

    #[test]
    fn whitespace_inside_number_is_removed_before_scanning() {
        let actual = tokenize("1 2.5", &strict()).unwrap();
        assert_eq!(actual, vec![Token::Number(12.5)])
    }

    #[test]
    fn number_with_two_decimal_points_is_invalid() {
        let error = tokenize("1.2.3+4", &strict()).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidExpression)
    }

    #[test]
    fn lone_decimal_point_is_invalid() {
        let error = tokenize("1+.", &strict()).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidExpression)
    }

    #[test]
    fn strict_lexing_rejects_unknown_character() {
        let error = tokenize("2x+3", &strict()).unwrap_err();
        assert_eq!(error, EvalError::invalid("unexpected character 'x'"))
    }

    #[test]
    fn lenient_lexing_skips_unknown_character() {
        let actual = tokenize("2x+3$", &lenient()).unwrap();
        let expected = vec![
            Token::Number(2.0),
            "+".parse().unwrap(),
            Token::Number(3.0),
        ];
        assert_eq!(actual, expected)
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert_eq!(tokenize("   ", &strict()).unwrap(), Vec::<Token>::new())
    }
}
