pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod token;

use crate::interpreter::error::EvalError;
use crate::interpreter::token::Token;
use std::string::FromUtf8Error;
use string_builder::Builder;

/// What the lexer does with characters outside of `0-9 . + - * / ( )` and whitespace.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LexingMode {
    /// Fail with [`EvalError::InvalidExpression`].
    #[default]
    Strict,
    /// Skip the character.
    Lenient,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EvaluatorConfig {
    pub lexing: LexingMode,
}

/// Evaluates an infix arithmetic expression using the default (strict) configuration.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format, using `+ - * /` and parentheses.
///
/// returns: The numerical value of the expression.
///
/// # Examples
///
/// ```
/// use expression_evaluator::interpreter::evaluate;
///
/// assert_eq!(evaluate("2 * (3 + 4) - 5").unwrap(), 9.0);
/// assert!(evaluate("1/0").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    evaluate_with(expression, &EvaluatorConfig::default())
}

/// Evaluates an infix arithmetic expression.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
/// * `config`: How the expression is lexed.
///
/// returns: The numerical value of the expression.
///
/// # Examples
///
/// ```
/// use expression_evaluator::interpreter::evaluate_with;
/// use expression_evaluator::{EvaluatorConfig, LexingMode};
///
/// let config = EvaluatorConfig { lexing: LexingMode::Lenient };
/// assert_eq!(evaluate_with("2 + 3 =", &config).unwrap(), 5.0);
/// ```
pub fn evaluate_with(expression: &str, config: &EvaluatorConfig) -> Result<f64, EvalError> {
    let tokens = lexer::tokenize(expression, config)?;
    evaluator::evaluate_tokens(tokens)
}

/// Pretty-prints the given tokens with added whitespace around binary operators.
///
/// A `-` in unary position (first token, or right after `(`) is printed without spaces.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A pretty-printed text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use expression_evaluator::interpreter::tokens_to_string;
/// use expression_evaluator::interpreter::token::Token;
///
/// let tokens = vec![Token::Number(2.0), "+".parse().unwrap(), Token::Number(3.5)];
/// assert_eq!(tokens_to_string(&tokens).unwrap(), "2 + 3.5");
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> Result<String, FromUtf8Error> {
    let mut builder = Builder::new(tokens.len());
    let mut previous: Option<&Token> = None;

    for token in tokens {
        match token {
            Token::Operator(_) if matches!(previous, None | Some(Token::OpenParenthesis)) => {
                builder.append(token.to_string())
            }
            Token::Operator(_) => {
                builder.append(" ");
                builder.append(token.to_string());
                builder.append(" ");
            }
            _ => builder.append(token.to_string()),
        }
        previous = Some(token);
    }

    builder.string()
}
