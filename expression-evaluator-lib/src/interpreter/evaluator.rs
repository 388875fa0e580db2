use crate::interpreter::error::EvalError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use std::collections::VecDeque;

/// Evaluates infix tokens directly with an operand stack and an operator stack,
/// without building a syntax tree first.
///
/// A `-` at the start of the expression or right after `(` is read as `0 -`.
///
/// # Arguments
///
/// * `original_tokens`: The tokens to evaluate, in infix order.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// use expression_evaluator::interpreter::evaluator::evaluate_tokens;
/// use expression_evaluator::interpreter::token::Token;
///
/// let tokens = vec![Token::Number(2.0), "*".parse().unwrap(), Token::Number(4.0)];
/// assert_eq!(evaluate_tokens(tokens).unwrap(), 8.0);
/// ```
pub fn evaluate_tokens(original_tokens: Vec<Token>) -> Result<f64, EvalError> {
    if original_tokens.is_empty() {
        return Err(EvalError::invalid("expression is empty"));
    }

    let mut tokens: VecDeque<Token> = VecDeque::from(original_tokens);
    let mut stacks = Stacks::default();
    let mut expecting_operand = true;

    while let Some(token) = tokens.pop_front() {
        match token {
            Token::Number(value) => {
                if !expecting_operand {
                    return Err(EvalError::invalid(format!(
                        "missing operator before {}",
                        value
                    )));
                }
                stacks.numbers.push(value);
                expecting_operand = false;
            }
            Token::OpenParenthesis => {
                if !expecting_operand {
                    return Err(EvalError::invalid("missing operator before '('"));
                }
                stacks.operators.push(token);
            }
            Token::CloseParenthesis => {
                if expecting_operand {
                    return Err(EvalError::invalid("missing operand before ')'"));
                }
                stacks.close_parenthesis()?;
            }
            Token::Operator(operator) => {
                if expecting_operand {
                    if operator != BinaryOperator::Subtract || !stacks.at_group_start() {
                        return Err(EvalError::invalid(format!(
                            "operator '{}' is missing its left operand",
                            operator
                        )));
                    }
                    // Unary minus.
                    stacks.numbers.push(0.0);
                }
                stacks.push_operator(operator)?;
                expecting_operand = true;
            }
        }
    }

    if expecting_operand {
        return Err(EvalError::invalid("expression is incomplete"));
    }

    stacks.apply_leftover_operators()?;
    stacks.result()
}

/// Working state of a single evaluation.
#[derive(Default)]
struct Stacks {
    numbers: Vec<f64>,
    /// Operators and open parentheses.
    operators: Vec<Token>,
}

impl Stacks {
    /// Only meaningful while an operand is expected: the previous token was
    /// either nothing or `(`, rather than a binary operator.
    fn at_group_start(&self) -> bool {
        matches!(self.operators.last(), None | Some(Token::OpenParenthesis))
    }

    fn push_operator(&mut self, operator: BinaryOperator) -> Result<(), EvalError> {
        while let Some(Token::Operator(top_of_operator_stack)) = self.operators.last().cloned() {
            // Equal precedence pops too, since every operator is left-associative.
            if !top_of_operator_stack.precedence_ge(&operator) {
                break;
            }
            self.operators.pop();
            self.apply(Token::Operator(top_of_operator_stack))?;
        }

        self.operators.push(Token::Operator(operator));
        Ok(())
    }

    fn close_parenthesis(&mut self) -> Result<(), EvalError> {
        loop {
            match self.operators.pop() {
                None => return Err(EvalError::invalid("mismatched parenthesis")),
                // Discard the open parenthesis.
                Some(Token::OpenParenthesis) => return Ok(()),
                Some(token) => self.apply(token)?,
            }
        }
    }

    fn apply_leftover_operators(&mut self) -> Result<(), EvalError> {
        while let Some(token) = self.operators.pop() {
            match token {
                Token::OpenParenthesis => return Err(EvalError::invalid("mismatched parenthesis")),
                token => self.apply(token)?,
            }
        }
        Ok(())
    }

    /// Pops the right operand, then the left one, and pushes `left op right`.
    fn apply(&mut self, token: Token) -> Result<(), EvalError> {
        let operator = match token {
            Token::Operator(operator) => operator,
            token => {
                return Err(EvalError::UnknownOperator {
                    token: token.to_string(),
                })
            }
        };
        let right = self.pop_operand(&operator)?;
        let left = self.pop_operand(&operator)?;
        self.numbers.push(operator.apply(left, right)?);
        Ok(())
    }

    fn pop_operand(&mut self, operator: &BinaryOperator) -> Result<f64, EvalError> {
        self.numbers.pop().ok_or_else(|| {
            EvalError::invalid(format!("operator '{}' is missing an operand", operator))
        })
    }

    fn result(self) -> Result<f64, EvalError> {
        match self.numbers.as_slice() {
            [value] => Ok(*value),
            [] => Err(EvalError::invalid("expression has no value")),
            values => Err(EvalError::invalid(format!(
                "expression left {} values unconsumed",
                values.len()
            ))),
        }
    }
}
