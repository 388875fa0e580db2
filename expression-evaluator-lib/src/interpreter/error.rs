use thiserror::Error;

/// Everything that can go wrong while evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The input is not a well-formed arithmetic expression.
    #[error("invalid expression: {reason}")]
    InvalidExpression { reason: String },

    /// The right operand of a division evaluated to zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Something other than `+ - * /` reached the point where an operator is applied.
    #[error("unknown operator: {token}")]
    UnknownOperator { token: String },
}

/// The kind of an [`EvalError`], without any of its details.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidExpression,
    DivisionByZero,
    UnknownOperator,
}

impl EvalError {
    pub(crate) fn invalid(reason: impl Into<String>) -> EvalError {
        EvalError::InvalidExpression {
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::InvalidExpression { .. } => ErrorKind::InvalidExpression,
            EvalError::DivisionByZero => ErrorKind::DivisionByZero,
            EvalError::UnknownOperator { .. } => ErrorKind::UnknownOperator,
        }
    }
}
