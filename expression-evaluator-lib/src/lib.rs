pub mod interpreter;

pub use interpreter::error::{ErrorKind, EvalError};
pub use interpreter::{evaluate, evaluate_with, EvaluatorConfig, LexingMode};
