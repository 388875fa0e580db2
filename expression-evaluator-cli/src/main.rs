use anyhow::{bail, Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use expression_evaluator::interpreter::{lexer, tokens_to_string};
use expression_evaluator::{evaluate_with, EvalError, EvaluatorConfig, LexingMode};
use log::{debug, info};
use std::io;
use std::io::BufRead;

/// Evaluates arithmetic expressions using + - * / and parentheses
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate. Reads one expression per line from stdin if omitted
    expression: Option<String>,

    /// Skip unrecognized characters instead of rejecting the expression
    #[clap(long)]
    lenient: bool,

    /// Print the normalized expression before its value
    #[clap(long)]
    echo: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

impl Arguments {
    fn config(&self) -> EvaluatorConfig {
        EvaluatorConfig {
            lexing: if self.lenient {
                LexingMode::Lenient
            } else {
                LexingMode::Strict
            },
        }
    }
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = args.config();
    debug!("using {:?}", config);

    let expressions = match &args.expression {
        Some(expression) => vec![expression.clone()],
        None => read_expressions(io::stdin().lock())?,
    };

    let mut failures = 0;
    for expression in &expressions {
        if !run(expression, &config, args.echo) {
            failures += 1;
        }
    }

    info!("evaluated {} expression(s)", expressions.len());
    if failures > 0 {
        bail!("{} of {} expression(s) failed", failures, expressions.len());
    }
    Ok(())
}

fn read_expressions(input: impl BufRead) -> Result<Vec<String>> {
    let mut expressions = vec![];
    for (index, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("could not read line {} of input", index + 1))?;
        if !line.trim().is_empty() {
            expressions.push(line);
        }
    }
    Ok(expressions)
}

/// Evaluates and prints a single expression. Returns whether it succeeded.
fn run(expression: &str, config: &EvaluatorConfig, echo: bool) -> bool {
    if echo {
        match normalize(expression, config) {
            Ok(normalized) => println!("{} =", normalized),
            Err(e) => debug!("{:#}", e),
        }
    }

    match evaluate_with(expression, config) {
        Ok(value) => {
            println!("{}", value);
            true
        }
        Err(e) => {
            debug!("'{}' failed: {:?}", expression, e);
            eprintln!("{}", describe(&e));
            false
        }
    }
}

fn normalize(expression: &str, config: &EvaluatorConfig) -> Result<String> {
    let tokens = lexer::tokenize(expression, config)
        .with_context(|| format!("could not normalize '{}'", expression))?;
    debug!("tokens: {:?}", tokens);
    tokens_to_string(&tokens).context("Failed to build token string")
}

fn describe(error: &EvalError) -> String {
    match error {
        EvalError::InvalidExpression { reason } => format!("Invalid expression ({})", reason),
        EvalError::DivisionByZero => "Cannot divide by zero".to_string(),
        EvalError::UnknownOperator { token } => format!("Unknown operator '{}'", token),
    }
}
