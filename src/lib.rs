//! # calcline
//!
//! calcline is a small interactive calculator written in Rust.
//! It tokenizes, parses, and evaluates one arithmetic expression per input
//! line, with the usual precedence and associativity rules for
//! `+ - * /` and parenthesized grouping.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{evaluator::Evaluator, lexer::tokenize, parser::parse_line};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the `BinaryOperator` type that
/// represent the syntactic structure of an input line as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the expression node types for literals and binary operations.
/// - Attaches source columns to AST nodes for error reporting.
pub mod ast;
/// Provides the error and notice types for parsing and evaluation.
///
/// This module defines everything that can go wrong while handling an input
/// line. Parse errors are fatal to the current line; evaluation notices are
/// non-fatal and accompany a computed value. Both render as the exact
/// `Error: ...` lines the command-line tool prints.
///
/// # Responsibilities
/// - Defines the `ParseError` enum for all lexing/parsing failure modes.
/// - Defines the `EvalNotice` enum for non-fatal evaluation conditions.
/// - Attaches source columns and implements the standard error traits.
pub mod error;
/// Orchestrates the evaluation of one input line.
///
/// This module ties together lexing, parsing, and evaluation to provide the
/// complete pipeline from raw line text to numeric result. It exposes the
/// building blocks [`evaluate_line`] composes.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use crate::interpreter::evaluator::Evaluation;

/// Evaluates one line of input and returns the result.
///
/// This function runs the full pipeline for a single expression: the line is
/// tokenized, parsed against the arithmetic grammar, and evaluated to an
/// `f64`. The returned [`Evaluation`] carries the value together with any
/// non-fatal notices (division by zero) raised along the way.
///
/// # Errors
/// Returns a [`ParseError`](error::ParseError) if the line fails to tokenize
/// or parse; no value is computed in that case.
///
/// # Examples
/// ```
/// use calcline::evaluate_line;
///
/// // Multiplication binds tighter than addition.
/// let evaluation = evaluate_line("1 + 2 * 3").unwrap();
/// assert_eq!(evaluation.value, 7.0);
/// assert!(evaluation.notices.is_empty());
///
/// // Division by zero is a notice, not a failure: the quotient becomes 0.0.
/// let evaluation = evaluate_line("10 / 0").unwrap();
/// assert_eq!(evaluation.value, 0.0);
/// assert_eq!(evaluation.notices.len(), 1);
///
/// // A trailing operator is a parse error.
/// assert!(evaluate_line("2 *").is_err());
/// ```
pub fn evaluate_line(source: &str) -> Result<Evaluation, error::ParseError> {
    let tokens = tokenize(source)?;
    let expr = parse_line(&tokens)?;

    let mut evaluator = Evaluator::new();
    let value = evaluator.eval(&expr);

    Ok(Evaluation { value,
                    notices: evaluator.into_notices() })
}
