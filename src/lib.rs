//! # intscript
//!
//! intscript is a tiny imperative language over 64-bit integers, written in
//! Rust. Programs are sequences of one-line statements: `var` declarations,
//! assignments, `print` and arithmetic expressions with `+ - * / %` and
//! parentheses.

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
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{error::EvalError, interpreter::evaluator::core::Session};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` types that represent one
/// parsed unit of source text. The AST is built by the parser and walked by
/// the evaluator.
///
/// # Responsibilities
/// - Defines the statement kinds and the arithmetic expression tree.
/// - Attaches source line numbers to every node for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines every error a statement can fail with, split into
/// parse errors and runtime errors, plus the `EvalError` that wraps both.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and the symbol
/// table.
pub mod interpreter;

/// Runs a whole script through `session`, one line per statement.
///
/// Every line is run in order, including after a line fails: errors are
/// collected and returned, and the failing line leaves the session's bindings
/// as they were. Blank lines are empty statements.
///
/// # Examples
/// ```
/// use intscript::{interpreter::evaluator::core::Session, run_script};
///
/// let mut session = Session::with_output(Vec::<u8>::new());
/// let errors = run_script(&mut session, "var x = 7\nprint x / 0\nprint x % 4");
///
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].line(), 2);
/// assert_eq!(session.output(), b"3\n");
/// ```
pub fn run_script<W: Write>(session: &mut Session<W>, source: &str) -> Vec<EvalError> {
    source.lines()
          .filter_map(|line| session.run(line).err())
          .collect()
}
