/// The evaluation session.
///
/// Contains the [`core::Session`] type that owns the symbol table and output
/// writer, the `EvalResult` alias and expression evaluation.
pub mod core;

/// Binary operator evaluation.
///
/// Checked integer arithmetic, including the zero-divisor errors.
pub mod binary;

/// Statement evaluation.
///
/// Implements the side effects of each statement kind: printing, declaring
/// and assigning.
pub mod statement;
