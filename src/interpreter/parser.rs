/// The parser type and its shared plumbing.
///
/// Holds the token lookahead, the entry point for expressions and the
/// `ParseResult` alias used by every rule.
pub mod core;

/// Binary operator parsing.
///
/// Implements the two precedence levels of the expression grammar: `+ -`
/// over `* / %`, both left-associative.
pub mod binary;

/// Factor parsing: literals, variable references and parenthesized
/// sub-expressions.
pub mod factor;

/// Statement parsing.
///
/// Implements `print`, `var` declarations, assignments, compound previews and
/// expression statements.
pub mod statement;
