/// The evaluator module executes statements against a session.
///
/// The evaluator walks the AST produced by the parser, performs the checked
/// integer arithmetic, applies declarations and assignments to the session's
/// symbol table and writes `print` output.
///
/// # Responsibilities
/// - Owns the [`evaluator::core::Session`] type, the driver-facing entry
///   point.
/// - Reports runtime errors such as division by zero or unknown variables.
/// - Keeps the symbol table untouched when a statement fails.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads one unit of source text and produces tokens on demand:
/// integers, identifiers, the `var` and `print` keywords, the five arithmetic
/// operators, parentheses and `=`.
///
/// # Responsibilities
/// - Skips whitespace between tokens.
/// - Separates keywords from identifiers.
/// - Ends the unit at the first unrecognised character.
pub mod lexer;
/// The parser module builds statements from tokens.
///
/// A recursive-descent parser with a single token of lookahead. Each unit of
/// source text yields exactly one [`crate::ast::Statement`].
///
/// # Responsibilities
/// - Implements the statement, expression, term and factor rules.
/// - Encodes operator precedence and left associativity.
/// - Reports malformed declarations, unmatched parentheses and invalid
///   factors.
pub mod parser;
/// The variable bindings of a session.
///
/// A flat name to integer map with declare, assign and lookup operations and
/// no scoping.
pub mod symbol_table;
