#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a statement.
pub enum ParseError {
    /// A `var` statement was not followed by `<identifier> =`.
    InvalidDeclaration {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `(` had no matching `)`.
    UnmatchedParenthesis {
        /// The source line where the error occurred.
        line: usize,
    },
    /// More parentheses were open at once than the parser accepts.
    NestingTooDeep {
        /// The largest accepted number of open parentheses.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A factor position held a token that cannot start a factor.
    InvalidFactor {
        /// The offending token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An integer literal does not fit into 64 bits.
    LiteralTooLarge {
        /// The literal's text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl ParseError {
    /// The line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::InvalidDeclaration { line }
            | Self::UnmatchedParenthesis { line }
            | Self::NestingTooDeep { line, .. }
            | Self::InvalidFactor { line, .. }
            | Self::LiteralTooLarge { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDeclaration { line } => write!(f,
                                                        "Error on line {line}: Invalid variable declaration. Example: var x = 1"),
            Self::UnmatchedParenthesis { line } => write!(f,
                                                          "Error on line {line}: Expected closing parenthesis ')' but none found."),
            Self::NestingTooDeep { limit, line } => write!(f,
                                                           "Error on line {line}: Parentheses nested more than {limit} deep."),
            Self::InvalidFactor { token, line } => {
                write!(f, "Error on line {line}: Invalid factor: {token}.")
            },
            Self::LiteralTooLarge { literal, line } => {
                write!(f, "Error on line {line}: Literal {literal} is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
