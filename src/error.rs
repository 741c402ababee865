/// Parsing errors.
///
/// Defines the errors detected while turning tokens into a statement:
/// malformed declarations, unbalanced parentheses, tokens that cannot start a
/// factor and literals that do not fit the integer type.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while evaluating a parsed statement: symbol
/// table violations, division or modulo by zero, overflow and failed output.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any error a single statement can fail with.
pub enum EvalError {
    /// The statement could not be parsed; nothing was evaluated.
    Parse(ParseError),
    /// The statement parsed but failed while being evaluated.
    Runtime(RuntimeError),
}

impl EvalError {
    /// The line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Parse(e) => e.line(),
            Self::Runtime(e) => e.line(),
        }
    }
}

impl From<ParseError> for EvalError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
