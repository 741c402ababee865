#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// `var` was used on a name that already exists.
    AlreadyDeclared {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Assignment or compound operation on a name that was never declared.
    NotDeclared {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An expression referenced an unknown variable.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted modulo by zero.
    ModuloByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The result of `print` could not be written.
    Output {
        /// What the writer reported.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl RuntimeError {
    /// The line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::AlreadyDeclared { line, .. }
            | Self::NotDeclared { line, .. }
            | Self::UndefinedVariable { line, .. }
            | Self::DivisionByZero { line }
            | Self::ModuloByZero { line }
            | Self::Overflow { line }
            | Self::Output { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyDeclared { name, line } => {
                write!(f, "Error on line {line}: Variable '{name}' already declared.")
            },
            Self::NotDeclared { name, line } => {
                write!(f, "Error on line {line}: Variable '{name}' not declared.")
            },
            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::ModuloByZero { line } => write!(f, "Error on line {line}: Modulo by zero."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::Output { details, line } => {
                write!(f, "Error on line {line}: Failed to write output: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
