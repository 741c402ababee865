/// An expression node.
///
/// Expressions only read the symbol table; evaluating one never changes any
/// binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Literal {
        /// The literal's value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use intscript::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. } | Self::Variable { line, .. } | Self::BinaryOp { line, .. } => {
                *line
            },
        }
    }

    /// Moves both operands out of a `BinaryOp`, leaving cheap literals in
    /// their place. Other nodes yield nothing.
    fn take_operands(&mut self) -> Option<(Self, Self)> {
        match self {
            Self::BinaryOp { left, right, .. } => {
                Some((std::mem::replace(left.as_mut(), Self::placeholder()),
                      std::mem::replace(right.as_mut(), Self::placeholder())))
            },
            Self::Literal { .. } | Self::Variable { .. } => None,
        }
    }

    const fn placeholder() -> Self {
        Self::Literal { value: 0,
                        line:  0, }
    }
}

// A chain like `1 + 1 + ... + 1` is one node deep per operator; the derived
// drop would recurse that deep.
impl Drop for Expr {
    fn drop(&mut self) {
        let Some((left, right)) = self.take_operands() else {
            return;
        };

        let mut pending = vec![left, right];
        while let Some(mut node) = pending.pop() {
            if let Some((left, right)) = node.take_operands() {
                pending.push(left);
                pending.push(right);
            }
        }
    }
}

/// Represents a top-level statement.
///
/// One statement is parsed from each unit of source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `print <expression>`: writes the value and yields it.
    Print {
        /// The expression to print.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `var <name> = <expression>`.
    VariableDeclaration {
        /// The name of the variable.
        name:  String,
        /// The initial value of the variable.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `<name> = <expression>` on a declared variable.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `<name> <op> <expression>`: yields `expression + name` without
    /// storing anything. The result is always folded with `+`; which of the
    /// five operators introduced the right-hand side is not kept.
    CompoundPreview {
        /// The name of the variable.
        name:  String,
        /// The value to be combined with the current variable value.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// A unit with no tokens at all.
    Empty {
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Print { line, .. }
            | Self::VariableDeclaration { line, .. }
            | Self::Assignment { line, .. }
            | Self::CompoundPreview { line, .. }
            | Self::Expression { line, .. }
            | Self::Empty { line } => *line,
        }
    }
}

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
}

impl BinaryOperator {
    /// Returns `true` for the operators that bind tighter (`*`, `/`, `%`).
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div | Self::Mod)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        };
        write!(f, "{operator}")
    }
}
