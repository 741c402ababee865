use std::io::{self, Stdout, Write};

use crate::{
    ast::{BinaryOperator, Expr},
    error::{EvalError, RuntimeError},
    interpreter::{
        evaluator::binary::eval_binary, parser::statement::parse_unit,
        symbol_table::SymbolTable,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A pending unit of work in [`Session::eval`].
enum Step<'a> {
    /// Evaluate this node and push its value.
    Visit(&'a Expr),
    /// Pop two values and push their combination.
    Apply(BinaryOperator, usize),
}

/// One evaluation session.
///
/// A session owns the symbol table shared by every statement it runs and the
/// writer that `print` output goes to. Sessions are independent of each
/// other; nothing is global.
///
/// ## Usage
///
/// A session is created once and [`Session::run`] is called for each unit of
/// source text, in order. Each call counts as one line for error reporting.
///
/// # Example
/// ```
/// use intscript::interpreter::evaluator::core::Session;
///
/// let mut session = Session::with_output(Vec::<u8>::new());
///
/// session.run("var x = 2 + 3 * 4").unwrap();
/// assert_eq!(session.run("print (x - 4) % 3").unwrap(), 1);
/// assert_eq!(session.symbols().get("x"), Some(14));
/// assert_eq!(session.output(), b"1\n");
/// ```
pub struct Session<W = Stdout> {
    symbols: SymbolTable,
    output:  W,
    line:    usize,
}

impl Session<Stdout> {
    /// Creates a session that prints to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Default for Session<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Session<W> {
    /// Creates a session that prints to `output`.
    #[must_use]
    pub fn with_output(output: W) -> Self {
        Self { symbols: SymbolTable::new(),
               output,
               line: 0 }
    }

    /// Parses and evaluates one unit of source text.
    ///
    /// The session's line counter is advanced first, so the n-th call reports
    /// its errors on line n. A failing statement leaves the symbol table as it
    /// was; the session stays usable.
    ///
    /// # Returns
    /// The statement's value: the printed value for `print`, the stored value
    /// for declarations and assignments, `0` for an empty unit.
    ///
    /// # Errors
    /// Any [`EvalError`] raised while parsing or evaluating the statement.
    pub fn run(&mut self, source: &str) -> Result<i64, EvalError> {
        self.line += 1;
        let statement = parse_unit(source, self.line)?;
        Ok(self.eval_statement(&statement)?)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Expressions only read the symbol table. Operands are evaluated left to
    /// right with an explicit work stack, so the depth of the tree is bounded
    /// by memory rather than by the call stack.
    ///
    /// # Errors
    /// - `UndefinedVariable` for a reference to an unknown name.
    /// - `DivisionByZero`, `ModuloByZero` or `Overflow` from the arithmetic.
    pub fn eval(&self, expr: &Expr) -> EvalResult<i64> {
        let mut work = vec![Step::Visit(expr)];
        let mut values = Vec::new();

        while let Some(step) = work.pop() {
            match step {
                Step::Visit(Expr::Literal { value, .. }) => values.push(*value),
                Step::Visit(Expr::Variable { name, line }) => {
                    values.push(self.eval_variable(name, *line)?);
                },
                Step::Visit(Expr::BinaryOp { left, op, right, line }) => {
                    work.push(Step::Apply(*op, *line));
                    work.push(Step::Visit(right));
                    work.push(Step::Visit(left));
                },
                Step::Apply(op, line) => {
                    let (Some(right), Some(left)) = (values.pop(), values.pop()) else {
                        unreachable!("every operator follows its two operands")
                    };
                    values.push(eval_binary(op, left, right, line)?);
                },
            }
        }

        let [value] = values[..] else {
            unreachable!("an expression leaves exactly one value")
        };
        Ok(value)
    }

    fn eval_variable(&self, name: &str, line: usize) -> EvalResult<i64> {
        self.symbols
            .get(name)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             line })
    }

    /// The session's bindings.
    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub(in crate::interpreter::evaluator) const fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }

    /// The writer `print` output goes to.
    #[must_use]
    pub const fn output(&self) -> &W {
        &self.output
    }

    pub(in crate::interpreter::evaluator) const fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the session and returns its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// The number of units run so far.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }
}
