use std::io::Write;

use crate::{
    ast::{BinaryOperator, Expr, Statement},
    error::RuntimeError,
    interpreter::evaluator::{
        binary::eval_binary,
        core::{EvalResult, Session},
    },
};

impl<W: Write> Session<W> {
    /// Evaluates a single statement.
    ///
    /// Handles `print`, declarations, assignments, compound previews and
    /// plain expression statements. Side effects (the write for `print`, the
    /// table update for `var` and `=`) only happen after the right-hand side
    /// evaluated successfully.
    ///
    /// # Returns
    /// The printed, declared, assigned or computed value; `0` for an empty
    /// statement.
    ///
    /// # Errors
    /// - `AlreadyDeclared` for `var` on an existing name, checked before the
    ///   right-hand side is evaluated.
    /// - `NotDeclared` for `=` or a compound preview on an unknown name, also
    ///   checked first.
    /// - Any error from evaluating the right-hand side.
    /// - `Output` if the printed value could not be written.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<i64> {
        match statement {
            Statement::Print { expr, line } => self.eval_print(expr, *line),
            Statement::VariableDeclaration { name, value, line } => {
                if self.symbols().contains(name) {
                    return Err(RuntimeError::AlreadyDeclared { name: name.clone(),
                                                               line: *line, });
                }

                let value = self.eval(value)?;
                self.symbols_mut().declare(name, value, *line)?;
                Ok(value)
            },
            Statement::Assignment { name, value, line } => {
                if !self.symbols().contains(name) {
                    return Err(RuntimeError::NotDeclared { name: name.clone(),
                                                           line: *line, });
                }

                let value = self.eval(value)?;
                self.symbols_mut().assign(name, value, *line)?;
                Ok(value)
            },
            Statement::CompoundPreview { name, value, line } => {
                let current = self.symbols().lookup(name, *line)?;
                let rhs = self.eval(value)?;

                eval_binary(BinaryOperator::Add, rhs, current, *line)
            },
            Statement::Expression { expr, .. } => self.eval(expr),
            Statement::Empty { .. } => Ok(0),
        }
    }

    fn eval_print(&mut self, expr: &Expr, line: usize) -> EvalResult<i64> {
        let value = self.eval(expr)?;

        writeln!(self.output_mut(), "{value}").map_err(|e| RuntimeError::Output { details: e.to_string(),
                                                                                  line })?;
        Ok(value)
    }
}
