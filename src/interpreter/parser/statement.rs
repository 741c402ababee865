use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Lexer, TokenKind},
        parser::{
            binary::token_to_binary_operator,
            core::{ParseResult, Parser},
        },
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - an empty unit,
    /// - `print <expression>`,
    /// - a variable declaration `var <identifier> = <expression>`,
    /// - an assignment `<identifier> = <expression>`,
    /// - a compound preview `<identifier> <op> <expression>`,
    /// - an expression used as a statement.
    ///
    /// The statement is selected by the leading token (and, for identifiers,
    /// the token after it). Tokens left over after the statement are not
    /// inspected.
    ///
    /// # Example
    /// ```
    /// use intscript::{
    ///     ast::Statement,
    ///     interpreter::{lexer::Lexer, parser::core::Parser},
    /// };
    ///
    /// let mut parser = Parser::new(Lexer::new("print 1 + 2"), 1);
    /// let statement = parser.parse_statement().unwrap();
    ///
    /// assert!(matches!(statement, Statement::Print { line: 1, .. }));
    /// ```
    ///
    /// # Errors
    /// Any [`ParseError`] raised by the matched construct.
    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        let line = self.line();
        match self.current().kind {
            TokenKind::EndOfInput => Ok(Statement::Empty { line }),
            TokenKind::PrintKeyword => {
                self.advance();
                let expr = self.parse_expression()?;
                Ok(Statement::Print { expr, line })
            },
            TokenKind::VarKeyword => self.parse_variable_declaration(),
            TokenKind::Identifier => self.parse_identifier_statement(),
            _ => {
                let expr = self.parse_expression()?;
                Ok(Statement::Expression { expr, line })
            },
        }
    }

    /// Parses `var <identifier> = <expression>`, starting at `var`.
    ///
    /// # Errors
    /// `InvalidDeclaration` if `var` is not followed by an identifier and `=`.
    fn parse_variable_declaration(&mut self) -> ParseResult<Statement> {
        let line = self.line();
        self.advance();

        if !self.check(TokenKind::Identifier) {
            return Err(ParseError::InvalidDeclaration { line });
        }
        let name = self.advance().text;

        if !self.check(TokenKind::Declare) {
            return Err(ParseError::InvalidDeclaration { line });
        }
        self.advance();

        let value = self.parse_expression()?;
        Ok(Statement::VariableDeclaration { name, value, line })
    }

    /// Parses a statement that starts with an identifier.
    ///
    /// Supported forms:
    ///
    /// - `<identifier> = <expression>`
    /// - `<identifier> (+ | - | * | / | %) <expression>`
    /// - `<identifier>` on its own, read as an expression statement
    fn parse_identifier_statement(&mut self) -> ParseResult<Statement> {
        let line = self.line();
        let name = self.advance().text;

        if self.check(TokenKind::Declare) {
            self.advance();
            let value = self.parse_expression()?;
            return Ok(Statement::Assignment { name, value, line });
        }

        if token_to_binary_operator(self.current().kind).is_some() {
            self.advance();
            let value = self.parse_expression()?;
            return Ok(Statement::CompoundPreview { name, value, line });
        }

        Ok(Statement::Expression { expr: Expr::Variable { name, line },
                                   line })
    }
}

/// Parses one unit of source text into a statement, tagging it with `line`.
///
/// # Example
/// ```
/// use intscript::{
///     ast::{Expr, Statement},
///     interpreter::parser::statement::parse_unit,
/// };
///
/// let statement = parse_unit("x", 3).unwrap();
///
/// assert_eq!(statement,
///            Statement::Expression { expr: Expr::Variable { name: "x".to_string(),
///                                                           line: 3, },
///                                    line: 3, });
/// ```
///
/// # Errors
/// The [`ParseError`] of the first malformed construct.
pub fn parse_unit(source: &str, line: usize) -> ParseResult<Statement> {
    Parser::new(Lexer::new(source), line).parse_statement()
}
