use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a factor, the atomic unit of an expression.
    ///
    /// Grammar:
    /// ```text
    ///     factor := Integer
    ///             | Identifier
    ///             | "(" expression ")"
    /// ```
    ///
    /// # Errors
    /// - `LiteralTooLarge` if an integer literal does not fit into `i64`.
    /// - `UnmatchedParenthesis` if a `(` is not closed.
    /// - `NestingTooDeep` if too many parentheses are open at once.
    /// - `InvalidFactor` for any other leading token, including `-` and the
    ///   end of input.
    pub(in crate::interpreter::parser) fn parse_factor(&mut self) -> ParseResult<Expr> {
        match self.current().kind {
            TokenKind::Integer => {
                let line = self.line();
                let token = self.advance();
                // Only digits reach here, so the parse can fail on size alone.
                match token.text.parse::<i64>() {
                    Ok(value) => Ok(Expr::Literal { value, line }),
                    Err(_) => Err(ParseError::LiteralTooLarge { literal: token.text,
                                                                line }),
                }
            },
            TokenKind::Identifier => {
                let token = self.advance();
                Ok(Expr::Variable { name: token.text,
                                    line: self.line() })
            },
            TokenKind::LeftParen => self.parse_grouping(),
            _ => Err(ParseError::InvalidFactor { token: self.current().to_string(),
                                                 line:  self.line(), }),
        }
    }

    /// Parses `"(" expression ")"`, starting at the `(`.
    fn parse_grouping(&mut self) -> ParseResult<Expr> {
        self.enter_group()?;
        self.advance();
        let expr = self.parse_expression()?;
        self.leave_group();

        if !self.check(TokenKind::RightParen) {
            return Err(ParseError::UnmatchedParenthesis { line: self.line() });
        }
        self.advance();

        Ok(expr)
    }
}
