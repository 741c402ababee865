use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`.
    ///
    /// The rule is: `additive := term (("+" | "-") term)*`
    ///
    /// # Returns
    /// An `Expr::BinaryOp` tree representing the parsed expression.
    pub(in crate::interpreter::parser) fn parse_additive(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_term()?;
        while let Some(op) = token_to_binary_operator(self.current().kind)
              && !op.is_multiplicative()
        {
            self.advance();
            let right = self.parse_term()?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line: self.line() };
        }
        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles left-associative operators `*`, `/` and `%`.
    ///
    /// The rule is: `term := factor (("*" | "/" | "%") factor)*`
    pub(in crate::interpreter::parser) fn parse_term(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_factor()?;
        while let Some(op) = token_to_binary_operator(self.current().kind)
              && op.is_multiplicative()
        {
            self.advance();
            let right = self.parse_factor()?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line: self.line() };
        }
        Ok(left)
    }
}

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `None` for all tokens that are not one of `+ - * / %`.
///
/// # Example
/// ```
/// use intscript::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Modulo), Some(BinaryOperator::Mod));
/// assert_eq!(token_to_binary_operator(TokenKind::Declare), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Multiply => Some(BinaryOperator::Mul),
        TokenKind::Divide => Some(BinaryOperator::Div),
        TokenKind::Modulo => Some(BinaryOperator::Mod),
        _ => None,
    }
}
