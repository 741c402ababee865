use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::lexer::{Lexer, Token, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How many parentheses may be open at once.
pub const MAX_NESTING: usize = 128;

/// A recursive-descent parser over a single unit of source text.
///
/// The parser pulls tokens from its [`Lexer`] on demand and keeps exactly one
/// token of lookahead in `current`. On entry to every grammar rule `current`
/// is the first token of that rule; on exit it is the first token after it.
pub struct Parser<'src> {
    lexer:   Lexer<'src>,
    current: Token,
    line:    usize,
    depth:   usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser bound to `lexer`. Errors and AST nodes are tagged
    /// with `line`.
    #[must_use]
    pub fn new(mut lexer: Lexer<'src>, line: usize) -> Self {
        let current = lexer.next_token();
        Self { lexer,
               current,
               line,
               depth: 0 }
    }

    /// The line this parser reports.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// The current lookahead token.
    pub(in crate::interpreter::parser) const fn current(&self) -> &Token {
        &self.current
    }

    pub(in crate::interpreter::parser) fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Consumes the lookahead token and returns it.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        std::mem::replace(&mut self.current, next)
    }

    /// Records one more open parenthesis.
    ///
    /// # Errors
    /// `NestingTooDeep` once more than [`MAX_NESTING`] are open.
    pub(in crate::interpreter::parser) const fn enter_group(&mut self) -> ParseResult<()> {
        if self.depth == MAX_NESTING {
            return Err(ParseError::NestingTooDeep { limit: MAX_NESTING,
                                                    line:  self.line, });
        }
        self.depth += 1;
        Ok(())
    }

    pub(in crate::interpreter::parser) const fn leave_group(&mut self) {
        self.depth -= 1;
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level, addition, and descends through terms to
    /// factors.
    ///
    /// Grammar: `expression := term (("+" | "-") term)*`
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_additive()
    }
}
