use logos::Logos;

/// The kind of a lexical token.
///
/// `Integer` and `Identifier` tokens carry their source text in
/// [`Token::text`]; every other kind is fully described by the variant.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    Integer,
    /// Variable names such as `x` or `total_2`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Multiply,
    /// `/`
    #[token("/")]
    Divide,
    /// `%`
    #[token("%")]
    Modulo,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `=`
    #[token("=")]
    Declare,
    /// `var`
    #[token("var")]
    VarKeyword,
    /// `print`
    #[token("print")]
    PrintKeyword,
    /// End of the unit. Also produced for any character the language does not
    /// know about.
    EndOfInput,
}

/// A lexical token: its kind and the exact source slice it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind: TokenKind,
    /// The source text of the token; empty for `EndOfInput`.
    pub text: String,
}

impl Token {
    /// Creates the terminal `EndOfInput` token.
    #[must_use]
    pub const fn end_of_input() -> Self {
        Self { kind: TokenKind::EndOfInput,
               text: String::new(), }
    }

    /// Returns `true` if this is the terminal token.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_end() {
            write!(f, "end of input")
        } else {
            write!(f, "'{}'", self.text)
        }
    }
}

/// Turns one unit of source text into tokens, one at a time.
///
/// The lexer never fails: the first character it does not recognise ends the
/// unit, and once `EndOfInput` has been produced every further call produces
/// it again.
///
/// # Example
/// ```
/// use intscript::interpreter::lexer::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("var x = 10");
///
/// assert_eq!(lexer.next_token().kind, TokenKind::VarKeyword);
/// assert_eq!(lexer.next_token().text, "x");
/// assert_eq!(lexer.next_token().kind, TokenKind::Declare);
/// assert_eq!(lexer.next_token().text, "10");
/// assert!(lexer.next_token().is_end());
/// assert!(lexer.next_token().is_end());
/// ```
pub struct Lexer<'src> {
    inner:    logos::Lexer<'src, TokenKind>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:    TokenKind::lexer(source),
               finished: false, }
    }

    /// Produces the next token.
    ///
    /// Whitespace is skipped first. Unrecognised input (`;`, `.`, non-ASCII
    /// characters, ...) is consumed and reported as `EndOfInput`, which also
    /// ends the unit.
    pub fn next_token(&mut self) -> Token {
        if self.finished {
            return Token::end_of_input();
        }

        match self.inner.next() {
            Some(Ok(kind)) => Token { kind,
                                      text: self.inner.slice().to_string() },
            Some(Err(())) | None => {
                self.finished = true;
                Token::end_of_input()
            },
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields every token up to and including the first `EndOfInput`.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        Some(self.next_token())
    }
}
