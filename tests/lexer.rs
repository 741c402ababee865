use intscript::interpreter::lexer::{Lexer, Token, TokenKind};

fn kinds(src: &str) -> Vec<TokenKind> {
    Lexer::new(src).map(|t| t.kind).collect()
}

fn texts(src: &str) -> Vec<String> {
    Lexer::new(src).map(|t| t.text).collect()
}

#[test]
fn declaration_tokens() {
    assert_eq!(kinds("var total = 12 * (3 + x)"),
               vec![TokenKind::VarKeyword,
                    TokenKind::Identifier,
                    TokenKind::Declare,
                    TokenKind::Integer,
                    TokenKind::Multiply,
                    TokenKind::LeftParen,
                    TokenKind::Integer,
                    TokenKind::Plus,
                    TokenKind::Identifier,
                    TokenKind::RightParen,
                    TokenKind::EndOfInput]);
    assert_eq!(texts("var total = 12"), vec!["var", "total", "=", "12", ""]);
}

#[test]
fn every_operator_is_one_character() {
    assert_eq!(kinds("+-*/%()="),
               vec![TokenKind::Plus,
                    TokenKind::Minus,
                    TokenKind::Multiply,
                    TokenKind::Divide,
                    TokenKind::Modulo,
                    TokenKind::LeftParen,
                    TokenKind::RightParen,
                    TokenKind::Declare,
                    TokenKind::EndOfInput]);
}

#[test]
fn keywords_are_not_identifiers() {
    assert_eq!(kinds("print var"),
               vec![TokenKind::PrintKeyword, TokenKind::VarKeyword, TokenKind::EndOfInput]);
    assert_eq!(kinds("printer variable _var var_ Print"),
               vec![TokenKind::Identifier,
                    TokenKind::Identifier,
                    TokenKind::Identifier,
                    TokenKind::Identifier,
                    TokenKind::Identifier,
                    TokenKind::EndOfInput]);
}

#[test]
fn identifiers_may_contain_digits_and_underscores() {
    assert_eq!(texts("_a1 b_2c"), vec!["_a1", "b_2c", ""]);
}

#[test]
fn integers_are_greedy_and_stop_at_letters() {
    assert_eq!(texts("007 12ab"), vec!["007", "12", "ab", ""]);
    assert_eq!(kinds("12ab")[..2], [TokenKind::Integer, TokenKind::Identifier]);
}

#[test]
fn minus_is_always_an_operator() {
    assert_eq!(kinds("5 -3"),
               vec![TokenKind::Integer,
                    TokenKind::Minus,
                    TokenKind::Integer,
                    TokenKind::EndOfInput]);
}

#[test]
fn whitespace_is_skipped() {
    assert_eq!(texts(" \t 1\t+\n2  "), vec!["1", "+", "2", ""]);
    assert_eq!(kinds("   "), vec![TokenKind::EndOfInput]);
    assert_eq!(kinds(""), vec![TokenKind::EndOfInput]);
}

#[test]
fn line_breaks_and_form_feeds_are_skipped() {
    assert_eq!(kinds("\r\n\t1\x0c%\r2\n"),
               vec![TokenKind::Integer,
                    TokenKind::Modulo,
                    TokenKind::Integer,
                    TokenKind::EndOfInput]);
}

#[test]
fn unknown_character_ends_the_unit() {
    assert_eq!(kinds("print 1; print 2"),
               vec![TokenKind::PrintKeyword, TokenKind::Integer, TokenKind::EndOfInput]);
    assert_eq!(kinds("1 . 2"), vec![TokenKind::Integer, TokenKind::EndOfInput]);
    assert_eq!(kinds("é1"), vec![TokenKind::EndOfInput]);
}

#[test]
fn end_of_input_repeats_forever() {
    let mut lexer = Lexer::new("x ;");
    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        assert_eq!(lexer.next_token(), Token::end_of_input());
    }
}

#[test]
fn iterator_stops_after_end_of_input() {
    let mut lexer = Lexer::new("1");
    assert!(lexer.next().is_some());
    assert!(lexer.next().is_some_and(|t| t.is_end()));
    assert!(lexer.next().is_none());
    assert!(lexer.next().is_none());
}
