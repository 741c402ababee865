use intscript::{
    ast::{BinaryOperator, Expr, Statement},
    error::ParseError,
    interpreter::parser::{core::MAX_NESTING, statement::parse_unit},
};

fn lit(value: i64) -> Expr {
    Expr::Literal { value, line: 1 }
}

fn var(name: &str) -> Expr {
    Expr::Variable { name: name.to_string(),
                     line: 1, }
}

fn bin(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::BinaryOp { left: Box::new(left),
                     op,
                     right: Box::new(right),
                     line: 1 }
}

fn expression(src: &str) -> Expr {
    match parse_unit(src, 1) {
        Ok(Statement::Expression { expr, .. } | Statement::Print { expr, .. }) => expr,
        other => panic!("expected an expression statement for {src:?}, got {other:?}"),
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(expression("2 + 3 * 4"),
               bin(lit(2), BinaryOperator::Add, bin(lit(3), BinaryOperator::Mul, lit(4))));
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(expression("(2 + 3) * 4"),
               bin(bin(lit(2), BinaryOperator::Add, lit(3)), BinaryOperator::Mul, lit(4)));
}

#[test]
fn operators_are_left_associative() {
    assert_eq!(expression("10 - 4 - 3"),
               bin(bin(lit(10), BinaryOperator::Sub, lit(4)), BinaryOperator::Sub, lit(3)));
    assert_eq!(expression("print 100 / 10 % 3"),
               bin(bin(lit(100), BinaryOperator::Div, lit(10)), BinaryOperator::Mod, lit(3)));
}

#[test]
fn literal_text_round_trips_to_its_value() {
    for n in [0_i64, 1, 7, 42, 65_535, 2_147_483_648, i64::MAX] {
        assert_eq!(expression(&n.to_string()), lit(n));
    }
    assert_eq!(expression("0009"), lit(9));
}

#[test]
fn statement_kinds() {
    assert_eq!(parse_unit("var z = 1", 1),
               Ok(Statement::VariableDeclaration { name:  "z".to_string(),
                                                   value: lit(1),
                                                   line:  1, }));
    assert_eq!(parse_unit("z = z + 1", 1),
               Ok(Statement::Assignment { name:  "z".to_string(),
                                          value: bin(var("z"), BinaryOperator::Add, lit(1)),
                                          line:  1, }));
    assert_eq!(parse_unit("z * 2 + 1", 1),
               Ok(Statement::CompoundPreview { name:  "z".to_string(),
                                               value: bin(lit(2), BinaryOperator::Add, lit(1)),
                                               line:  1, }));
    assert_eq!(parse_unit("z", 1),
               Ok(Statement::Expression { expr: var("z"),
                                          line: 1, }));
    assert_eq!(parse_unit("   ", 4), Ok(Statement::Empty { line: 4 }));
}

#[test]
fn trailing_tokens_are_ignored() {
    assert_eq!(expression("(1) 2 3"), lit(1));
    assert_eq!(expression("print 5 )"), lit(5));
}

#[test]
fn malformed_declarations() {
    for src in ["var", "var 1 = 2", "var x", "var x 5", "var = 5", "var print = 1"] {
        assert_eq!(parse_unit(src, 2),
                   Err(ParseError::InvalidDeclaration { line: 2 }),
                   "{src}");
    }
}

#[test]
fn unmatched_parenthesis() {
    assert_eq!(parse_unit("print (1 + 2", 1),
               Err(ParseError::UnmatchedParenthesis { line: 1 }));
    assert_eq!(parse_unit("((1)", 1), Err(ParseError::UnmatchedParenthesis { line: 1 }));
}

#[test]
fn nesting_is_limited() {
    let nested = |depth: usize| format!("{}7{}", "(".repeat(depth), ")".repeat(depth));

    assert_eq!(expression(&nested(MAX_NESTING)), lit(7));
    assert_eq!(parse_unit(&nested(MAX_NESTING + 1), 4),
               Err(ParseError::NestingTooDeep { limit: MAX_NESTING,
                                                line:  4, }));
    assert!(matches!(parse_unit(&nested(100_000), 1),
                     Err(ParseError::NestingTooDeep { .. })));
}

#[test]
fn sibling_groups_do_not_add_up() {
    let siblings = vec!["(1)"; MAX_NESTING * 2].join(" + ");
    assert!(parse_unit(&siblings, 1).is_ok());
}

#[test]
fn invalid_factors() {
    assert!(matches!(parse_unit("print", 1), Err(ParseError::InvalidFactor { .. })));
    assert!(matches!(parse_unit("1 +", 1), Err(ParseError::InvalidFactor { .. })));
    assert!(matches!(parse_unit("-5", 1), Err(ParseError::InvalidFactor { .. })));
    assert!(matches!(parse_unit(")", 1), Err(ParseError::InvalidFactor { .. })));
    assert!(matches!(parse_unit("x = var", 1), Err(ParseError::InvalidFactor { .. })));
}

#[test]
fn oversized_literal() {
    assert!(matches!(parse_unit("print 99999999999999999999", 1),
                     Err(ParseError::LiteralTooLarge { .. })));
}

#[test]
fn nodes_remember_their_line() {
    let statement = parse_unit("var w = (1 + w)", 9).expect("parses");
    assert_eq!(statement.line_number(), 9);
    if let Statement::VariableDeclaration { value, .. } = statement {
        assert_eq!(value.line_number(), 9);
    } else {
        panic!("expected a declaration");
    }
}

#[test]
fn operators_display_as_source() {
    let shown = [BinaryOperator::Add,
                 BinaryOperator::Sub,
                 BinaryOperator::Mul,
                 BinaryOperator::Div,
                 BinaryOperator::Mod].map(|op| op.to_string());
    assert_eq!(shown, ["+", "-", "*", "/", "%"]);
}
