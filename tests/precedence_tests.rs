use tinyjava::ast::{Expression, InfixExpression, InfixOperator, Literal};

fn integer(value: i64) -> Expression {
    Expression::Literal(Literal::Integer(value))
}

fn infix(left: Expression, operator: InfixOperator, right: Expression) -> Expression {
    Expression::Infix(InfixExpression {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    })
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let parsed = Expression::parse("2 + 3 * 4").expect("should parse");
    let expected = infix(
        integer(2),
        InfixOperator::Addition,
        infix(integer(3), InfixOperator::Multiplication, integer(4)),
    );
    assert_eq!(parsed, expected);
}

#[test]
fn same_precedence_folds_left() {
    let parsed = Expression::parse("10 - 3 - 2").expect("should parse");
    let expected = infix(
        infix(integer(10), InfixOperator::Subtraction, integer(3)),
        InfixOperator::Subtraction,
        integer(2),
    );
    assert_eq!(parsed, expected);
}

#[test]
fn logical_or_is_the_loosest_infix_operator() {
    let parsed = Expression::parse("1 == 2 || 3 < 4 && 5 != 6").expect("should parse");
    match parsed {
        Expression::Infix(top) => {
            assert_eq!(top.operator, InfixOperator::BooleanOr);
            match *top.right {
                Expression::Infix(ref right) => {
                    assert_eq!(right.operator, InfixOperator::BooleanAnd)
                }
                ref other => panic!("expected && on the right of ||, got {:?}", other),
            }
        }
        other => panic!("expected infix expression, got {:?}", other),
    }
}

#[test]
fn bitwise_operators_sit_between_logical_and_equality() {
    // a && b | c == d groups as a && (b | (c == d))
    let parsed = Expression::parse("a && b | c == d").expect("should parse");
    match parsed {
        Expression::Infix(top) => {
            assert_eq!(top.operator, InfixOperator::BooleanAnd);
            match *top.right {
                Expression::Infix(ref right) => {
                    assert_eq!(right.operator, InfixOperator::BitwiseOr)
                }
                ref other => panic!("expected | below &&, got {:?}", other),
            }
        }
        other => panic!("expected infix expression, got {:?}", other),
    }
}

#[test]
fn shift_binds_tighter_than_comparison() {
    let parsed = Expression::parse("1 << 2 > 3").expect("should parse");
    let expected = infix(
        infix(integer(1), InfixOperator::BitwiseShiftLeft, integer(2)),
        InfixOperator::GreaterThan,
        integer(3),
    );
    assert_eq!(parsed, expected);
}

#[test]
fn mixed_levels_fold_from_tightest_to_loosest() {
    // + binds tighter than <<, which binds tighter than >=
    let parsed = Expression::parse("1 + 2 << 3 >= 4").expect("should parse");
    let expected = infix(
        infix(
            infix(integer(1), InfixOperator::Addition, integer(2)),
            InfixOperator::BitwiseShiftLeft,
            integer(3),
        ),
        InfixOperator::GreaterOrEqualTo,
        integer(4),
    );
    assert_eq!(parsed, expected);
}

#[test]
fn ternary_sits_below_every_infix_operator() {
    let parsed = Expression::parse("1 + 2 ? 3 : 4 * 5").expect("should parse");
    match parsed {
        Expression::Ternary(ternary) => {
            assert_eq!(ternary.condition.to_string(), "1 + 2");
            assert_eq!(ternary.when_false.to_string(), "4 * 5");
        }
        other => panic!("expected ternary, got {:?}", other),
    }
}

#[test]
fn ternary_nests_to_the_right() {
    let parsed = Expression::parse("a ? b : c ? d : e").expect("should parse");
    match parsed {
        Expression::Ternary(outer) => {
            assert_eq!(outer.condition.to_string(), "a");
            match *outer.when_false {
                Expression::Ternary(ref inner) => {
                    assert_eq!(inner.condition.to_string(), "c")
                }
                ref other => panic!("expected nested ternary, got {:?}", other),
            }
        }
        other => panic!("expected ternary, got {:?}", other),
    }
}

#[test]
fn rendering_preserves_evaluation_order_text() {
    for source in ["2 + 3 * 4", "10 - 3 - 2", "1 << 2 > 3", "a ? b : c ? d : e"] {
        let parsed = Expression::parse(source).expect("should parse");
        assert_eq!(parsed.to_string(), source);
    }
}
