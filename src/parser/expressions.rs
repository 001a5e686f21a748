//! The expression grammar.
//!
//! A literal transcription of `infix := expression operator expression`
//! is left-recursive and loops before consuming anything, so infix
//! expressions are parsed by precedence climbing instead: parse one
//! primary, then fold trailing operators left-to-right while their
//! precedence stays at or above the current minimum. The right operand
//! is parsed at (operator precedence + 1), which makes every infix
//! operator left-associative. Ternary sits below all infix levels and
//! nests to the right.

use super::error::ParseError;
use super::grammar::{composed_identifier, literal, literal_list};
use super::input::Input;
use super::primitives::{self, ch, keyword, token, PResult};
use super::symbols::{infix_operator, prefix_operator, suffix_operator};
use crate::ast::{
    ArrayInitialization, CastExpression, Expression, InfixExpression, Instancing, MethodCall,
    PrefixExpression, SuffixExpression, TernaryExpression,
};
use crate::error::Result;

/// Parse any expression, ternary included
pub fn expression(input: Input) -> PResult<Expression> {
    let (condition, rest) = infix_expression(input, 1)?;
    let after_question = match token(ch('?'))(rest) {
        Ok((_, after)) => after,
        Err(_) => return Ok((condition, rest)),
    };
    let (when_true, rest) = expression(after_question)?;
    let (_, rest) = token(ch(':'))(rest)?;
    // recursing here right-nests `a ? b : c ? d : e`
    let (when_false, rest) = expression(rest)?;
    Ok((
        Expression::Ternary(TernaryExpression {
            condition: Box::new(condition),
            when_true: Box::new(when_true),
            when_false: Box::new(when_false),
        }),
        rest,
    ))
}

fn infix_expression(input: Input, min_precedence: u8) -> PResult<Expression> {
    let (mut left, mut rest) = unary_expression(input)?;
    loop {
        // lookahead: an operator below the threshold stays unconsumed
        // for the caller one level up
        let (operator, after_operator) = match token(infix_operator)(rest) {
            Ok(ok) => ok,
            Err(_) => break,
        };
        if operator.precedence() < min_precedence {
            break;
        }
        let (right, after_right) = infix_expression(after_operator, operator.precedence() + 1)?;
        left = Expression::Infix(InfixExpression {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        });
        rest = after_right;
    }
    Ok((left, rest))
}

fn unary_expression(input: Input) -> PResult<Expression> {
    match token(prefix_operator)(input) {
        Ok((operator, rest)) => {
            let (expression, rest) = unary_expression(rest)?;
            Ok((
                Expression::Prefix(PrefixExpression {
                    operator,
                    expression: Box::new(expression),
                }),
                rest,
            ))
        }
        Err(_) => postfix_expression(input),
    }
}

fn postfix_expression(input: Input) -> PResult<Expression> {
    let (expression, rest) = primary_expression(input)?;
    match token(suffix_operator)(rest) {
        Ok((operator, rest)) => Ok((
            Expression::Suffix(SuffixExpression {
                expression: Box::new(expression),
                operator,
            }),
            rest,
        )),
        Err(_) => Ok((expression, rest)),
    }
}

fn deepest(current: Option<ParseError>, candidate: ParseError) -> Option<ParseError> {
    Some(match current {
        None => candidate,
        Some(error) => error.furthest(candidate),
    })
}

/// Parse a primary expression: any non-infix form. Alternatives are
/// ordered so overlapping spellings try the more specific form first
/// (literals before names, `new` before a bare identifier), and the
/// reported failure is the one that reached deepest into the input.
fn primary_expression(input: Input) -> PResult<Expression> {
    let mut failure: Option<ParseError> = None;

    match token(literal_expression)(input) {
        Ok(ok) => return Ok(ok),
        Err(error) => failure = deepest(failure, error),
    }
    match array_initialization(input) {
        Ok(ok) => return Ok(ok),
        Err(error) => failure = deepest(failure, error),
    }
    match cast_expression(input) {
        Ok(ok) => return Ok(ok),
        Err(error) => failure = deepest(failure, error),
    }
    match instancing(input) {
        Ok(ok) => return Ok(ok),
        Err(error) => failure = deepest(failure, error),
    }
    match call_or_name(input) {
        Ok(ok) => return Ok(ok),
        Err(error) => failure = deepest(failure, error),
    }

    Err(failure.unwrap_or_else(|| {
        ParseError::end_of_input("expression", input.location())
    }))
}

fn literal_expression(input: Input) -> PResult<Expression> {
    let (value, rest) = literal(input)?;
    Ok((Expression::Literal(value), rest))
}

/// `{ literal, ... };` — the terminating `;` belongs to this form
fn array_initialization(input: Input) -> PResult<Expression> {
    let (_, rest) = token(ch('{'))(input)?;
    let (literals, rest) = literal_list(rest)?;
    let (_, rest) = token(ch('}'))(rest)?;
    let (_, rest) = token(ch(';'))(rest)?;
    Ok((
        Expression::ArrayInitialization(ArrayInitialization { literals }),
        rest,
    ))
}

/// `(Type) expr`. Shares its opening parenthesis with grouping, so the
/// whole shape (closing parenthesis plus a following operand) has to
/// match before the alternative commits.
fn cast_expression(input: Input) -> PResult<Expression> {
    let (_, rest) = token(ch('('))(input)?;
    let (target_type, rest) = token(composed_identifier)(rest)?;
    let (_, rest) = token(ch(')'))(rest)?;
    let (operand, rest) = unary_expression(rest)?;
    Ok((
        Expression::Cast(CastExpression {
            target_type,
            expression: Box::new(operand),
        }),
        rest,
    ))
}

fn instancing(input: Input) -> PResult<Expression> {
    let (_, rest) = token(keyword("new"))(input)?;
    let (target_type, rest) = token(composed_identifier)(rest)?;
    let (arguments, rest) = argument_list(rest)?;
    Ok((
        Expression::Instancing(Instancing {
            target_type,
            arguments,
        }),
        rest,
    ))
}

/// A dotted name is a method call when an argument list follows,
/// otherwise a plain value reference
fn call_or_name(input: Input) -> PResult<Expression> {
    let (identifier, rest) = token(composed_identifier)(input)?;
    match argument_list(rest) {
        Ok((arguments, rest)) => Ok((
            Expression::MethodCall(MethodCall {
                identifier,
                arguments,
            }),
            rest,
        )),
        Err(_) => Ok((Expression::Name(identifier), rest)),
    }
}

fn argument_list(input: Input) -> PResult<Vec<Expression>> {
    let (_, mut rest) = token(ch('('))(input)?;
    let mut arguments = Vec::new();
    if let Ok((_, after)) = token(ch(')'))(rest) {
        return Ok((arguments, after));
    }
    loop {
        let (argument, after) = expression(rest)?;
        arguments.push(argument);
        rest = after;
        match token(ch(','))(rest) {
            Ok((_, after)) => rest = after,
            Err(_) => break,
        }
    }
    let (_, rest) = token(ch(')'))(rest)?;
    Ok((arguments, rest))
}

impl Expression {
    /// Parse an expression from `text`
    pub fn parse(text: &str) -> Result<Self> {
        primitives::parse(expression, text)
    }
}
