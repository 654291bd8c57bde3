use log::trace;

use crate::{
    ast::expressions::{UnaryOp, Value},
    errors::errors::{Construct, Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{BindingPower, VALUE_START},
    parser::Parser,
};

/// Parses the longest value whose operators all bind tighter than `bp`.
///
/// One primary (via its NUD handler) becomes the left operand, then infix operators
/// and call suffixes fold into it while they out-bind `bp`. The shape of the result,
/// arithmetic/list or boolean, falls out of which operators were consumed.
pub fn parse_value(parser: &mut Parser, bp: BindingPower) -> Result<Value, Error> {
    parser.nested(|parser| {
        trace!("parse_value({:?}): next token = {}", bp, parser.current_token());

        let token_kind = parser.current_token_kind();
        let nud = match parser.get_nud_lookup().get(&token_kind) {
            Some(nud) => *nud,
            None => return Err(parser.unexpected(Construct::Value, &VALUE_START)),
        };

        let mut left = nud(parser)?;

        // While the next operator binds tighter than `bp`, keep extending the lhs
        loop {
            let token_kind = parser.current_token_kind();
            let next_bp = match parser.get_bp_lookup().get(&token_kind) {
                Some(next_bp) if *next_bp > bp => *next_bp,
                _ => break,
            };
            let led = match parser.get_led_lookup().get(&token_kind) {
                Some(led) => *led,
                None => break,
            };

            left = led(parser, left, next_bp)?;
        }

        Ok(left)
    })
}

pub fn parse_primary_value(parser: &mut Parser) -> Result<Value, Error> {
    let token = parser.current_token().clone();

    let value = match token.kind {
        TokenKind::Number => match token.value.parse::<i64>() {
            Ok(number) => Value::Int(number),
            Err(_) => {
                return Err(Error::new(
                    ErrorImpl::NumberParseError { token: token.value },
                    token.span.start,
                ))
            }
        },
        TokenKind::Identifier => Value::Identifier(token.value),
        TokenKind::True => Value::Bool(true),
        TokenKind::False => Value::Bool(false),
        TokenKind::EmptyList => Value::EmptyList,
        _ => return Err(parser.unexpected(Construct::Value, &VALUE_START)),
    };

    parser.advance();
    Ok(value)
}

/// Left-associative infix operators: the rhs stops at the same binding power.
pub fn parse_binary_value(parser: &mut Parser, left: Value, bp: BindingPower) -> Result<Value, Error> {
    let operator = parser.advance().kind;
    let right = parse_value(parser, bp)?;

    Value::infix(operator, left, right)
        .ok_or_else(|| parser.unexpected(Construct::Value, &VALUE_START))
}

/// `^` is right-associative. The chain is collected flat and folded from the right.
pub fn parse_power_value(parser: &mut Parser, left: Value, _bp: BindingPower) -> Result<Value, Error> {
    let operands = parse_right_chain(parser, left, TokenKind::Caret, BindingPower::Power)?;

    Ok(fold_right(operands, |base, exponent| Value::Power {
        base: Box::new(base),
        exponent: Box::new(exponent),
    }))
}

/// `::` is right-associative. The chain is collected flat and folded from the right.
pub fn parse_cons_value(parser: &mut Parser, left: Value, _bp: BindingPower) -> Result<Value, Error> {
    let operands = parse_right_chain(parser, left, TokenKind::ColonColon, BindingPower::Cons)?;

    Ok(fold_right(operands, |head, tail| Value::Cons {
        head: Box::new(head),
        tail: Box::new(tail),
    }))
}

/// Collects `left op a op b ...`, each operand stopping at the next `op`.
fn parse_right_chain(
    parser: &mut Parser,
    left: Value,
    operator: TokenKind,
    bp: BindingPower,
) -> Result<Vec<Value>, Error> {
    let mut operands = vec![left];

    while parser.current_token_kind() == operator {
        parser.advance();
        operands.push(parse_value(parser, bp)?);
    }

    trace!("collected {} operands of {}", operands.len(), operator);
    Ok(operands)
}

fn fold_right(mut operands: Vec<Value>, join: impl Fn(Value, Value) -> Value) -> Value {
    let mut right = operands.pop().unwrap_or(Value::EmptyList);
    while let Some(left) = operands.pop() {
        right = join(left, right);
    }
    right
}

/// Comparisons take one operator between two non-comparison operands.
///
/// A second comparison directly after the rhs is rejected at that token.
pub fn parse_comparison_value(parser: &mut Parser, left: Value, bp: BindingPower) -> Result<Value, Error> {
    let operator = parser.advance().kind;
    let right = parse_value(parser, bp)?;

    if parser.current_token_kind().is_comparison() {
        let token = parser.current_token();
        return Err(Error::new(
            ErrorImpl::ChainedComparison { token: token.value.clone() },
            token.span.start.clone(),
        ));
    }

    Value::infix(operator, left, right)
        .ok_or_else(|| parser.unexpected(Construct::Value, &VALUE_START))
}

/// Prefix `+`/`-` applies to a power, call or primary only.
pub fn parse_prefix_value(parser: &mut Parser) -> Result<Value, Error> {
    let op = match parser.advance().kind {
        TokenKind::Plus => UnaryOp::Plus,
        _ => UnaryOp::Minus,
    };
    let operand = parse_value(parser, BindingPower::Unary)?;

    Ok(Value::UnaryArith { op, operand: Box::new(operand) })
}

/// `!` covers the whole condition to its right, `and`/`or` included.
pub fn parse_negate_value(parser: &mut Parser) -> Result<Value, Error> {
    parser.advance();
    let operand = parse_value(parser, BindingPower::Default)?;

    Ok(Value::Negate(Box::new(operand)))
}

pub fn parse_grouping_value(parser: &mut Parser) -> Result<Value, Error> {
    parser.advance();
    let value = parse_value(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen, Construct::ParenthesizedValue)?;

    Ok(value)
}

/// `head(value)` and `tail(value)`.
pub fn parse_list_access_value(parser: &mut Parser) -> Result<Value, Error> {
    let keyword = parser.advance().kind;
    parser.expect(TokenKind::OpenParen, Construct::ListAccess)?;
    let operand = Box::new(parse_value(parser, BindingPower::Default)?);
    parser.expect(TokenKind::CloseParen, Construct::ListAccess)?;

    Ok(match keyword {
        TokenKind::Head => Value::HeadOf(operand),
        _ => Value::TailOf(operand),
    })
}

pub fn parse_call_value(parser: &mut Parser, left: Value, _bp: BindingPower) -> Result<Value, Error> {
    parser.advance();

    let mut args = vec![];

    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            args.push(parse_value(parser, BindingPower::Default)?);

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance();
        }
    }

    if parser.current_token_kind() != TokenKind::CloseParen {
        return Err(parser.unexpected(
            Construct::CallArguments,
            &[TokenKind::Comma, TokenKind::CloseParen],
        ));
    }
    parser.advance();

    Ok(Value::Call { callee: Box::new(left), args })
}
