use std::collections::HashMap;

use crate::{
    ast::{ast::BlockItem, expressions::Value},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator precedence, loosest first.
///
/// An infix handler keeps folding while the next operator binds strictly tighter
/// than the power its caller passed in.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Logical,
    Relational,
    Cons,
    Additive,
    Multiplicative,
    Unary,
    Power,
    Call,
}

pub type StmtHandler = fn(&mut Parser) -> Result<BlockItem, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Value, Error>;
pub type LEDHandler = fn(&mut Parser, Value, BindingPower) -> Result<Value, Error>;

/// Tokens that can begin a value, in the order they are reported in errors.
pub const VALUE_START: [TokenKind; 11] = [
    TokenKind::Number,
    TokenKind::Identifier,
    TokenKind::True,
    TokenKind::False,
    TokenKind::EmptyList,
    TokenKind::OpenParen,
    TokenKind::Head,
    TokenKind::Tail,
    TokenKind::Plus,
    TokenKind::Dash,
    TokenKind::Not,
];

/// Tokens accepted where a block entry or the closing `}` is due.
pub const BLOCK_ITEM_START: [TokenKind; 5] = [
    TokenKind::CloseCurly,
    TokenKind::OpenCurly,
    TokenKind::Identifier,
    TokenKind::If,
    TokenKind::Return,
];

pub fn create_token_lookups(parser: &mut Parser) {
    // Logical
    parser.led(TokenKind::And, BindingPower::Logical, parse_binary_value);
    parser.led(TokenKind::Or, BindingPower::Logical, parse_binary_value);

    // Relational
    parser.led(TokenKind::Less, BindingPower::Relational, parse_comparison_value);
    parser.led(TokenKind::LessEquals, BindingPower::Relational, parse_comparison_value);
    parser.led(TokenKind::Greater, BindingPower::Relational, parse_comparison_value);
    parser.led(TokenKind::GreaterEquals, BindingPower::Relational, parse_comparison_value);
    parser.led(TokenKind::Equals, BindingPower::Relational, parse_comparison_value);

    // Lists
    parser.led(TokenKind::ColonColon, BindingPower::Cons, parse_cons_value);

    // Additive, multiplicative and power
    parser.led(TokenKind::Plus, BindingPower::Additive, parse_binary_value);
    parser.led(TokenKind::Dash, BindingPower::Additive, parse_binary_value);
    parser.led(TokenKind::Star, BindingPower::Multiplicative, parse_binary_value);
    parser.led(TokenKind::Slash, BindingPower::Multiplicative, parse_binary_value);
    parser.led(TokenKind::Percent, BindingPower::Multiplicative, parse_binary_value);
    parser.led(TokenKind::Caret, BindingPower::Power, parse_power_value);

    parser.led(TokenKind::OpenParen, BindingPower::Call, parse_call_value);

    // Literals, symbols and prefixes
    parser.nud(TokenKind::Number, parse_primary_value);
    parser.nud(TokenKind::Identifier, parse_primary_value);
    parser.nud(TokenKind::True, parse_primary_value);
    parser.nud(TokenKind::False, parse_primary_value);
    parser.nud(TokenKind::EmptyList, parse_primary_value);
    parser.nud(TokenKind::OpenParen, parse_grouping_value);
    parser.nud(TokenKind::Head, parse_list_access_value);
    parser.nud(TokenKind::Tail, parse_list_access_value);
    parser.nud(TokenKind::Plus, parse_prefix_value);
    parser.nud(TokenKind::Dash, parse_prefix_value);
    parser.nud(TokenKind::Not, parse_negate_value);

    // Block entries
    parser.stmt(TokenKind::OpenCurly, parse_nested_block_stmt);
    parser.stmt(TokenKind::Identifier, parse_assignment_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
