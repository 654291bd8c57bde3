use log::{debug, trace};

use crate::{
    ast::{
        ast::{Block, BlockItem, Function},
        statements::{AssignmentStmt, IfStmt, ReturnStmt, Stmt},
    },
    errors::errors::{Construct, Error},
    lexer::tokens::TokenKind,
    parser::{expr::parse_value, lookups::{BindingPower, BLOCK_ITEM_START, VALUE_START}},
};

use super::parser::Parser;

/// Parses `{ entries }`. `construct` names the owner of the block for a missing `{`.
pub fn parse_block(parser: &mut Parser, construct: Construct) -> Result<Block, Error> {
    parser.nested(|parser| {
        trace!("parse_block: next token = {}", parser.current_token());

        let start = parser.expect(TokenKind::OpenCurly, construct)?.span.start;

        let mut items = Vec::new();
        while let Some(handler) = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied() {
            items.push(handler(parser)?);
        }

        if parser.current_token_kind() != TokenKind::CloseCurly {
            return Err(parser.unexpected(Construct::Block, &BLOCK_ITEM_START));
        }
        parser.advance();

        Ok(Block {
            items,
            span: parser.span_from(start),
        })
    })
}

pub fn parse_nested_block_stmt(parser: &mut Parser) -> Result<BlockItem, Error> {
    Ok(BlockItem::Block(parse_block(parser, Construct::Block)?))
}

pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<BlockItem, Error> {
    trace!("parse_assignment_stmt: next token = {}", parser.current_token());

    let target = parser.expect(TokenKind::Identifier, Construct::Assignment)?;
    parser.expect(TokenKind::Assignment, Construct::Assignment)?;
    let value = parse_value(parser, BindingPower::Default)?;

    Ok(BlockItem::Stmt(Stmt::Assignment(AssignmentStmt {
        target: target.value,
        value,
        span: parser.span_from(target.span.start),
    })))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<BlockItem, Error> {
    trace!("parse_if_stmt: next token = {}", parser.current_token());

    let start = parser.advance().span.start.clone();

    let condition = parse_value(parser, BindingPower::Default)?;
    if parser.current_token_kind() == TokenKind::Then {
        parser.advance();
    }
    let then_block = parse_block(parser, Construct::IfStatement)?;

    let else_block = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(parse_block(parser, Construct::IfStatement)?)
    } else {
        None
    };

    Ok(BlockItem::Stmt(Stmt::If(IfStmt {
        condition,
        then_block,
        else_block,
        span: parser.span_from(start),
    })))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<BlockItem, Error> {
    trace!("parse_return_stmt: next token = {}", parser.current_token());

    let start = parser.advance().span.start.clone();

    let token_kind = parser.current_token_kind();
    let value = if token_kind == TokenKind::CloseCurly {
        None
    } else if parser.get_nud_lookup().contains_key(&token_kind) {
        Some(parse_value(parser, BindingPower::Default)?)
    } else {
        let mut expected = VALUE_START.to_vec();
        expected.push(TokenKind::CloseCurly);
        return Err(parser.unexpected(Construct::ReturnStatement, &expected));
    };

    Ok(BlockItem::Stmt(Stmt::Return(ReturnStmt {
        value,
        span: parser.span_from(start),
    })))
}

/// Parses `def name(a, b, ...) { ... }`.
pub fn parse_fn_decl(parser: &mut Parser) -> Result<Function, Error> {
    trace!("parse_fn_decl: next token = {}", parser.current_token());

    let start = parser.expect(TokenKind::Def, Construct::FunctionDefinition)?.span.start;
    let name = parser.expect(TokenKind::Identifier, Construct::FunctionDefinition)?.value;

    parser.expect(TokenKind::OpenParen, Construct::ParameterList)?;

    let mut parameters = Vec::new();
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            parameters.push(parser.expect(TokenKind::Identifier, Construct::ParameterList)?.value);

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance();
        }
    }

    if parser.current_token_kind() != TokenKind::CloseParen {
        return Err(parser.unexpected(
            Construct::ParameterList,
            &[TokenKind::Comma, TokenKind::CloseParen],
        ));
    }
    parser.advance();

    let body = parse_block(parser, Construct::FunctionDefinition)?;

    debug!("parsed function {} with {} parameters", name, parameters.len());

    Ok(Function {
        name,
        parameters,
        body,
        span: parser.span_from(start),
    })
}
