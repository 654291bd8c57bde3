//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program entry points.
//! Values are parsed Pratt-style with NUD/LED handlers, block entries are
//! dispatched through a statement table keyed on the leading token.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix and primary values
//! - LED (left denotation) handlers for infix operators and calls
//! - Binding powers for operator precedence

use std::collections::HashMap;

use log::{debug, trace};

use crate::{
    ast::ast::Program,
    errors::errors::{Construct, Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_fn_decl,
};

/// Nesting allowed before parsing gives up with `NestingTooDeep`.
pub const DEFAULT_MAX_DEPTH: usize = 128;

#[derive(Debug, Clone, Copy)]
pub struct ParserConfig {
    /// Maximum depth of nested values and blocks.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// The main parser structure that maintains parsing state.
///
/// The token vector always ends with `EOF` and the cursor never moves past it, so
/// the current token is always available.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Lookup table for block entry handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) handlers
    led_lookup: LEDLookup,
    /// Lookup table for binding powers (precedence)
    binding_power_lookup: BPLookup,
    config: ParserConfig,
    /// Current nesting depth
    depth: usize,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// A missing trailing `EOF` is synthesized at the end of the last token.
    pub fn new(mut tokens: Vec<Token>, config: ParserConfig) -> Self {
        let needs_eof = tokens.last().map_or(true, |token| token.kind != TokenKind::EOF);
        if needs_eof {
            let end = tokens
                .last()
                .map_or_else(Position::null, |token| token.span.end.clone());
            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::from("EOF"),
                span: Span {
                    start: end.clone(),
                    end,
                },
            });
        }

        Parser {
            tokens,
            pos: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            config,
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens[self.pos].kind
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// At `EOF` the cursor stays put.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos;
        if index + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[index]
    }

    /// Consumes a token of `expected_kind`, or fails naming what was being parsed.
    pub fn expect(&mut self, expected_kind: TokenKind, construct: Construct) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            return Err(self.unexpected(construct, &[expected_kind]));
        }

        Ok(self.advance().clone())
    }

    /// Builds an `UnexpectedToken` error for the current token.
    pub fn unexpected(&self, construct: Construct, expected: &[TokenKind]) -> Error {
        let token = self.current_token();
        Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
                construct,
                expected: expected.to_vec(),
            },
            token.span.start.clone(),
        )
    }

    /// Returns true while the current token is not `EOF`.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Runs `parse` one nesting level deeper, failing once `max_depth` is reached.
    pub fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= self.config.max_depth {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: self.config.max_depth,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// Prefix tokens get no binding power of their own: a statement may follow a value
    /// with no separator, and its first token must end the value.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a block entry handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the start of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    /// Returns the end of the most recently consumed token.
    pub fn previous_end(&self) -> Position {
        match self.pos.checked_sub(1) {
            Some(index) => self.tokens[index].span.end.clone(),
            None => self.get_position(),
        }
    }

    /// Span from `start` to the end of the most recently consumed token.
    pub fn span_from(&self, start: Position) -> Span {
        Span {
            start,
            end: self.previous_end(),
        }
    }
}

/// Parses a stream of tokens into a Program with the default configuration.
pub fn parse(tokens: Vec<Token>) -> Result<Program, Error> {
    parse_with_config(tokens, ParserConfig::default())
}

/// Parses one or more function definitions up to `EOF`.
pub fn parse_with_config(tokens: Vec<Token>, config: ParserConfig) -> Result<Program, Error> {
    let mut parser = Parser::new(tokens, config);
    create_token_lookups(&mut parser);

    trace!("parse: {} tokens, max depth {}", parser.tokens.len(), config.max_depth);

    let mut functions = vec![];
    while parser.has_tokens() {
        functions.push(parse_fn_decl(&mut parser)?);
    }

    // An `EOF` that is not the last token leaves input behind it
    if parser.pos + 1 < parser.tokens.len() {
        return Err(parser.unexpected(Construct::Program, &[TokenKind::Def]));
    }

    if functions.is_empty() {
        return Err(Error::new(ErrorImpl::EmptyProgram, parser.get_position()));
    }

    debug!("parsed program with {} functions", functions.len());
    Ok(Program { functions })
}
