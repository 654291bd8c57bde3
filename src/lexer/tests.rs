//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - Operators and punctuation
//! - Comments
//! - Error cases

use super::{lexer::tokenize, tokens::TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.salt".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "def if then else return head tail and or true false".to_string();
    let tokens = tokenize(source, Some("test.salt".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Def);
    assert_eq!(tokens[1].kind, TokenKind::If);
    assert_eq!(tokens[2].kind, TokenKind::Then);
    assert_eq!(tokens[3].kind, TokenKind::Else);
    assert_eq!(tokens[4].kind, TokenKind::Return);
    assert_eq!(tokens[5].kind, TokenKind::Head);
    assert_eq!(tokens[6].kind, TokenKind::Tail);
    assert_eq!(tokens[7].kind, TokenKind::And);
    assert_eq!(tokens[8].kind, TokenKind::Or);
    assert_eq!(tokens[9].kind, TokenKind::True);
    assert_eq!(tokens[10].kind, TokenKind::False);
    assert_eq!(tokens[11].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore heads define".to_string();
    let tokens = tokenize(source, Some("test.salt".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "bar");
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].value, "_underscore");
    // Keywords only match whole words
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "heads");
    assert_eq!(tokens[5].kind, TokenKind::Identifier);
    assert_eq!(tokens[5].value, "define");
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 0 007".to_string();
    let tokens = tokenize(source, Some("test.salt".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].value, "007");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("+ - * / % ^ :: [] ! = == < <= > >="),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Caret,
            TokenKind::ColonColon,
            TokenKind::EmptyList,
            TokenKind::Not,
            TokenKind::Assignment,
            TokenKind::Equals,
            TokenKind::Less,
            TokenKind::LessEquals,
            TokenKind::Greater,
            TokenKind::GreaterEquals,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) { } ,"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Comma,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_without_whitespace() {
    assert_eq!(
        kinds("x=1::y<=-2"),
        vec![
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::ColonColon,
            TokenKind::Identifier,
            TokenKind::LessEquals,
            TokenKind::Dash,
            TokenKind::Number,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let source = "x // line comment\n/* block\ncomment */ y / z";
    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Slash,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_spans() {
    let tokens = tokenize("def  main".to_string(), Some("test.salt".to_string())).unwrap();

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 3);
    assert_eq!(tokens[1].span.start.0, 5);
    assert_eq!(tokens[1].span.end.0, 9);
    assert_eq!(tokens[2].span.start.0, 9);
    assert_eq!(*tokens[1].span.start.1, "test.salt");
}

#[test]
fn test_tokenize_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds("  \n\t // nothing"), vec![TokenKind::EOF]);
}

#[test]
fn test_tokenize_default_file_name() {
    let tokens = tokenize("x".to_string(), None).unwrap();
    assert_eq!(*tokens[0].span.start.1, "shell");
}

#[test]
fn test_unrecognised_token() {
    let result = tokenize("x = 1 @ 2".to_string(), Some("test.salt".to_string()));

    let error = result.unwrap_err();
    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 6);
}

#[test]
fn test_single_bracket_is_unrecognised() {
    let result = tokenize("[1]".to_string(), Some("test.salt".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_unterminated_block_comment() {
    let result = tokenize("x /* never closed".to_string(), Some("test.salt".to_string()));

    let error = result.unwrap_err();
    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 2);
}
