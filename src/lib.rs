#![allow(clippy::module_inception)]

use std::rc::Rc;

use serde::Serialize;

use crate::{
    ast::ast::Program,
    errors::errors::Error,
    lexer::lexer::tokenize,
    parser::parser::{parse_with_config, ParserConfig},
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset into a source file, tagged with the file's name.
#[derive(Debug, Clone, Serialize)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Resolves a byte offset to `(line, line_text, column)`, both 1-based.
///
/// Offsets past the end of `source` resolve to the end of the last line, which is
/// where an `EOF` token points.
pub fn line_column(source: &str, position: u32) -> (usize, String, usize) {
    let pos = (position as usize).min(source.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let column = source[start..pos].chars().count() + 1;
            return (line_number, line.trim_end_matches('\n').to_string(), column);
        }

        start = end;
        line_number += 1;
    }

    // Only reached when `pos` is at the very end of the source.
    match source.split_inclusive('\n').last() {
        Some(last) if !last.ends_with('\n') => {
            (line_number - 1, last.to_string(), last.chars().count() + 1)
        }
        _ => (line_number, String::new(), 1),
    }
}

/// Tokenizes and parses `source` in one step.
pub fn parse_source(
    source: &str,
    file: Option<String>,
    config: ParserConfig,
) -> Result<Program, Error> {
    let tokens = tokenize(source.to_string(), file)?;
    parse_with_config(tokens, config)
}
