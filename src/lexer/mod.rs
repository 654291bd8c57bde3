//! Lexical analysis module.
//!
//! Converts source text into the token stream the parser consumes:
//!
//! - Tokenization using anchored regex patterns
//! - Recognition of keywords, identifiers, integer literals and operators
//! - Byte-offset spans on every token for error reporting
//! - Skipping of whitespace, `//` line comments and `/* */` block comments

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
