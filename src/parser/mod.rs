//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! Transforms a token stream into a `Program`. Values and conditions share one
//! Pratt parser driven by a single binding-power table, so deciding between an
//! arithmetic and a boolean reading never needs backtracking:
//!
//! - Function definitions and parameter lists
//! - Blocks, assignments, `if`/`else` and `return`
//! - Values: literals, calls, `head`/`tail`, prefix and infix operators
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! with binding powers for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
