/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Program, function and block nodes
/// - expressions: The unified value/condition tree
/// - statements: Assignment, if and return statements
/// - printer: Canonical, fully-parenthesized source output
pub mod ast;
pub mod expressions;
pub mod printer;
pub mod statements;

#[cfg(test)]
mod tests;
