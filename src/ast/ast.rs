use serde::Serialize;

use crate::Span;

use super::statements::Stmt;

/// A parsed program: one or more function definitions in source order.
#[derive(Debug, Clone, Serialize)]
pub struct Program {
    pub functions: Vec<Function>,
}

impl Program {
    pub fn get_function(&self, name: &str) -> Option<&Function> {
        self.functions.iter().find(|function| function.name == name)
    }
}

/// `def name(parameters) { body }`
#[derive(Debug, Clone, Serialize)]
pub struct Function {
    pub name: String,
    /// Duplicates are left for the semantic pass to report.
    pub parameters: Vec<String>,
    pub body: Block,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize)]
pub struct Block {
    pub items: Vec<BlockItem>,
    pub span: Span,
}

/// Nested blocks open their own scope and are kept as their own entry.
#[derive(Debug, Clone, Serialize)]
pub enum BlockItem {
    Stmt(Stmt),
    Block(Block),
}

impl BlockItem {
    pub fn get_span(&self) -> &Span {
        match self {
            BlockItem::Stmt(stmt) => stmt.get_span(),
            BlockItem::Block(block) => &block.span,
        }
    }
}
