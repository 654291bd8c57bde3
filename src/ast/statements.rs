use serde::Serialize;

use crate::Span;

use super::{ast::Block, expressions::Value};

/// `target = value`
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentStmt {
    pub target: String,
    pub value: Value,
    pub span: Span,
}

/// `if condition [then] { ... } [else { ... }]`
#[derive(Debug, Clone, Serialize)]
pub struct IfStmt {
    pub condition: Value,
    pub then_block: Block,
    pub else_block: Option<Block>,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReturnStmt {
    pub value: Option<Value>,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize)]
pub enum Stmt {
    Assignment(AssignmentStmt),
    If(IfStmt),
    Return(ReturnStmt),
}

impl Stmt {
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Assignment(stmt) => &stmt.span,
            Stmt::If(stmt) => &stmt.span,
            Stmt::Return(stmt) => &stmt.span,
        }
    }
}
