use serde::Serialize;

use crate::lexer::tokens::TokenKind;

/// Sign of a prefix `+`/`-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnaryOp {
    Plus,
    Minus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CompareOp {
    Le,
    Lt,
    Eq,
    Gt,
    Ge,
}

impl CompareOp {
    pub fn from_token(kind: TokenKind) -> Option<CompareOp> {
        match kind {
            TokenKind::LessEquals => Some(CompareOp::Le),
            TokenKind::Less => Some(CompareOp::Lt),
            TokenKind::Equals => Some(CompareOp::Eq),
            TokenKind::Greater => Some(CompareOp::Gt),
            TokenKind::GreaterEquals => Some(CompareOp::Ge),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Le => "<=",
            CompareOp::Lt => "<",
            CompareOp::Eq => "==",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
        }
    }
}

/// A value expression or a condition.
///
/// Both share one tree: whether a node is boolean-shaped or integer/list-shaped is
/// decided by the constructors used, and checked by a later pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    Int(i64),
    Bool(bool),
    EmptyList,
    Identifier(String),
    UnaryArith { op: UnaryOp, operand: Box<Value> },
    Negate(Box<Value>),
    HeadOf(Box<Value>),
    TailOf(Box<Value>),
    Power { base: Box<Value>, exponent: Box<Value> },
    Mul { lhs: Box<Value>, rhs: Box<Value> },
    Div { lhs: Box<Value>, rhs: Box<Value> },
    Mod { lhs: Box<Value>, rhs: Box<Value> },
    Add { lhs: Box<Value>, rhs: Box<Value> },
    Sub { lhs: Box<Value>, rhs: Box<Value> },
    Cons { head: Box<Value>, tail: Box<Value> },
    Compare { op: CompareOp, lhs: Box<Value>, rhs: Box<Value> },
    And { lhs: Box<Value>, rhs: Box<Value> },
    Or { lhs: Box<Value>, rhs: Box<Value> },
    Call { callee: Box<Value>, args: Vec<Value> },
}

impl Value {
    pub fn identifier(name: &str) -> Value {
        Value::Identifier(String::from(name))
    }

    /// Builds the node for an infix operator token, `None` if `kind` is not one.
    pub fn infix(kind: TokenKind, lhs: Value, rhs: Value) -> Option<Value> {
        let lhs = Box::new(lhs);
        let rhs = Box::new(rhs);

        let value = match kind {
            TokenKind::Caret => Value::Power { base: lhs, exponent: rhs },
            TokenKind::Star => Value::Mul { lhs, rhs },
            TokenKind::Slash => Value::Div { lhs, rhs },
            TokenKind::Percent => Value::Mod { lhs, rhs },
            TokenKind::Plus => Value::Add { lhs, rhs },
            TokenKind::Dash => Value::Sub { lhs, rhs },
            TokenKind::ColonColon => Value::Cons { head: lhs, tail: rhs },
            TokenKind::And => Value::And { lhs, rhs },
            TokenKind::Or => Value::Or { lhs, rhs },
            _ => Value::Compare { op: CompareOp::from_token(kind)?, lhs, rhs },
        };

        Some(value)
    }

    /// True for nodes whose root constructor yields a boolean.
    pub fn is_boolean_shaped(&self) -> bool {
        matches!(
            self,
            Value::Bool(_)
                | Value::Negate(_)
                | Value::Compare { .. }
                | Value::And { .. }
                | Value::Or { .. }
        )
    }
}
