//! Canonical source output.
//!
//! Every operator application is wrapped in parentheses, so re-parsing the output
//! reproduces the same tree regardless of precedence or associativity. Negative
//! integer literals are never produced by the parser and print without protection.

use std::fmt::{self, Display, Formatter};

use super::{
    ast::{Block, BlockItem, Function, Program},
    expressions::{UnaryOp, Value},
    statements::Stmt,
};

const INDENT: &str = "    ";

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{}", value),
            Value::Bool(value) => write!(f, "{}", value),
            Value::EmptyList => write!(f, "[]"),
            Value::Identifier(name) => write!(f, "{}", name),
            Value::UnaryArith { op, operand } => {
                let sign = match op {
                    UnaryOp::Plus => "+",
                    UnaryOp::Minus => "-",
                };
                write!(f, "({}{})", sign, operand)
            }
            Value::Negate(operand) => write!(f, "(!{})", operand),
            Value::HeadOf(operand) => write!(f, "head({})", operand),
            Value::TailOf(operand) => write!(f, "tail({})", operand),
            Value::Power { base, exponent } => write!(f, "({} ^ {})", base, exponent),
            Value::Mul { lhs, rhs } => write!(f, "({} * {})", lhs, rhs),
            Value::Div { lhs, rhs } => write!(f, "({} / {})", lhs, rhs),
            Value::Mod { lhs, rhs } => write!(f, "({} % {})", lhs, rhs),
            Value::Add { lhs, rhs } => write!(f, "({} + {})", lhs, rhs),
            Value::Sub { lhs, rhs } => write!(f, "({} - {})", lhs, rhs),
            Value::Cons { head, tail } => write!(f, "({} :: {})", head, tail),
            Value::Compare { op, lhs, rhs } => write!(f, "({} {} {})", lhs, op.symbol(), rhs),
            Value::And { lhs, rhs } => write!(f, "({} and {})", lhs, rhs),
            Value::Or { lhs, rhs } => write!(f, "({} or {})", lhs, rhs),
            Value::Call { callee, args } => {
                write!(f, "{}(", callee)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}

fn write_block(f: &mut Formatter<'_>, block: &Block, depth: usize) -> fmt::Result {
    if block.items.is_empty() {
        return write!(f, "{{}}");
    }

    writeln!(f, "{{")?;
    for item in &block.items {
        write!(f, "{}", INDENT.repeat(depth + 1))?;
        match item {
            BlockItem::Stmt(stmt) => write_stmt(f, stmt, depth + 1)?,
            BlockItem::Block(inner) => write_block(f, inner, depth + 1)?,
        }
        writeln!(f)?;
    }
    write!(f, "{}}}", INDENT.repeat(depth))
}

fn write_stmt(f: &mut Formatter<'_>, stmt: &Stmt, depth: usize) -> fmt::Result {
    match stmt {
        Stmt::Assignment(assignment) => write!(f, "{} = {}", assignment.target, assignment.value),
        Stmt::If(if_stmt) => {
            write!(f, "if {} then ", if_stmt.condition)?;
            write_block(f, &if_stmt.then_block, depth)?;
            if let Some(else_block) = &if_stmt.else_block {
                write!(f, " else ")?;
                write_block(f, else_block, depth)?;
            }
            Ok(())
        }
        Stmt::Return(ret) => match &ret.value {
            Some(value) => write!(f, "return {}", value),
            None => write!(f, "return"),
        },
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_stmt(f, self, 0)
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_block(f, self, 0)
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "def {}({}) ", self.name, self.parameters.join(", "))?;
        write_block(f, &self.body, 0)
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, function) in self.functions.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", function)?;
        }
        Ok(())
    }
}
