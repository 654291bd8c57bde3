//! Unit tests for the canonical printer.

use crate::{
    ast::expressions::{CompareOp, UnaryOp, Value},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

fn canonical(source: &str) -> String {
    let tokens = tokenize(source.to_string(), None).unwrap();
    parse(tokens).unwrap().to_string()
}

#[test]
fn test_print_value() {
    let value = Value::Add {
        lhs: Box::new(Value::Int(1)),
        rhs: Box::new(Value::Mul {
            lhs: Box::new(Value::Int(2)),
            rhs: Box::new(Value::identifier("x")),
        }),
    };

    assert_eq!(value.to_string(), "(1 + (2 * x))");
}

#[test]
fn test_print_prefix_and_list_values() {
    let value = Value::Cons {
        head: Box::new(Value::UnaryArith {
            op: UnaryOp::Minus,
            operand: Box::new(Value::HeadOf(Box::new(Value::identifier("xs")))),
        }),
        tail: Box::new(Value::EmptyList),
    };

    assert_eq!(value.to_string(), "((-head(xs)) :: [])");
}

#[test]
fn test_print_conditions() {
    let value = Value::Or {
        lhs: Box::new(Value::Negate(Box::new(Value::Bool(false)))),
        rhs: Box::new(Value::Compare {
            op: CompareOp::Ge,
            lhs: Box::new(Value::identifier("a")),
            rhs: Box::new(Value::Int(0)),
        }),
    };

    assert_eq!(value.to_string(), "((!false) or (a >= 0))");
}

#[test]
fn test_print_call() {
    let value = Value::Call {
        callee: Box::new(Value::identifier("f")),
        args: vec![Value::Int(1), Value::TailOf(Box::new(Value::identifier("ys")))],
    };

    assert_eq!(value.to_string(), "f(1, tail(ys))");
}

#[test]
fn test_print_program() {
    let printed = canonical("def f(x, y) { if x < y then { return x } else { z = x - y { return } } }");

    let expected = "\
def f(x, y) {
    if (x < y) then {
        return x
    } else {
        z = (x - y)
        {
            return
        }
    }
}
";
    assert_eq!(printed, expected);
}

#[test]
fn test_print_empty_block_and_several_functions() {
    let printed = canonical("def a() {} def b() { return a() }");

    assert_eq!(printed, "def a() {}\n\ndef b() {\n    return a()\n}\n");
}
