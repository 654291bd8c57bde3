//! Integration tests for the whole front end.
//!
//! These tests drive source text through tokenization and parsing, and check
//! that canonical output re-parses to the same tree.

use saltino::{
    ast::{
        ast::{Block, BlockItem, Program},
        expressions::Value,
        statements::Stmt,
    },
    lexer::lexer::tokenize,
    parse_source,
    parser::parser::{parse, ParserConfig},
};

const FACTORIAL: &str = "
// recursive factorial
def factorial(n) {
    if n <= 1 then {
        return 1
    } else {
        return n * factorial(n - 1)
    }
}

def main() {
    return factorial(5)
}
";

const LISTS: &str = "
def append(xs, ys) {
    if xs == [] { return ys }
    return head(xs) :: append(tail(xs), ys)
}

def dot_product(x1, x2, y1, y2) {
    xs = x1 :: x2 :: []
    ys = y1 :: y2 :: []
    /* multiply pairwise */
    return head(xs) * head(ys) + head(tail(xs)) * head(tail(ys))
}

def main() {
    single = 1 :: []
    multiple = 1 :: 2 :: 3 :: []
    first = head(single)
    rest = tail(multiple)
    second = head(rest)
    list1 = 1 + 2 :: []
    list2 = 2 * 3 :: 4 :: []
    return first + second + head(list1) + head(append(list2, []))
}
";

const CONDITIONS: &str = "
def check(a, b) {
    t = true
    f = false
    if a > b and !f or t == (a < b) {
        {
            inner = -a ^ 2 % 3
        }
        return inner
    }
    return
}
";

fn parse_text(source: &str) -> Program {
    let tokens = tokenize(source.to_string(), Some("test.salt".to_string())).unwrap();
    parse(tokens).unwrap()
}

fn same_block(a: &Block, b: &Block) -> bool {
    a.items.len() == b.items.len()
        && a.items.iter().zip(&b.items).all(|(x, y)| same_item(x, y))
}

fn same_item(a: &BlockItem, b: &BlockItem) -> bool {
    match (a, b) {
        (BlockItem::Block(x), BlockItem::Block(y)) => same_block(x, y),
        (BlockItem::Stmt(x), BlockItem::Stmt(y)) => same_stmt(x, y),
        _ => false,
    }
}

fn same_stmt(a: &Stmt, b: &Stmt) -> bool {
    match (a, b) {
        (Stmt::Assignment(x), Stmt::Assignment(y)) => x.target == y.target && x.value == y.value,
        (Stmt::Return(x), Stmt::Return(y)) => x.value == y.value,
        (Stmt::If(x), Stmt::If(y)) => {
            x.condition == y.condition
                && same_block(&x.then_block, &y.then_block)
                && match (&x.else_block, &y.else_block) {
                    (Some(p), Some(q)) => same_block(p, q),
                    (None, None) => true,
                    _ => false,
                }
        }
        _ => false,
    }
}

/// Structural equality, ignoring source spans.
fn same_program(a: &Program, b: &Program) -> bool {
    a.functions.len() == b.functions.len()
        && a.functions.iter().zip(&b.functions).all(|(x, y)| {
            x.name == y.name && x.parameters == y.parameters && same_block(&x.body, &y.body)
        })
}

#[test]
fn test_parse_factorial() {
    let program = parse_text(FACTORIAL);

    assert_eq!(program.functions.len(), 2);
    let factorial = program.get_function("factorial").unwrap();
    assert_eq!(factorial.parameters, vec!["n"]);

    match &factorial.body.items[0] {
        BlockItem::Stmt(Stmt::If(if_stmt)) => {
            assert!(if_stmt.condition.is_boolean_shaped());
            assert!(if_stmt.else_block.is_some());
        }
        other => panic!("expected if, found {:?}", other),
    }
}

#[test]
fn test_parse_list_programs() {
    let program = parse_text(LISTS);

    assert_eq!(program.functions.len(), 3);
    assert_eq!(program.get_function("dot_product").unwrap().parameters.len(), 4);

    let main = program.get_function("main").unwrap();
    match &main.body.items[5] {
        BlockItem::Stmt(Stmt::Assignment(assignment)) => {
            assert_eq!(assignment.target, "list1");
            assert_eq!(assignment.value.to_string(), "((1 + 2) :: [])");
        }
        other => panic!("expected assignment, found {:?}", other),
    }
}

#[test]
fn test_parse_conditions() {
    let program = parse_text(CONDITIONS);
    let check = &program.functions[0];

    match &check.body.items[2] {
        BlockItem::Stmt(Stmt::If(if_stmt)) => {
            assert_eq!(
                if_stmt.condition.to_string(),
                "((a > b) and (!(f or (t == (a < b)))))"
            );
            assert!(matches!(if_stmt.then_block.items[0], BlockItem::Block(_)));
        }
        other => panic!("expected if, found {:?}", other),
    }

    match check.body.items.last() {
        Some(BlockItem::Stmt(Stmt::Return(ret))) => assert!(ret.value.is_none()),
        other => panic!("expected return, found {:?}", other),
    }
}

#[test]
fn test_round_trip_is_idempotent() {
    for source in [FACTORIAL, LISTS, CONDITIONS] {
        let first = parse_text(source);
        let printed = first.to_string();
        let second = parse_text(&printed);

        assert!(same_program(&first, &second), "round trip changed:\n{}", printed);
        assert_eq!(second.to_string(), printed);
    }
}

#[test]
fn test_round_trip_of_tricky_values() {
    let values = [
        "-3 ^ 2",
        "2 ^ -x ^ 2",
        "+f(1)(2) * -g()",
        "1 - (2 - 3)",
        "!(a < b) and !c",
        "(a < b) == (c or d)",
        "head(x :: y :: []) :: tail(z)",
        "(f)(x)",
    ];

    for value in values {
        let source = format!("def f() {{ v = {} }}", value);
        let first = parse_text(&source);
        let second = parse_text(&first.to_string());

        assert!(same_program(&first, &second), "round trip changed {}", value);
    }
}

#[test]
fn test_parse_source_reports_lexer_errors() {
    let error = parse_source("def f() { x = 1 $ }", None, ParserConfig::default()).unwrap_err();
    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_parse_source_reports_syntax_errors() {
    let error = parse_source("def f() { x = a < b < c }", None, ParserConfig::default()).unwrap_err();
    assert_eq!(error.get_error_name(), "ChainedComparison");
    assert_eq!(error.get_position().0, 20);
}

#[test]
fn test_json_dump() {
    let program = parse_text("def f(x) { return x :: [] }");
    let json = serde_json::to_value(&program).unwrap();

    assert_eq!(json["functions"][0]["name"], "f");
    assert_eq!(json["functions"][0]["parameters"][0], "x");

    let value = &json["functions"][0]["body"]["items"][0]["Stmt"]["Return"]["value"];
    assert_eq!(value["Cons"]["head"]["Identifier"], "x");
    assert_eq!(value["Cons"]["tail"], "EmptyList");
}

#[test]
fn test_values_compare_structurally() {
    let a = parse_text("def f() { return 1 + 2 }");
    let b = parse_text("def f() { return 2 + 1 }");

    let value = |program: &Program| match &program.functions[0].body.items[0] {
        BlockItem::Stmt(Stmt::Return(ret)) => ret.value.clone(),
        _ => None,
    };
    assert_ne!(value(&a), value(&b));
    assert_eq!(
        value(&a),
        Some(Value::Add { lhs: Box::new(Value::Int(1)), rhs: Box::new(Value::Int(2)) })
    );
}
