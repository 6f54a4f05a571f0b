// Integration tests for the printer and program listing

use minibasic::{
    print_command, print_expression, print_line, BinaryOp, Command, Expression,
    Line, Program, UnaryOp,
};

fn v(name: &str) -> Expression {
    Expression::var(name)
}

fn int(n: i64) -> Expression {
    Expression::int(n)
}

fn bin(l: Expression, op: BinaryOp, r: Expression) -> Expression {
    Expression::binary(l, op, r)
}

#[test]
fn test_if_line() {
    let line = Line::new(
        10,
        Command::If {
            condition: bin(v("X"), BinaryOp::Lt, int(5)),
            target: 20,
        },
    );

    assert_eq!(print_line(&line), "10 IF X < 5 THEN 20");
    assert_eq!(line.to_string(), print_line(&line));
}

#[test]
fn test_division_chain() {
    let left = bin(bin(v("a"), BinaryOp::Div, v("b")), BinaryOp::Mul, v("c"));
    assert_eq!(print_expression(&left), "a/b*c");

    let right = bin(v("a"), BinaryOp::Div, bin(v("b"), BinaryOp::Mul, v("c")));
    assert_eq!(print_expression(&right), "a/(b*c)");
}

#[test]
fn test_comparison_and_logic_spacing() {
    let e = bin(
        bin(v("A"), BinaryOp::Ge, int(1)),
        BinaryOp::Or,
        bin(v("B"), BinaryOp::Ne, Expression::string("no")),
    );

    assert_eq!(print_expression(&e), "A >= 1 | B <> \"no\"");
}

#[test]
fn test_logic_chain_right_nested() {
    let e = bin(v("P"), BinaryOp::And, bin(v("Q"), BinaryOp::Or, v("R")));
    assert_eq!(print_expression(&e), "P & (Q | R)");
}

#[test]
fn test_arithmetic_inside_comparison() {
    let e = bin(
        bin(v("N"), BinaryOp::Mod, int(2)),
        BinaryOp::Eq,
        int(0),
    );
    assert_eq!(print_expression(&e), "N%2 = 0");

    let e = bin(
        v("N"),
        BinaryOp::Mul,
        bin(v("A"), BinaryOp::Lt, v("B")),
    );
    assert_eq!(print_expression(&e), "N*(A < B)");
}

#[test]
fn test_negative_literal_is_a_leaf() {
    let e = bin(int(4), BinaryOp::Add, int(-3));
    assert_eq!(print_expression(&e), "4+-3");
}

#[test]
fn test_unary_at_top_level() {
    let e = Expression::unary(UnaryOp::Not, v("DONE"));
    assert_eq!(print_command(&Command::Print(e)), "PRINT !DONE");
}

#[test]
fn test_let_and_listing() {
    let mut program = Program::new();
    program.insert(Line::new(
        20,
        Command::Let {
            name: "S".to_string(),
            value: bin(
                v("S"),
                BinaryOp::Add,
                bin(v("I"), BinaryOp::Mul, v("I")),
            ),
        },
    ));
    program.insert(Line::new(10, Command::Rem("sum of squares".to_string())));
    program.insert(Line::new(30, Command::Goto(20)));

    assert_eq!(
        program.listing(),
        "10 REM sum of squares\n20 LET S = S+I*I\n30 GOTO 20"
    );
    assert!(program.dangling_jumps().is_empty());
}
