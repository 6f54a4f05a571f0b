//! Pretty-printer: AST back to BASIC source text
//!
//! Output re-lexes and re-parses to the same tree. Parentheses are emitted
//! only where the precedence table would otherwise regroup the operands.
//!
//! # Parenthesization
//!
//! Each recursive call carries the priority of the enclosing operator and
//! which side of it the node sits on:
//!
//! - leaves are never wrapped;
//! - a unary node is wrapped whenever it is nested at all (priority > 0);
//! - a binary node of priority `p` is wrapped when `p < ctx` on the left
//!   side and when `p <= ctx` on the right side.
//!
//! The left/right asymmetry encodes left associativity: `a-b-c` is
//! `(a-b)-c`, so the right operand of an equal-priority parent needs
//! parentheses: `a-(b-c)`.

use super::ast::{Command, Expression, Line};
use super::precedence::{
    binary_priority, binary_symbol, unary_priority, unary_symbol,
};

/// Which operand slot of the parent a node is printed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Render an expression at top level (no enclosing operator).
#[must_use]
pub fn print_expression(expr: &Expression) -> String {
    let mut out = String::new();
    write_expression(&mut out, expr, 0, Side::Left);
    out
}

/// Render a command without its line number.
#[must_use]
pub fn print_command(command: &Command) -> String {
    match command {
        Command::Rem(text) => format!("REM {}", text),
        Command::Goto(target) => format!("GOTO {}", target),
        Command::Print(expr) => format!("PRINT {}", print_expression(expr)),
        Command::Input(name) => format!("INPUT {}", name),
        Command::If { condition, target } => {
            format!("IF {} THEN {}", print_expression(condition), target)
        }
        Command::Let { name, value } => {
            format!("LET {} = {}", name, print_expression(value))
        }
    }
}

/// Render a numbered line: `<number> <command>`.
#[must_use]
pub fn print_line(line: &Line) -> String {
    format!("{} {}", line.number, print_command(&line.command))
}

fn write_expression(out: &mut String, expr: &Expression, ctx: u8, side: Side) {
    match expr {
        Expression::Int(n) => out.push_str(&n.to_string()),
        Expression::Var(name) => out.push_str(name),
        Expression::Str(text) => {
            out.push('"');
            out.push_str(text);
            out.push('"');
        }
        Expression::Unary { op, operand } => {
            let wrap = ctx != 0;
            open(out, wrap);
            out.push_str(unary_symbol(*op));
            write_expression(out, operand, unary_priority(*op), Side::Left);
            close(out, wrap);
        }
        Expression::Binary { left, op, right } => {
            let p = binary_priority(*op);
            let wrap = match side {
                Side::Left => p < ctx,
                Side::Right => p <= ctx,
            };
            open(out, wrap);
            write_expression(out, left, p, Side::Left);
            out.push_str(binary_symbol(*op));
            write_expression(out, right, p, Side::Right);
            close(out, wrap);
        }
    }
}

fn open(out: &mut String, wrap: bool) {
    if wrap {
        out.push('(');
    }
}

fn close(out: &mut String, wrap: bool) {
    if wrap {
        out.push(')');
    }
}
