//! Operator precedence and spelling tables
//!
//! Higher priority binds tighter. The ranking drives the printer's
//! parenthesization decisions, so any change here changes printed output:
//!
//! | priority | operators                         |
//! |----------|-----------------------------------|
//! | 7        | unary `-`                         |
//! | 6        | `*` `/`                           |
//! | 5        | `+` `-`                           |
//! | 4        | `%`                               |
//! | 3        | `=` `<` `<=` `>` `>=` `<>`        |
//! | 2        | `&` `\|`                          |
//! | 1        | unary `!`                         |

use super::ast::{BinaryOp, UnaryOp};

pub const fn unary_priority(op: UnaryOp) -> u8 {
    match op {
        UnaryOp::Neg => 7,
        UnaryOp::Not => 1,
    }
}

pub const fn binary_priority(op: BinaryOp) -> u8 {
    match op {
        BinaryOp::Mul | BinaryOp::Div => 6,
        BinaryOp::Add | BinaryOp::Sub => 5,
        BinaryOp::Mod => 4,
        BinaryOp::Eq
        | BinaryOp::Lt
        | BinaryOp::Le
        | BinaryOp::Gt
        | BinaryOp::Ge
        | BinaryOp::Ne => 3,
        BinaryOp::And | BinaryOp::Or => 2,
    }
}

pub const fn unary_symbol(op: UnaryOp) -> &'static str {
    match op {
        UnaryOp::Neg => "-",
        UnaryOp::Not => "!",
    }
}

/// Printed spelling of a binary operator.
///
/// Comparison and logical operators carry one space on each side,
/// arithmetic ones are written tight.
pub const fn binary_symbol(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Add => "+",
        BinaryOp::Sub => "-",
        BinaryOp::Mul => "*",
        BinaryOp::Div => "/",
        BinaryOp::Mod => "%",
        BinaryOp::Eq => " = ",
        BinaryOp::Lt => " < ",
        BinaryOp::Le => " <= ",
        BinaryOp::Gt => " > ",
        BinaryOp::Ge => " >= ",
        BinaryOp::Ne => " <> ",
        BinaryOp::And => " & ",
        BinaryOp::Or => " | ",
    }
}
