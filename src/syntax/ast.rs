// AST (Abstract Syntax Tree) definitions for the BASIC front end

use std::fmt;

/// Integer literal type
pub type Int = i64;

/// Line number attached to every program line
pub type LineNumber = u32;

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Neg, // -x
    Not, // !x
}

impl UnaryOp {
    pub const ALL: [UnaryOp; 2] = [UnaryOp::Neg, UnaryOp::Not];
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    // Comparison
    Eq,
    Lt,
    Le,
    Gt,
    Ge,
    Ne,
    // Logical
    And,
    Or,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 13] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Mod,
        BinaryOp::Eq,
        BinaryOp::Lt,
        BinaryOp::Le,
        BinaryOp::Gt,
        BinaryOp::Ge,
        BinaryOp::Ne,
        BinaryOp::And,
        BinaryOp::Or,
    ];

    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            BinaryOp::Eq
                | BinaryOp::Lt
                | BinaryOp::Le
                | BinaryOp::Gt
                | BinaryOp::Ge
                | BinaryOp::Ne
        )
    }

    pub fn is_logical(self) -> bool {
        matches!(self, BinaryOp::And | BinaryOp::Or)
    }
}

/// Expression tree. Every sub-expression is owned by its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Int(Int),
    Var(String),
    Str(String),
    Unary {
        op: UnaryOp,
        operand: Box<Expression>,
    },
    Binary {
        left: Box<Expression>,
        op: BinaryOp,
        right: Box<Expression>,
    },
}

impl Expression {
    pub fn int(value: Int) -> Self {
        Expression::Int(value)
    }

    pub fn var(name: impl Into<String>) -> Self {
        Expression::Var(name.into())
    }

    pub fn string(text: impl Into<String>) -> Self {
        Expression::Str(text.into())
    }

    pub fn unary(op: UnaryOp, operand: Expression) -> Self {
        Expression::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(left: Expression, op: BinaryOp, right: Expression) -> Self {
        Expression::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// True for literals and variable references.
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            Expression::Int(_) | Expression::Var(_) | Expression::Str(_)
        )
    }
}

/// A single BASIC statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Rem(String),
    Goto(LineNumber),
    Print(Expression),
    Input(String),
    If {
        condition: Expression,
        target: LineNumber,
    },
    Let {
        name: String,
        value: Expression,
    },
}

impl Command {
    /// Keyword the command is written with.
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Rem(_) => "REM",
            Command::Goto(_) => "GOTO",
            Command::Print(_) => "PRINT",
            Command::Input(_) => "INPUT",
            Command::If { .. } => "IF",
            Command::Let { .. } => "LET",
        }
    }

    /// Line number control may transfer to, for `GOTO` and `IF`.
    pub fn jump_target(&self) -> Option<LineNumber> {
        match self {
            Command::Goto(target) | Command::If { target, .. } => Some(*target),
            _ => None,
        }
    }
}

/// A numbered program line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub number: LineNumber,
    pub command: Command,
}

impl Line {
    pub fn new(number: LineNumber, command: Command) -> Self {
        Self { number, command }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(super::precedence::unary_symbol(*self))
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(super::precedence::binary_symbol(*self).trim())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::printer::print_expression(self))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::printer::print_command(self))
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::printer::print_line(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_groups() {
        let comparisons: Vec<_> =
            BinaryOp::ALL.iter().filter(|op| op.is_comparison()).collect();
        assert_eq!(comparisons.len(), 6);
        assert!(BinaryOp::And.is_logical());
        assert!(BinaryOp::Or.is_logical());
        assert!(!BinaryOp::Mod.is_logical());
        assert!(!BinaryOp::Mod.is_comparison());
    }

    #[test]
    fn test_jump_target() {
        let cond = Expression::var("X");
        assert_eq!(Command::Goto(40).jump_target(), Some(40));
        assert_eq!(
            Command::If {
                condition: cond.clone(),
                target: 70
            }
            .jump_target(),
            Some(70)
        );
        assert_eq!(Command::Print(cond).jump_target(), None);
        assert_eq!(Command::Rem("hi".into()).keyword(), "REM");
    }

    #[test]
    fn test_is_leaf() {
        assert!(Expression::int(3).is_leaf());
        assert!(Expression::string("").is_leaf());
        assert!(!Expression::unary(UnaryOp::Neg, Expression::var("A")).is_leaf());
    }

    #[test]
    fn test_operator_display() {
        assert_eq!(BinaryOp::Ne.to_string(), "<>");
        assert_eq!(BinaryOp::Mul.to_string(), "*");
        assert_eq!(UnaryOp::Not.to_string(), "!");
    }
}
