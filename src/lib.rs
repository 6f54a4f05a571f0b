//! # Introduction
//!
//! `minibasic` is the front-end representation layer of a small,
//! line-numbered BASIC: a lexer for raw source text, the AST for expressions
//! and statements, and a printer that turns the AST back into source with the
//! fewest parentheses that preserve its structure.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Lexemes → (statement parser) → AST → Printer → Source
//! ```
//!
//! 1. [`syntax::lexer`] — scans one [`Lexeme`] at a time from a borrowed
//!    buffer.
//! 2. [`syntax::ast`] — [`Expression`], [`Command`] and [`Line`].
//! 3. [`syntax::printer`] — total, side-effect-free rendering driven by
//!    [`syntax::precedence`].
//! 4. [`syntax::program`] — ordered lines with a `LIST`-style listing.
//!
//! ## Example
//!
//! ```
//! use minibasic::{lex, BinaryOp, Command, Expression, Lexeme, Line};
//!
//! let lexemes = lex("IF X < 5 THEN 20").unwrap();
//! assert_eq!(lexemes.last(), Some(&Lexeme::End));
//!
//! let line = Line::new(
//!     10,
//!     Command::If {
//!         condition: Expression::binary(
//!             Expression::var("X"),
//!             BinaryOp::Lt,
//!             Expression::int(5),
//!         ),
//!         target: 20,
//!     },
//! );
//! assert_eq!(line.to_string(), "10 IF X < 5 THEN 20");
//! ```

pub mod syntax;

pub use syntax::ast::{
    BinaryOp, Command, Expression, Int, Line, LineNumber, UnaryOp,
};
pub use syntax::lexer::{lex, LexError, LexErrorKind, Lexeme, Lexer, Symbol};
pub use syntax::printer::{print_command, print_expression, print_line};
pub use syntax::program::Program;
