//! BASIC front end
//!
//! This module holds the representation layer shared by every later stage:
//! - [`lexer`]: Tokenization (source text → lexemes)
//! - [`ast`]: Expression, command and line definitions
//! - [`precedence`]: Operator priorities and spellings
//! - [`printer`]: Rendering (AST → source text)
//! - [`program`]: Ordered collection of numbered lines
//!
//! The lexer and the printer are independent of each other. Building an AST
//! from lexemes is left to the statement parser of the consuming driver.

pub mod ast;
pub mod lexer;
pub mod precedence;
pub mod printer;
pub mod program;
