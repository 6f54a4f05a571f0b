//! Lexer (tokenizer) for BASIC source text
//!
//! The [`Lexer`] is a cursor over a borrowed source buffer. Each call to
//! [`Lexer::next_lexeme`] scans exactly one [`Lexeme`] and advances the
//! cursor past it; the position never moves backward. Once the buffer is
//! exhausted every further call yields [`Lexeme::End`] without advancing.
//!
//! Scanning is greedy with at most one character of lookahead, used only to
//! tell `<` from `<=`/`<>` and `>` from `>=`.

use super::ast::{BinaryOp, Int, UnaryOp};
use std::fmt;
use thiserror::Error;
use tracing::{debug, trace};

/// Operator and punctuation spellings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Plus,    // +
    Minus,   // -
    Star,    // *
    Slash,   // /
    Percent, // %
    Amp,     // &
    Pipe,    // |
    Bang,    // !
    Eq,      // =
    LParen,  // (
    RParen,  // )
    Lt,      // <
    Le,      // <=
    Gt,      // >
    Ge,      // >=
    Ne,      // <>
}

impl Symbol {
    pub fn as_str(self) -> &'static str {
        match self {
            Symbol::Plus => "+",
            Symbol::Minus => "-",
            Symbol::Star => "*",
            Symbol::Slash => "/",
            Symbol::Percent => "%",
            Symbol::Amp => "&",
            Symbol::Pipe => "|",
            Symbol::Bang => "!",
            Symbol::Eq => "=",
            Symbol::LParen => "(",
            Symbol::RParen => ")",
            Symbol::Lt => "<",
            Symbol::Le => "<=",
            Symbol::Gt => ">",
            Symbol::Ge => ">=",
            Symbol::Ne => "<>",
        }
    }

    /// Binary operator spelled by this symbol, if any.
    pub fn binary_op(self) -> Option<BinaryOp> {
        let op = match self {
            Symbol::Plus => BinaryOp::Add,
            Symbol::Minus => BinaryOp::Sub,
            Symbol::Star => BinaryOp::Mul,
            Symbol::Slash => BinaryOp::Div,
            Symbol::Percent => BinaryOp::Mod,
            Symbol::Amp => BinaryOp::And,
            Symbol::Pipe => BinaryOp::Or,
            Symbol::Eq => BinaryOp::Eq,
            Symbol::Lt => BinaryOp::Lt,
            Symbol::Le => BinaryOp::Le,
            Symbol::Gt => BinaryOp::Gt,
            Symbol::Ge => BinaryOp::Ge,
            Symbol::Ne => BinaryOp::Ne,
            Symbol::Bang | Symbol::LParen | Symbol::RParen => return None,
        };
        Some(op)
    }

    /// Unary operator spelled by this symbol, if any.
    pub fn unary_op(self) -> Option<UnaryOp> {
        match self {
            Symbol::Minus => Some(UnaryOp::Neg),
            Symbol::Bang => Some(UnaryOp::Not),
            _ => None,
        }
    }

    fn single(ch: char) -> Option<Symbol> {
        let symbol = match ch {
            '+' => Symbol::Plus,
            '-' => Symbol::Minus,
            '*' => Symbol::Star,
            '/' => Symbol::Slash,
            '%' => Symbol::Percent,
            '&' => Symbol::Amp,
            '|' => Symbol::Pipe,
            '!' => Symbol::Bang,
            '=' => Symbol::Eq,
            '(' => Symbol::LParen,
            ')' => Symbol::RParen,
            _ => return None,
        };
        Some(symbol)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All lexeme variants produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lexeme {
    Int(Int),
    Ident(String),
    Symbol(Symbol),
    Str(String),
    End,
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lexeme::Int(n) => write!(f, "int literal {}", n),
            Lexeme::Ident(s) => write!(f, "identifier '{}'", s),
            Lexeme::Symbol(s) => write!(f, "'{}'", s),
            Lexeme::Str(s) => write!(f, "string literal \"{}\"", s),
            Lexeme::End => write!(f, "end of input"),
        }
    }
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("lexer error at offset {position}: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    /// Byte offset of the offending character or lexeme start.
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),

    #[error("integer literal out of range: {0}")]
    IntegerOverflow(String),

    #[error("unterminated string literal")]
    UnterminatedString,
}

/// Scan cursor over a borrowed source buffer
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    source: &'src str,
    position: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Current byte offset into the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Total length of the source in bytes.
    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Unscanned tail of the source.
    pub fn remaining(&self) -> &'src str {
        &self.source[self.position..]
    }

    /// Scan the next lexeme.
    ///
    /// On error the cursor is left where scanning stopped, so for an
    /// unexpected character it still points at that character.
    pub fn next_lexeme(&mut self) -> Result<Lexeme, LexError> {
        self.skip_whitespace();

        let start = self.position;
        let result = match self.peek() {
            None => Ok(Lexeme::End),
            Some('"') => self.string_literal(),
            Some(ch) if ch.is_ascii_digit() => self.number_literal(),
            Some(ch) if ch.is_ascii_alphabetic() => Ok(self.identifier()),
            Some(ch @ ('<' | '>')) => Ok(self.comparison(ch)),
            Some(ch) => match Symbol::single(ch) {
                Some(symbol) => {
                    self.advance();
                    Ok(Lexeme::Symbol(symbol))
                }
                None => Err(LexError {
                    kind: LexErrorKind::UnexpectedCharacter(ch),
                    position: start,
                }),
            },
        };

        match &result {
            Ok(lexeme) => trace!(offset = start, %lexeme, "lexeme"),
            Err(err) => debug!(offset = err.position, error = %err, "lex failure"),
        }
        result
    }

    /// Drain the cursor into a vector ending with a single [`Lexeme::End`].
    pub fn tokenize(&mut self) -> Result<Vec<Lexeme>, LexError> {
        let mut lexemes = Vec::new();

        loop {
            let lexeme = self.next_lexeme()?;
            let done = lexeme == Lexeme::End;
            lexemes.push(lexeme);
            if done {
                break;
            }
        }

        Ok(lexemes)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(' ') | Some('\t')) {
            self.advance();
        }
    }

    /// Parse string literal. The content is taken raw, without escapes.
    fn string_literal(&mut self) -> Result<Lexeme, LexError> {
        let open = self.position;
        self.advance(); // opening quote

        let content = self.take_while(|ch| ch != '"');
        if self.advance().is_none() {
            return Err(LexError {
                kind: LexErrorKind::UnterminatedString,
                position: open,
            });
        }

        Ok(Lexeme::Str(content.to_string()))
    }

    /// Parse numeric literal (non-negative integers only)
    fn number_literal(&mut self) -> Result<Lexeme, LexError> {
        let start = self.position;
        let digits = self.take_while(|ch| ch.is_ascii_digit());

        digits.parse::<Int>().map(Lexeme::Int).map_err(|_| LexError {
            kind: LexErrorKind::IntegerOverflow(digits.to_string()),
            position: start,
        })
    }

    fn identifier(&mut self) -> Lexeme {
        let name = self.take_while(|ch| ch.is_ascii_alphanumeric() || ch == '_');
        Lexeme::Ident(name.to_string())
    }

    fn comparison(&mut self, first: char) -> Lexeme {
        self.advance();

        let symbol = match (first, self.peek()) {
            ('<', Some('=')) => Some(Symbol::Le),
            ('<', Some('>')) => Some(Symbol::Ne),
            ('>', Some('=')) => Some(Symbol::Ge),
            _ => None,
        };

        match symbol {
            Some(symbol) => {
                self.advance();
                Lexeme::Symbol(symbol)
            }
            None if first == '<' => Lexeme::Symbol(Symbol::Lt),
            None => Lexeme::Symbol(Symbol::Gt),
        }
    }

    /// Consume the longest run of characters matching `pred`.
    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'src str {
        let start = self.position;
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.advance();
        }
        &self.source[start..self.position]
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += ch.len_utf8();
        Some(ch)
    }
}

/// Tokenize a whole buffer from a fresh cursor.
pub fn lex(source: &str) -> Result<Vec<Lexeme>, LexError> {
    Lexer::new(source).tokenize()
}
