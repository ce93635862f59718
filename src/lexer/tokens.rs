use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("def", TokenKind::Def);
        map.insert("extern", TokenKind::Extern);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("for", TokenKind::For);
        map.insert("in", TokenKind::In);
        map
    };
}

#[derive(Debug, PartialEq, Clone)]
pub enum TokenKind {
    EOF,

    // Commands
    Def,
    Extern,

    // Primary
    Identifier(String),
    Number(f64),

    // Control flow
    If,
    Then,
    Else,
    For,
    In,

    /// Any other single character, returned verbatim.
    Char(char),
}

impl TokenKind {
    pub fn is_char(&self, expected: char) -> bool {
        matches!(self, TokenKind::Char(c) if *c == expected)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::EOF => write!(f, "EOF"),
            TokenKind::Def => write!(f, "def"),
            TokenKind::Extern => write!(f, "extern"),
            TokenKind::Identifier(name) => write!(f, "{}", name),
            TokenKind::Number(value) => write!(f, "{}", value),
            TokenKind::If => write!(f, "if"),
            TokenKind::Then => write!(f, "then"),
            TokenKind::Else => write!(f, "else"),
            TokenKind::For => write!(f, "for"),
            TokenKind::In => write!(f, "in"),
            TokenKind::Char(c) => write!(f, "'{}'", c),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }
}
