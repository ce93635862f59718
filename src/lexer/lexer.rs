use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, Span, MK_SPAN, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

lazy_static! {
    /// Longest prefix of a digit/dot run that still reads as a float.
    static ref NUMBER_PREFIX: Regex = Regex::new("^[0-9]*(\\.[0-9]*)?").unwrap();
}

/// Pull based tokenizer over a character stream.
///
/// Holds exactly one pending character between calls to [`Lexer::next_token`].
/// Once the stream is exhausted every further call yields an EOF token.
pub struct Lexer<'a> {
    source: Box<dyn Iterator<Item = char> + 'a>,
    /// Pending character, `None` once the input is exhausted
    last_char: Option<char>,
    /// Byte offset of `last_char`
    pos: u32,
    file: Rc<String>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: impl Iterator<Item = char> + 'a, file: Option<String>) -> Lexer<'a> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let mut source: Box<dyn Iterator<Item = char> + 'a> = Box::new(source);
        let last_char = source.next();

        Lexer {
            source,
            last_char,
            pos: 0,
            file: file_name,
        }
    }

    /// Moves past the pending character and returns the new one.
    fn bump(&mut self) -> Option<char> {
        if let Some(c) = self.last_char {
            self.pos += c.len_utf8() as u32;
            self.last_char = self.source.next();
        }

        self.last_char
    }

    fn token(&self, kind: TokenKind, start: u32) -> Token {
        MK_TOKEN!(kind, MK_SPAN!(start, self.pos, self.file))
    }

    pub fn next_token(&mut self) -> Token {
        loop {
            while self.last_char.is_some_and(is_space) {
                self.bump();
            }

            let start = self.pos;
            let Some(c) = self.last_char else {
                return self.token(TokenKind::EOF, start);
            };

            // Identifier: [a-zA-Z][a-zA-Z0-9]*
            if c.is_ascii_alphabetic() {
                let mut name = String::from(c);
                while let Some(c) = self.bump().filter(char::is_ascii_alphanumeric) {
                    name.push(c);
                }

                let kind = match RESERVED_LOOKUP.get(name.as_str()) {
                    Some(keyword) => keyword.clone(),
                    None => TokenKind::Identifier(name),
                };
                return self.token(kind, start);
            }

            // Number: [0-9.]+
            if c.is_ascii_digit() || c == '.' {
                let mut run = String::from(c);
                while let Some(c) = self.bump().filter(|c| c.is_ascii_digit() || *c == '.') {
                    run.push(c);
                }

                return self.token(TokenKind::Number(number_value(&run)), start);
            }

            // Comment until end of line, then look for a real token
            if c == '#' {
                loop {
                    match self.bump() {
                        None => return self.token(TokenKind::EOF, self.pos),
                        Some('\n') | Some('\r') => break,
                        Some(_) => {}
                    }
                }
                continue;
            }

            self.bump();
            return self.token(TokenKind::Char(c), start);
        }
    }
}

/// Whitespace as C's `isspace` sees it, vertical tab included.
fn is_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

/// Reads a digit/dot run the way `strtod` would: the longest valid prefix
/// counts and anything after it is ignored. No valid prefix reads as zero.
pub fn number_value(run: &str) -> f64 {
    NUMBER_PREFIX
        .find(run)
        .and_then(|prefix| prefix.as_str().parse().ok())
        .unwrap_or(0.0)
}

/// Drains a source into tokens, ending with a single EOF token.
pub fn tokenize(source: &str, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source.chars(), file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.is_eof();
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
