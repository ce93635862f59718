//! Parser state and token handling.
//!
//! The parser pulls tokens from its lexer one at a time and always holds
//! exactly one of them as the current lookahead. The grammar itself lives in
//! `expr`, `control` and `decl` as free functions over `&mut Parser`.

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

/// The main parser structure that maintains parsing state.
///
/// A parser is bound to a single pass over a single input and every
/// operation mutates the lookahead in place.
pub struct Parser<'a> {
    /// Source of tokens
    lexer: Lexer<'a>,
    /// The current lookahead token
    current: Token,
}

impl<'a> Parser<'a> {
    /// Creates a new Parser and reads the first lookahead token.
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let current = lexer.next_token();
        Parser { lexer, current }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> &TokenKind {
        &self.current.kind
    }

    /// Replaces the lookahead with the next token from the lexer and returns it.
    ///
    /// At the end of input this keeps yielding the EOF token.
    pub fn advance(&mut self) -> &Token {
        self.current = self.lexer.next_token();
        &self.current
    }

    pub fn is_char(&self, expected: char) -> bool {
        self.current.kind.is_char(expected)
    }

    /// Consumes the current token if it is the character `expected`.
    pub fn expect_char(&mut self, expected: char, message: &str) -> Result<(), Error> {
        if !self.is_char(expected) {
            return Err(self.error(message));
        }

        self.advance();
        Ok(())
    }

    /// Consumes the current token if it is the keyword `expected`.
    pub fn expect_keyword(&mut self, expected: TokenKind, message: &str) -> Result<(), Error> {
        if self.current.kind != expected {
            return Err(self.error(message));
        }

        self.advance();
        Ok(())
    }

    /// Consumes an identifier and returns its name.
    pub fn expect_identifier(&mut self, message: &str) -> Result<String, Error> {
        let TokenKind::Identifier(name) = &self.current.kind else {
            return Err(self.error(message));
        };

        let name = name.clone();
        self.advance();
        Ok(name)
    }

    /// Builds a syntax error about the current token.
    pub fn error(&self, message: &str) -> Error {
        let error = match &self.current_token().kind {
            TokenKind::EOF => ErrorImpl::UnexpectedEOF {
                message: message.to_string(),
            },
            kind => ErrorImpl::UnexpectedToken {
                token: kind.to_string(),
                message: message.to_string(),
            },
        };

        Error::new(error, self.get_position())
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        !self.current.is_eof()
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }
}
