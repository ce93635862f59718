//! Lexical analysis module.
//!
//! This module contains the tokenizer that turns a character stream into
//! tokens for the parser. It handles:
//!
//! - Keywords and identifiers
//! - Permissive numeric literals
//! - `#` line comments and whitespace
//! - Single character punctuation and operators
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;
