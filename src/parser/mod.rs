//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive descent parser that pulls tokens from
//! the lexer and builds AST nodes. Binary expressions use operator precedence
//! climbing driven by a static precedence table. It handles:
//!
//! - Function definitions, extern declarations and bare top-level expressions
//! - Expressions (binary ops, calls, variables, literals, grouping)
//! - `if`/`then`/`else` and `for`/`in` expressions
//!
//! Every parse function returns a `Result` and never hands out a partially
//! built node.

pub mod control;
pub mod decl;
pub mod expr;
pub mod lookups;
pub mod parser;
