use std::fmt::Display;

use super::ast::Expr;

/// Name given to the function wrapping a bare top-level expression.
///
/// Identifiers have to start with a letter, so no source text can declare
/// a function with this name.
pub const ANON_FN_NAME: &str = "__anon_expr";

/// Prototype
/// A function's name and its parameter names, with or without a body.
/// Parameter names are not required to be unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Prototype {
    pub name: String,
    pub params: Vec<String>,
}

impl Prototype {
    pub fn new(name: impl Into<String>, params: Vec<String>) -> Self {
        Prototype {
            name: name.into(),
            params,
        }
    }

    /// Zero parameter prototype used for top-level expressions.
    pub fn anonymous() -> Self {
        Prototype::new(ANON_FN_NAME, vec![])
    }

    pub fn is_anonymous(&self) -> bool {
        self.name == ANON_FN_NAME
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl Display for Prototype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name, self.params.join(" "))
    }
}

/// Function
/// A prototype together with the expression forming its body.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub prototype: Prototype,
    pub body: Expr,
}

impl Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(def {} {})", self.prototype, self.body)
    }
}
