use super::ast::Expr;

// LITERALS

/// Number Expression
/// Represents a numeric literal like `1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: f64,
}

/// Variable Expression
/// A reference to a named value, like `a`.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    pub name: String,
}

// OPERATORS

/// Binary Expression
/// Represents a binary operation, e.g. `a + b`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: char,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// Call Expression
/// Represents a call of a named function, e.g. `foo(1, 2)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: String,
    pub arguments: Vec<Expr>,
}

// CONTROL FLOW

/// If Expression
/// `if cond then a else b`, both branches are required.
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpr {
    pub condition: Box<Expr>,
    pub then_branch: Box<Expr>,
    pub else_branch: Box<Expr>,
}

/// For Expression
/// `for i = start, end, step in body`
///
/// `step` is `None` when the source omits it. The default increment is left
/// to whoever evaluates the loop.
#[derive(Debug, Clone, PartialEq)]
pub struct ForExpr {
    pub var_name: String,
    pub start: Box<Expr>,
    pub end: Box<Expr>,
    pub step: Option<Box<Expr>>,
    pub body: Box<Expr>,
}
