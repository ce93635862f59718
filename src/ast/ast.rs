use std::fmt::Display;

use super::expressions::{BinaryExpr, CallExpr, ForExpr, IfExpr, NumberExpr, VariableExpr};

/// Expression
///
/// Every expression node the parser can produce. Each composite node owns
/// its children, so a parsed expression is always a tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(NumberExpr),
    Variable(VariableExpr),
    Binary(BinaryExpr),
    Call(CallExpr),
    If(IfExpr),
    For(ForExpr),
}

impl Expr {
    pub fn number(value: f64) -> Self {
        Expr::Number(NumberExpr { value })
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Variable(VariableExpr { name: name.into() })
    }

    pub fn binary(operator: char, left: Expr, right: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn call(callee: impl Into<String>, arguments: Vec<Expr>) -> Self {
        Expr::Call(CallExpr {
            callee: callee.into(),
            arguments,
        })
    }

    pub fn if_else(condition: Expr, then_branch: Expr, else_branch: Expr) -> Self {
        Expr::If(IfExpr {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        })
    }
}

/// Prints the expression as an S-expression, e.g. `(+ 1 (* 2 3))`.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Number(number) => write!(f, "{}", number.value),
            Expr::Variable(variable) => write!(f, "{}", variable.name),
            Expr::Binary(binary) => {
                write!(f, "({} {} {})", binary.operator, binary.left, binary.right)
            }
            Expr::Call(call) => {
                write!(f, "(call {}", call.callee)?;
                for argument in &call.arguments {
                    write!(f, " {}", argument)?;
                }
                write!(f, ")")
            }
            Expr::If(if_expr) => write!(
                f,
                "(if {} {} {})",
                if_expr.condition, if_expr.then_branch, if_expr.else_branch
            ),
            Expr::For(for_expr) => {
                write!(f, "(for {} {} {} ", for_expr.var_name, for_expr.start, for_expr.end)?;
                match &for_expr.step {
                    Some(step) => write!(f, "{}", step)?,
                    None => write!(f, "_")?,
                }
                write!(f, " {})", for_expr.body)
            }
        }
    }
}
