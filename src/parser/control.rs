use crate::{
    ast::{ast::Expr, expressions::ForExpr},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

/// ifexpr ::= 'if' expression 'then' expression 'else' expression
pub fn parse_if_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();

    let condition = parse_expr(parser)?;
    parser.expect_keyword(TokenKind::Then, "expected then")?;

    let then_branch = parse_expr(parser)?;
    parser.expect_keyword(TokenKind::Else, "expected else")?;

    let else_branch = parse_expr(parser)?;

    Ok(Expr::if_else(condition, then_branch, else_branch))
}

/// forexpr ::= 'for' identifier '=' expression ',' expression (',' expression)? 'in' expression
pub fn parse_for_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();

    let var_name = parser.expect_identifier("expected identifier after for")?;
    parser.expect_char('=', "expected '=' after for")?;

    let start = parse_expr(parser)?;
    parser.expect_char(',', "expected ',' after for start value")?;

    let end = parse_expr(parser)?;

    // The step is optional and gets no default here
    let step = if parser.is_char(',') {
        parser.advance();
        Some(Box::new(parse_expr(parser)?))
    } else {
        None
    };

    parser.expect_keyword(TokenKind::In, "expected 'in' after for")?;

    let body = parse_expr(parser)?;

    Ok(Expr::For(ForExpr {
        var_name,
        start: Box::new(start),
        end: Box::new(end),
        step,
        body: Box::new(body),
    }))
}
