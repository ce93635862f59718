use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    control::{parse_for_expr, parse_if_expr},
    lookups::get_token_precedence,
    parser::Parser,
};

/// expression ::= primary binoprhs
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_primary_expr(parser)?;
    parse_binary_expr(parser, 0, left)
}

/// primary
///   ::= identifierexpr
///   ::= numberexpr
///   ::= parenexpr
///   ::= ifexpr
///   ::= forexpr
pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Identifier(_) => parse_identifier_expr(parser),
        TokenKind::Number(value) => {
            let value = *value;
            parser.advance();
            Ok(Expr::number(value))
        }
        TokenKind::Char('(') => parse_grouping_expr(parser),
        TokenKind::If => parse_if_expr(parser),
        TokenKind::For => parse_for_expr(parser),
        kind => Err(Error::new(
            ErrorImpl::UnknownPrimary {
                token: kind.to_string(),
            },
            parser.get_position(),
        )),
    }
}

/// binoprhs ::= (binop primary)*
///
/// Folds operators binding at least as tightly as `min_precedence` into
/// `left`. Equal precedence groups to the left; a strictly tighter operator
/// after the right operand takes that operand first.
pub fn parse_binary_expr(
    parser: &mut Parser,
    min_precedence: i32,
    mut left: Expr,
) -> Result<Expr, Error> {
    loop {
        let precedence = get_token_precedence(parser.current_token_kind());
        if precedence < min_precedence {
            return Ok(left);
        }

        // Only table entries have a precedence of 0 or more
        let TokenKind::Char(operator) = *parser.current_token_kind() else {
            return Ok(left);
        };
        parser.advance();

        let mut right = parse_primary_expr(parser)?;

        let next_precedence = get_token_precedence(parser.current_token_kind());
        if precedence < next_precedence {
            right = parse_binary_expr(parser, precedence + 1, right)?;
        }

        left = Expr::binary(operator, left, right);
    }
}

/// parenexpr ::= '(' expression ')'
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser)?;
    parser.expect_char(')', "expected ')'")?;

    Ok(expr)
}

/// identifierexpr
///   ::= identifier
///   ::= identifier '(' (expression (',' expression)* ','?)? ')'
pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let name = parser.expect_identifier("expected identifier")?;

    if !parser.is_char('(') {
        return Ok(Expr::variable(name));
    }
    parser.advance();

    let mut args = vec![];

    // A `,` right before the closing `)` is allowed
    while !parser.is_char(')') {
        args.push(parse_expr(parser)?);

        if parser.is_char(',') {
            parser.advance();
        } else if !parser.is_char(')') {
            return Err(parser.error("Expected ')' or ',' in argument list"));
        }
    }

    parser.advance();

    Ok(Expr::call(name, args))
}
