use crate::{
    ast::declarations::{Function, Prototype},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

/// definition ::= 'def' prototype expression
pub fn parse_definition(parser: &mut Parser) -> Result<Function, Error> {
    parser.expect_keyword(TokenKind::Def, "expected 'def'")?;

    let prototype = parse_prototype(parser)?;
    let body = parse_expr(parser)?;

    Ok(Function { prototype, body })
}

/// external ::= 'extern' prototype
pub fn parse_extern(parser: &mut Parser) -> Result<Prototype, Error> {
    parser.expect_keyword(TokenKind::Extern, "expected 'extern'")?;

    parse_prototype(parser)
}

/// toplevelexpr ::= expression
///
/// Wraps the expression in an anonymous zero parameter function.
pub fn parse_top_level_expr(parser: &mut Parser) -> Result<Function, Error> {
    let body = parse_expr(parser)?;

    Ok(Function {
        prototype: Prototype::anonymous(),
        body,
    })
}

/// prototype ::= identifier '(' identifier* ')'
pub fn parse_prototype(parser: &mut Parser) -> Result<Prototype, Error> {
    let name = parser.expect_identifier("Expected function name in prototype")?;

    if !parser.is_char('(') {
        return Err(parser.error("Expected '(' in prototype"));
    }

    let mut params = vec![];
    while let TokenKind::Identifier(param) = &parser.advance().kind {
        params.push(param.clone());
    }

    parser.expect_char(')', "Expected ')' in prototype")?;

    Ok(Prototype::new(name, params))
}
