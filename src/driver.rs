//! Top-level unit stream.
//!
//! The driver dispatches on the lookahead to parse one definition, extern or
//! bare expression at a time. When a unit fails, its error is yielded and
//! exactly one token is thrown away before the next attempt, so malformed
//! input always makes progress towards the end.

use crate::{
    ast::declarations::{Function, Prototype},
    errors::errors::Error,
    lexer::{lexer::Lexer, tokens::TokenKind},
    parser::{
        decl::{parse_definition, parse_extern, parse_top_level_expr},
        parser::Parser,
    },
    registry::PrototypeRegistry,
};

/// One independently parsed construct.
#[derive(Debug, Clone, PartialEq)]
pub enum TopLevel {
    Definition(Function),
    Extern(Prototype),
    /// A bare expression wrapped in an anonymous function
    Expression(Function),
}

pub struct Driver<'a> {
    parser: Parser<'a>,
    registry: PrototypeRegistry,
}

impl<'a> Driver<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        Driver {
            parser: Parser::new(lexer),
            registry: PrototypeRegistry::new(),
        }
    }

    pub fn from_source(source: &'a str, file: Option<String>) -> Self {
        Driver::new(Lexer::new(source.chars(), file))
    }

    /// Prototypes declared so far by externs and definitions.
    pub fn registry(&self) -> &PrototypeRegistry {
        &self.registry
    }

    /// Parses the next top-level unit, or returns `None` at the end of input.
    pub fn next_unit(&mut self) -> Option<Result<TopLevel, Error>> {
        loop {
            let result = match self.parser.current_token_kind() {
                TokenKind::EOF => return None,
                // Ignore top-level semicolons
                TokenKind::Char(';') => {
                    self.parser.advance();
                    continue;
                }
                TokenKind::Def => parse_definition(&mut self.parser).map(|function| {
                    self.registry.register(function.prototype.clone());
                    TopLevel::Definition(function)
                }),
                TokenKind::Extern => parse_extern(&mut self.parser).map(|proto| {
                    self.registry.register(proto.clone());
                    TopLevel::Extern(proto)
                }),
                _ => parse_top_level_expr(&mut self.parser).map(TopLevel::Expression),
            };

            if result.is_err() {
                // Skip token for error recovery
                self.parser.advance();
            }

            return Some(result);
        }
    }
}

impl Iterator for Driver<'_> {
    type Item = Result<TopLevel, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_unit()
    }
}

/// Parses every top-level unit of `source`, in order.
pub fn parse(source: &str, file: Option<String>) -> Vec<Result<TopLevel, Error>> {
    Driver::from_source(source, file).collect()
}

#[cfg(test)]
mod tests {
    use super::{parse, Driver, TopLevel};
    use crate::ast::{
        ast::Expr,
        declarations::{Function, Prototype},
    };

    #[test]
    fn test_units_in_source_order() {
        let units = parse("extern sin(x); def f(a) sin(a) 1+1", None);

        assert_eq!(units.len(), 3);
        assert!(matches!(&units[0], Ok(TopLevel::Extern(proto)) if proto.name == "sin"));
        assert!(matches!(&units[1], Ok(TopLevel::Definition(function)) if function.prototype.name == "f"));
        assert!(
            matches!(&units[2], Ok(TopLevel::Expression(function)) if function.prototype.is_anonymous())
        );
    }

    #[test]
    fn test_semicolons_are_skipped() {
        assert!(parse(";;;", None).is_empty());
        assert_eq!(parse("; 1 ; 2 ;", None).len(), 2);
    }

    #[test]
    fn test_registry_collects_declarations() {
        let mut driver = Driver::from_source("extern cos(x) def g(a b) a 4 def g(c) c", None);
        while driver.next().is_some() {}

        let registry = driver.registry();
        assert_eq!(registry.names(), vec!["cos", "g"]);
        assert_eq!(registry.get("g"), Some(&Prototype::new("g", vec!["c".to_string()])));
    }

    #[test]
    fn test_failed_definition_is_not_registered() {
        let mut driver = Driver::from_source("def h(a", None);

        assert!(matches!(driver.next(), Some(Err(_))));
        assert!(driver.next().is_none());
        assert!(driver.registry().is_empty());
    }

    #[test]
    fn test_recovery_discards_one_token() {
        // `)` fails as a primary and is skipped, then `2` parses on its own
        let units = parse(") 2", None);

        assert_eq!(units.len(), 2);
        assert!(units[0].is_err());
        assert_eq!(
            units[1],
            Ok(TopLevel::Expression(Function {
                prototype: Prototype::anonymous(),
                body: Expr::number(2.0),
            }))
        );
    }

    #[test]
    fn test_each_failure_advances() {
        let units = parse(") ) )", None);

        assert_eq!(units.len(), 3);
        assert!(units.iter().all(Result::is_err));
    }

    #[test]
    fn test_exhausted_driver_stays_exhausted() {
        let mut driver = Driver::from_source("1", None);

        assert!(driver.next().is_some());
        assert!(driver.next().is_none());
        assert!(driver.next().is_none());
    }
}
