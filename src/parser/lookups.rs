use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::lexer::tokens::TokenKind;

/// Precedence of anything that cannot start or continue a binary chain.
pub const NO_PRECEDENCE: i32 = -1;

lazy_static! {
    /// Binding strength of each binary operator, larger binds tighter.
    pub static ref BINOP_PRECEDENCE: HashMap<char, i32> = {
        let mut map = HashMap::new();
        // Relational
        map.insert('<', 10);
        // Additive and multiplicative
        map.insert('+', 20);
        map.insert('-', 20);
        map.insert('*', 30);
        map
    };
}

/// Precedence of `kind` as a binary operator, or [`NO_PRECEDENCE`].
pub fn get_token_precedence(kind: &TokenKind) -> i32 {
    match kind {
        TokenKind::Char(c) if c.is_ascii() => {
            *BINOP_PRECEDENCE.get(c).unwrap_or(&NO_PRECEDENCE)
        }
        _ => NO_PRECEDENCE,
    }
}
