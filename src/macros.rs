//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SPAN!` - Creates a Span between two offsets of the same file

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number(42.0), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $span:expr) => {
        Token {
            kind: $kind,
            span: $span,
        }
    };
}

/// Creates a Span from a start and end offset sharing one file name.
///
/// # Example
///
/// ```ignore
/// let span = MK_SPAN!(start, lexer.pos, lexer.file);
/// ```
#[macro_export]
macro_rules! MK_SPAN {
    ($start:expr, $end:expr, $file:expr) => {
        Span {
            start: Position($start, Rc::clone(&$file)),
            end: Position($end, Rc::clone(&$file)),
        }
    };
}
