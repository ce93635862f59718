#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod driver;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod registry;

extern crate regex;

/// Byte offset into a source plus the name of the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line holding the byte at `position`.
///
/// Returns the 1-based line number, the line text and the byte offset of
/// `position` inside that line. A position equal to the source length (the
/// end token) resolves to the end of the last line.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) || (pos == end && !line.ends_with('\n')) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    Some((line_number, String::new(), 0))
}

/// Single line header: `Error: Name (tip)`.
pub fn error_header(error: &Error) -> String {
    if let ErrorTip::None = error.get_tip() {
        format!("Error: {}", error.get_error_name())
    } else {
        format!("Error: {} ({})", error.get_error_name(), error.get_tip())
    }
}

pub fn format_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: message
        -> final.ks
           |
        20 | def foo(a b a+b
           | ------------^
    */

    let mut out = error_header(error);
    out.push('\n');
    out.push_str(&format!("-> {}\n", file));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position().0)
    else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let column = line_text[..line_pos].chars().count();
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

/// Writes a diagnostic to stderr. Without source text only the header is shown.
pub fn display_error(error: &Error, source: Option<&str>, file: &str) {
    match source {
        Some(source) => eprint!("{}", format_error(error, source, file)),
        None => eprintln!("{}", error_header(error)),
    }
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
