//! Lexer for command lines
//!
//! Two passes over a single input line:
//! - `$NAME` variable expansion (uppercase names only)
//! - tokenization with quoting and backslash escapes

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex_lite::{Captures, Regex};

lazy_static! {
    static ref VARIABLE_RE: Regex = Regex::new(r"\$([A-Z_][A-Z0-9_]*)").unwrap();
}

/// Replace every `$NAME` with its value, or with nothing when unset.
pub fn expand_variables(input: &str, variables: &IndexMap<String, String>) -> String {
    VARIABLE_RE
        .replace_all(input, |caps: &Captures| {
            variables.get(&caps[1]).cloned().unwrap_or_default()
        })
        .into_owned()
}

/// Split a line into tokens.
///
/// - `'` or `"` opens a quoted span that only the same character closes;
///   the other quote character is literal inside it.
/// - `\` inserts the next character verbatim, inside or outside quotes.
/// - Unquoted whitespace separates tokens. Empty tokens are dropped.
/// - An unterminated quote runs to the end of the line.
pub fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' | '\'' => match quote {
                None => quote = Some(c),
                Some(open) if open == c => quote = None,
                Some(_) => current.push(c),
            },
            '\\' => match chars.next() {
                Some(escaped) => current.push(escaped),
                None => current.push('\\'),
            },
            _ if c.is_whitespace() && quote.is_none() => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}
