//! Escaping of the token delimiter.
//!
//! A compressed line is a `;`-joined sequence of tokens. Inside a token, `\`
//! and `;` are written as `\\` and `\;`. Splitting a line removes exactly one
//! level of escaping, so the tokens it yields are the raw encoder output.

/// Token delimiter
pub const DELIMITER: char = ';';

/// Escape prefix
pub const ESCAPE: char = '\\';

/// Escape `\` and `;` in a token
pub fn escape(token: &str) -> String {
    let mut escaped = String::with_capacity(token.len());
    push_escaped(&mut escaped, token);
    escaped
}

fn push_escaped(out: &mut String, token: &str) {
    for ch in token.chars() {
        if ch == ESCAPE || ch == DELIMITER {
            out.push(ESCAPE);
        }
        out.push(ch);
    }
}

/// Remove one level of escaping.
///
/// A dangling `\` at the end of the input is dropped.
pub fn unescape(escaped: &str) -> String {
    let mut result = String::with_capacity(escaped.len());
    let mut escaping = false;

    for ch in escaped.chars() {
        if escaping {
            result.push(ch);
            escaping = false;
        } else if ch == ESCAPE {
            escaping = true;
        } else {
            result.push(ch);
        }
    }

    result
}

/// Escape each token and join them with the delimiter
pub fn join_escaped<I, S>(tokens: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = String::new();
    for (i, token) in tokens.into_iter().enumerate() {
        if i > 0 {
            line.push(DELIMITER);
        }
        push_escaped(&mut line, token.as_ref());
    }
    line
}

/// Split a line on unescaped delimiters, unescaping each part.
///
/// A trailing empty part (from a trailing delimiter or an empty line) is not
/// returned. Empty parts between two delimiters are.
pub fn split_escaped(line: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut escaping = false;

    for ch in line.chars() {
        if escaping {
            current.push(ch);
            escaping = false;
        } else if ch == ESCAPE {
            escaping = true;
        } else if ch == DELIMITER {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }

    if !current.is_empty() {
        parts.push(current);
    }

    parts
}
