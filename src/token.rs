//! Splits a format pattern into flag and literal tokens.

use std::borrow::Cow;

/// Letters that may repeat 4 times for the longest spellings (`dddd`, ...).
pub(crate) const RUN_OF_FOUR: &str = "dYMaA";

/// Letters that may repeat 3 times (`ddd`, `MMM`, `DDD`, ...).
pub(crate) const RUN_OF_THREE: &str = "dMaAD";

/// Letters recognized alone or doubled (`H` and `HH`, ...).
pub(crate) const PAIRED: &str = "DMYHhmsaAZwyd";

/// Letters recognized only alone (`j`, `L`, `z`, `o`, ...).
pub(crate) const SINGLES: &str = "DwMjJYHhmslaAzZoyLd";

/// One atom of a pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'a> {
    /// A flag spelling, a key of the flag table.
    Flag(&'a str),
    /// Verbatim text, with quote delimiters already stripped.
    Literal(Cow<'a, str>),
}

/// Split a pattern into tokens covering the whole input in order.
///
/// At every position the first matching rule wins: a quoted run (`"..."` or
/// `'...'`, delimiters stripped), then a run of 4 then 3 identical letters
/// from the extendable sets, then a doubled or single letter from the paired
/// set, then a lone letter from the singles set. Anything else becomes a one
/// character literal, so every input is tokenizable.
///
/// A quote with no closing delimiter turns the rest of the pattern into one
/// literal (the opening delimiter is stripped). Inside a quoted run a
/// backslash followed by the delimiting quote emits that quote instead of
/// ending the run; the other quote kind needs no escape.
pub fn tokenize(pattern: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut i = 0;

    while let Some(c) = pattern[i..].chars().next() {
        if c == '"' || c == '\'' {
            let (token, next) = quoted_run(pattern, i, c);
            tokens.push(token);
            i = next;
            continue;
        }

        let run = pattern[i..].chars().take_while(|&x| x == c).count();
        let take = if run >= 4 && RUN_OF_FOUR.contains(c) {
            4
        } else if run >= 3 && RUN_OF_THREE.contains(c) {
            3
        } else if PAIRED.contains(c) {
            if run >= 2 { 2 } else { 1 }
        } else if SINGLES.contains(c) {
            1
        } else {
            0
        };

        if take > 0 {
            // all flag letters are ASCII so bytes and chars coincide
            tokens.push(Token::Flag(&pattern[i..i + take]));
            i += take;
        } else {
            let end = i + c.len_utf8();
            tokens.push(Token::Literal(Cow::Borrowed(&pattern[i..end])));
            i = end;
        }
    }

    tokens
}

/// Consume a quoted run starting at `start`; returns the token and the byte
/// index right after the closing delimiter (or the end of the pattern).
fn quoted_run(pattern: &str, start: usize, delim: char) -> (Token<'_>, usize) {
    let body_start = start + 1; // both delimiters are 1 byte
    let mut text = String::new();
    let mut escaped = false;
    let mut chars = pattern[body_start..].char_indices().peekable();

    while let Some((j, c)) = chars.next() {
        if c == '\\' && chars.peek().is_some_and(|&(_, n)| n == delim) {
            chars.next();
            text.push(delim);
            escaped = true;
            continue;
        }
        if c == delim {
            let token = if escaped {
                Token::Literal(Cow::Owned(text))
            } else {
                Token::Literal(Cow::Borrowed(&pattern[body_start..body_start + j]))
            };
            return (token, body_start + j + 1);
        }
        text.push(c);
    }

    // unterminated: the rest of the pattern is literal
    let token = if escaped {
        Token::Literal(Cow::Owned(text))
    } else {
        Token::Literal(Cow::Borrowed(&pattern[body_start..]))
    };
    (token, pattern.len())
}
