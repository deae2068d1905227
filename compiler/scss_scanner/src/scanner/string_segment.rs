//! Literal runs inside quoted strings.
//!
//! A string is a sequence of literal segments and `#{...}` interpolations.
//! This routine produces one segment, stopping before the closing quote or
//! before an interpolation so the grammar can parse the embedded expression.

use tracing::trace;

use crate::lexer::Lexer;
use crate::tag::TokenKind;

/// Tracks whether the current character is escaped by a backslash.
///
/// A character is escaped when a backslash sits in the column immediately
/// before it. The tracker records every backslash, escaped or not, so in
/// `\\'` the quote still counts as escaped.
#[derive(Clone, Copy, Debug, Default)]
struct EscapeTracker {
    /// Column of the most recent backslash.
    last_backslash: Option<u32>,
}

impl EscapeTracker {
    /// Classify `c` at `column` and record it if it is a backslash.
    ///
    /// Returns `true` if `c` is escaped.
    fn observe(&mut self, c: char, column: u32) -> bool {
        let escaped = self
            .last_backslash
            .is_some_and(|last| last.checked_add(1) == Some(column));
        if c == '\\' {
            self.last_backslash = Some(column);
        }
        escaped
    }
}

/// Scan one literal segment of a string delimited by `delimiter`.
///
/// Declines on an empty segment, on an interpolation at the very start,
/// on an unescaped newline, and at end of input.
pub(super) fn scan<L: Lexer + ?Sized>(
    lexer: &mut L,
    delimiter: char,
    kind: TokenKind,
) -> Option<TokenKind> {
    if lexer.at(delimiter) {
        return None;
    }

    let mut escapes = EscapeTracker::default();
    let mut consumed = 0usize;

    while let Some(c) = lexer.lookahead() {
        let escaped = escapes.observe(c, lexer.column());

        if !escaped {
            if c == delimiter {
                lexer.mark_end();
                return Some(kind);
            }
            if c == '#' {
                lexer.mark_end();
                lexer.advance();
                if lexer.at('{') {
                    // A segment that starts with `#{` is an interpolation.
                    return (consumed > 0).then_some(kind);
                }
                consumed += 1;
                continue;
            }
            if c == '\n' {
                trace!("string segment: unescaped newline");
                return None;
            }
        }

        lexer.advance();
        consumed += 1;
    }

    trace!("string segment: unterminated");
    None
}
