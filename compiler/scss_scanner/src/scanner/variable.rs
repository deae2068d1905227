//! Variables, with or without a trailing `...` rest marker.
//!
//! `$args...` is only valid as the last parameter or argument, so the
//! grammar asks for it as a separate token rather than lexing `$args` and
//! recovering when `...` follows.

use tracing::trace;

use crate::lexer::Lexer;
use crate::tag::{TokenKind, ValidTokens};

/// Length of the rest marker.
const REST_DOTS: usize = 3;

fn starts_name(c: char) -> bool {
    c.is_alphabetic() || c == '-' || c == '_'
}

fn continues_name(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

/// Scan `$name` and classify what follows. The lookahead must be `$`.
pub(super) fn scan<L: Lexer + ?Sized>(lexer: &mut L, valid: ValidTokens) -> Option<TokenKind> {
    if !lexer.at('$') {
        return None;
    }
    lexer.advance();

    if !lexer.lookahead().is_some_and(starts_name) {
        trace!(lookahead = ?lexer.lookahead(), "variable: invalid name start");
        return None;
    }
    lexer.advance();
    while lexer.lookahead().is_some_and(continues_name) {
        lexer.advance();
    }
    lexer.mark_end();
    trace!(column = lexer.column(), "variable: name ends");

    // Dots are lookahead only; the token stays `$name`.
    for _ in 0..REST_DOTS {
        if !lexer.at('.') {
            return accept(valid, TokenKind::VariableWithoutRest);
        }
        lexer.advance();
    }

    if lexer.at('.') {
        // Four or more dots: let the grammar reject the stray dots.
        accept(valid, TokenKind::VariableWithoutRest)
    } else {
        accept(valid, TokenKind::VariableWithRest)
    }
}

fn accept(valid: ValidTokens, kind: TokenKind) -> Option<TokenKind> {
    valid.accepts(kind).then_some(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SourceCursor, Span};

    fn scan_with(source: &str, valid: ValidTokens) -> Option<(TokenKind, Span)> {
        let mut cursor = SourceCursor::new(source);
        scan(&mut cursor, valid).map(|kind| (kind, cursor.token_span()))
    }

    #[test]
    fn plain_variable() {
        assert_eq!(
            scan_with("$foo: 1px;", ValidTokens::VARIABLE),
            Some((TokenKind::VariableWithoutRest, Span::new(0, 4)))
        );
    }

    #[test]
    fn variable_at_end_of_input() {
        assert_eq!(
            scan_with("$foo", ValidTokens::VARIABLE),
            Some((TokenKind::VariableWithoutRest, Span::new(0, 4)))
        );
    }

    #[test]
    fn name_charset() {
        assert_eq!(
            scan_with("$_a1-b2 ", ValidTokens::VARIABLE),
            Some((TokenKind::VariableWithoutRest, Span::new(0, 7)))
        );
        assert_eq!(
            scan_with("$-x)", ValidTokens::VARIABLE),
            Some((TokenKind::VariableWithoutRest, Span::new(0, 3)))
        );
        assert_eq!(
            scan_with("$\u{E9}t\u{E9}", ValidTokens::VARIABLE),
            Some((TokenKind::VariableWithoutRest, Span::new(0, 6)))
        );
    }

    #[test]
    fn invalid_name_start_declines() {
        assert_eq!(scan_with("$1a", ValidTokens::VARIABLE), None);
        assert_eq!(scan_with("$ a", ValidTokens::VARIABLE), None);
        assert_eq!(scan_with("$", ValidTokens::VARIABLE), None);
    }

    #[test]
    fn rest_marker_excluded_from_span() {
        assert_eq!(
            scan_with("$args...)", ValidTokens::VARIABLE),
            Some((TokenKind::VariableWithRest, Span::new(0, 5)))
        );
    }

    #[test]
    fn rest_requires_candidate() {
        assert_eq!(scan_with("$args...", ValidTokens::VARIABLE_WITHOUT_REST), None);
        assert_eq!(
            scan_with("$args...", ValidTokens::VARIABLE_WITH_REST),
            Some((TokenKind::VariableWithRest, Span::new(0, 5)))
        );
    }

    #[test]
    fn plain_requires_candidate() {
        assert_eq!(scan_with("$args", ValidTokens::VARIABLE_WITH_REST), None);
    }

    #[test]
    fn fewer_than_three_dots_is_plain() {
        assert_eq!(
            scan_with("$a.", ValidTokens::VARIABLE).map(|(kind, _)| kind),
            Some(TokenKind::VariableWithoutRest)
        );
        assert_eq!(
            scan_with("$a..b", ValidTokens::VARIABLE).map(|(kind, _)| kind),
            Some(TokenKind::VariableWithoutRest)
        );
    }

    #[test]
    fn four_dots_fall_back_to_plain() {
        assert_eq!(
            scan_with("$a....", ValidTokens::VARIABLE),
            Some((TokenKind::VariableWithoutRest, Span::new(0, 2)))
        );
        assert_eq!(scan_with("$a....", ValidTokens::VARIABLE_WITH_REST), None);
    }
}
