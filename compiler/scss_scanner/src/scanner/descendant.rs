//! Descendant combinator: whitespace that separates two compound selectors.
//!
//! `.a .b` and `.a :hover {` contain a combinator; `color: red` after a
//! newline inside a block does not. The whitespace itself is trivia; the
//! token is zero width at the end of the run.

use tracing::trace;

use super::{selector_block_follows, Verdict};
use crate::lexer::Lexer;

/// Characters that can only start a selector component.
fn starts_selector(c: char) -> bool {
    matches!(c, '#' | '.' | '[' | '-' | '*' | '&') || c.is_alphanumeric()
}

/// Scan a whitespace run. The lookahead must be whitespace.
pub(super) fn scan<L: Lexer + ?Sized>(lexer: &mut L) -> Verdict {
    debug_assert!(lexer.at_whitespace());
    lexer.skip_whitespace();
    lexer.mark_end();

    match lexer.lookahead() {
        Some(c) if starts_selector(c) => Verdict::Accept,
        Some(':') => {
            lexer.advance();
            // `a: b` is a declaration; pseudo-classes hug their colon.
            if lexer.at_whitespace() {
                trace!("descendant: space after colon");
                return Verdict::Reject;
            }
            selector_block_follows(lexer)
        }
        _ => Verdict::Pass,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SourceCursor;

    fn verdict(source: &str) -> (Verdict, usize) {
        let mut cursor = SourceCursor::new(source);
        let verdict = scan(&mut cursor);
        (verdict, cursor.token_span().end)
    }

    #[test]
    fn selector_starts_accept() {
        for source in [" .b", " #id", " [attr]", " -x", " *", " &-suffix", " div", " 9"] {
            assert_eq!(verdict(source).0, Verdict::Accept, "{source:?}");
        }
    }

    #[test]
    fn token_ends_after_whitespace_run() {
        assert_eq!(verdict(" \t\n .b"), (Verdict::Accept, 4));
    }

    #[test]
    fn pseudo_class_before_block_accepts() {
        assert_eq!(verdict(" :hover { color: red; }"), (Verdict::Accept, 1));
        assert_eq!(verdict(" :not(.a):hover {").0, Verdict::Accept);
    }

    #[test]
    fn colon_then_space_rejects() {
        assert_eq!(verdict(" : red;").0, Verdict::Reject);
    }

    #[test]
    fn colon_before_statement_end_rejects() {
        assert_eq!(verdict(" :red;").0, Verdict::Reject);
        assert_eq!(verdict(" :red }").0, Verdict::Reject);
        assert_eq!(verdict(" :red").0, Verdict::Reject);
    }

    #[test]
    fn other_characters_pass() {
        for source in [" ;", " {", " >", " +", " ~", " ,", " )", " "] {
            assert_eq!(verdict(source).0, Verdict::Pass, "{source:?}");
        }
    }
}
