//! Pseudo-class colon: `:hover {` versus the colon of `color: red;`.

use tracing::trace;

use super::{selector_block_follows, Verdict};
use crate::lexer::Lexer;

/// Decide whether the next `:` opens a pseudo-class selector.
///
/// Only the colon itself becomes token text; the scan up to `{` is
/// lookahead.
pub(super) fn scan<L: Lexer + ?Sized>(lexer: &mut L) -> Verdict {
    lexer.skip_whitespace();
    if !lexer.at(':') {
        return Verdict::Pass;
    }
    lexer.advance();

    // `: ` belongs to a declaration and `::` to a pseudo-element.
    if lexer.at_whitespace() || lexer.at(':') {
        trace!("pseudo-class: colon followed by space or colon");
        return Verdict::Reject;
    }
    lexer.mark_end();

    selector_block_follows(lexer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SourceCursor, Span};

    fn verdict(source: &str) -> (Verdict, Span) {
        let mut cursor = SourceCursor::new(source);
        let verdict = scan(&mut cursor);
        (verdict, cursor.token_span())
    }

    #[test]
    fn colon_before_block_accepts() {
        assert_eq!(verdict(":hover {"), (Verdict::Accept, Span::new(0, 1)));
    }

    #[test]
    fn leading_whitespace_is_trivia() {
        assert_eq!(verdict("  :focus{"), (Verdict::Accept, Span::new(2, 3)));
    }

    #[test]
    fn functional_pseudo_class_accepts() {
        assert_eq!(verdict(":nth-child(2n + 1) > a {").0, Verdict::Accept);
    }

    #[test]
    fn declaration_colon_rejects() {
        assert_eq!(verdict(":red;").0, Verdict::Reject);
        assert_eq!(verdict(": red;").0, Verdict::Reject);
        assert_eq!(verdict(":red }").0, Verdict::Reject);
        assert_eq!(verdict(":hover").0, Verdict::Reject);
    }

    #[test]
    fn pseudo_element_rejects() {
        assert_eq!(verdict("::before {").0, Verdict::Reject);
    }

    #[test]
    fn non_colon_passes() {
        assert_eq!(verdict("color: red;").0, Verdict::Pass);
        assert_eq!(verdict("").0, Verdict::Pass);
    }
}
