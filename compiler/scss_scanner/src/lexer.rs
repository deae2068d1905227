//! The character-stream interface a host parser exposes to the scanner.

/// Character cursor owned by the host parser.
///
/// The scanner only ever sees one character of lookahead. It distinguishes
/// consuming a character ([`advance`](Self::advance) or [`skip`](Self::skip))
/// from fixing the token boundary ([`mark_end`](Self::mark_end)): characters
/// consumed after the last `mark_end` are inspected but do not belong to the
/// emitted token.
pub trait Lexer {
    /// The current lookahead character, or `None` at end of input.
    fn lookahead(&self) -> Option<char>;

    /// Consume the lookahead character as part of the token.
    fn advance(&mut self);

    /// Consume the lookahead character as insignificant trivia.
    ///
    /// Trivia skipped before the first [`advance`](Self::advance) of a scan
    /// moves the token start forward instead of becoming token text.
    fn skip(&mut self);

    /// Fix the end of the token at the current position.
    fn mark_end(&mut self);

    /// Column of the lookahead character, counted in characters from the
    /// start of its line.
    fn column(&self) -> u32;

    /// Returns `true` when no input remains.
    #[inline]
    fn is_eof(&self) -> bool {
        self.lookahead().is_none()
    }

    /// Returns `true` if the lookahead is exactly `c`.
    #[inline]
    fn at(&self, c: char) -> bool {
        self.lookahead() == Some(c)
    }

    /// Returns `true` if the lookahead is a whitespace character.
    ///
    /// End of input is not whitespace.
    #[inline]
    fn at_whitespace(&self) -> bool {
        self.lookahead().is_some_and(char::is_whitespace)
    }

    /// Skip a run of whitespace as trivia.
    fn skip_whitespace(&mut self) {
        while self.at_whitespace() {
            self.skip();
        }
    }
}
