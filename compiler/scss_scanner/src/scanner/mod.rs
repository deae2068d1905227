//! Dispatcher choosing which scan routine answers a request.
//!
//! # Priority
//!
//! The first applicable step wins:
//!
//! 1. Error recovery declines outright.
//! 2. Non-whitespace lookahead yields the zero-width no-whitespace marker.
//! 3. Whitespace lookahead tries the descendant combinator.
//! 4. The pseudo-class colon (after skipping whitespace).
//! 5. Whitespace is skipped; everything below ignores it.
//! 6. `$` tries a variable.
//! 7. Single-quoted segment, else double-quoted segment, else apply value.
//!
//! Steps 3 and 4 may also pass when their lookahead rules
//! them out without consuming anything significant, letting later steps run.

mod apply_value;
mod descendant;
mod pseudo_class;
mod string_segment;
mod variable;

use tracing::trace;

use crate::lexer::Lexer;
use crate::tag::{TokenKind, ValidTokens};

/// Outcome of a scan routine that can hand control back to the dispatcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verdict {
    /// The routine's token applies; the boundary is marked.
    Accept,
    /// The routine's token does not apply and nothing else is tried.
    Reject,
    /// The lookahead rules this routine out; try the next step.
    Pass,
}

/// Stateless external scanner.
///
/// The lifecycle hooks a host runtime expects (create, destroy, reset,
/// serialize, deserialize) are all inert: every decision is recomputed
/// from the lexer position, so there is nothing to save or restore.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scanner;

#[allow(
    clippy::unused_self,
    clippy::trivially_copy_pass_by_ref,
    reason = "host lifecycle hooks receive the scanner payload even though it carries no state"
)]
impl Scanner {
    /// Create a scanner.
    pub fn new() -> Self {
        Scanner
    }

    /// Reset between parses. No-op.
    pub fn reset(&mut self) {}

    /// Write the scanner state into `buffer`, returning the bytes written.
    ///
    /// Always writes nothing.
    pub fn serialize(&self, _buffer: &mut [u8]) -> usize {
        0
    }

    /// Restore state written by [`serialize`](Self::serialize). No-op.
    pub fn deserialize(&mut self, _state: &[u8]) {}

    /// Decide which of the `valid` tokens, if any, starts at the lexer.
    ///
    /// On success the token end is marked on `lexer` and the kind returned.
    /// `None` leaves tokenization to the parser; any characters consumed
    /// past the last mark are lookahead only.
    pub fn scan<L: Lexer + ?Sized>(&self, lexer: &mut L, valid: ValidTokens) -> Option<TokenKind> {
        trace!(lookahead = ?lexer.lookahead(), ?valid, "scan request");

        let result = dispatch(lexer, valid);

        trace!(?result, "scan result");
        result
    }
}

fn dispatch<L: Lexer + ?Sized>(lexer: &mut L, valid: ValidTokens) -> Option<TokenKind> {
    // Opt out entirely during error recovery.
    if valid.is_error_recovery() {
        return None;
    }

    // Whitespace-significant tokens first.
    if !lexer.at_whitespace() && valid.accepts(TokenKind::NoWhitespace) {
        lexer.mark_end();
        return Some(TokenKind::NoWhitespace);
    }

    if lexer.at_whitespace() && valid.accepts(TokenKind::DescendantCombinator) {
        match descendant::scan(lexer) {
            Verdict::Accept => return Some(TokenKind::DescendantCombinator),
            Verdict::Reject => return None,
            Verdict::Pass => {}
        }
    }

    if valid.accepts(TokenKind::PseudoClassColon) {
        match pseudo_class::scan(lexer) {
            Verdict::Accept => return Some(TokenKind::PseudoClassColon),
            Verdict::Reject => return None,
            Verdict::Pass => {}
        }
    }

    lexer.skip_whitespace();

    if lexer.at('$') && valid.intersects(ValidTokens::VARIABLE) {
        return variable::scan(lexer, valid);
    }

    if valid.accepts(TokenKind::SingleQuotedStringSegment) {
        return string_segment::scan(lexer, '\'', TokenKind::SingleQuotedStringSegment);
    }

    if valid.accepts(TokenKind::DoubleQuotedStringSegment) {
        return string_segment::scan(lexer, '"', TokenKind::DoubleQuotedStringSegment);
    }

    if valid.accepts(TokenKind::ApplyValue) {
        return apply_value::scan(lexer);
    }

    None
}

/// Scan forward until a block opens or the statement ends.
///
/// Returns [`Verdict::Accept`] when `{` comes first, meaning the text after
/// the colon is a selector. `;`, `}` or end of input mean a declaration.
fn selector_block_follows<L: Lexer + ?Sized>(lexer: &mut L) -> Verdict {
    loop {
        match lexer.lookahead() {
            Some('{') => return Verdict::Accept,
            None | Some(';' | '}') => return Verdict::Reject,
            Some(_) => lexer.advance(),
        }
    }
}
