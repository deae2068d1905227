//! Values of `@apply`-style directives.
//!
//! Any class name is a valid value, so the token is a black hole: everything
//! up to the next whitespace or `;`. `!` and braces are excluded so that
//! `!important` and nested blocks stay visible to the grammar.

use tracing::trace;

use crate::lexer::Lexer;
use crate::tag::TokenKind;

pub(super) fn scan<L: Lexer + ?Sized>(lexer: &mut L) -> Option<TokenKind> {
    lexer.skip_whitespace();
    if matches!(lexer.lookahead(), Some(';' | '!' | '{')) {
        return None;
    }

    loop {
        match lexer.lookahead() {
            Some(c) if c.is_whitespace() || c == ';' => break,
            // An unterminated value at end of input is left to the grammar.
            None => return None,
            Some(c @ ('!' | '{' | '}')) => {
                trace!(%c, "apply value: forbidden character");
                return None;
            }
            Some(_) => lexer.advance(),
        }
    }

    lexer.mark_end();
    Some(TokenKind::ApplyValue)
}
