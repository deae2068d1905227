//! Context-sensitive token scanner for SCSS.
//!
//! A context-free grammar for SCSS cannot tell, with bounded lookahead,
//! whether whitespace is a descendant combinator, whether `:` starts a
//! pseudo-class, or where a string segment ends before an interpolation.
//! The host parser hands those decisions to this crate: it supplies a
//! [`Lexer`] positioned at the ambiguous point and the set of tokens it
//! would accept ([`ValidTokens`]), and [`Scanner::scan`] answers with at
//! most one [`TokenKind`], leaving the token boundary marked on the lexer.
//!
//! The scanner holds no state between calls. Each call is a pure function
//! of the lexer position and the candidate set, so a backtracking host can
//! re-invoke it freely.
//!
//! # Example
//!
//! ```
//! use scss_scanner::{scan_source, TokenKind, ValidTokens};
//!
//! let source = ":hover { color: red; }";
//! let token = scan_source(source, 0, ValidTokens::PSEUDO_CLASS_COLON);
//! assert_eq!(token.map(|t| t.kind), Some(TokenKind::PseudoClassColon));
//! ```

mod lexer;
mod scanner;
mod source;
mod tag;

pub use lexer::Lexer;
pub use scanner::Scanner;
pub use source::{scan_source, SourceCursor};
pub use tag::{ScannedToken, Span, TokenKind, ValidTokens, ValidTokensError, SYMBOL_COUNT};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=scss_scanner=trace` to see every scan decision.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
