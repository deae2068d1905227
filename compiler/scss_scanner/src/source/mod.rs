//! In-memory [`Lexer`] over a `&str`.
//!
//! Hosts with their own parser runtime implement [`Lexer`] directly. This
//! cursor covers everyone else: tooling that already holds the source text
//! and wants to ask "what token starts at this offset?".
//!
//! # Token Boundaries
//!
//! The cursor tracks three positions:
//!
//! ```text
//!   token_start   token_end (mark_end)   pos (lookahead)
//!        |              |                   |
//!   ...  [ token text   ]  inspected only   ...
//! ```
//!
//! Skipped trivia before the first significant advance moves `token_start`.
//! If `mark_end` is never called, the token ends at `pos`.

use crate::lexer::Lexer;
use crate::scanner::Scanner;
use crate::tag::{ScannedToken, Span, ValidTokens};

/// Character cursor over borrowed source text.
#[derive(Clone, Copy, Debug)]
pub struct SourceCursor<'a> {
    source: &'a str,
    /// Byte offset of the lookahead character.
    pos: usize,
    /// Byte offset where the current token starts.
    token_start: usize,
    /// Byte offset fixed by the last `mark_end`, if any.
    token_end: Option<usize>,
    /// Column of the lookahead character, in characters.
    column: u32,
    /// Whether `advance` has run since the cursor was positioned.
    significant: bool,
}

impl<'a> SourceCursor<'a> {
    /// Create a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self::at_offset(source, 0)
    }

    /// Create a cursor at byte `offset` of `source`.
    ///
    /// The starting column is recovered by searching back for the previous
    /// newline.
    ///
    /// # Contract
    ///
    /// `offset` must lie on a character boundary within `source` (or equal
    /// its length). Out-of-range offsets are clamped to the end of input.
    pub fn at_offset(source: &'a str, offset: usize) -> Self {
        debug_assert!(
            offset > source.len() || source.is_char_boundary(offset),
            "offset {offset} is not a character boundary"
        );
        let pos = offset.min(source.len());
        let line_start = memchr::memrchr(b'\n', &source.as_bytes()[..pos]).map_or(0, |nl| nl + 1);
        let column = source
            .get(line_start..pos)
            .map_or(0, |line| line.chars().count());

        SourceCursor {
            source,
            pos,
            token_start: pos,
            token_end: None,
            column: u32::try_from(column).unwrap_or(u32::MAX),
            significant: false,
        }
    }

    /// Byte offset of the lookahead character.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The extent of the token scanned so far.
    pub fn token_span(&self) -> Span {
        Span::new(self.token_start, self.token_end.unwrap_or(self.pos))
    }

    /// Source text covered by `span`.
    ///
    /// Returns an empty string when `span` is out of range or splits a
    /// character.
    pub fn slice(&self, span: Span) -> &'a str {
        self.source.get(span.start..span.end).unwrap_or_default()
    }

    /// Move past the lookahead character, keeping the column in step.
    fn step(&mut self) {
        if let Some(c) = self.lookahead() {
            self.pos += c.len_utf8();
            if c == '\n' {
                self.column = 0;
            } else {
                self.column = self.column.saturating_add(1);
            }
        }
    }
}

impl Lexer for SourceCursor<'_> {
    #[inline]
    fn lookahead(&self) -> Option<char> {
        self.source.get(self.pos..).and_then(|rest| rest.chars().next())
    }

    fn advance(&mut self) {
        self.step();
        self.significant = true;
    }

    fn skip(&mut self) {
        self.step();
        if !self.significant {
            self.token_start = self.pos;
        }
    }

    fn mark_end(&mut self) {
        self.token_end = Some(self.pos);
    }

    #[inline]
    fn column(&self) -> u32 {
        self.column
    }
}

/// Scan for a context-sensitive token starting at byte `offset`.
///
/// Runs a fresh [`Scanner`] over a fresh [`SourceCursor`], so equal inputs
/// always give equal results.
pub fn scan_source(source: &str, offset: usize, valid: ValidTokens) -> Option<ScannedToken> {
    let mut cursor = SourceCursor::at_offset(source, offset);
    let kind = Scanner::new().scan(&mut cursor, valid)?;
    Some(ScannedToken {
        kind,
        span: cursor.token_span(),
    })
}
