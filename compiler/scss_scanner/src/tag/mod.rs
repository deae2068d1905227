//! Token kinds produced by the scanner and the candidate set that gates them.
//!
//! Discriminants follow the order of the grammar's external token list,
//! which is also the order of the host's valid-symbol array. The error
//! recovery sentinel comes last and is never produced.

use std::fmt;

use bitflags::bitflags;

/// Number of entries in the host's valid-symbol array: eight token kinds
/// plus the error recovery sentinel.
pub const SYMBOL_COUNT: usize = 9;

/// Index of the error recovery sentinel in the host's valid-symbol array.
const ERROR_RECOVERY_INDEX: usize = 8;

/// Token kind emitted by the scanner.
///
/// Uses `#[repr(u8)]` so the discriminant doubles as the index into the
/// host's valid-symbol array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// Whitespace between two selector components (`.a .b`). Zero width.
    DescendantCombinator = 0,
    /// The `:` that opens a pseudo-class or pseudo-element selector.
    PseudoClassColon = 1,
    /// Zero-width marker asserting the absence of whitespace.
    NoWhitespace = 2,
    /// Literal run inside a `'...'` string.
    SingleQuotedStringSegment = 3,
    /// Literal run inside a `"..."` string.
    DoubleQuotedStringSegment = 4,
    /// Opaque space-delimited value of an `@apply`-style directive.
    ApplyValue = 5,
    /// `$name` not followed by `...`.
    VariableWithoutRest = 6,
    /// `$name` immediately followed by a `...` rest marker.
    VariableWithRest = 7,
}

impl TokenKind {
    /// Every token kind, in discriminant order.
    pub const ALL: [TokenKind; 8] = [
        TokenKind::DescendantCombinator,
        TokenKind::PseudoClassColon,
        TokenKind::NoWhitespace,
        TokenKind::SingleQuotedStringSegment,
        TokenKind::DoubleQuotedStringSegment,
        TokenKind::ApplyValue,
        TokenKind::VariableWithoutRest,
        TokenKind::VariableWithRest,
    ];

    /// Index of this kind in the host's valid-symbol array.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a kind by its valid-symbol index.
    ///
    /// Returns `None` for the error recovery sentinel and anything past it.
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::ALL.len() {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// The external symbol name the grammar declares for this kind.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::DescendantCombinator => "_descendant_operator",
            TokenKind::PseudoClassColon => "_pseudo_class_selector_colon",
            TokenKind::NoWhitespace => "_no_whitespace",
            TokenKind::SingleQuotedStringSegment => "_single_quoted_string_segment",
            TokenKind::DoubleQuotedStringSegment => "_double_quoted_string_segment",
            TokenKind::ApplyValue => "_apply_value",
            TokenKind::VariableWithoutRest => "_variable_identifier",
            TokenKind::VariableWithRest => "_variable_identifier_with_following_rest",
        }
    }

    /// The candidate-set bit for this kind.
    #[inline]
    pub const fn flag(self) -> ValidTokens {
        ValidTokens::from_bits_truncate(1 << self as u16)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// The token kinds the parser accepts at the current position.
    ///
    /// One bit per [`TokenKind`], at the kind's discriminant, plus the
    /// [`ERROR_RECOVERY`](Self::ERROR_RECOVERY) sentinel. The sentinel is
    /// never produced; when set, the scanner declines outright.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct ValidTokens: u16 {
        const DESCENDANT_COMBINATOR = 1 << 0;
        const PSEUDO_CLASS_COLON = 1 << 1;
        const NO_WHITESPACE = 1 << 2;
        const SINGLE_QUOTED_STRING_SEGMENT = 1 << 3;
        const DOUBLE_QUOTED_STRING_SEGMENT = 1 << 4;
        const APPLY_VALUE = 1 << 5;
        const VARIABLE_WITHOUT_REST = 1 << 6;
        const VARIABLE_WITH_REST = 1 << 7;

        /// Set by the parser while it is recovering from a syntax error.
        const ERROR_RECOVERY = 1 << 8;

        /// Either variable kind.
        const VARIABLE = Self::VARIABLE_WITHOUT_REST.bits() | Self::VARIABLE_WITH_REST.bits();
    }
}

impl ValidTokens {
    /// Returns `true` if the parser accepts `kind` here.
    #[inline]
    pub fn accepts(self, kind: TokenKind) -> bool {
        self.contains(kind.flag())
    }

    /// Returns `true` if the parser is in error recovery.
    #[inline]
    pub fn is_error_recovery(self) -> bool {
        self.contains(Self::ERROR_RECOVERY)
    }

    /// Build a candidate set from the host's valid-symbol array.
    ///
    /// The array is indexed by [`TokenKind::index`], with the error recovery
    /// sentinel last; it must hold exactly [`SYMBOL_COUNT`] entries.
    pub fn from_valid_symbols(symbols: &[bool]) -> Result<Self, ValidTokensError> {
        if symbols.len() != SYMBOL_COUNT {
            return Err(ValidTokensError::Length {
                expected: SYMBOL_COUNT,
                found: symbols.len(),
            });
        }

        let mut valid: ValidTokens = TokenKind::ALL
            .into_iter()
            .filter(|kind| symbols[kind.index()])
            .collect();
        if symbols[ERROR_RECOVERY_INDEX] {
            valid |= Self::ERROR_RECOVERY;
        }
        Ok(valid)
    }

    /// The accepted token kinds, in discriminant order.
    pub fn kinds(self) -> impl Iterator<Item = TokenKind> {
        TokenKind::ALL.into_iter().filter(move |&kind| self.accepts(kind))
    }
}

impl From<TokenKind> for ValidTokens {
    fn from(kind: TokenKind) -> Self {
        kind.flag()
    }
}

impl FromIterator<TokenKind> for ValidTokens {
    fn from_iter<I: IntoIterator<Item = TokenKind>>(iter: I) -> Self {
        iter.into_iter()
            .fold(ValidTokens::empty(), |set, kind| set | kind.flag())
    }
}

/// The host handed over a valid-symbol array of the wrong shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidTokensError {
    #[error("expected {expected} valid-symbol flags, found {found}")]
    Length { expected: usize, found: usize },
}

/// Byte range of a token in the source, end exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Create a span from `start` to `end`.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Span { start, end }
    }

    /// Length in bytes.
    #[inline]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    /// Returns `true` for zero-width tokens.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }
}

/// A token the scanner committed to, with its extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScannedToken {
    pub kind: TokenKind,
    pub span: Span,
}
