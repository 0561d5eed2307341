//! Error types for layout parsing and code synthesis.

use thiserror::Error;

/// Errors produced when parsing a layout string into a [crate::layout::BitLayout],
/// or when layouts that must be compared disagree on width.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A character outside the `{0, 1, *, A..Z}` alphabet.
    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
    /// Layout contains no symbols after whitespace is stripped.
    #[error("layout is empty")]
    Empty,
    /// Layout is wider than the 32-bit word the generator targets.
    #[error("layout is {0} symbols wide, maximum is 32")]
    TooWide(usize),
    /// Two layouts that must describe the same word have different widths.
    #[error("layout is {found} symbols wide, expected {expected}")]
    WidthMismatch { expected: usize, found: usize },
}

/// Errors produced while synthesizing a [crate::condition::Condition] or a
/// [crate::fragment::CodeFragment]. All are fatal: no partial output is emitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthError {
    /// The suppression reference does not cover every target position.
    #[error("reference layout ({reference} symbols) is narrower than the target ({target} symbols)")]
    ReferenceTooNarrow { target: usize, reference: usize },
    /// An output letter has no occurrence anywhere in the input layout.
    #[error("letter {letter:?} at output position {position} has no source in the input layout")]
    UnmappedLetter { letter: char, position: usize },
}
