//! Symbolic bit layouts: fixed-width descriptions of a word's role per position.
//!
//! Positions are addressed MSB-first: position 0 is the leftmost symbol and
//! maps to word bit `width - 1`. This convention is shared by condition
//! synthesis and both field-mapping directions.

use std::fmt;

use crate::errors::LayoutError;

/// One position of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Bit fixed at 0. Never written by a run.
    Zero,
    /// Bit fixed at 1. Set by the fragment's initial constant.
    One,
    /// Don't-care bit.
    Any,
    /// Named variable bit, `A..=Z`. Its value comes from the opposite layout.
    Var(char),
}

impl Symbol {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Symbol::Zero),
            '1' => Some(Symbol::One),
            '*' => Some(Symbol::Any),
            'A'..='Z' => Some(Symbol::Var(c)),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Symbol::Zero => '0',
            Symbol::One => '1',
            Symbol::Any => '*',
            Symbol::Var(c) => c,
        }
    }

    /// True for `0` and `1`.
    pub fn is_fixed(self) -> bool {
        matches!(self, Symbol::Zero | Symbol::One)
    }

    /// True for named variable bits.
    pub fn is_var(self) -> bool {
        matches!(self, Symbol::Var(_))
    }
}

/// An ordered, fixed-width sequence of [Symbol]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitLayout {
    symbols: Vec<Symbol>,
}

impl BitLayout {
    /// Parses a layout string, stripping formatting whitespace.
    ///
    /// Fails on symbols outside `{0, 1, *, A..Z}`, on empty input, and on
    /// layouts wider than 32 symbols.
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let mut symbols = Vec::new();

        for (position, c) in text.chars().filter(|c| !c.is_whitespace()).enumerate() {
            match Symbol::from_char(c) {
                Some(s) => symbols.push(s),
                None => return Err(LayoutError::InvalidSymbol { symbol: c, position }),
            }
        }

        if symbols.is_empty() {
            return Err(LayoutError::Empty);
        }
        if symbols.len() > 32 {
            return Err(LayoutError::TooWide(symbols.len()));
        }

        Ok(Self { symbols })
    }

    pub fn width(&self) -> usize {
        self.symbols.len()
    }

    /// Symbol at `position` (0 = leftmost).
    pub fn at(&self, position: usize) -> Symbol {
        self.symbols[position]
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Word bit carrying `position`: the leftmost symbol is the high bit.
    pub fn bit(&self, position: usize) -> u32 {
        1u32 << (self.width() - 1 - position)
    }

    /// Mask of every position fixed at `1`.
    pub fn ones_mask(&self) -> u32 {
        let mut mask = 0;
        for (i, s) in self.symbols.iter().enumerate() {
            if *s == Symbol::One {
                mask |= self.bit(i);
            }
        }
        mask
    }

    /// Mask covering `len` positions starting at `start`.
    pub fn span_mask(&self, start: usize, len: usize) -> u32 {
        let mut mask = 0;
        for i in start..start + len {
            mask |= self.bit(i);
        }
        mask
    }

    /// Symbol characters of `len` positions starting at `start`, e.g. `"ABCDEF"`.
    pub fn span_text(&self, start: usize, len: usize) -> String {
        self.symbols[start..start + len]
            .iter()
            .map(|s| s.to_char())
            .collect()
    }

    pub fn expect_width(&self, expected: usize) -> Result<(), LayoutError> {
        if self.width() != expected {
            return Err(LayoutError::WidthMismatch {
                expected,
                found: self.width(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for BitLayout {
    /// Re-inserts a space every 8 symbols, the formatting the layouts are authored in.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, s) in self.symbols.iter().enumerate() {
            if i > 0 && i % 8 == 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", s.to_char())?;
        }
        Ok(())
    }
}

/// A transformation case's `(input, output)` layouts, equal width enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPair {
    pub input: BitLayout,
    pub output: BitLayout,
}

impl LayoutPair {
    pub fn new(input: BitLayout, output: BitLayout) -> Result<Self, LayoutError> {
        output.expect_width(input.width())?;
        Ok(Self { input, output })
    }

    pub fn width(&self) -> usize {
        self.input.width()
    }
}
