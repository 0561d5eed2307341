//! Condition synthesis: boundary checks that recognize when a word matches a
//! layout's fixed bits.
//!
//! A position contributes to the check only when the target fixes it to `0` or
//! `1` *and* the suppression reference carries a real symbol there; reference
//! don't-cares drop positions that earlier branches already dispatched on.

use crate::{
    errors::SynthError,
    layout::{BitLayout, Symbol},
};

/// Shape of the comparison a [Condition] performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonForm {
    /// All masked bits are zero. Chosen whenever no required bit is 1.
    AllZero,
    /// Masked bits equal the required constant.
    Equals,
}

/// Symbolic reconstruction of what a condition compares, for trace comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionTrace {
    /// Reference symbols at the masked positions, e.g. `"GHIJKM"`.
    pub symbols: String,
    /// Target bits at the masked positions, e.g. `"011110"`.
    pub bits: String,
}

/// A synthesized boundary check: `(word & mask)` compared against `required`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub mask: u32,
    pub required: u32,
    pub form: ComparisonForm,
    /// If true the comparison is inverted, excluding the pattern instead of
    /// selecting it.
    pub negated: bool,
    pub trace: ConditionTrace,
}

impl Condition {
    /// True when no position contributed: the condition constrains nothing.
    pub fn is_vacuous(&self) -> bool {
        self.mask == 0
    }

    /// Evaluates the condition against a word.
    pub fn matches(&self, word: u32) -> bool {
        let masked = word & self.mask;
        let hit = match self.form {
            ComparisonForm::AllZero => masked == 0,
            ComparisonForm::Equals => masked == self.required,
        };
        hit != self.negated
    }
}

/// Builds the condition selecting (or, with `negate`, excluding) words whose
/// fixed bits match `target`, restricted to positions where `reference` is not
/// a don't-care.
pub fn synthesize(
    target: &BitLayout,
    reference: &BitLayout,
    negate: bool,
) -> Result<Condition, SynthError> {
    if reference.width() < target.width() {
        return Err(SynthError::ReferenceTooNarrow {
            target: target.width(),
            reference: reference.width(),
        });
    }

    let mut mask = 0u32;
    let mut required = 0u32;
    let mut symbols = String::new();
    let mut bits = String::new();

    for i in 0..target.width() {
        if !target.at(i).is_fixed() || reference.at(i) == Symbol::Any {
            continue;
        }

        mask |= target.bit(i);
        if target.at(i) == Symbol::One {
            required |= target.bit(i);
        }
        symbols.push(reference.at(i).to_char());
        bits.push(target.at(i).to_char());
    }

    let form = if required == 0 {
        ComparisonForm::AllZero
    } else {
        ComparisonForm::Equals
    };

    Ok(Condition {
        mask,
        required,
        form,
        negated: negate,
        trace: ConditionTrace { symbols, bits },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layouts(target: &str, reference: &str) -> (BitLayout, BitLayout) {
        (
            BitLayout::parse(target).unwrap(),
            BitLayout::parse(reference).unwrap(),
        )
    }

    #[test]
    fn test_all_zero_form() {
        let (target, reference) = layouts("0000EF00 IJKLMNOP", "ABCDEFGH IJKLMNOP");
        let cond = synthesize(&target, &reference, false).unwrap();

        assert_eq!(cond.form, ComparisonForm::AllZero);
        assert_eq!(cond.mask, 0xF300);
        assert_eq!(cond.required, 0);
        assert_eq!(cond.trace.symbols, "ABCDGH");
        assert_eq!(cond.trace.bits, "000000");
        assert!(cond.matches(0x0C00));
        assert!(!cond.matches(0x8C00));
    }

    #[test]
    fn test_required_one_changes_truth_value() {
        let (zeros, reference) = layouts("00CDEFGH", "ABCDEFGH");
        let (with_one, _) = layouts("01CDEFGH", "ABCDEFGH");

        let all_zero = synthesize(&zeros, &reference, false).unwrap();
        let one_required = synthesize(&with_one, &reference, false).unwrap();
        assert_eq!(one_required.form, ComparisonForm::Equals);
        assert_eq!(one_required.required, 0x40);

        // Words differing only at the newly required bit must split.
        assert!(all_zero.matches(0x00));
        assert!(!one_required.matches(0x00));
        assert!(one_required.matches(0x40));
        assert!(!all_zero.matches(0x40));
    }

    #[test]
    fn test_negate_flips_comparison() {
        let (target, reference) = layouts("******00", "ABCDEFGH");
        let cond = synthesize(&target, &reference, true).unwrap();

        assert_eq!(cond.mask, 0x03);
        assert!(cond.negated);
        assert!(cond.matches(0x01));
        assert!(!cond.matches(0x00));
    }

    #[test]
    fn test_reference_dont_care_suppresses_position() {
        let (target, reference) = layouts("11S0**** ********", "QRST**** ********");
        let cond = synthesize(&target, &reference, false).unwrap();

        // Only the first three fixed positions survive; the trailing `0`
        // lands on a reference don't-care and positions 4.. are wildcards.
        assert_eq!(cond.trace.symbols, "QRT");
        assert_eq!(cond.trace.bits, "110");
    }

    #[test]
    fn test_vacuous_when_no_fixed_bits() {
        let (target, reference) = layouts("ABCDEFGH", "ABCDEFGH");
        let cond = synthesize(&target, &reference, false).unwrap();
        assert!(cond.is_vacuous());
        assert!(cond.matches(0xFF));
    }

    #[test]
    fn test_narrow_reference_rejected() {
        let (target, reference) = layouts("00CDEFGH", "ABCD");
        assert_eq!(
            synthesize(&target, &reference, false).unwrap_err(),
            SynthError::ReferenceTooNarrow {
                target: 8,
                reference: 4
            }
        );
    }
}
