//! Field-mapper synthesis: turns an `(input, output)` layout pair into the
//! mask/shift operations that move every named field between the two layouts.
//!
//! The scan works on *runs*: maximal contiguous spans of output positions
//! whose letters match a contiguous span of input positions in lockstep, so a
//! whole field moves with one mask and one shift instead of one bit at a time.

use crate::{
    errors::SynthError,
    fragment::{Accumulate, CodeFragment, Init, Shift},
    layout::{BitLayout, Symbol},
};

/// Which way a [CodeFragment] transforms a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Input layout positions to output layout positions.
    Encode,
    /// Output layout positions back to input layout positions, every shift
    /// inverted; composing it after the encode fragment restores each shared
    /// variable bit.
    Decode,
}

/// A matched span: `len` positions starting at `src_start` in the input and
/// `dst_start` in the output, carrying the same letters in lockstep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub src_start: usize,
    pub dst_start: usize,
    pub len: usize,
}

impl Run {
    /// `destination_start - source_start`, the encode-direction position delta.
    pub fn delta(&self) -> i32 {
        self.dst_start as i32 - self.src_start as i32
    }
}

/// Detects every run of `output` letters against `input`.
///
/// Each run restarts the input scan from position zero; since layouts are at
/// most 32 symbols this O(N²) search is preferred over a persistent cursor,
/// and it recovers reordered fields (sub-fields swapped between layouts) for
/// free. Cursor state lives entirely in this function.
pub fn find_runs(input: &BitLayout, output: &BitLayout) -> Result<Vec<Run>, SynthError> {
    let mut runs = Vec::new();
    let mut out_pos = 0;

    while out_pos < output.width() {
        let letter = match output.at(out_pos) {
            Symbol::Var(c) => c,
            _ => {
                out_pos += 1;
                continue;
            }
        };

        let src_start = input
            .symbols()
            .iter()
            .position(|s| *s == Symbol::Var(letter))
            .ok_or(SynthError::UnmappedLetter {
                letter,
                position: out_pos,
            })?;

        let mut len = 1;
        while out_pos + len < output.width()
            && src_start + len < input.width()
            && output.at(out_pos + len).is_var()
            && output.at(out_pos + len) == input.at(src_start + len)
        {
            len += 1;
        }

        runs.push(Run {
            src_start,
            dst_start: out_pos,
            len,
        });
        out_pos += len;
    }

    Ok(runs)
}

/// Synthesizes the complete transformation fragment for one layout pair.
///
/// Both directions share the run set; they differ only in which layout the
/// masks cover and in the shift sign. Fails without emitting anything if an
/// output letter never occurs in the input.
pub fn synthesize(
    input: &BitLayout,
    output: &BitLayout,
    direction: Direction,
) -> Result<CodeFragment, SynthError> {
    let runs = find_runs(input, output)?;

    let init = match direction {
        Direction::Encode => Init {
            value: output.ones_mask(),
            trace: output.to_string(),
        },
        Direction::Decode => Init {
            value: input.ones_mask(),
            trace: input.to_string(),
        },
    };

    let mut ops = Vec::with_capacity(runs.len());
    for run in &runs {
        let shift = Shift::from_delta(run.delta());
        let op = match direction {
            Direction::Encode => Accumulate {
                mask: input.span_mask(run.src_start, run.len),
                shift,
                trace: input.span_text(run.src_start, run.len),
            },
            Direction::Decode => Accumulate {
                mask: output.span_mask(run.dst_start, run.len),
                shift: shift.inverted(),
                trace: input.span_text(run.src_start, run.len),
            },
        };
        ops.push(op);
    }

    Ok(CodeFragment { init, ops })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(input: &str, output: &str) -> (BitLayout, BitLayout) {
        (
            BitLayout::parse(input).unwrap(),
            BitLayout::parse(output).unwrap(),
        )
    }

    #[test]
    fn test_reordered_letters_give_two_single_bit_runs() {
        let (input, output) = pair("AB", "BA");
        let runs = find_runs(&input, &output).unwrap();

        assert_eq!(
            runs,
            vec![
                Run {
                    src_start: 1,
                    dst_start: 0,
                    len: 1
                },
                Run {
                    src_start: 0,
                    dst_start: 1,
                    len: 1
                },
            ]
        );
    }

    #[test]
    fn test_standard_case_coalesces_to_three_runs() {
        let (input, output) = pair(
            "ABCDEFGH IJKLMNOP QRST**** ********",
            "01ABCDEF 0GHIJKLM 0NOPQRST ********",
        );
        let runs = find_runs(&input, &output).unwrap();

        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0], Run { src_start: 0, dst_start: 2, len: 6 });
        assert_eq!(runs[1], Run { src_start: 6, dst_start: 9, len: 7 });
        assert_eq!(runs[2], Run { src_start: 13, dst_start: 17, len: 7 });
    }

    #[test]
    fn test_encode_matches_shipped_codec_constants() {
        let (input, output) = pair(
            "ABCDEFGH IJKLMNOP QRST**** ********",
            "01ABCDEF 0GHIJKLM 0NOPQRST ********",
        );
        let fragment = synthesize(&input, &output, Direction::Encode).unwrap();

        assert_eq!(fragment.init.value, 0x40000000);
        assert_eq!(fragment.ops.len(), 3);
        assert_eq!(fragment.ops[0].mask, 0xFC000000);
        assert_eq!(fragment.ops[0].shift, Shift::Right(2));
        assert_eq!(fragment.ops[0].trace, "ABCDEF");
        assert_eq!(fragment.ops[1].mask, 0x03F80000);
        assert_eq!(fragment.ops[1].shift, Shift::Right(3));
        assert_eq!(fragment.ops[2].mask, 0x0007F000);
        assert_eq!(fragment.ops[2].shift, Shift::Right(4));
    }

    #[test]
    fn test_decode_shifts_are_exact_negations() {
        let (input, output) = pair(
            "ABCDEFGH IJKLMNOP QRST**** ********",
            "01ABCDEF 0GHIJKLM 0NOPQRST ********",
        );
        let encode = synthesize(&input, &output, Direction::Encode).unwrap();
        let decode = synthesize(&input, &output, Direction::Decode).unwrap();

        assert_eq!(encode.ops.len(), decode.ops.len());
        for (enc, dec) in encode.ops.iter().zip(&decode.ops) {
            assert_eq!(dec.shift, enc.shift.inverted());
            assert_eq!(dec.mask, enc.shift.apply(enc.mask));
        }
    }

    #[test]
    fn test_left_shifts_for_letters_moved_left_to_right() {
        // L sits at input position 11 and lands at output position 6.
        let (input, output) = pair(
            "ABCDEF01 111L0011 11S0**** ********",
            "001110LS 01ABCDEF 01000000 ********",
        );
        let fragment = synthesize(&input, &output, Direction::Encode).unwrap();

        assert_eq!(fragment.init.value, 0x38404000);
        assert_eq!(fragment.ops[0].mask, 0x00100000);
        assert_eq!(fragment.ops[0].shift, Shift::Left(5));
        assert_eq!(fragment.ops[0].trace, "L");
        assert_eq!(fragment.ops[1].mask, 0x00002000);
        assert_eq!(fragment.ops[1].shift, Shift::Left(11));
        assert_eq!(fragment.ops[2].mask, 0xFC000000);
        assert_eq!(fragment.ops[2].shift, Shift::Right(10));
    }

    #[test]
    fn test_zero_delta_run_has_no_shift() {
        let (input, output) = pair("00ABCDEF", "01ABCDEF");
        let fragment = synthesize(&input, &output, Direction::Encode).unwrap();

        assert_eq!(fragment.ops.len(), 1);
        assert_eq!(fragment.ops[0].shift, Shift::None);
        assert_eq!(fragment.ops[0].mask, 0x3F);
    }

    #[test]
    fn test_fixed_zero_positions_never_written() {
        let (input, output) = pair("ABCDEFGH", "0ABC0DEF");
        let fragment = synthesize(&input, &output, Direction::Encode).unwrap();

        let zero_bits = 0x88; // positions 0 and 4
        assert_eq!(fragment.init.value & zero_bits, 0);
        for op in &fragment.ops {
            assert_eq!(op.shift.apply(op.mask) & zero_bits, 0);
        }
    }

    #[test]
    fn test_unmapped_letter_fails_without_fragment() {
        let (input, output) = pair("AB00", "ABCD");
        assert_eq!(
            synthesize(&input, &output, Direction::Encode).unwrap_err(),
            SynthError::UnmappedLetter {
                letter: 'C',
                position: 2
            }
        );
    }

    #[test]
    fn test_round_trip_restores_variable_bits() {
        let (input, output) = pair(
            "ABCDEF00 IJKLMNOP QRST**** ********",
            "0NOPQRST 110ABCDE 10MFIJKL ********",
        );
        let encode = synthesize(&input, &output, Direction::Encode).unwrap();
        let decode = synthesize(&input, &output, Direction::Decode).unwrap();

        // Every input position that is a letter or a fixed bit must survive.
        let word = 0b10110100_11010110_10100000_00000000u32;
        let relevant = 0xFFFFF000u32;
        assert_eq!(decode.apply(encode.apply(word)) & relevant, word & relevant);
    }
}
