//! The case driver: an ordered table of named layout pairs folded into two
//! first-match-wins branch chains, one for each direction.
//!
//! Table order is load-bearing: earlier branches catch the patterns later,
//! more general branches must not see. A case may additionally carry
//! `excludes` patterns whose negated conditions are conjoined into its encode
//! guard, which is how a general case is gated behind specific ones without
//! reordering the chain.

use crate::{
    condition::{self, Condition},
    errors::{LayoutError, SynthError},
    fragment::CodeFragment,
    layout::{BitLayout, LayoutPair},
    mapper::{self, Direction},
};

/// One named branch of the target codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    pub name: String,
    pub pair: LayoutPair,
    /// Patterns that must *not* match for this case to apply.
    pub excludes: Vec<BitLayout>,
}

impl Case {
    pub fn new(name: &str, input: &str, output: &str) -> Result<Self, LayoutError> {
        Ok(Self {
            name: name.to_string(),
            pair: LayoutPair::new(BitLayout::parse(input)?, BitLayout::parse(output)?)?,
            excludes: Vec::new(),
        })
    }

    pub fn with_excludes(mut self, excludes: &[&str]) -> Result<Self, LayoutError> {
        for text in excludes {
            self.excludes.push(BitLayout::parse(text)?);
        }
        Ok(self)
    }
}

/// One assembled branch: a conjunction of guards plus the fragment to run
/// when they all hold. An empty guard list means the branch is unconditional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub name: String,
    pub guards: Vec<Condition>,
    pub fragment: CodeFragment,
}

impl Branch {
    pub fn matches(&self, word: u32) -> bool {
        self.guards.iter().all(|g| g.matches(word))
    }
}

/// The two assembled branch chains, in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedChains {
    pub encode: Vec<Branch>,
    pub decode: Vec<Branch>,
}

/// The static configuration of one generation run: a shared suppression
/// reference and the ordered cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseTable {
    reference: BitLayout,
    cases: Vec<Case>,
}

impl CaseTable {
    /// Builds a table, enforcing that the reference and every case layout
    /// (pairs and excludes) share one width.
    pub fn new(reference: BitLayout, cases: Vec<Case>) -> Result<Self, LayoutError> {
        let width = reference.width();
        for case in &cases {
            case.pair.input.expect_width(width)?;
            case.pair.output.expect_width(width)?;
            for excl in &case.excludes {
                excl.expect_width(width)?;
            }
        }
        Ok(Self { reference, cases })
    }

    pub fn reference(&self) -> &BitLayout {
        &self.reference
    }

    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    pub fn width(&self) -> usize {
        self.reference.width()
    }

    /// Assembles both branch chains. Pure: no state survives between cases
    /// and no case depends on another's fragments, only on table order.
    pub fn generate(&self) -> Result<GeneratedChains, SynthError> {
        let mut encode = Vec::with_capacity(self.cases.len());
        let mut decode = Vec::with_capacity(self.cases.len());

        for (index, case) in self.cases.iter().enumerate() {
            let last = index + 1 == self.cases.len();
            let input = &case.pair.input;
            let output = &case.pair.output;

            let mut encode_guards = Vec::new();
            let mut decode_guards = Vec::new();

            // The final case is the codec's termination marker and becomes
            // the unconditional default branch of both chains.
            if !last {
                for excl in &case.excludes {
                    encode_guards.push(condition::synthesize(excl, &self.reference, true)?);
                }
                let select = condition::synthesize(input, &self.reference, false)?;
                if !select.is_vacuous() {
                    encode_guards.push(select);
                }

                let dispatch = condition::synthesize(output, &self.reference, false)?;
                if !dispatch.is_vacuous() {
                    decode_guards.push(dispatch);
                }
            }

            encode.push(Branch {
                name: case.name.clone(),
                guards: encode_guards,
                fragment: mapper::synthesize(input, output, Direction::Encode)?,
            });
            decode.push(Branch {
                name: case.name.clone(),
                guards: decode_guards,
                fragment: mapper::synthesize(input, output, Direction::Decode)?,
            });
        }

        Ok(GeneratedChains { encode, decode })
    }

    /// The branch table of the BaseXML binary-to-markup codec: two 20-bit
    /// halves of a 5-byte block, each repacked into 24 bits that stay legal
    /// inside a markup document. Specific cases first, termination last.
    pub fn basexml() -> Self {
        let reference = BitLayout::parse("ABCDEFGH IJKLMNOP QRST**** ********")
            .expect("builtin reference layout");

        let case = |name, input, output| {
            Case::new(name, input, output).expect("builtin case layout")
        };

        let standard = case(
            "STANDARD",
            "ABCDEFGH IJKLMNOP QRST**** ********",
            "01ABCDEF 0GHIJKLM 0NOPQRST ********",
        )
        .with_excludes(&[
            // GH == 00 and NO == 00 belong to the control-character cases.
            "******00 ******** ******** ********",
            "******** *****00* ******** ********",
        ])
        .expect("builtin exclude layout");

        let cases = vec![
            case(
                "ILLEGAL_BOTH",
                "ABCDEF01 111L0011 11S0**** ********",
                "001110LS 01ABCDEF 01000000 ********",
            ),
            case(
                "ILLEGAL_LEFT",
                "ABCDEF01 111L0NOP QRST**** ********",
                "001100LT 01ABCDEF 01NOPQRS ********",
            ),
            case(
                "ILLEGAL_RIGHT",
                "ABCDEFGH IJKLM011 11S0**** ********",
                "001101SM 01ABCDEF 01GHIJKL ********",
            ),
            standard,
            case(
                "CONTROL_LEFT_CANONICAL",
                "0000EF00 IJKLMNOP QRST**** ********",
                "0010EFIJ 0010KLMN 01OPQRST ********",
            ),
            case(
                "CONTROL_RIGHT_CANONICAL",
                "0000EFGH IJKLM00P QRST**** ********",
                "0010PEFG 01HIJKLM 0010QRST ********",
            ),
            case(
                "CONTROL_BOTH",
                "ABCDEF00 IJKLM00P QRST**** ********",
                "0010ABCD 01EFIJKL 01MPQRST ********",
            ),
            case(
                "CONTROL_LEFT",
                "ABCDEF00 IJKLMNOP QRST**** ********",
                "0NOPQRST 110ABCDE 10MFIJKL ********",
            ),
            case(
                "CONTROL_RIGHT",
                "ABCDEFGH IJKLM00P QRST**** ********",
                "110ABCDE 10FPQRST 0GHIJKLM ********",
            ),
            case(
                "TERMINATION",
                "ABCDEFGH IJKLMNOP QRST**** ********",
                "00111111 0011**** 00111111 ********",
            ),
        ];

        Self::new(reference, cases).expect("builtin table is width-consistent")
    }
}
