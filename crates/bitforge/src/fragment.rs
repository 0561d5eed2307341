//! The emitted operation model: one initialization followed by zero or more
//! mask/shift accumulations. Fragments are data; rendering them to a target
//! syntax lives in [crate::render].

/// Direction and magnitude of an accumulate's shift.
///
/// Positions are MSB-first, so a positive position delta (destination to the
/// right of the source) is a right shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shift {
    None,
    Right(u32),
    Left(u32),
}

impl Shift {
    /// Builds a shift from `destination_start - source_start`.
    pub fn from_delta(delta: i32) -> Self {
        match delta {
            0 => Shift::None,
            d if d > 0 => Shift::Right(d as u32),
            d => Shift::Left((-d) as u32),
        }
    }

    /// The opposite shift, used when the same run is applied in the inverse
    /// direction.
    pub fn inverted(self) -> Self {
        match self {
            Shift::None => Shift::None,
            Shift::Right(n) => Shift::Left(n),
            Shift::Left(n) => Shift::Right(n),
        }
    }

    pub fn apply(self, value: u32) -> u32 {
        match self {
            Shift::None => value,
            Shift::Right(n) => value >> n,
            Shift::Left(n) => value << n,
        }
    }
}

/// "Set output to a constant": every destination position fixed at `1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Init {
    pub value: u32,
    /// Destination layout text, reproduced as the trace comment.
    pub trace: String,
}

/// "Merge `(word & mask)` shifted into the output."
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accumulate {
    pub mask: u32,
    pub shift: Shift,
    /// Source symbols the operation moves, e.g. `"ABCDEF"`.
    pub trace: String,
}

/// An ordered, complete transformation: init then accumulations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeFragment {
    pub init: Init,
    pub ops: Vec<Accumulate>,
}

impl CodeFragment {
    /// Evaluates the fragment against an input word. Used to verify the
    /// round-trip law; the generated text is what ships, not this.
    pub fn apply(&self, input: u32) -> u32 {
        let mut output = self.init.value;
        for op in &self.ops {
            output |= op.shift.apply(input & op.mask);
        }
        output
    }
}
