//! # bitforge
//!
//! An offline generator that turns declarative before/after bit-layout
//! specifications into bitwise transformation code: condition checks that
//! recognize when a word matches a required bit pattern, and mask/shift
//! field-mapping operations that repack bits from one layout into another,
//! in both the encode and decode direction.
//!
//! Layouts are fixed-width strings over `{0, 1, *, A..Z}`: fixed bits,
//! don't-cares, and named variable bits. An ordered [cases::CaseTable] of
//! layout pairs is folded into two first-match-wins branch chains which
//! [render] emits as reviewable source text.
//!
//! ## Example
//!
//! ```
//! use bitforge::layout::BitLayout;
//! use bitforge::mapper::{self, Direction};
//!
//! let input = BitLayout::parse("ABCDEFGH").unwrap();
//! let output = BitLayout::parse("01ABCDEF").unwrap();
//!
//! let encode = mapper::synthesize(&input, &output, Direction::Encode).unwrap();
//! let decode = mapper::synthesize(&input, &output, Direction::Decode).unwrap();
//!
//! let word = 0b10110100;
//! let encoded = encode.apply(word);
//! assert_eq!(encoded, 0b01101101);
//! // Every variable bit survives the round trip.
//! assert_eq!(decode.apply(encoded) & 0b11111100, word & 0b11111100);
//! ```

pub mod cases;
pub mod condition;
pub mod errors;
pub mod fragment;
pub mod layout;
pub mod mapper;
pub mod render;

#[cfg(feature = "serde")]
pub mod serde;
