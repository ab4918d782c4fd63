// This is a part of textcodec, adapted from rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! The codec contract and its six implementations.
//!
//! Every codec standardizes on the returning-status shape (matching
//! `utf16_codec.hpp`/`utf16bom_codec.hpp`/`utf8bom_codec.hpp` in the
//! source rather than the throwing `trivial_codec.hpp`/`utf8_codec.hpp`):
//! a codec never panics or propagates a `Result`, it reports an
//! [`EncodeStatus`](crate::status::EncodeStatus) or
//! [`DecodeStatus`](crate::status::DecodeStatus) and lets the caller (the
//! iteration driver, in this crate) decide what a terminal status means.

use crate::character::{Character, CharacterSet};
use crate::cursor::{Cursor, Reversed};
use crate::sink::CodeUnitSink;
use crate::status::{DecodeStatus, EncodeStatus};

pub mod trivial;
pub mod utf16;
pub mod utf16_bom;
pub mod utf8;
pub mod utf8_bom;

/// A codec translates between a stream of `CodeUnit`s and a stream of
/// characters, in both directions, possibly carrying state across calls
/// (a BOM already seen, an endian already committed to).
pub trait Codec: Default {
    /// State carried between calls; `Default` is the initial state.
    type State: Clone + Default + std::fmt::Debug;

    /// A request to change `State` outside of an ordinary encode/decode,
    /// e.g. "assume a BOM has already been written".
    type StateTransition: Copy + std::fmt::Debug;

    /// The unit this codec reads and writes: `u8` for UTF-8 family
    /// codecs, `u16` for UTF-16 family codecs.
    type CodeUnit: Copy + PartialEq + std::fmt::Debug;

    /// The fewest code units one character can ever decode from.
    const MIN_CODE_UNITS: usize;

    /// The most code units one character can ever decode from.
    const MAX_CODE_UNITS: usize;

    /// Applies a state transition outside of ordinary encoding, e.g. to
    /// mark a BOM as already handled without emitting or consuming one, or
    /// to emit one explicitly (`out`) without encoding a character.
    fn encode_state_transition<S>(
        state: &mut Self::State,
        out: &mut S,
        transition: Self::StateTransition,
    ) -> EncodeStatus
    where
        S: CodeUnitSink<Self::CodeUnit>;

    /// Encodes one character, appending its code units to `sink`.
    fn encode<CS, S>(state: &mut Self::State, ch: Character<CS>, sink: &mut S) -> EncodeStatus
    where
        CS: CharacterSet,
        S: CodeUnitSink<Self::CodeUnit>;

    /// Decodes one character from the front of `input`.
    fn decode<CS, I>(
        state: &mut Self::State,
        input: &mut Cursor<I>,
        ch: &mut Character<CS>,
    ) -> DecodeStatus
    where
        CS: CharacterSet,
        I: Iterator<Item = Self::CodeUnit>;

    /// Decodes one character from the back of `input`. Not the forward
    /// algorithm run in reverse: variable-width encodings need a
    /// dedicated backward scan to find where the trailing character
    /// begins (see the `rdecode` impls in `utf8` and `utf16`).
    fn rdecode<CS, I>(
        state: &mut Self::State,
        input: &mut Cursor<Reversed<I>>,
        ch: &mut Character<CS>,
    ) -> DecodeStatus
    where
        CS: CharacterSet,
        I: DoubleEndedIterator<Item = Self::CodeUnit>;
}
