// This is a part of textcodec, adapted from rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! The trivial codec: one code unit is one code point.
//!
//! Grounded in
//! `examples/original_source/include/text_view_detail/codecs/trivial_codec.hpp`,
//! whose `encode`, `decode`, and `rdecode` are all the same
//! read-one-write-one logic; the only observable failure is running out
//! of input on decode.

use crate::character::{Character, CharacterSet};
use crate::codec::Codec;
use crate::cursor::{Cursor, Reversed};
use crate::sink::CodeUnitSink;
use crate::state::TrivialEncodingState;
use crate::status::{DecodeStatus, EncodeStatus};

/// One code unit, numerically equal to the code point it represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrivialCodec;

impl Codec for TrivialCodec {
    type State = TrivialEncodingState;
    type StateTransition = ();
    type CodeUnit = u32;

    const MIN_CODE_UNITS: usize = 1;
    const MAX_CODE_UNITS: usize = 1;

    fn encode_state_transition<S>(
        _state: &mut Self::State,
        _out: &mut S,
        _transition: Self::StateTransition,
    ) -> EncodeStatus
    where
        S: CodeUnitSink<Self::CodeUnit>,
    {
        EncodeStatus::NoError
    }

    fn encode<CS, S>(_state: &mut Self::State, ch: Character<CS>, sink: &mut S) -> EncodeStatus
    where
        CS: CharacterSet,
        S: CodeUnitSink<Self::CodeUnit>,
    {
        sink.put(ch.code_point());
        EncodeStatus::NoError
    }

    fn decode<CS, I>(
        _state: &mut Self::State,
        input: &mut Cursor<I>,
        ch: &mut Character<CS>,
    ) -> DecodeStatus
    where
        CS: CharacterSet,
        I: Iterator<Item = Self::CodeUnit>,
    {
        match input.advance() {
            Some(code_unit) => {
                ch.set_code_point(code_unit);
                DecodeStatus::NoError
            }
            None => DecodeStatus::Underflow,
        }
    }

    fn rdecode<CS, I>(
        _state: &mut Self::State,
        input: &mut Cursor<Reversed<I>>,
        ch: &mut Character<CS>,
    ) -> DecodeStatus
    where
        CS: CharacterSet,
        I: DoubleEndedIterator<Item = Self::CodeUnit>,
    {
        match input.advance() {
            Some(code_unit) => {
                ch.set_code_point(code_unit);
                DecodeStatus::NoError
            }
            None => DecodeStatus::Underflow,
        }
    }
}
