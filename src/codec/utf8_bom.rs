// This is a part of textcodec, adapted from rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! UTF-8 with an optional leading byte-order mark.
//!
//! Grounded in
//! `examples/original_source/include/text_view_detail/codecs/utf8bom_codec.hpp`:
//! encoding writes `EF BB BF` before the first character if no BOM has
//! been committed to yet; decoding swallows a leading `U+FEFF` exactly
//! once; reverse-decoding only swallows it when the character it just
//! read sits at the true start of the sequence (`in_next == in_end` in
//! the source, `input.is_at_end()` here) — a `U+FEFF` anywhere else is an
//! ordinary character, not a mark.

use crate::character::{Character, CharacterSet};
use crate::codec::utf8::Utf8Codec;
use crate::codec::Codec;
use crate::cursor::{Cursor, Reversed};
use crate::sink::CodeUnitSink;
use crate::state::{StatelessEncodingState, Utf8BomEncodingState, Utf8BomStateTransition};
use crate::status::{DecodeStatus, EncodeStatus};

const BOM: u32 = 0xFEFF;

/// UTF-8 that writes or expects a leading byte-order mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Utf8BomCodec;

impl Codec for Utf8BomCodec {
    type State = Utf8BomEncodingState;
    type StateTransition = Utf8BomStateTransition;
    type CodeUnit = u8;

    const MIN_CODE_UNITS: usize = Utf8Codec::MIN_CODE_UNITS;
    const MAX_CODE_UNITS: usize = Utf8Codec::MAX_CODE_UNITS;

    fn encode_state_transition<S>(
        state: &mut Self::State,
        out: &mut S,
        transition: Self::StateTransition,
    ) -> EncodeStatus
    where
        S: CodeUnitSink<Self::CodeUnit>,
    {
        match transition {
            Utf8BomStateTransition::ToInitial => state.bom_read_or_written = false,
            Utf8BomStateTransition::ToBomWritten => {
                if !state.bom_read_or_written {
                    out.put_all(&[0xEF, 0xBB, 0xBF]);
                    state.bom_read_or_written = true;
                }
            }
            Utf8BomStateTransition::ToAssumeBomWritten => state.bom_read_or_written = true,
        }
        EncodeStatus::NoError
    }

    fn encode<CS, S>(state: &mut Self::State, ch: Character<CS>, sink: &mut S) -> EncodeStatus
    where
        CS: CharacterSet,
        S: CodeUnitSink<Self::CodeUnit>,
    {
        if !state.bom_read_or_written {
            let bom: Character<CS> = Character::new(BOM);
            let status = Utf8Codec::encode(&mut StatelessEncodingState::default(), bom, sink);
            if status != EncodeStatus::NoError {
                return status;
            }
            state.bom_read_or_written = true;
        }
        Utf8Codec::encode(&mut StatelessEncodingState::default(), ch, sink)
    }

    fn decode<CS, I>(
        state: &mut Self::State,
        input: &mut Cursor<I>,
        ch: &mut Character<CS>,
    ) -> DecodeStatus
    where
        CS: CharacterSet,
        I: Iterator<Item = Self::CodeUnit>,
    {
        let status = Utf8Codec::decode(&mut StatelessEncodingState::default(), input, ch);
        if !state.bom_read_or_written {
            state.bom_read_or_written = true;
            if status == DecodeStatus::NoError && ch.code_point() == BOM {
                return DecodeStatus::NoCharacter;
            }
        }
        status
    }

    fn rdecode<CS, I>(
        state: &mut Self::State,
        input: &mut Cursor<Reversed<I>>,
        ch: &mut Character<CS>,
    ) -> DecodeStatus
    where
        CS: CharacterSet,
        I: DoubleEndedIterator<Item = Self::CodeUnit>,
    {
        let status = Utf8Codec::rdecode(&mut StatelessEncodingState::default(), input, ch);
        if status == DecodeStatus::NoError {
            state.bom_read_or_written = true;
            if input.is_at_end() && ch.code_point() == BOM {
                return DecodeStatus::NoCharacter;
            }
        }
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Unicode;

    #[test]
    fn encode_writes_bom_before_first_character_only() {
        let mut state = Utf8BomEncodingState::default();
        let mut sink: Vec<u8> = Vec::new();
        let a: Character<Unicode> = Character::new(0x41);
        let b: Character<Unicode> = Character::new(0x42);
        assert_eq!(Utf8BomCodec::encode(&mut state, a, &mut sink), EncodeStatus::NoError);
        assert_eq!(Utf8BomCodec::encode(&mut state, b, &mut sink), EncodeStatus::NoError);
        assert_eq!(sink, vec![0xEF, 0xBB, 0xBF, 0x41, 0x42]);
    }

    #[test]
    fn decode_swallows_leading_bom() {
        let mut state = Utf8BomEncodingState::default();
        let bytes = [0xEFu8, 0xBB, 0xBF, 0x41];
        let mut input = Cursor::new(bytes.into_iter());
        let mut ch: Character<Unicode> = Character::default();
        assert_eq!(
            Utf8BomCodec::decode(&mut state, &mut input, &mut ch),
            DecodeStatus::NoCharacter
        );
        assert_eq!(Utf8BomCodec::decode(&mut state, &mut input, &mut ch), DecodeStatus::NoError);
        assert_eq!(ch.code_point(), 0x41);
    }

    #[test]
    fn decode_without_bom_yields_first_character_directly() {
        let mut state = Utf8BomEncodingState::default();
        let bytes = [0x41u8];
        let mut input = Cursor::new(bytes.into_iter());
        let mut ch: Character<Unicode> = Character::default();
        assert_eq!(Utf8BomCodec::decode(&mut state, &mut input, &mut ch), DecodeStatus::NoError);
        assert_eq!(ch.code_point(), 0x41);
    }

    #[test]
    fn to_bom_written_transition_emits_the_mark_once() {
        let mut state = Utf8BomEncodingState::default();
        let mut sink: Vec<u8> = Vec::new();
        assert_eq!(
            Utf8BomCodec::encode_state_transition(
                &mut state,
                &mut sink,
                Utf8BomStateTransition::ToBomWritten
            ),
            EncodeStatus::NoError
        );
        assert_eq!(sink, vec![0xEF, 0xBB, 0xBF]);

        // BOM idempotence: asking again writes nothing more.
        assert_eq!(
            Utf8BomCodec::encode_state_transition(
                &mut state,
                &mut sink,
                Utf8BomStateTransition::ToBomWritten
            ),
            EncodeStatus::NoError
        );
        assert_eq!(sink, vec![0xEF, 0xBB, 0xBF]);

        let a: Character<Unicode> = Character::new(0x41);
        assert_eq!(Utf8BomCodec::encode(&mut state, a, &mut sink), EncodeStatus::NoError);
        assert_eq!(sink, vec![0xEF, 0xBB, 0xBF, 0x41]);
    }

    #[test]
    fn rdecode_absorbs_bom_only_at_the_true_start() {
        let mut state = Utf8BomEncodingState::default();
        let bytes = [0xEFu8, 0xBB, 0xBF, 0x41];
        let mut input = Cursor::new(Reversed::new(bytes.into_iter()));
        let mut ch: Character<Unicode> = Character::default();
        assert_eq!(Utf8BomCodec::rdecode(&mut state, &mut input, &mut ch), DecodeStatus::NoError);
        assert_eq!(ch.code_point(), 0x41);
        assert_eq!(
            Utf8BomCodec::rdecode(&mut state, &mut input, &mut ch),
            DecodeStatus::NoCharacter
        );
    }
}
