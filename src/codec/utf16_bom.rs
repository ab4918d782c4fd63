// This is a part of textcodec, adapted from rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! UTF-16 with a byte-order mark whose endian is detected on first
//! decode rather than fixed at compile time.
//!
//! Grounded in
//! `examples/original_source/include/text_view_detail/codecs/utf16bom_codec.hpp`.
//! The endian starts at an assumed default (big-endian, matching the
//! source); the first decode reads two bytes under that assumption, and:
//!
//! - if they spell `U+FEFF`, the guess was right, the mark is swallowed;
//! - if they spell `U+FFFE`, the guess was backwards, the endian flips
//!   and the mark is swallowed anyway — this one flip subsumes the
//!   source's separate "already big-endian, see `U+FFFE`" branch;
//! - otherwise there was no mark at all, and those two bytes are the
//!   first real code unit under the assumed endian.
//!
//! Reverse decoding only swallows a mark when the character just read
//! sits at the true start of input (no endian detection there, mirroring
//! the source).

use crate::character::{Character, CharacterSet};
use crate::codec::Codec;
use crate::cursor::{Cursor, Reversed};
use crate::sink::CodeUnitSink;
use crate::state::{Endianness, Utf16BomEncodingState, Utf16BomStateTransition};
use crate::status::{DecodeStatus, EncodeStatus};

const BOM: u32 = 0xFEFF;
const BOM_SWAPPED: u32 = 0xFFFE;

/// UTF-16 with byte-order-mark-driven endian detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Utf16BomCodec;

fn write_u16(endian: Endianness, value: u16) -> [u8; 2] {
    match endian {
        Endianness::Big => value.to_be_bytes(),
        Endianness::Little => value.to_le_bytes(),
    }
}

fn read_u16(endian: Endianness, bytes: [u8; 2]) -> u16 {
    match endian {
        Endianness::Big => u16::from_be_bytes(bytes),
        Endianness::Little => u16::from_le_bytes(bytes),
    }
}

fn read_unit_forward<I: Iterator<Item = u8>>(
    endian: Endianness,
    input: &mut Cursor<I>,
) -> Result<u16, DecodeStatus> {
    let b0 = input.advance().ok_or(DecodeStatus::Underflow)?;
    let b1 = input.advance().ok_or(DecodeStatus::Underflow)?;
    Ok(read_u16(endian, [b0, b1]))
}

fn read_unit_backward<I: DoubleEndedIterator<Item = u8>>(
    endian: Endianness,
    input: &mut Cursor<Reversed<I>>,
) -> Result<u16, DecodeStatus> {
    let last = input.advance().ok_or(DecodeStatus::Underflow)?;
    let second_last = input.advance().ok_or(DecodeStatus::Underflow)?;
    Ok(read_u16(endian, [second_last, last]))
}

/// Commits `state` to `endian`, without writing anything ("assume" requests
/// and the post-write bookkeeping of a "written" request share this).
/// Rejects re-declaring a different endian once one is already committed.
fn apply_endian_transition(state: &mut Utf16BomEncodingState, endian: Endianness) -> EncodeStatus {
    if state.bom_read_or_written && state.endian != endian {
        return EncodeStatus::InvalidCharacter;
    }
    state.bom_read_or_written = true;
    state.endian = endian;
    EncodeStatus::NoError
}

/// As [`apply_endian_transition`], but also emits the byte-order mark
/// itself the first time the endian is committed to.
fn apply_bom_written_transition<S>(
    state: &mut Utf16BomEncodingState,
    out: &mut S,
    endian: Endianness,
) -> EncodeStatus
where
    S: CodeUnitSink<u8>,
{
    let already_committed = state.bom_read_or_written;
    let status = apply_endian_transition(state, endian);
    if status == EncodeStatus::NoError && !already_committed {
        out.put_all(&write_u16(endian, BOM as u16));
    }
    status
}

impl Codec for Utf16BomCodec {
    type State = Utf16BomEncodingState;
    type StateTransition = Utf16BomStateTransition;
    type CodeUnit = u8;

    const MIN_CODE_UNITS: usize = 2;
    const MAX_CODE_UNITS: usize = 4;

    fn encode_state_transition<S>(
        state: &mut Self::State,
        out: &mut S,
        transition: Self::StateTransition,
    ) -> EncodeStatus
    where
        S: CodeUnitSink<Self::CodeUnit>,
    {
        use Utf16BomStateTransition::*;
        match transition {
            ToInitial => {
                state.bom_read_or_written = false;
                state.endian = Endianness::Big;
                EncodeStatus::NoError
            }
            // `ToBomWritten` and `ToBeBomWritten` are the same transition
            // under two names (spec.md §4.6: both share one switch case
            // in the source), as are their "assume" counterparts below.
            ToBomWritten | ToBeBomWritten => {
                apply_bom_written_transition(state, out, Endianness::Big)
            }
            ToLeBomWritten => apply_bom_written_transition(state, out, Endianness::Little),
            ToAssumeBomWritten | ToAssumeBeBomWritten => {
                apply_endian_transition(state, Endianness::Big)
            }
            ToAssumeLeBomWritten => apply_endian_transition(state, Endianness::Little),
        }
    }

    fn encode<CS, S>(state: &mut Self::State, ch: Character<CS>, sink: &mut S) -> EncodeStatus
    where
        CS: CharacterSet,
        S: CodeUnitSink<Self::CodeUnit>,
    {
        if !state.bom_read_or_written {
            sink.put_all(&write_u16(state.endian, BOM as u16));
            state.bom_read_or_written = true;
        }

        let cp = ch.code_point();
        if (0xD800..=0xDFFF).contains(&cp) {
            return EncodeStatus::InvalidCharacter;
        }
        if cp <= 0xFFFF {
            sink.put_all(&write_u16(state.endian, cp as u16));
        } else if cp <= 0x10FFFF {
            let offset = cp - 0x10000;
            let hi = 0xD800 + ((offset >> 10) & 0x3FF) as u16;
            let lo = 0xDC00 + (offset & 0x3FF) as u16;
            sink.put_all(&write_u16(state.endian, hi));
            sink.put_all(&write_u16(state.endian, lo));
        } else {
            return EncodeStatus::InvalidCharacter;
        }
        EncodeStatus::NoError
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
        if !state.bom_read_or_written {
            let cu1 = match read_unit_forward(state.endian, input) {
                Ok(unit) => unit,
                Err(status) => return status,
            };
            state.bom_read_or_written = true;
            if cu1 as u32 == BOM {
                return DecodeStatus::NoCharacter;
            }
            if cu1 as u32 == BOM_SWAPPED {
                state.endian = match state.endian {
                    Endianness::Big => Endianness::Little,
                    Endianness::Little => Endianness::Big,
                };
                return DecodeStatus::NoCharacter;
            }
            return decode_from_first_unit(state.endian, input, ch, cu1);
        }

        let cu1 = match read_unit_forward(state.endian, input) {
            Ok(unit) => unit,
            Err(status) => return status,
        };
        decode_from_first_unit(state.endian, input, ch, cu1)
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
        let cu1 = match read_unit_backward(state.endian, input) {
            Ok(unit) => unit,
            Err(status) => return status,
        };

        let status = if (0xDC00..=0xDFFF).contains(&cu1) {
            let cu2 = match read_unit_backward(state.endian, input) {
                Ok(unit) => unit,
                Err(status) => return status,
            };
            if !(0xD800..=0xDBFF).contains(&cu2) {
                return DecodeStatus::InvalidCodeUnitSequence;
            }
            let cp = 0x10000 + (((cu2 - 0xD800) as u32) << 10) + (cu1 - 0xDC00) as u32;
            ch.set_code_point(cp);
            DecodeStatus::NoError
        } else if (0xD800..=0xDBFF).contains(&cu1) {
            DecodeStatus::InvalidCodeUnitSequence
        } else {
            ch.set_code_point(cu1 as u32);
            DecodeStatus::NoError
        };

        if status == DecodeStatus::NoError {
            state.bom_read_or_written = true;
            if input.is_at_end() && ch.code_point() == BOM {
                return DecodeStatus::NoCharacter;
            }
        }
        status
    }
}

fn decode_from_first_unit<CS, I>(
    endian: Endianness,
    input: &mut Cursor<I>,
    ch: &mut Character<CS>,
    cu1: u16,
) -> DecodeStatus
where
    CS: CharacterSet,
    I: Iterator<Item = u8>,
{
    if (0xD800..=0xDBFF).contains(&cu1) {
        let cu2 = match read_unit_forward(endian, input) {
            Ok(unit) => unit,
            Err(status) => return status,
        };
        if !(0xDC00..=0xDFFF).contains(&cu2) {
            return DecodeStatus::InvalidCodeUnitSequence;
        }
        let cp = 0x10000 + (((cu1 - 0xD800) as u32) << 10) + (cu2 - 0xDC00) as u32;
        ch.set_code_point(cp);
        DecodeStatus::NoError
    } else if (0xDC00..=0xDFFF).contains(&cu1) {
        DecodeStatus::InvalidCodeUnitSequence
    } else {
        ch.set_code_point(cu1 as u32);
        DecodeStatus::NoError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Unicode;

    #[test]
    fn decode_detects_big_endian_bom() {
        let mut state = Utf16BomEncodingState::default();
        let bytes = [0xFEu8, 0xFF, 0x00, 0x41];
        let mut input = Cursor::new(bytes.into_iter());
        let mut ch: Character<Unicode> = Character::default();
        assert_eq!(
            Utf16BomCodec::decode(&mut state, &mut input, &mut ch),
            DecodeStatus::NoCharacter
        );
        assert_eq!(state.endian, Endianness::Big);
        assert_eq!(
            Utf16BomCodec::decode(&mut state, &mut input, &mut ch),
            DecodeStatus::NoError
        );
        assert_eq!(ch.code_point(), 0x41);
    }

    #[test]
    fn decode_flips_to_little_endian_on_swapped_bom() {
        let mut state = Utf16BomEncodingState::default();
        let bytes = [0xFFu8, 0xFE, 0x41, 0x00];
        let mut input = Cursor::new(bytes.into_iter());
        let mut ch: Character<Unicode> = Character::default();
        assert_eq!(
            Utf16BomCodec::decode(&mut state, &mut input, &mut ch),
            DecodeStatus::NoCharacter
        );
        assert_eq!(state.endian, Endianness::Little);
        assert_eq!(
            Utf16BomCodec::decode(&mut state, &mut input, &mut ch),
            DecodeStatus::NoError
        );
        assert_eq!(ch.code_point(), 0x41);
    }

    #[test]
    fn encode_writes_bom_once_then_commits_to_its_endian() {
        let mut state = Utf16BomEncodingState::default();
        let mut sink: Vec<u8> = Vec::new();
        let transition = Utf16BomCodec::encode_state_transition(
            &mut state,
            &mut sink,
            Utf16BomStateTransition::ToLeBomWritten,
        );
        assert_eq!(transition, EncodeStatus::NoError);
        assert_eq!(sink, vec![0xFF, 0xFE]);

        let ch: Character<Unicode> = Character::new(0x41);
        assert_eq!(Utf16BomCodec::encode(&mut state, ch, &mut sink), EncodeStatus::NoError);
        assert_eq!(sink, vec![0xFF, 0xFE, 0x41, 0x00]);

        let flip = Utf16BomCodec::encode_state_transition(
            &mut state,
            &mut sink,
            Utf16BomStateTransition::ToBeBomWritten,
        );
        assert_eq!(flip, EncodeStatus::InvalidCharacter);

        // Re-requesting the already-committed endian is a no-op, not an
        // error, and writes no further bytes.
        let noop = Utf16BomCodec::encode_state_transition(
            &mut state,
            &mut sink,
            Utf16BomStateTransition::ToLeBomWritten,
        );
        assert_eq!(noop, EncodeStatus::NoError);
        assert_eq!(sink, vec![0xFF, 0xFE, 0x41, 0x00]);
    }

    #[test]
    fn bare_to_bom_written_is_the_big_endian_alias() {
        // `to_bom_written`/`to_be_bom_written` share one switch case in
        // the source: the bare variant is not a native-endian shorthand.
        let mut state = Utf16BomEncodingState::default();
        let mut sink: Vec<u8> = Vec::new();
        assert_eq!(
            Utf16BomCodec::encode_state_transition(
                &mut state,
                &mut sink,
                Utf16BomStateTransition::ToBomWritten,
            ),
            EncodeStatus::NoError
        );
        assert_eq!(sink, vec![0xFE, 0xFF]);
        assert_eq!(state.endian, Endianness::Big);
    }

    #[test]
    fn bare_to_assume_bom_written_is_the_big_endian_alias() {
        let mut state = Utf16BomEncodingState::default();
        let mut sink: Vec<u8> = Vec::new();
        assert_eq!(
            Utf16BomCodec::encode_state_transition(
                &mut state,
                &mut sink,
                Utf16BomStateTransition::ToAssumeBomWritten,
            ),
            EncodeStatus::NoError
        );
        assert!(sink.is_empty());
        assert_eq!(state.endian, Endianness::Big);
    }
}
