// This is a part of textcodec, adapted from rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Per-codec state and state-transition types.
//!
//! Grounded in
//! `examples/original_source/include/text_view_detail/codecs/*.hpp`: each
//! codec that needs to remember something across `encode`/`decode` calls
//! (whether a BOM has been committed to, and which endian) names that
//! state as its own small type, exactly as done here.

/// Byte order, as determined at runtime by a BOM codec. Distinct from the
/// compile-time `Endian` marker the plain UTF-16 codec uses
/// ([`crate::codec::utf16::Endian`]): here the direction is discovered
/// while decoding, not fixed by the caller ahead of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Big,
    Little,
}

/// State for the trivial codec: none needed, one code unit is one
/// character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrivialEncodingState;

/// State for the plain (non-BOM) UTF-8 and UTF-16 codecs: none needed,
/// each `decode`/`encode` call is independent of the ones before it.
pub type StatelessEncodingState = TrivialEncodingState;

/// State for the UTF-8-with-BOM codec: has a BOM been read or written
/// yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf8BomEncodingState {
    pub bom_read_or_written: bool,
}

/// Requests a state change on the UTF-8-with-BOM codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utf8BomStateTransition {
    /// Forget any BOM already read or written; the next encode will
    /// write one.
    ToInitial,
    /// Record that a BOM has already been written, without writing it.
    ToBomWritten,
    /// Assume a BOM has already been read, without one being present in
    /// the input (used when the caller knows the encoding out of band).
    ToAssumeBomWritten,
}

/// State for the UTF-16-with-BOM codec: has a BOM been read or written,
/// and which endian is in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf16BomEncodingState {
    pub bom_read_or_written: bool,
    pub endian: Endianness,
}

impl Default for Utf16BomEncodingState {
    fn default() -> Self {
        Utf16BomEncodingState { bom_read_or_written: false, endian: Endianness::Big }
    }
}

/// Requests a state change on the UTF-16-with-BOM codec.
///
/// Mirrors `utf16bom_encoding_state_transition` in the source exactly:
/// seven variants, covering both endians and "written" (a BOM is actually
/// emitted/consumed) vs. "assumed" (the endian is fixed without one). The
/// bare `ToBomWritten`/`ToAssumeBomWritten` are explicit big-endian
/// aliases — `to_bom_written` and `to_be_bom_written` share one switch
/// case in the source, and so do `to_assume_bom_written` and
/// `to_assume_be_bom_written` — not a native-endian shorthand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utf16BomStateTransition {
    ToInitial,
    /// Alias of [`Self::ToBeBomWritten`]: emits `FE FF`, commits to
    /// big-endian.
    ToBomWritten,
    ToBeBomWritten,
    ToLeBomWritten,
    /// Alias of [`Self::ToAssumeBeBomWritten`]: commits to big-endian
    /// without emitting anything.
    ToAssumeBomWritten,
    ToAssumeBeBomWritten,
    ToAssumeLeBomWritten,
}
