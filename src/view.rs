// This is a part of textcodec, adapted from rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! A thin façade pairing a codec's initial state with a code-unit range,
//! producing fresh iterators at either endpoint on demand.
//!
//! This stands in for the source's `basic_view`, which is out of scope
//! here (generic range-adapter/view-composition plumbing, not a codec
//! concern — see the specification's non-goals). What a complete crate
//! still needs from that type is the two-line convenience of "give me an
//! iterator at the start" and "give me one at the end"; that's all this
//! provides.

use std::marker::PhantomData;

use crate::character::CharacterSet;
use crate::codec::Codec;
use crate::cursor::{Cursor, Reversed};
use crate::iter::TextIterator;
use crate::status::ErrorPolicy;

/// A code-unit range paired with the codec state iteration over it
/// should start from.
pub struct TextView<C, I, CS, P>
where
    C: Codec,
    CS: CharacterSet,
    P: ErrorPolicy,
{
    state: C::State,
    units: I,
    _marker: PhantomData<(CS, P)>,
}

impl<C, I, CS, P> TextView<C, I, CS, P>
where
    C: Codec,
    I: Clone,
    CS: CharacterSet,
    P: ErrorPolicy,
{
    pub fn new(units: I) -> Self {
        Self::with_state(C::State::default(), units)
    }

    pub fn with_state(state: C::State, units: I) -> Self {
        TextView { state, units, _marker: PhantomData }
    }

    /// An iterator starting at the front of the range and decoding
    /// forward.
    pub fn begin(&self) -> TextIterator<C, Cursor<I>, CS, P>
    where
        I: Iterator<Item = C::CodeUnit>,
    {
        TextIterator::with_state(self.state.clone(), Cursor::new(self.units.clone()))
    }

    /// An iterator starting at the back of the range and decoding
    /// backward.
    pub fn rbegin(&self) -> TextIterator<C, Cursor<Reversed<I>>, CS, P>
    where
        I: DoubleEndedIterator<Item = C::CodeUnit>,
    {
        TextIterator::with_state(self.state.clone(), Cursor::new(Reversed::new(self.units.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Unicode;
    use crate::codec::utf8::Utf8Codec;
    use crate::status::Checked;

    #[test]
    fn begin_and_rbegin_traverse_the_same_range_in_opposite_directions() {
        let bytes = vec![0x41u8, 0xC3, 0xA9, 0xE4, 0xB8, 0xAD];
        let view: TextView<Utf8Codec, _, Unicode, Checked> = TextView::new(bytes.into_iter());

        let forward: Vec<u32> = view.begin().map(|ch| ch.code_point()).collect();
        assert_eq!(forward, vec![0x0041, 0x00E9, 0x4E2D]);

        let backward: Vec<u32> = view.rbegin().map(|ch| ch.code_point()).collect();
        assert_eq!(backward, vec![0x4E2D, 0x00E9, 0x0041]);
    }

    #[test]
    fn each_call_to_begin_starts_a_fresh_iterator() {
        let bytes = vec![0x41u8, 0x42];
        let view: TextView<Utf8Codec, _, Unicode, Checked> = TextView::new(bytes.into_iter());
        let mut first = view.begin();
        first.next();
        let mut second = view.begin();
        assert_eq!(second.next().map(|ch| ch.code_point()), Some(0x41));
    }

    #[test]
    fn rbegin_honors_the_views_initial_state_like_begin_does() {
        use crate::codec::utf16_bom::Utf16BomCodec;
        use crate::state::{Endianness, Utf16BomEncodingState};

        // No leading BOM in the bytes: only a little-endian initial state
        // (set up out of band, as `to_assume_le_bom_written` would) tells
        // either endpoint how to read them.
        let bytes = vec![0x41u8, 0x00, 0x42, 0x00];
        let state = Utf16BomEncodingState { bom_read_or_written: true, endian: Endianness::Little };
        let view: TextView<Utf16BomCodec, _, Unicode, Checked> =
            TextView::with_state(state, bytes.into_iter());

        let forward: Vec<u32> = view.begin().map(|ch| ch.code_point()).collect();
        assert_eq!(forward, vec![0x41, 0x42]);

        let backward: Vec<u32> = view.rbegin().map(|ch| ch.code_point()).collect();
        assert_eq!(backward, vec![0x42, 0x41]);
    }
}
