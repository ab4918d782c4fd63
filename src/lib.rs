// This is a part of textcodec, adapted from rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

/*!

# textcodec

Encoding-aware iteration over text: codec state machines for UTF-8,
UTF-16, and their byte-order-mark variants, driving a bidirectional
character iterator.

A [`codec::Codec`] translates between a stream of code units (`u8` for
the UTF-8 family, `u16`-as-bytes for the UTF-16 family) and a stream of
[`character::Character`]s, forward and backward, tracking whatever state
a byte-order mark requires it to remember. [`iter::TextIterator`] drives
one codec over a code-unit source; [`view::TextView`] hands out fresh
iterators at either end of a range. How a terminal decode failure is
reported — a typed error, or a status left on the iterator — is chosen
independently via [`status::ErrorPolicy`].

```
use textcodec::character::Unicode;
use textcodec::codec::utf8::Utf8Codec;
use textcodec::iter;
use textcodec::status::Checked;

let bytes = [0x41u8, 0xC3, 0xA9, 0xE4, 0xB8, 0xAD];
let chars: Vec<u32> = iter::forward::<Utf8Codec, _, Unicode, Checked>(bytes.into_iter())
    .map(|ch| ch.code_point())
    .collect();
assert_eq!(chars, vec![0x41, 0xE9, 0x4E2D]);
```

What this crate deliberately does not do: maintain a registry of named
character sets or legacy encodings (that's [`character::CharacterSet`]'s
job to define, not this crate's to populate), expose generic
range/iterator-adapter machinery beyond [`cursor::Cursor`] and
[`cursor::Reversed`], or pick an error policy on the caller's behalf.

*/

pub mod character;
pub mod codec;
pub mod cursor;
pub mod iter;
pub mod sink;
pub mod state;
pub mod status;
pub mod view;
