// This is a part of textcodec, adapted from rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Characters: a code point tagged by a character-set identity.
//!
//! The character-set registry itself (substitution code points, label
//! lookup, conversion between sets) is an external collaborator; this
//! module only defines the minimal contract the core codecs consume from
//! it, per the identity's own documentation: a comparable token
//! (`CharacterSet::NAME`), a default substitution code point
//! (`CharacterSet::REPLACEMENT_CODE_POINT`), and the fact that the
//! identity is attached at the type level rather than stored per-instance.

use std::marker::PhantomData;

/// A numeric code point. 21 bits are sufficient for every Unicode scalar
/// value; codecs validate the useful range themselves rather than the
/// type enforcing it, matching the source's `code_point_type`.
pub type CodePoint = u32;

/// A character-set identity, attached to a [`Character`] at the type
/// level ("character-set identity is per-type, not per-instance").
///
/// Implementations are expected to be zero-sized marker types.
pub trait CharacterSet: Copy + Eq + 'static {
    /// A human-readable, comparable name for this character set.
    const NAME: &'static str;

    /// The code point substituted by higher layers on error. Not used by
    /// the core codecs themselves; exposed for callers that need it.
    const REPLACEMENT_CODE_POINT: CodePoint;
}

/// The Unicode character set: the only one the bundled codecs target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unicode;

impl CharacterSet for Unicode {
    const NAME: &'static str = "unicode";
    const REPLACEMENT_CODE_POINT: CodePoint = 0xFFFD;
}

/// A code point tagged with a character-set identity.
///
/// `CS` carries the identity; no per-instance storage is needed for it.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Character<CS: CharacterSet> {
    code_point: CodePoint,
    _character_set: PhantomData<CS>,
}

impl<CS: CharacterSet> Character<CS> {
    /// Creates a character from a raw code point. The value is not
    /// validated here; codecs validate on encode/decode as appropriate.
    pub fn new(code_point: CodePoint) -> Self {
        Character { code_point, _character_set: PhantomData }
    }

    pub fn code_point(&self) -> CodePoint {
        self.code_point
    }

    pub fn set_code_point(&mut self, code_point: CodePoint) {
        self.code_point = code_point;
    }

    pub fn character_set_name(&self) -> &'static str {
        CS::NAME
    }
}

impl<CS: CharacterSet> Default for Character<CS> {
    fn default() -> Self {
        Character::new(0)
    }
}

impl<CS: CharacterSet> std::fmt::Debug for Character<CS> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Character")
            .field("code_point", &format_args!("U+{:04X}", self.code_point))
            .field("character_set", &CS::NAME)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_code_point() {
        let mut c: Character<Unicode> = Character::new(0x41);
        assert_eq!(c.code_point(), 0x41);
        c.set_code_point(0x1F600);
        assert_eq!(c.code_point(), 0x1F600);
        assert_eq!(c.character_set_name(), "unicode");
    }

    #[test]
    fn default_is_nul() {
        let c: Character<Unicode> = Character::default();
        assert_eq!(c.code_point(), 0);
    }
}
