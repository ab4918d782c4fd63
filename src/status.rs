// This is a part of textcodec, adapted from rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Status taxonomy and the two error-policy modes.
//!
//! Codecs always return a status value (§4.1 of the specification); it is
//! the iteration driver, parameterized by an [`ErrorPolicy`], that decides
//! whether a terminal status becomes a typed error (`Strict`) or is left
//! on the iterator for inspection (`Checked`).

use std::borrow::Cow;
use std::fmt;

/// Outcome of an `encode` or `encode_state_transition` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeStatus {
    /// The character was encoded (or the transition applied) successfully.
    NoError,
    /// The code point cannot be represented in the target encoding: it is
    /// a surrogate, out of range, or (for BOM codecs) an endian that
    /// contradicts the state already committed to.
    InvalidCharacter,
}

/// Outcome of a `decode` or `rdecode` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStatus {
    /// A character was decoded successfully.
    NoError,
    /// Code units were consumed but they were a byte-order mark, not a
    /// character. Not an error: the caller should retry the decode.
    NoCharacter,
    /// The input ended before a complete code-unit sequence was read.
    Underflow,
    /// The code-unit sequence is not a well-formed encoding of any code
    /// point (bad leading unit, missing continuation, invalid surrogate).
    InvalidCodeUnitSequence,
}

impl DecodeStatus {
    /// True for statuses that should stop iteration rather than retry or
    /// complete normally.
    pub fn is_terminal_failure(self) -> bool {
        matches!(self, DecodeStatus::Underflow | DecodeStatus::InvalidCodeUnitSequence)
    }
}

/// A code point could not be encoded in the target encoding.
#[derive(Debug, thiserror::Error)]
#[error("text encode error: {cause}")]
pub struct TextEncodeError {
    pub cause: Cow<'static, str>,
}

impl TextEncodeError {
    pub fn new(cause: impl Into<Cow<'static, str>>) -> Self {
        TextEncodeError { cause: cause.into() }
    }
}

/// A code-unit sequence was not a well-formed encoding of any code point.
#[derive(Debug, thiserror::Error)]
#[error("text decode error: {cause}")]
pub struct TextDecodeError {
    pub cause: Cow<'static, str>,
}

impl TextDecodeError {
    pub fn new(cause: impl Into<Cow<'static, str>>) -> Self {
        TextDecodeError { cause: cause.into() }
    }
}

/// Input ended before a complete code-unit sequence was read.
#[derive(Debug, thiserror::Error)]
#[error("text decode underflow error: {cause}")]
pub struct TextDecodeUnderflowError {
    pub cause: Cow<'static, str>,
}

impl TextDecodeUnderflowError {
    pub fn new(cause: impl Into<Cow<'static, str>>) -> Self {
        TextDecodeUnderflowError { cause: cause.into() }
    }
}

/// The decode-side failure a [`Strict`] iterator raises.
#[derive(Debug, thiserror::Error)]
pub enum TextDecodeFailure {
    #[error(transparent)]
    Underflow(#[from] TextDecodeUnderflowError),
    #[error(transparent)]
    Malformed(#[from] TextDecodeError),
}

/// Converts a terminal [`DecodeStatus`] into the typed failure a `Strict`
/// policy surfaces. Panics if called on a non-terminal status; the driver
/// never does so.
pub(crate) fn decode_failure(status: DecodeStatus, cause: &'static str) -> TextDecodeFailure {
    match status {
        DecodeStatus::Underflow => TextDecodeUnderflowError::new(cause).into(),
        DecodeStatus::InvalidCodeUnitSequence => TextDecodeError::new(cause).into(),
        DecodeStatus::NoError | DecodeStatus::NoCharacter => {
            unreachable!("decode_failure called on a non-terminal status")
        }
    }
}

/// Converts an `encode`/`encode_state_transition` failure into the typed
/// error a throwing-mode caller raises. There is no encode-side iterator
/// to do this automatically (encoding is driven directly by the caller,
/// one character at a time, not pulled through an iteration protocol);
/// callers that want `Strict`-style errors on the encode path call this
/// themselves, e.g. `encode_failure("U+D800 is an unpaired surrogate")`.
pub fn encode_failure(cause: impl Into<Cow<'static, str>>) -> TextEncodeError {
    TextEncodeError::new(cause)
}

/// Selects whether codec failures are raised as typed errors or left on
/// the iterator as a status for the caller to poll.
///
/// This is the "two-policy contract" the specification calls out (§1, §6,
/// §7) without prescribing a concrete shape; `Strict` and `Checked` are
/// the two witnesses. The trait is sealed: no third policy is meaningful
/// without changing the iterator's public surface.
///
/// `Item<CS>` is what [`crate::iter::TextIterator`] yields per character:
/// `Strict` wraps it in a `Result` so a terminal failure arrives as one
/// last `Err` item; `Checked` yields the character directly and falls
/// silent on failure, leaving the status on the iterator itself.
pub trait ErrorPolicy: sealed::Sealed + Default + Clone + fmt::Debug {
    type Item<CS: crate::character::CharacterSet>;

    /// Wraps a successfully decoded character.
    fn success<CS: crate::character::CharacterSet>(
        ch: crate::character::Character<CS>,
    ) -> Self::Item<CS>;

    /// Called when decoding hits a terminal status. Returns `Some` to
    /// yield one final item before iteration ends (`Strict`), or `None`
    /// to end iteration silently (`Checked`).
    fn terminal<CS: crate::character::CharacterSet>(
        status: DecodeStatus,
        cause: &'static str,
    ) -> Option<Self::Item<CS>>;
}

/// Throwing mode: a terminal decode status arrives as one final `Err`
/// item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Strict;

impl ErrorPolicy for Strict {
    type Item<CS: crate::character::CharacterSet> =
        Result<crate::character::Character<CS>, TextDecodeFailure>;

    fn success<CS: crate::character::CharacterSet>(
        ch: crate::character::Character<CS>,
    ) -> Self::Item<CS> {
        Ok(ch)
    }

    fn terminal<CS: crate::character::CharacterSet>(
        status: DecodeStatus,
        cause: &'static str,
    ) -> Option<Self::Item<CS>> {
        Some(Err(decode_failure(status, cause)))
    }
}

/// Status-reporting mode: iteration falls silent on a terminal status;
/// the status is recorded on the iterator for `error_occurred`/
/// `get_error` to report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Checked;

impl ErrorPolicy for Checked {
    type Item<CS: crate::character::CharacterSet> = crate::character::Character<CS>;

    fn success<CS: crate::character::CharacterSet>(
        ch: crate::character::Character<CS>,
    ) -> Self::Item<CS> {
        ch
    }

    fn terminal<CS: crate::character::CharacterSet>(
        _status: DecodeStatus,
        _cause: &'static str,
    ) -> Option<Self::Item<CS>> {
        None
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Strict {}
    impl Sealed for super::Checked {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_reports_underflow_as_typed_error() {
        let err = decode_failure(DecodeStatus::Underflow, "ran out of input");
        assert!(matches!(err, TextDecodeFailure::Underflow(_)));
    }

    #[test]
    fn strict_reports_malformed_as_typed_error() {
        let err = decode_failure(DecodeStatus::InvalidCodeUnitSequence, "bad byte");
        assert!(matches!(err, TextDecodeFailure::Malformed(_)));
    }

    #[test]
    fn encode_failure_wraps_the_cause() {
        let err = encode_failure("U+D800 is an unpaired surrogate");
        assert_eq!(err.cause, "U+D800 is an unpaired surrogate");
    }

    #[test]
    fn terminal_failure_classification() {
        assert!(DecodeStatus::Underflow.is_terminal_failure());
        assert!(DecodeStatus::InvalidCodeUnitSequence.is_terminal_failure());
        assert!(!DecodeStatus::NoError.is_terminal_failure());
        assert!(!DecodeStatus::NoCharacter.is_terminal_failure());
    }
}
