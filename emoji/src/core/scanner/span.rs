// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug, ops::Range};

use crate::Sequence;

/// What a [`Span`] covers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpanKind<'c> {
    /// One or more codepoints (or invalid bytes) that aren't part of any emoji.
    PlainRun,
    /// Exactly one emoji token, and the catalog sequence that it matched.
    Emoji(&'c Sequence),
}

/// A contiguous piece of the scanned input, produced by [`super::SpanIter`].
///
/// Spans don't own or borrow the input. They are a "view" into it, made of byte offsets
/// that can be used to slice the original buffer, see [`Self::get_str`] and
/// [`Self::get_bytes`]. Consecutive spans from a scan touch end to start, with no gaps
/// and no overlaps, so concatenating their slices gives back the input.
///
/// Two consecutive spans are never both [`SpanKind::PlainRun`].
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Span<'c> {
    /// Byte offset (inclusive) in the scanned input where this span starts.
    pub start_byte_index: usize,

    /// Byte offset (exclusive) in the scanned input where this span ends.
    pub end_byte_index: usize,

    /// Number of codepoints covered. An invalid byte in the input counts as one.
    pub codepoint_len: usize,

    pub kind: SpanKind<'c>,
}

impl<'c> Span<'c> {
    #[must_use]
    pub fn new(
        byte_range: Range<usize>,
        codepoint_len: usize,
        kind: SpanKind<'c>,
    ) -> Self {
        Self {
            start_byte_index: byte_range.start,
            end_byte_index: byte_range.end,
            codepoint_len,
            kind,
        }
    }

    #[must_use]
    pub fn byte_range(&self) -> Range<usize> { self.start_byte_index..self.end_byte_index }

    #[must_use]
    pub fn byte_len(&self) -> usize { self.end_byte_index - self.start_byte_index }

    #[must_use]
    pub fn is_emoji(&self) -> bool { matches!(self.kind, SpanKind::Emoji(_)) }

    /// The matched catalog sequence, if this is an emoji token.
    #[must_use]
    pub fn sequence(&self) -> Option<&'c Sequence> {
        match self.kind {
            SpanKind::Emoji(it) => Some(it),
            SpanKind::PlainRun => None,
        }
    }

    /// Slice of the text that was scanned to produce this span.
    ///
    /// # Panics
    ///
    /// If `arg_str` isn't the text that was scanned.
    pub fn get_str<'a>(&self, arg_str: &'a (impl AsRef<str> + ?Sized)) -> &'a str {
        &arg_str.as_ref()[self.byte_range()]
    }

    /// Slice of the buffer that was scanned to produce this span.
    ///
    /// # Panics
    ///
    /// If `arg_bytes` isn't the buffer that was scanned.
    pub fn get_bytes<'a>(&self, arg_bytes: &'a (impl AsRef<[u8]> + ?Sized)) -> &'a [u8] {
        &arg_bytes.as_ref()[self.byte_range()]
    }
}

/// Pretty print that is compact and easier to read than the derived one.
impl Debug for Span<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind: &'static str = match self.kind {
            SpanKind::PlainRun => "plain",
            SpanKind::Emoji(it) => it.kind().into(),
        };
        write!(
            f,
            "Span[{kind}] ┆ byte: [{b_b:>2}, {b_e:>2}] size: {b_s} ┆ codepoints: {c_l}",
            b_b = self.start_byte_index,
            b_e = self.end_byte_index,
            b_s = self.byte_len(),
            c_l = self.codepoint_len,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SequenceKind, assert_eq2};

    #[test]
    fn test_span_slices() {
        let text = "ab🇨🇳";
        let seq = Sequence::new(
            vec!['\u{1F1E8}', '\u{1F1F3}'].into_boxed_slice(),
            SequenceKind::RegionalFlag,
        );
        let plain = Span::new(0..2, 2, SpanKind::PlainRun);
        let emoji = Span::new(2..10, 2, SpanKind::Emoji(&seq));

        assert_eq2!(plain.get_str(text), "ab");
        assert_eq2!(emoji.get_str(text), "🇨🇳");
        assert_eq2!(emoji.get_bytes(text.as_bytes()), "🇨🇳".as_bytes());
        assert_eq2!(emoji.byte_len(), 8);
        assert!(emoji.is_emoji());
        assert!(!plain.is_emoji());
        assert_eq2!(emoji.sequence(), Some(&seq));
        assert_eq2!(plain.sequence(), None);
    }

    #[test]
    fn test_span_debug() {
        let seq = Sequence::new(vec!['\u{1F600}'].into_boxed_slice(), SequenceKind::Basic);
        let emoji = Span::new(3..7, 1, SpanKind::Emoji(&seq));
        assert_eq2!(
            format!("{emoji:?}"),
            "Span[Basic] ┆ byte: [ 3,  7] size: 4 ┆ codepoints: 1"
        );
        let plain = Span::new(0..3, 3, SpanKind::PlainRun);
        assert_eq2!(
            format!("{plain:?}"),
            "Span[plain] ┆ byte: [ 0,  3] size: 3 ┆ codepoints: 3"
        );
    }
}
