// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::iter::FusedIterator;

use super::{Span, SpanKind};
use crate::{Catalog, Decoded, PrefixMatcher, decode_at};

/// Lazily split `text` into [`Span`]s, in one left to right pass.
///
/// ```
/// use r3bl_emoji::{global_catalog, scan};
///
/// let text = "hi 👋🏽!";
/// let spans: Vec<_> = scan(global_catalog(), text).map(|it| it.get_str(text)).collect();
/// assert_eq!(spans, vec!["hi ", "👋🏽", "!"]);
/// ```
#[must_use]
pub fn scan<'c, 'a>(catalog: &'c Catalog, text: &'a str) -> SpanIter<'c, 'a> {
    SpanIter::new(catalog, text.as_bytes())
}

/// Same as [`scan`], for a buffer that may not be valid `UTF-8`. Each byte that isn't
/// part of a valid encoding becomes one unit of a [`SpanKind::PlainRun`].
#[must_use]
pub fn scan_bytes<'c, 'a>(catalog: &'c Catalog, bytes: &'a [u8]) -> SpanIter<'c, 'a> {
    SpanIter::new(catalog, bytes)
}

/// The plain run that is being accumulated, not yet emitted.
#[derive(Copy, Clone, Debug)]
struct PendingRun {
    start_byte_index: usize,
    codepoint_len: usize,
}

/// Iterator over the [`Span`]s of a buffer, created by [`scan`] and [`scan_bytes`].
///
/// At each position the [`PrefixMatcher`] looks for the longest emoji sequence. On a
/// match, the pending plain run (if any) is emitted first, then the emoji token, and the
/// position moves past the match. Otherwise the pending plain run grows by one unit. The
/// pending run is flushed at the end of the input.
///
/// Work is only done on demand: dropping the iterator early leaves the rest of the
/// buffer unscanned.
#[derive(Debug, Clone)]
pub struct SpanIter<'c, 'a> {
    matcher: PrefixMatcher<'c>,
    bytes: &'a [u8],
    /// Byte offset of the next unit to look at.
    pos: usize,
    pending_run: Option<PendingRun>,
    /// An emoji token found right after a plain run, emitted on the next call.
    queued: Option<Span<'c>>,
}

impl<'c, 'a> SpanIter<'c, 'a> {
    fn new(catalog: &'c Catalog, bytes: &'a [u8]) -> Self {
        Self {
            matcher: catalog.matcher(),
            bytes,
            pos: 0,
            pending_run: None,
            queued: None,
        }
    }

    /// The buffer being scanned.
    #[must_use]
    pub fn bytes(&self) -> &'a [u8] { self.bytes }

    /// Ends the pending plain run at the current position.
    fn take_pending_run(&mut self) -> Option<Span<'c>> {
        self.pending_run.take().map(|run| {
            Span::new(
                run.start_byte_index..self.pos,
                run.codepoint_len,
                SpanKind::PlainRun,
            )
        })
    }
}

impl<'c> Iterator for SpanIter<'c, '_> {
    type Item = Span<'c>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(span) = self.queued.take() {
            return Some(span);
        }

        while self.pos < self.bytes.len() {
            if let Some(it) = self.matcher.longest_match_at(self.bytes, self.pos) {
                let emoji = Span::new(
                    self.pos..self.pos + it.byte_len,
                    it.codepoint_len,
                    SpanKind::Emoji(it.sequence),
                );
                let pending = self.take_pending_run();
                self.pos = emoji.end_byte_index;
                return match pending {
                    Some(run) => {
                        self.queued = Some(emoji);
                        Some(run)
                    }
                    None => Some(emoji),
                };
            }

            let unit_len = decode_at(self.bytes, self.pos).map_or(1, Decoded::byte_len);
            let run = self.pending_run.get_or_insert(PendingRun {
                start_byte_index: self.pos,
                codepoint_len: 0,
            });
            run.codepoint_len += 1;
            self.pos += unit_len;
        }

        self.take_pending_run()
    }
}

impl FusedIterator for SpanIter<'_, '_> {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::{SequenceKind, global_catalog};

    /// `(text, is_emoji, codepoint_len)` for each span.
    fn summarize(text: &str) -> Vec<(&str, bool, usize)> {
        scan(global_catalog(), text)
            .map(|it| (it.get_str(text), it.is_emoji(), it.codepoint_len))
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(scan(global_catalog(), "").next(), None);
        assert_eq!(scan_bytes(global_catalog(), b"").next(), None);
    }

    #[test_case("abc", &[("abc", false, 3)] ; "plain only")]
    #[test_case("😀", &[("😀", true, 1)] ; "emoji only")]
    #[test_case("a😀b", &[("a", false, 1), ("😀", true, 1), ("b", false, 1)] ; "emoji in middle")]
    #[test_case("😀😀", &[("😀", true, 1), ("😀", true, 1)] ; "adjacent emoji")]
    #[test_case("⚡x", &[("⚡x", false, 2)] ; "bare legacy symbol is plain")]
    #[test_case("1\u{FE0F}\u{20E3}23", &[("1\u{FE0F}\u{20E3}", true, 3), ("23", false, 2)] ; "keycap then digits")]
    #[test_case("1\u{20E3}\u{FE0F}234\u{20E3}\u{FE0F}", &[("1\u{20E3}\u{FE0F}", true, 3), ("23", false, 2), ("4\u{20E3}\u{FE0F}", true, 3)] ; "absorbed selectors")]
    #[test_case("一二", &[("一二", false, 2)] ; "cjk")]
    fn test_scan(text: &str, expected: &[(&str, bool, usize)]) {
        assert_eq!(summarize(text), expected);
    }

    #[test]
    fn test_emoji_span_carries_sequence() {
        let text = "x🇨🇳";
        let spans: Vec<_> = scan(global_catalog(), text).collect();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[1].start_byte_index, 1);
        assert_eq!(spans[1].end_byte_index, 9);
        assert_eq!(
            spans[1].sequence().map(crate::Sequence::kind),
            Some(SequenceKind::RegionalFlag)
        );
    }

    #[test]
    fn test_scan_bytes_with_invalid_bytes() {
        let mut bytes = b"a".to_vec();
        bytes.extend_from_slice(&[0xFF, 0xFE]);
        bytes.extend_from_slice("😀".as_bytes());
        bytes.push(0x80);

        let spans: Vec<_> = scan_bytes(global_catalog(), &bytes).collect();
        let summary: Vec<_> = spans
            .iter()
            .map(|it| (it.get_bytes(&bytes), it.is_emoji(), it.codepoint_len))
            .collect();
        assert_eq!(
            summary,
            vec![
                (&[b'a', 0xFF, 0xFE][..], false, 3),
                ("😀".as_bytes(), true, 1),
                (&[0x80][..], false, 1),
            ]
        );
    }

    #[test]
    fn test_spans_reconstruct_input() {
        let text = "ab👨‍👩‍👧‍👦c🇨🇳🏴\u{E0067}\u{E0062}\u{E0065}\u{E006E}\u{E0067}\u{E007F}d";
        let mut end = 0;
        let mut rebuilt = String::new();
        for span in scan(global_catalog(), text) {
            assert_eq!(span.start_byte_index, end);
            end = span.end_byte_index;
            rebuilt.push_str(span.get_str(text));
        }
        assert_eq!(end, text.len());
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_fused() {
        let mut iter = scan(global_catalog(), "a😀");
        assert!(iter.next().is_some());
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }
}
