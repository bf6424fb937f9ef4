// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Everything in here is a single pass consumer of [`Catalog::scan`]. None of these
//! operations can fail: text that contains no emoji, isn't valid `UTF-8`, or is empty
//! just flows through as plain runs.

use super::EmojiToken;
use crate::{Catalog, Span, SpanIter, SpanKind, scan, scan_bytes};

impl Catalog {
    /// See [`crate::scan`].
    #[must_use]
    pub fn scan<'a>(&self, text: &'a str) -> SpanIter<'_, 'a> { scan(self, text) }

    /// See [`crate::scan_bytes`].
    #[must_use]
    pub fn scan_bytes<'a>(&self, bytes: &'a [u8]) -> SpanIter<'_, 'a> {
        scan_bytes(self, bytes)
    }

    /// `true` if `text` holds at least one emoji token. Stops scanning at the first one.
    #[must_use]
    pub fn has_emoji(&self, text: &str) -> bool { self.scan(text).any(|it| it.is_emoji()) }

    #[must_use]
    pub fn has_emoji_bytes(&self, bytes: &[u8]) -> bool {
        self.scan_bytes(bytes).any(|it| it.is_emoji())
    }

    /// `text` with every emoji token removed. Everything else, including selectors and
    /// joiners that aren't part of a token, is kept as is.
    #[must_use]
    pub fn filter_emoji(&self, text: &str) -> String {
        let mut acc = String::with_capacity(text.len());
        for span in self.scan(text).filter(|it| !it.is_emoji()) {
            acc.push_str(span.get_str(text));
        }
        acc
    }

    /// Same as [`Self::filter_emoji`]. Invalid bytes are plain, so they are kept.
    #[must_use]
    pub fn filter_emoji_bytes(&self, bytes: &[u8]) -> Vec<u8> {
        let mut acc = Vec::with_capacity(bytes.len());
        for span in self.scan_bytes(bytes).filter(|it| !it.is_emoji()) {
            acc.extend_from_slice(span.get_bytes(bytes));
        }
        acc
    }

    /// Replace each emoji token in `text` with whatever `transform` returns for it. Plain
    /// runs are copied verbatim.
    ///
    /// `transform` is called exactly once per token, left to right, with the matched
    /// text. Its output is never scanned again, so returning an emoji is fine.
    ///
    /// ```
    /// use r3bl_emoji::{Catalog, CatalogConfig};
    ///
    /// let catalog = Catalog::bundled(CatalogConfig::default()).unwrap();
    /// let mut count = 0;
    /// let it = catalog.replace_emoji("1\u{20E3}\u{FE0F}234\u{20E3}\u{FE0F}", |_| {
    ///     count += 1;
    ///     if count == 1 { "1" } else { "" }
    /// });
    /// assert_eq!(it, "123");
    /// ```
    pub fn replace_emoji<S: AsRef<str>>(
        &self,
        text: &str,
        mut transform: impl FnMut(&str) -> S,
    ) -> String {
        self.replace_all_emoji_func(text, |token| transform(token.text))
    }

    /// Same as [`Self::replace_emoji`], over bytes. Invalid bytes are plain, so they are
    /// copied verbatim, as in [`Self::filter_emoji_bytes`].
    pub fn replace_emoji_bytes<B: AsRef<[u8]>>(
        &self,
        bytes: &[u8],
        mut transform: impl FnMut(&[u8]) -> B,
    ) -> Vec<u8> {
        let mut acc = Vec::with_capacity(bytes.len());
        for span in self.scan_bytes(bytes) {
            let span_bytes = span.get_bytes(bytes);
            match span.kind {
                SpanKind::PlainRun => acc.extend_from_slice(span_bytes),
                SpanKind::Emoji(_) => acc.extend_from_slice(transform(span_bytes).as_ref()),
            }
        }
        acc
    }

    /// Same as [`Self::replace_emoji`], but `transform` gets an [`EmojiToken`] that also
    /// carries the token's index, byte offset, and catalog [`crate::Sequence`].
    pub fn replace_all_emoji_func<S: AsRef<str>>(
        &self,
        text: &str,
        mut transform: impl FnMut(&EmojiToken<'_, '_>) -> S,
    ) -> String {
        let mut acc = String::with_capacity(text.len());
        let mut index = 0;
        for span in self.scan(text) {
            match span.kind {
                SpanKind::PlainRun => acc.push_str(span.get_str(text)),
                SpanKind::Emoji(sequence) => {
                    let token = EmojiToken {
                        index,
                        text: span.get_str(text),
                        start_byte_index: span.start_byte_index,
                        sequence,
                    };
                    acc.push_str(transform(&token).as_ref());
                    index += 1;
                }
            }
        }
        acc
    }

    /// How many glyphs a person reading `text` would count: one per emoji token, plus
    /// one per codepoint outside of them.
    ///
    /// This isn't a full grapheme cluster count, since a letter followed by a combining
    /// accent counts as two.
    #[must_use]
    pub fn human_read_len(&self, text: &str) -> usize {
        self.scan(text).map(|it| human_read_len_of(&it)).sum()
    }

    /// Same as [`Self::human_read_len`]. Each invalid byte counts as one.
    #[must_use]
    pub fn human_read_len_bytes(&self, bytes: &[u8]) -> usize {
        self.scan_bytes(bytes).map(|it| human_read_len_of(&it)).sum()
    }

    /// The emoji tokens of `text`, in order.
    pub fn find_emoji<'a>(&self, text: &'a str) -> impl Iterator<Item = &'a str> {
        self.scan(text)
            .filter(Span::is_emoji)
            .map(move |it| it.get_str(text))
    }

    #[must_use]
    pub fn count_emoji(&self, text: &str) -> usize {
        self.scan(text).filter(Span::is_emoji).count()
    }
}

fn human_read_len_of(span: &Span<'_>) -> usize {
    match span.kind {
        SpanKind::Emoji(_) => 1,
        SpanKind::PlainRun => span.codepoint_len,
    }
}
