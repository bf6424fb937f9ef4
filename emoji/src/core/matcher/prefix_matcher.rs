// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::SmallVec;

use super::{Decoded, Utf8Cursor, decode_at};
use crate::{Catalog, Sequence, VS16_EMOJI, is_variation_selector};

/// Codepoints decoded ahead of a position, plus the byte offset where each one ends.
/// Sized for the longest bundled sequence plus an absorbed selector.
type Window = SmallVec<[(char, usize); 16]>;

/// The result of a successful longest match.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EmojiMatch<'c> {
    /// The catalog sequence that matched.
    pub sequence: &'c Sequence,
    /// Codepoints consumed from the input. This is the sequence length, plus one when a
    /// trailing U+FE0F was absorbed.
    pub codepoint_len: usize,
    /// `UTF-8` bytes consumed from the input.
    pub byte_len: usize,
}

/// Longest prefix match of catalog sequences against input text.
///
/// At a given position, the matcher fetches the candidates that start with the
/// codepoint there (longest first, see [`Catalog::candidates`]) and returns the first
/// one whose codepoints all equal the input, position by position. Equality is exact:
/// no normalization, and no semantic equivalence.
///
/// The matcher never fails. No match is [`None`], not an error.
///
/// ```
/// use r3bl_emoji::{Catalog, CatalogConfig};
///
/// let catalog = Catalog::bundled(CatalogConfig::default()).unwrap();
/// let matcher = catalog.matcher();
/// let text: Vec<char> = "a🇨🇳".chars().collect();
///
/// assert!(matcher.longest_match(&text, 0).is_none());
/// let it = matcher.longest_match(&text, 1).unwrap();
/// assert_eq!(it.codepoint_len, 2);
/// assert_eq!(it.byte_len, 8);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct PrefixMatcher<'c> {
    catalog: &'c Catalog,
}

impl<'c> PrefixMatcher<'c> {
    #[must_use]
    pub fn new(catalog: &'c Catalog) -> Self { Self { catalog } }

    #[must_use]
    pub fn catalog(&self) -> &'c Catalog { self.catalog }

    /// Longest catalog sequence that starts at `codepoints[position]`. Returns [`None`] if
    /// nothing matches, or if `position` is out of bounds.
    #[must_use]
    pub fn longest_match(
        &self,
        codepoints: &[char],
        position: usize,
    ) -> Option<EmojiMatch<'c>> {
        let rest = codepoints.get(position..)?;
        let (sequence, codepoint_len) = self.find(rest)?;
        let absorbed_bytes = if codepoint_len > sequence.len() {
            VS16_EMOJI.len_utf8()
        } else {
            0
        };
        Some(EmojiMatch {
            sequence,
            codepoint_len,
            byte_len: sequence.byte_len() + absorbed_bytes,
        })
    }

    /// Same as [`Self::longest_match`], over a `UTF-8` buffer that starts at byte offset
    /// `byte_position`. Decoding is lenient: an invalid byte never matches anything, and
    /// a sequence can't extend over one.
    #[must_use]
    pub fn longest_match_at(
        &self,
        bytes: &[u8],
        byte_position: usize,
    ) -> Option<EmojiMatch<'c>> {
        let Decoded::Char(first, first_len) = decode_at(bytes, byte_position)? else {
            return None;
        };
        // Most text isn't emoji, so bail before decoding any further.
        if self.catalog.candidates(first).is_empty() {
            return None;
        }

        let window = self.decode_window(bytes, byte_position, first, first_len);
        let chars: SmallVec<[char; 16]> = window.iter().map(|(it, _)| *it).collect();
        let (sequence, codepoint_len) = self.find(&chars)?;
        let (_, end) = window.get(codepoint_len - 1)?;
        Some(EmojiMatch {
            sequence,
            codepoint_len,
            byte_len: end - byte_position,
        })
    }

    /// Decode just enough codepoints for the longest sequence, plus one for an absorbed
    /// selector. Stops early at the end of `bytes` or at an invalid byte.
    fn decode_window(
        &self,
        bytes: &[u8],
        byte_position: usize,
        first: char,
        first_len: usize,
    ) -> Window {
        let limit = self.catalog.max_sequence_len() + 1;
        let mut window = Window::new();
        window.push((first, byte_position + first_len));
        window.extend(
            Utf8Cursor::at(bytes, byte_position + first_len)
                .map_while(|(start, it)| it.as_char().map(|ch| (ch, start + it.byte_len())))
                .take(limit - 1),
        );
        window
    }

    /// The core of the match: first candidate (longest first) that `rest` starts with.
    /// Returns the sequence and the number of codepoints consumed.
    fn find(&self, rest: &[char]) -> Option<(&'c Sequence, usize)> {
        let first = *rest.first()?;
        let sequence = self
            .catalog
            .candidates(first)
            .iter()
            .find(|it| rest.starts_with(it.codepoints()))?;

        let absorb = self.catalog.config().absorb_trailing_selector
            && sequence.last().is_some_and(|it| !is_variation_selector(it))
            && rest.get(sequence.len()) == Some(&VS16_EMOJI);

        Some((sequence, sequence.len() + usize::from(absorb)))
    }
}
