// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Debug;

use rustc_hash::FxHashMap;
use strum::{EnumCount, IntoEnumIterator};

use super::{CatalogBuilder, CatalogConfig, CatalogEntry, Sequence, SequenceKind};
use crate::{CatalogError, PrefixMatcher, fmt_codepoints};

/// Set to `true` to log per kind entry counts every time a catalog is built.
pub const DEBUG_CATALOG_MOD: bool = false;

/// The set of every valid emoji sequence, indexed by first codepoint.
///
/// A catalog is immutable once built. It is [Send] + [Sync] so a single instance can be
/// shared by any number of concurrent scans without locking; see
/// [`crate::global_catalog`] for the process wide one.
///
/// The only lookup it supports is "all sequences that start with this codepoint,
/// longest first" ([`Self::candidates`]), which is exactly what the
/// [`crate::PrefixMatcher`] needs to find the longest match at a position.
pub struct Catalog {
    config: CatalogConfig,
    /// Each slice is sorted by descending length, then by codepoints.
    index: FxHashMap<char, Box<[Sequence]>>,
    /// Bit `n` is set if some sequence starts with the `ASCII` codepoint `n`. Plain
    /// `ASCII` text is common, and this skips the hash lookup for it.
    ascii_starts: u128,
    kind_counts: [usize; SequenceKind::COUNT],
    len: usize,
    max_sequence_len: usize,
}

impl Catalog {
    /// Validate `entries` and index them by first codepoint. This is all or nothing: the
    /// first bad entry fails the whole catalog.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::EmptySequence`] if an entry has no codepoints.
    /// - [`CatalogError::GrammarMismatch`] if an entry doesn't follow the grammar of its
    ///   declared [`SequenceKind`].
    /// - [`CatalogError::DuplicateSequence`] if two entries have the same codepoints.
    pub fn try_new(
        entries: impl IntoIterator<Item = CatalogEntry>,
        config: CatalogConfig,
    ) -> Result<Self, CatalogError> {
        let mut groups = FxHashMap::<char, Vec<Sequence>>::default();
        let mut kind_counts = [0; SequenceKind::COUNT];
        let mut len = 0;
        let mut max_sequence_len = 0;

        for (index, (codepoints, kind)) in entries.into_iter().enumerate() {
            let Some(&first) = codepoints.first() else {
                return Err(CatalogError::EmptySequence { index });
            };
            if !kind.accepts(&codepoints) {
                return Err(CatalogError::GrammarMismatch {
                    codepoints: fmt_codepoints(&codepoints),
                    kind,
                });
            }
            kind_counts[kind as usize] += 1;
            len += 1;
            max_sequence_len = max_sequence_len.max(codepoints.len());
            groups
                .entry(first)
                .or_default()
                .push(Sequence::new(codepoints, kind));
        }

        let mut ascii_starts = 0_u128;
        let mut index = FxHashMap::default();
        index.reserve(groups.len());

        for (first, mut group) in groups {
            group.sort_unstable_by(|lhs, rhs| {
                rhs.len()
                    .cmp(&lhs.len())
                    .then_with(|| lhs.codepoints().cmp(rhs.codepoints()))
            });
            // Equal codepoints are adjacent after sorting.
            if let Some(pair) = group
                .windows(2)
                .find(|pair| pair[0].codepoints() == pair[1].codepoints())
            {
                return Err(CatalogError::DuplicateSequence {
                    codepoints: fmt_codepoints(pair[0].codepoints()),
                });
            }
            if first.is_ascii() {
                ascii_starts |= 1 << u32::from(first);
            }
            index.insert(first, group.into_boxed_slice());
        }

        let it = Self {
            config,
            index,
            ascii_starts,
            kind_counts,
            len,
            max_sequence_len,
        };

        // % is Display, ? is Debug.
        tracing::info!(
            message = "📚 Emoji catalog built",
            entries = %it.len,
            first_codepoints = %it.index.len(),
            max_sequence_len = %it.max_sequence_len,
        );
        DEBUG_CATALOG_MOD.then(|| {
            tracing::debug!(
                message = "📚 Emoji catalog entries per kind",
                kind_counts = ?it.kind_counts()
            );
        });

        Ok(it)
    }

    /// The catalog built from the bundled Unicode data.
    ///
    /// # Errors
    ///
    /// Only if the bundled data itself is malformed, see [`Self::try_new`].
    pub fn bundled(config: CatalogConfig) -> Result<Self, CatalogError> {
        CatalogBuilder::bundled(config).build()
    }

    #[must_use]
    pub fn config(&self) -> CatalogConfig { self.config }

    /// Every sequence that starts with `first`, longest first. Empty if there are none.
    #[must_use]
    pub fn candidates(&self, first: char) -> &[Sequence] {
        if first.is_ascii() && self.ascii_starts & (1 << u32::from(first)) == 0 {
            return &[];
        }
        self.index.get(&first).map_or(&[][..], |it| &it[..])
    }

    /// Number of sequences.
    #[must_use]
    pub fn len(&self) -> usize { self.len }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Number of codepoints in the longest sequence.
    #[must_use]
    pub fn max_sequence_len(&self) -> usize { self.max_sequence_len }

    /// Number of sequences of each kind, in [`SequenceKind`] declaration order.
    #[must_use]
    pub fn kind_counts(&self) -> Vec<(SequenceKind, usize)> {
        SequenceKind::iter()
            .map(|kind| (kind, self.kind_counts[kind as usize]))
            .collect()
    }

    /// Every sequence, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Sequence> {
        self.index.values().flat_map(|it| it.iter())
    }

    /// The longest match engine over this catalog.
    #[must_use]
    pub fn matcher(&self) -> PrefixMatcher<'_> { PrefixMatcher::new(self) }

    /// Byte length of the emoji that `text` starts with, if any.
    ///
    /// ```
    /// use r3bl_emoji::{Catalog, CatalogConfig};
    ///
    /// let catalog = Catalog::bundled(CatalogConfig::default()).unwrap();
    /// assert_eq!(catalog.emoji_prefix_len("🇨🇳abc"), Some(8));
    /// assert_eq!(catalog.emoji_prefix_len("abc🇨🇳"), None);
    /// ```
    #[must_use]
    pub fn emoji_prefix_len(&self, text: &str) -> Option<usize> {
        self.matcher()
            .longest_match_at(text.as_bytes(), 0)
            .map(|it| it.byte_len)
    }
}

/// The index holds thousands of sequences, so only print the summary.
impl Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("len", &self.len)
            .field("first_codepoints", &self.index.len())
            .field("max_sequence_len", &self.max_sequence_len)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{VS16_EMOJI, ZWJ, assert_eq2};

    fn entry(codepoints: &[char], kind: SequenceKind) -> CatalogEntry {
        (codepoints.into(), kind)
    }

    #[test]
    fn test_catalog_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog>();
    }

    #[test]
    fn test_bundled_catalog_is_valid() {
        let catalog = Catalog::bundled(CatalogConfig::default()).unwrap();
        assert!(catalog.len() > 3_000, "{catalog:?}");
        assert_eq2!(catalog.max_sequence_len(), 10);
        assert_eq2!(catalog.iter().count(), catalog.len());

        let total: usize = catalog.kind_counts().iter().map(|(_, it)| it).sum();
        assert_eq2!(total, catalog.len());
        assert!(catalog.kind_counts().iter().all(|(_, it)| *it > 0));
    }

    #[test]
    fn test_bundled_catalog_every_config_is_valid() {
        for bits in 0..8_u8 {
            let config = CatalogConfig {
                bare_legacy_symbols: bits & 1 != 0,
                text_presentation_sequences: bits & 2 != 0,
                minimally_qualified_zwj: bits & 4 != 0,
                absorb_trailing_selector: true,
            };
            let result = Catalog::bundled(config);
            assert!(result.is_ok(), "{config:?}: {result:?}");
        }
    }

    #[test]
    fn test_candidates_are_longest_first() {
        let catalog = Catalog::bundled(CatalogConfig::default()).unwrap();
        let candidates = catalog.candidates('\u{1F468}');
        assert!(candidates.len() > 1);
        for pair in candidates.windows(2) {
            assert!(pair[0].len() >= pair[1].len());
        }
        assert!(candidates.iter().all(|it| it.first() == Some('\u{1F468}')));
    }

    #[test]
    fn test_candidates_ascii_fast_path() {
        let catalog = Catalog::bundled(CatalogConfig::default()).unwrap();
        assert!(catalog.candidates('a').is_empty());
        assert!(catalog.candidates(' ').is_empty());
        assert_eq2!(catalog.candidates('1').len(), 2);
        assert_eq2!(catalog.candidates('#').len(), 2);
    }

    #[test]
    fn test_try_new_empty_sequence() {
        let result = Catalog::try_new(
            [
                entry(&['\u{1F600}'], SequenceKind::Basic),
                entry(&[], SequenceKind::Basic),
            ],
            CatalogConfig::default(),
        );
        assert_eq2!(result.unwrap_err(), CatalogError::EmptySequence { index: 1 });
    }

    #[test]
    fn test_try_new_duplicate_sequence() {
        let result = Catalog::try_new(
            [
                entry(&['\u{1F468}', ZWJ, '\u{1F469}'], SequenceKind::ZWJSequence),
                entry(&['\u{1F468}'], SequenceKind::Basic),
                entry(&['\u{1F468}', ZWJ, '\u{1F469}'], SequenceKind::ZWJSequence),
            ],
            CatalogConfig::default(),
        );
        assert_eq2!(
            result.unwrap_err(),
            CatalogError::DuplicateSequence {
                codepoints: "1F468 200D 1F469".into()
            }
        );
    }

    #[test]
    fn test_try_new_grammar_mismatch() {
        let result = Catalog::try_new(
            [entry(&['\u{26A1}', VS16_EMOJI], SequenceKind::Keycap)],
            CatalogConfig::default(),
        );
        assert_eq2!(
            result.unwrap_err(),
            CatalogError::GrammarMismatch {
                codepoints: "26A1 FE0F".into(),
                kind: SequenceKind::Keycap,
            }
        );
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::try_new(Vec::<CatalogEntry>::new(), CatalogConfig::default()).unwrap();
        assert!(catalog.is_empty());
        assert_eq2!(catalog.max_sequence_len(), 0);
        assert!(catalog.candidates('\u{1F600}').is_empty());
        assert_eq2!(catalog.emoji_prefix_len("😀"), None);
    }

    #[test]
    fn test_emoji_prefix_len() {
        let catalog = Catalog::bundled(CatalogConfig::default()).unwrap();
        assert_eq2!(catalog.emoji_prefix_len("1\u{20E3}\u{FE0F}"), Some(7));
        assert_eq2!(catalog.emoji_prefix_len("👩‍👩‍👦123"), Some(18));
        assert_eq2!(catalog.emoji_prefix_len("123"), None);
        assert_eq2!(catalog.emoji_prefix_len(""), None);
    }
}
