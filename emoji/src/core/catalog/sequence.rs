// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Display};

use super::SequenceKind;
use crate::fmt_codepoints;

/// One valid emoji sequence: an ordered, non empty list of codepoints that a user
/// perceives as a single glyph, tagged with the grammar it follows.
///
/// Sequences only exist inside a [`super::Catalog`], which guarantees that the
/// codepoints are non empty, unique across the catalog, and valid for the [`Self::kind`].
/// The `UTF-8` text form is pre-computed once, so handing a match to a caller never
/// allocates.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Sequence {
    codepoints: Box<[char]>,
    text: Box<str>,
    kind: SequenceKind,
}

impl Sequence {
    pub(crate) fn new(codepoints: Box<[char]>, kind: SequenceKind) -> Self {
        let text = codepoints.iter().collect::<String>().into_boxed_str();
        Self {
            codepoints,
            text,
            kind,
        }
    }

    #[must_use]
    pub fn codepoints(&self) -> &[char] { &self.codepoints }

    #[must_use]
    pub fn kind(&self) -> SequenceKind { self.kind }

    /// The sequence encoded as `UTF-8`.
    #[must_use]
    pub fn as_str(&self) -> &str { &self.text }

    /// Number of codepoints.
    #[must_use]
    pub fn len(&self) -> usize { self.codepoints.len() }

    /// Always `false` for a sequence that came out of a catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.codepoints.is_empty() }

    /// Number of `UTF-8` bytes.
    #[must_use]
    pub fn byte_len(&self) -> usize { self.text.len() }

    #[must_use]
    pub fn first(&self) -> Option<char> { self.codepoints.first().copied() }

    #[must_use]
    pub fn last(&self) -> Option<char> { self.codepoints.last().copied() }
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str { self.as_str() }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Compact pretty print, in the same notation as the Unicode data files.
impl Debug for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Sequence[{kind}] ┆ {cps} ┆ {text:?}",
            kind = self.kind,
            cps = fmt_codepoints(&self.codepoints),
            text = self.text,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_sequence_text_and_lengths() {
        let it = Sequence::new(
            vec!['1', '\u{FE0F}', '\u{20E3}'].into_boxed_slice(),
            SequenceKind::Keycap,
        );
        assert_eq2!(it.as_str(), "1\u{FE0F}\u{20E3}");
        assert_eq2!(it.len(), 3);
        assert_eq2!(it.byte_len(), 7);
        assert_eq2!(it.first(), Some('1'));
        assert_eq2!(it.last(), Some('\u{20E3}'));
        assert!(!it.is_empty());
    }

    #[test]
    fn test_sequence_debug() {
        let it = Sequence::new(
            vec!['\u{1F1E8}', '\u{1F1F3}'].into_boxed_slice(),
            SequenceKind::RegionalFlag,
        );
        assert_eq2!(
            format!("{it:?}"),
            "Sequence[RegionalFlag] ┆ 1F1E8 1F1F3 ┆ \"🇨🇳\""
        );
    }
}
