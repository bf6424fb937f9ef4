// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words keycap

use strum_macros::{AsRefStr, Display, EnumCount, EnumIter, IntoStaticStr};

/// Zero width joiner, glues the components of a [`SequenceKind::ZWJSequence`].
pub const ZWJ: char = '\u{200D}';
/// Variation selector 15, requests text presentation.
pub const VS15_TEXT: char = '\u{FE0E}';
/// Variation selector 16, requests emoji presentation.
pub const VS16_EMOJI: char = '\u{FE0F}';
/// Combining enclosing keycap.
pub const KEYCAP: char = '\u{20E3}';
/// Waving black flag, the only base of a [`SequenceKind::TagSequence`].
pub const BLACK_FLAG: char = '\u{1F3F4}';
/// Cancel tag, terminates a [`SequenceKind::TagSequence`].
pub const CANCEL_TAG: char = '\u{E007F}';

/// Skin tone modifiers, light (Fitzpatrick 1-2) through dark (Fitzpatrick 6).
pub const SKIN_TONES: [char; 5] =
    ['\u{1F3FB}', '\u{1F3FC}', '\u{1F3FD}', '\u{1F3FE}', '\u{1F3FF}'];

#[must_use]
pub fn is_regional_indicator(it: char) -> bool { ('\u{1F1E6}'..='\u{1F1FF}').contains(&it) }

#[must_use]
pub fn is_skin_tone(it: char) -> bool { ('\u{1F3FB}'..='\u{1F3FF}').contains(&it) }

#[must_use]
pub fn is_tag_spec(it: char) -> bool { ('\u{E0020}'..='\u{E007E}').contains(&it) }

#[must_use]
pub fn is_variation_selector(it: char) -> bool { it == VS15_TEXT || it == VS16_EMOJI }

#[must_use]
pub fn is_keycap_base(it: char) -> bool { it.is_ascii_digit() || it == '#' || it == '*' }

/// Codepoints that never stand on their own: they only extend or join other codepoints.
fn is_combiner(it: char) -> bool {
    it == ZWJ || it == KEYCAP || it == CANCEL_TAG || is_variation_selector(it) || is_tag_spec(it)
}

/// The grammar that an emoji sequence follows. This is a closed set; the kind of a
/// [`super::Sequence`] decides which rule in [`SequenceKind::accepts`] validates it when
/// the [`super::Catalog`] is built. The matcher itself never looks at the kind.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    AsRefStr,
    IntoStaticStr,
    EnumIter,
    EnumCount,
)]
pub enum SequenceKind {
    /// A single emoji codepoint, eg: `😀` (U+1F600).
    Basic,
    /// A base followed by U+FE0E or U+FE0F, eg: `⚡️` (U+26A1 U+FE0F).
    PresentationVariant,
    /// A modifier base followed by a skin tone or U+FE0F, eg: `✍🏿` (U+270D U+1F3FF).
    ModifierBase,
    /// Exactly two regional indicators, eg: `🇨🇳` (U+1F1E8 U+1F1F3).
    RegionalFlag,
    /// Digit, `#`, or `*`, an optional U+FE0F, then U+20E3, eg: `1️⃣`.
    Keycap,
    /// Two or more components joined by U+200D, eg: `👨‍👩‍👧‍👦`.
    ZWJSequence,
    /// U+1F3F4, one or more tags (U+E0020..U+E007E), then U+E007F, eg: `🏴󠁧󠁢󠁥󠁮󠁧󠁿`.
    TagSequence,
}

impl SequenceKind {
    /// Returns `true` if `codepoints` follow the grammar of this kind. This is a pure
    /// function; the catalog calls it once per entry at construction time.
    #[must_use]
    pub fn accepts(self, codepoints: &[char]) -> bool {
        match self {
            SequenceKind::Basic => matches!(
                codepoints,
                [it] if !is_regional_indicator(*it) && !is_combiner(*it)
            ),
            SequenceKind::PresentationVariant => matches!(
                codepoints,
                [base, selector]
                    if !is_regional_indicator(*base)
                        && !is_combiner(*base)
                        && is_variation_selector(*selector)
            ),
            SequenceKind::ModifierBase => matches!(
                codepoints,
                [base, modifier]
                    if !is_regional_indicator(*base)
                        && !is_combiner(*base)
                        && !is_skin_tone(*base)
                        && (is_skin_tone(*modifier) || *modifier == VS16_EMOJI)
            ),
            SequenceKind::RegionalFlag => matches!(
                codepoints,
                [first, second] if is_regional_indicator(*first) && is_regional_indicator(*second)
            ),
            SequenceKind::Keycap => match codepoints {
                [base, KEYCAP] | [base, VS16_EMOJI, KEYCAP] => is_keycap_base(*base),
                _ => false,
            },
            SequenceKind::ZWJSequence => is_zwj_chain(codepoints),
            SequenceKind::TagSequence => match codepoints {
                [BLACK_FLAG, tags @ .., CANCEL_TAG] => {
                    !tags.is_empty() && tags.iter().copied().all(is_tag_spec)
                }
                _ => false,
            },
        }
    }
}

/// A ZWJ chain has at least two components. Each component is non empty, doesn't start
/// with a combiner, and the chain neither starts nor ends with U+200D.
fn is_zwj_chain(codepoints: &[char]) -> bool {
    let mut component_count = 0;
    for component in codepoints.split(|it| *it == ZWJ) {
        match component.first() {
            Some(first) if !is_combiner(*first) => component_count += 1,
            _ => return false,
        }
    }
    component_count >= 2
}
