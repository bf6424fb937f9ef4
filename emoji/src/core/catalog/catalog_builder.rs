// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words keycap zwj

use smallvec::SmallVec;

use super::{BLACK_FLAG, CANCEL_TAG, Catalog, CatalogConfig, KEYCAP, SKIN_TONES,
            SequenceKind, VS15_TEXT, VS16_EMOJI, ZWJ, catalog_data::*};
use crate::CatalogError;

/// One raw catalog entry, before validation.
pub type CatalogEntry = (Box<[char]>, SequenceKind);

/// Scratch buffer used while composing a single sequence. The longest bundled sequence
/// (a kiss with two skin tones) is 10 codepoints.
type SeqBuf = SmallVec<[char; 16]>;

/// Collects `(codepoints, kind)` entries and turns them into a [`Catalog`].
///
/// [`Self::bundled`] expands the static tables in [`super::catalog_data`]. Callers that
/// need extra sequences (eg: vendor specific ones) can [`Self::push`] them on top before
/// calling [`Self::build`]; validation happens in [`Catalog::try_new`] either way.
///
/// ```
/// use r3bl_emoji::{CatalogBuilder, CatalogConfig, SequenceKind};
///
/// let mut builder = CatalogBuilder::new(CatalogConfig::default());
/// builder.push(['\u{1F600}'], SequenceKind::Basic);
/// let catalog = builder.build().unwrap();
/// assert_eq!(catalog.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    config: CatalogConfig,
    entries: Vec<CatalogEntry>,
}

impl CatalogBuilder {
    /// An empty builder.
    #[must_use]
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
        }
    }

    /// A builder that already holds every bundled sequence that `config` asks for.
    #[must_use]
    pub fn bundled(config: CatalogConfig) -> Self {
        let mut it = Self::new(config);
        it.add_single_codepoints();
        it.add_presentation_variants();
        it.add_skin_tone_modifiers();
        it.add_keycaps();
        it.add_flags();
        it.add_zwj_sequences();
        it
    }

    pub fn push(
        &mut self,
        codepoints: impl Into<Box<[char]>>,
        kind: SequenceKind,
    ) -> &mut Self {
        self.entries.push((codepoints.into(), kind));
        self
    }

    #[must_use]
    pub fn config(&self) -> CatalogConfig { self.config }

    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] { &self.entries }

    /// # Errors
    ///
    /// See [`Catalog::try_new`].
    pub fn build(self) -> Result<Catalog, CatalogError> {
        Catalog::try_new(self.entries, self.config)
    }

    fn push_buf(&mut self, buf: &[char], kind: SequenceKind) {
        self.entries.push((buf.into(), kind));
    }
}

/// Expansion of the static tables.
impl CatalogBuilder {
    fn add_single_codepoints(&mut self) {
        let bare_legacy_symbols = self.config.bare_legacy_symbols;

        for &(start, end) in EMOJI_PRESENTATION_RANGES {
            for it in start..=end {
                let is_legacy = is_bmp(it) && in_ranges(VARIATION_BASE_RANGES, it);
                if bare_legacy_symbols || !is_legacy {
                    self.push_buf(&[it], SequenceKind::Basic);
                }
            }
        }

        // Text default symbols (eg: `©`) only count bare when asked for explicitly.
        if bare_legacy_symbols {
            for &(start, end) in VARIATION_BASE_RANGES {
                for it in start..=end {
                    if !in_ranges(EMOJI_PRESENTATION_RANGES, it) {
                        self.push_buf(&[it], SequenceKind::Basic);
                    }
                }
            }
        }
    }

    fn add_presentation_variants(&mut self) {
        let text_presentation_sequences = self.config.text_presentation_sequences;

        for &(start, end) in VARIATION_BASE_RANGES {
            for base in start..=end {
                let kind = if in_ranges(MODIFIER_BASE_RANGES, base) {
                    SequenceKind::ModifierBase
                } else {
                    SequenceKind::PresentationVariant
                };
                self.push_buf(&[base, VS16_EMOJI], kind);
                if text_presentation_sequences {
                    self.push_buf(&[base, VS15_TEXT], SequenceKind::PresentationVariant);
                }
            }
        }
    }

    fn add_skin_tone_modifiers(&mut self) {
        for &(start, end) in MODIFIER_BASE_RANGES {
            for base in start..=end {
                for tone in SKIN_TONES {
                    self.push_buf(&[base, tone], SequenceKind::ModifierBase);
                }
            }
        }
    }

    fn add_keycaps(&mut self) {
        for &base in KEYCAP_BASES {
            self.push_buf(&[base, VS16_EMOJI, KEYCAP], SequenceKind::Keycap);
            self.push_buf(&[base, KEYCAP], SequenceKind::Keycap);
        }
    }

    fn add_flags(&mut self) {
        for code in RGI_REGION_CODES {
            let buf: SeqBuf = code.chars().filter_map(regional_indicator_for).collect();
            self.push_buf(&buf, SequenceKind::RegionalFlag);
        }

        for subdivision in RGI_SUBDIVISION_TAGS {
            let mut buf = SeqBuf::new();
            buf.push(BLACK_FLAG);
            buf.extend(subdivision.chars().filter_map(tag_for));
            buf.push(CANCEL_TAG);
            self.push_buf(&buf, SequenceKind::TagSequence);
        }
    }

    fn add_zwj_sequences(&mut self) {
        let mut fully_qualified = Vec::<SeqBuf>::new();
        collect_families(&mut fully_qualified);
        collect_couples(&mut fully_qualified);
        collect_holding_hands(&mut fully_qualified);
        collect_handshakes(&mut fully_qualified);
        collect_roles(&mut fully_qualified);
        collect_gendered_activities(&mut fully_qualified);
        collect_directional(&mut fully_qualified);
        fully_qualified.extend(STANDALONE_ZWJ_SEQUENCES.iter().map(|it| SeqBuf::from_slice(it)));

        let minimally_qualified_zwj = self.config.minimally_qualified_zwj;
        for seq in &fully_qualified {
            self.push_buf(seq, SequenceKind::ZWJSequence);
            if minimally_qualified_zwj {
                for variant in selector_dropped_variants(seq) {
                    self.push_buf(&variant, SequenceKind::ZWJSequence);
                }
            }
        }
    }
}

fn is_bmp(it: char) -> bool { u32::from(it) <= 0xFFFF }

/// `A`..`Z` onto U+1F1E6..U+1F1FF.
fn regional_indicator_for(letter: char) -> Option<char> {
    if !letter.is_ascii_uppercase() {
        return None;
    }
    char::from_u32(0x1F1E6 + (u32::from(letter) - u32::from('A')))
}

/// Printable ASCII onto U+E0020..U+E007E.
fn tag_for(ascii: char) -> Option<char> {
    if !(' '..='~').contains(&ascii) {
        return None;
    }
    char::from_u32(0xE0000 + u32::from(ascii))
}

/// Skin tone options for one person: untoned, then each of the five tones.
fn tone_options() -> impl Iterator<Item = Option<char>> {
    std::iter::once(None).chain(SKIN_TONES.into_iter().map(Some))
}

fn push_person(buf: &mut SeqBuf, person: char, tone: Option<char>) {
    buf.push(person);
    buf.extend(tone);
}

/// Joins `parts` with [`ZWJ`].
fn join(parts: &[&[char]]) -> SeqBuf {
    let mut acc = SeqBuf::new();
    for (index, part) in parts.iter().enumerate() {
        if index > 0 {
            acc.push(ZWJ);
        }
        acc.extend_from_slice(part);
    }
    acc
}

fn collect_families(acc: &mut Vec<SeqBuf>) {
    for members in FAMILIES {
        let parts: SmallVec<[&[char]; 4]> =
            members.iter().map(std::slice::from_ref).collect();
        acc.push(join(&parts));
    }
}

fn push_couple(acc: &mut Vec<SeqBuf>, left: &[char], right: &[char]) {
    let heart = [RED_HEART, VS16_EMOJI];
    acc.push(join(&[left, &heart, right]));
    acc.push(join(&[left, &heart, &[KISS_MARK], right]));
}

fn collect_couples(acc: &mut Vec<SeqBuf>) {
    for &(left, right) in COUPLES {
        push_couple(acc, &[left], &[right]);
        for left_tone in SKIN_TONES {
            for right_tone in SKIN_TONES {
                push_couple(acc, &[left, left_tone], &[right, right_tone]);
            }
        }
    }

    for left_tone in SKIN_TONES {
        for right_tone in SKIN_TONES {
            if left_tone != right_tone {
                push_couple(acc, &[PERSON, left_tone], &[PERSON, right_tone]);
            }
        }
    }
}

fn collect_holding_hands(acc: &mut Vec<SeqBuf>) {
    acc.push(join(&[&[PERSON], &[HANDSHAKE], &[PERSON]]));
    for left_tone in SKIN_TONES {
        for right_tone in SKIN_TONES {
            acc.push(join(&[
                &[PERSON, left_tone],
                &[HANDSHAKE],
                &[PERSON, right_tone],
            ]));
            if left_tone != right_tone {
                for &(left, right) in HOLDING_HANDS_MIXED_TONES {
                    acc.push(join(&[
                        &[left, left_tone],
                        &[HANDSHAKE],
                        &[right, right_tone],
                    ]));
                }
            }
        }
    }
}

/// Handshake with two different skin tones. The same tone (and no tone) is spelled
/// with U+1F91D, optionally followed by a skin tone.
fn collect_handshakes(acc: &mut Vec<SeqBuf>) {
    for left_tone in SKIN_TONES {
        for right_tone in SKIN_TONES {
            if left_tone != right_tone {
                acc.push(join(&[
                    &[RIGHTWARDS_HAND, left_tone],
                    &[LEFTWARDS_HAND, right_tone],
                ]));
            }
        }
    }
}

fn collect_roles(acc: &mut Vec<SeqBuf>) {
    for tone in tone_options() {
        for person in [MAN, WOMAN, PERSON] {
            let mut head = SeqBuf::new();
            push_person(&mut head, person, tone);

            for &(object, needs_selector) in ROLE_OBJECTS {
                let tail: &[char] = if needs_selector {
                    &[object, VS16_EMOJI]
                } else {
                    &[object]
                };
                acc.push(join(&[head.as_slice(), tail]));
            }

            if person == PERSON {
                for &object in PERSON_ONLY_ROLE_OBJECTS {
                    acc.push(join(&[head.as_slice(), &[object]]));
                }
            }
        }
    }
}

/// Head of an activity sequence: the base, then a skin tone, or U+FE0F for bases that
/// render as text by default, or nothing.
fn activity_head(base: char, tone: Option<char>) -> SeqBuf {
    let mut head = SeqBuf::new();
    head.push(base);
    match tone {
        Some(tone) => head.push(tone),
        None if !in_ranges(EMOJI_PRESENTATION_RANGES, base) => head.push(VS16_EMOJI),
        None => {}
    }
    head
}

fn collect_gendered_activities(acc: &mut Vec<SeqBuf>) {
    for &(base, takes_tones) in GENDERED_ACTIVITY_BASES {
        for tone in tone_options() {
            if tone.is_some() && !takes_tones {
                continue;
            }
            let head = activity_head(base, tone);
            for sign in [FEMALE_SIGN, MALE_SIGN] {
                acc.push(join(&[head.as_slice(), &[sign, VS16_EMOJI]]));
            }
        }
    }
}

/// "Facing right" forms, which end in `ZWJ 27A1 FE0F`.
fn collect_directional(acc: &mut Vec<SeqBuf>) {
    let arrow = [RIGHT_ARROW, VS16_EMOJI];

    for tone in tone_options() {
        for person in [MAN, WOMAN, PERSON] {
            let mut head = SeqBuf::new();
            push_person(&mut head, person, tone);
            for &object in DIRECTIONAL_ROLE_OBJECTS {
                acc.push(join(&[head.as_slice(), &[object], &arrow]));
            }
        }

        for &base in DIRECTIONAL_ACTIVITY_BASES {
            let head = activity_head(base, tone);
            acc.push(join(&[head.as_slice(), &arrow]));
            for sign in [FEMALE_SIGN, MALE_SIGN] {
                acc.push(join(&[head.as_slice(), &[sign, VS16_EMOJI], &arrow]));
            }
        }
    }
}

/// Every way of leaving out a non empty subset of the U+FE0F selectors in `seq`. Each
/// result is distinct, since no two selectors in a ZWJ sequence are adjacent.
fn selector_dropped_variants(seq: &[char]) -> Vec<SeqBuf> {
    let selector_positions: SmallVec<[usize; 4]> = seq
        .iter()
        .enumerate()
        .filter_map(|(index, it)| (*it == VS16_EMOJI).then_some(index))
        .collect();

    let subset_count = 1_u32 << selector_positions.len();
    (1..subset_count)
        .map(|mask| {
            seq.iter()
                .enumerate()
                .filter(|(index, _)| {
                    !selector_positions
                        .iter()
                        .enumerate()
                        .any(|(bit, pos)| mask & (1 << bit) != 0 && pos == index)
                })
                .map(|(_, it)| *it)
                .collect::<SeqBuf>()
        })
        .collect()
}
