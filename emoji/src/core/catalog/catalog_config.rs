// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Policy knobs that decide what goes into the bundled [`super::Catalog`], and how the
/// [`crate::PrefixMatcher`] treats a stray emoji presentation selector.
///
/// The matcher itself has no opinion about which codepoints are emoji. Everything here is
/// expressed as catalog contents, so the same longest-match algorithm serves every
/// policy.
///
/// ```
/// use r3bl_emoji::{Catalog, CatalogConfig};
///
/// let strict = Catalog::bundled(CatalogConfig::default()).unwrap();
/// assert!(!strict.has_emoji("⚡"));
///
/// let lenient = Catalog::bundled(CatalogConfig {
///     bare_legacy_symbols: true,
///     ..Default::default()
/// })
/// .unwrap();
/// assert!(lenient.has_emoji("⚡"));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CatalogConfig {
    /// Register legacy symbols from the Basic Multilingual Plane that have both a text
    /// and an emoji presentation (eg: `⚡` U+26A1, `☔` U+2614, `♈` U+2648) as bare
    /// [`crate::SequenceKind::Basic`] entries. When `false` only their U+FE0F form is an
    /// emoji, since fonts commonly render the bare codepoint as a text glyph.
    pub bare_legacy_symbols: bool,

    /// Register base + U+FE0E (text presentation) sequences.
    pub text_presentation_sequences: bool,

    /// Register the minimally qualified forms of ZWJ sequences, which are the fully
    /// qualified sequences with one or more U+FE0F left out (eg: `🏳‍🌈` without the
    /// selector after the white flag). Keyboards and older platforms emit these.
    pub minimally_qualified_zwj: bool,

    /// Extend a match over one U+FE0F that directly follows it, if the matched sequence
    /// doesn't already end in a selector. `"1\u{20E3}\u{FE0F}"` is then a single token.
    pub absorb_trailing_selector: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            bare_legacy_symbols: false,
            text_presentation_sequences: true,
            minimally_qualified_zwj: true,
            absorb_trailing_selector: true,
        }
    }
}
