// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use pretty_assertions::assert_eq;
use r3bl_emoji::{Catalog, CatalogConfig, SequenceKind, Span, filter_emoji, global_catalog,
                 has_emoji, human_read_len, replace_all_emoji_func, replace_emoji, scan};
use test_case::test_case;

fn emoji_spans(text: &str) -> Vec<Span<'static>> {
    scan(global_catalog(), text).filter(Span::is_emoji).collect()
}

#[test]
fn test_bare_legacy_symbol_is_not_emoji() {
    assert!(!has_emoji("⚡"));
    assert_eq!(human_read_len("⚡"), 1);
    assert_eq!(filter_emoji("⚡"), "⚡");
}

#[test]
fn test_legacy_symbol_with_selector_is_one_token() {
    let spans = emoji_spans("⚡\u{FE0F}");
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].codepoint_len, 2);
    assert_eq!(spans[0].byte_range(), 0..6);
}

#[test]
fn test_bare_legacy_symbols_config() {
    let catalog = Catalog::bundled(CatalogConfig {
        bare_legacy_symbols: true,
        ..CatalogConfig::default()
    })
    .unwrap();
    assert!(catalog.has_emoji("⚡"));
    assert_eq!(catalog.filter_emoji("a⚡b"), "ab");
}

#[test]
fn test_keycap() {
    let text = "1\u{FE0F}\u{20E3}";
    assert!(has_emoji(text));
    assert_eq!(human_read_len(text), 1);
    assert_eq!(filter_emoji("1\u{FE0F}\u{20E3}23"), "23");
    assert_eq!(replace_emoji("1\u{FE0F}\u{20E3}23", |_| "#"), "#23");
}

#[test_case("👨\u{200D}👩\u{200D}👧\u{200D}👦", SequenceKind::ZWJSequence, 7 ; "family of four")]
#[test_case("\u{1F1E8}\u{1F1F3}", SequenceKind::RegionalFlag, 2 ; "flag")]
#[test_case(
    "\u{1F3F4}\u{E0067}\u{E0062}\u{E0065}\u{E006E}\u{E0067}\u{E007F}",
    SequenceKind::TagSequence, 7 ; "england"
)]
#[test_case("✍🏿", SequenceKind::ModifierBase, 2 ; "skin tone")]
#[test_case("😀", SequenceKind::Basic, 1 ; "basic")]
fn test_whole_text_is_one_token(text: &str, kind: SequenceKind, codepoint_len: usize) {
    let spans = emoji_spans(text);
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].byte_range(), 0..text.len());
    assert_eq!(spans[0].codepoint_len, codepoint_len);
    assert_eq!(spans[0].sequence().map(|it| it.kind()), Some(kind));
    assert_eq!(human_read_len(text), 1);
}

/// One sample per generated ZWJ pattern. Each one reads as a single glyph.
#[test_case("\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}" ; "family")]
#[test_case("\u{1F9D1}\u{200D}\u{1F9D1}\u{200D}\u{1F9D2}" ; "family of adults and child")]
#[test_case(
    "\u{1F469}\u{1F3FB}\u{200D}\u{2764}\u{FE0F}\u{200D}\u{1F468}\u{1F3FF}" ;
    "couple with heart toned"
)]
#[test_case(
    "\u{1F469}\u{200D}\u{2764}\u{FE0F}\u{200D}\u{1F48B}\u{200D}\u{1F468}" ;
    "kiss"
)]
#[test_case(
    "\u{1F9D1}\u{1F3FB}\u{200D}\u{2764}\u{FE0F}\u{200D}\u{1F9D1}\u{1F3FF}" ;
    "person couple mixed tones"
)]
#[test_case(
    "\u{1F9D1}\u{1F3FD}\u{200D}\u{1F91D}\u{200D}\u{1F9D1}\u{1F3FD}" ;
    "people holding hands"
)]
#[test_case(
    "\u{1F469}\u{1F3FB}\u{200D}\u{1F91D}\u{200D}\u{1F468}\u{1F3FF}" ;
    "woman and man holding hands mixed tones"
)]
#[test_case("\u{1FAF1}\u{1F3FB}\u{200D}\u{1FAF2}\u{1F3FC}" ; "handshake mixed tones")]
#[test_case("\u{1FAF1}\u{1F3FF}\u{200D}\u{1FAF2}\u{1F3FB}" ; "handshake dark light")]
#[test_case("\u{1F469}\u{1F3FD}\u{200D}\u{1F4BB}" ; "role")]
#[test_case("\u{1F9D1}\u{200D}\u{2695}\u{FE0F}" ; "role with selector")]
#[test_case("\u{1F9D1}\u{1F3FF}\u{200D}\u{1F384}" ; "person only role")]
#[test_case("\u{1F3C3}\u{1F3FD}\u{200D}\u{2640}\u{FE0F}" ; "gendered activity")]
#[test_case("\u{1F575}\u{FE0F}\u{200D}\u{2642}\u{FE0F}" ; "gendered activity text base")]
#[test_case("\u{1F9D1}\u{200D}\u{1F9AF}\u{200D}\u{27A1}\u{FE0F}" ; "directional role")]
#[test_case(
    "\u{1F6B6}\u{1F3FD}\u{200D}\u{2640}\u{FE0F}\u{200D}\u{27A1}\u{FE0F}" ;
    "directional activity"
)]
#[test_case("\u{1F3F3}\u{FE0F}\u{200D}\u{1F308}" ; "standalone")]
#[test_case("\u{1F3F3}\u{200D}\u{1F308}" ; "minimally qualified")]
fn test_zwj_pattern_is_one_glyph(text: &str) {
    let spans = emoji_spans(text);
    assert_eq!(spans.len(), 1, "{text:?}");
    assert_eq!(spans[0].byte_range(), 0..text.len());
    assert_eq!(spans[0].sequence().map(|it| it.kind()), Some(SequenceKind::ZWJSequence));
    assert_eq!(human_read_len(text), 1);
}

#[test]
fn test_trailing_selector_after_keycap() {
    assert_eq!(replace_emoji("1\u{20E3}\u{FE0F}234\u{20E3}\u{FE0F}", |_| "#"), "#23#");
    assert_eq!(global_catalog().emoji_prefix_len("1\u{20E3}\u{FE0F}"), Some(7));
}

#[test]
fn test_replace_all_sees_positions() {
    let text = "a🇨🇳b✍🏿";
    let it = replace_all_emoji_func(text, |token| {
        format!("<{}@{}>", token.kind(), token.start_byte_index)
    });
    assert_eq!(it, "a<RegionalFlag@1>b<ModifierBase@10>");
}

#[test]
fn test_human_read_len_mixed() {
    assert_eq!(human_read_len("123"), 3);
    assert_eq!(human_read_len("1\u{20E3}\u{FE0F}23"), 3);
    assert_eq!(human_read_len("👩\u{200D}👩\u{200D}👦🇨🇳3"), 3);
}

#[test]
fn test_lone_regional_indicator_is_plain() {
    assert!(!has_emoji("\u{1F1E8}"));
    assert_eq!(human_read_len("\u{1F1E8}\u{1F1E8}\u{1F1F3}"), 2);
}
