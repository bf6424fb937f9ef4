// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words keycap zwj

//! Static emoji data, derived offline from the Unicode Emoji 15.1 data files
//! (`emoji-data.txt`, `emoji-sequences.txt`, `emoji-variation-sequences.txt`, and
//! `emoji-zwj-sequences.txt`).
//!
//! The tables here are compact on purpose. [`super::CatalogBuilder`] expands them into
//! the several thousand `(sequence, kind)` entries of the catalog. For example the
//! role table below (`ROLE_OBJECTS`) times three people times six skin tone options
//! yields every "health worker", "farmer", "cook", etc. ZWJ sequence.
//!
//! All ranges are inclusive.

/// `Emoji_Presentation=Yes` codepoints (regional indicators are left out since a lone
/// indicator is never an emoji on its own).
pub const EMOJI_PRESENTATION_RANGES: &[(char, char)] = &[
    ('\u{231A}', '\u{231B}'),
    ('\u{23E9}', '\u{23EC}'),
    ('\u{23F0}', '\u{23F0}'),
    ('\u{23F3}', '\u{23F3}'),
    ('\u{25FD}', '\u{25FE}'),
    ('\u{2614}', '\u{2615}'),
    ('\u{2648}', '\u{2653}'),
    ('\u{267F}', '\u{267F}'),
    ('\u{2693}', '\u{2693}'),
    ('\u{26A1}', '\u{26A1}'),
    ('\u{26AA}', '\u{26AB}'),
    ('\u{26BD}', '\u{26BE}'),
    ('\u{26C4}', '\u{26C5}'),
    ('\u{26CE}', '\u{26CE}'),
    ('\u{26D4}', '\u{26D4}'),
    ('\u{26EA}', '\u{26EA}'),
    ('\u{26F2}', '\u{26F3}'),
    ('\u{26F5}', '\u{26F5}'),
    ('\u{26FA}', '\u{26FA}'),
    ('\u{26FD}', '\u{26FD}'),
    ('\u{2705}', '\u{2705}'),
    ('\u{270A}', '\u{270B}'),
    ('\u{2728}', '\u{2728}'),
    ('\u{274C}', '\u{274C}'),
    ('\u{274E}', '\u{274E}'),
    ('\u{2753}', '\u{2755}'),
    ('\u{2757}', '\u{2757}'),
    ('\u{2795}', '\u{2797}'),
    ('\u{27B0}', '\u{27B0}'),
    ('\u{27BF}', '\u{27BF}'),
    ('\u{2B1B}', '\u{2B1C}'),
    ('\u{2B50}', '\u{2B50}'),
    ('\u{2B55}', '\u{2B55}'),
    ('\u{1F004}', '\u{1F004}'),
    ('\u{1F0CF}', '\u{1F0CF}'),
    ('\u{1F18E}', '\u{1F18E}'),
    ('\u{1F191}', '\u{1F19A}'),
    ('\u{1F201}', '\u{1F201}'),
    ('\u{1F21A}', '\u{1F21A}'),
    ('\u{1F22F}', '\u{1F22F}'),
    ('\u{1F232}', '\u{1F236}'),
    ('\u{1F238}', '\u{1F23A}'),
    ('\u{1F250}', '\u{1F251}'),
    ('\u{1F300}', '\u{1F320}'),
    ('\u{1F32D}', '\u{1F335}'),
    ('\u{1F337}', '\u{1F37C}'),
    ('\u{1F37E}', '\u{1F393}'),
    ('\u{1F3A0}', '\u{1F3CA}'),
    ('\u{1F3CF}', '\u{1F3D3}'),
    ('\u{1F3E0}', '\u{1F3F0}'),
    ('\u{1F3F4}', '\u{1F3F4}'),
    ('\u{1F3F8}', '\u{1F43E}'),
    ('\u{1F440}', '\u{1F440}'),
    ('\u{1F442}', '\u{1F4FC}'),
    ('\u{1F4FF}', '\u{1F53D}'),
    ('\u{1F54B}', '\u{1F54E}'),
    ('\u{1F550}', '\u{1F567}'),
    ('\u{1F57A}', '\u{1F57A}'),
    ('\u{1F595}', '\u{1F596}'),
    ('\u{1F5A4}', '\u{1F5A4}'),
    ('\u{1F5FB}', '\u{1F64F}'),
    ('\u{1F680}', '\u{1F6C5}'),
    ('\u{1F6CC}', '\u{1F6CC}'),
    ('\u{1F6D0}', '\u{1F6D2}'),
    ('\u{1F6D5}', '\u{1F6D7}'),
    ('\u{1F6DC}', '\u{1F6DF}'),
    ('\u{1F6EB}', '\u{1F6EC}'),
    ('\u{1F6F4}', '\u{1F6FC}'),
    ('\u{1F7E0}', '\u{1F7EB}'),
    ('\u{1F7F0}', '\u{1F7F0}'),
    ('\u{1F90C}', '\u{1F93A}'),
    ('\u{1F93C}', '\u{1F945}'),
    ('\u{1F947}', '\u{1F9FF}'),
    ('\u{1FA70}', '\u{1FA7C}'),
    ('\u{1FA80}', '\u{1FA88}'),
    ('\u{1FA90}', '\u{1FABD}'),
    ('\u{1FABF}', '\u{1FAC5}'),
    ('\u{1FACE}', '\u{1FADB}'),
    ('\u{1FAE0}', '\u{1FAE8}'),
    ('\u{1FAF0}', '\u{1FAF8}'),
];

/// Bases of the standardized variation sequences in `emoji-variation-sequences.txt`,
/// each of which has both a `base FE0E` (text) and a `base FE0F` (emoji) form. The
/// keycap bases (`#`, `*`, `0`..`9`) are left out; they only count as emoji inside a
/// keycap sequence.
pub const VARIATION_BASE_RANGES: &[(char, char)] = &[
    ('\u{00A9}', '\u{00A9}'),
    ('\u{00AE}', '\u{00AE}'),
    ('\u{203C}', '\u{203C}'),
    ('\u{2049}', '\u{2049}'),
    ('\u{2122}', '\u{2122}'),
    ('\u{2139}', '\u{2139}'),
    ('\u{2194}', '\u{2199}'),
    ('\u{21A9}', '\u{21AA}'),
    ('\u{231A}', '\u{231B}'),
    ('\u{2328}', '\u{2328}'),
    ('\u{23CF}', '\u{23CF}'),
    ('\u{23E9}', '\u{23EA}'),
    ('\u{23ED}', '\u{23EF}'),
    ('\u{23F1}', '\u{23F3}'),
    ('\u{23F8}', '\u{23FA}'),
    ('\u{24C2}', '\u{24C2}'),
    ('\u{25AA}', '\u{25AB}'),
    ('\u{25B6}', '\u{25B6}'),
    ('\u{25C0}', '\u{25C0}'),
    ('\u{25FB}', '\u{25FE}'),
    ('\u{2600}', '\u{2604}'),
    ('\u{260E}', '\u{260E}'),
    ('\u{2611}', '\u{2611}'),
    ('\u{2614}', '\u{2615}'),
    ('\u{2618}', '\u{2618}'),
    ('\u{261D}', '\u{261D}'),
    ('\u{2620}', '\u{2620}'),
    ('\u{2622}', '\u{2623}'),
    ('\u{2626}', '\u{2626}'),
    ('\u{262A}', '\u{262A}'),
    ('\u{262E}', '\u{262F}'),
    ('\u{2638}', '\u{263A}'),
    ('\u{2640}', '\u{2640}'),
    ('\u{2642}', '\u{2642}'),
    ('\u{2648}', '\u{2653}'),
    ('\u{265F}', '\u{2660}'),
    ('\u{2663}', '\u{2663}'),
    ('\u{2665}', '\u{2666}'),
    ('\u{2668}', '\u{2668}'),
    ('\u{267B}', '\u{267B}'),
    ('\u{267E}', '\u{267F}'),
    ('\u{2692}', '\u{2697}'),
    ('\u{2699}', '\u{2699}'),
    ('\u{269B}', '\u{269C}'),
    ('\u{26A0}', '\u{26A1}'),
    ('\u{26A7}', '\u{26A7}'),
    ('\u{26AA}', '\u{26AB}'),
    ('\u{26B0}', '\u{26B1}'),
    ('\u{26BD}', '\u{26BE}'),
    ('\u{26C4}', '\u{26C5}'),
    ('\u{26C8}', '\u{26C8}'),
    ('\u{26CF}', '\u{26CF}'),
    ('\u{26D1}', '\u{26D1}'),
    ('\u{26D3}', '\u{26D4}'),
    ('\u{26E9}', '\u{26EA}'),
    ('\u{26F0}', '\u{26F5}'),
    ('\u{26F7}', '\u{26FA}'),
    ('\u{26FD}', '\u{26FD}'),
    ('\u{2702}', '\u{2702}'),
    ('\u{2708}', '\u{2709}'),
    ('\u{270C}', '\u{270D}'),
    ('\u{270F}', '\u{270F}'),
    ('\u{2712}', '\u{2712}'),
    ('\u{2714}', '\u{2714}'),
    ('\u{2716}', '\u{2716}'),
    ('\u{271D}', '\u{271D}'),
    ('\u{2721}', '\u{2721}'),
    ('\u{2733}', '\u{2734}'),
    ('\u{2744}', '\u{2744}'),
    ('\u{2747}', '\u{2747}'),
    ('\u{2753}', '\u{2753}'),
    ('\u{2757}', '\u{2757}'),
    ('\u{2763}', '\u{2764}'),
    ('\u{27A1}', '\u{27A1}'),
    ('\u{2934}', '\u{2935}'),
    ('\u{2B05}', '\u{2B07}'),
    ('\u{2B1B}', '\u{2B1C}'),
    ('\u{2B50}', '\u{2B50}'),
    ('\u{2B55}', '\u{2B55}'),
    ('\u{3030}', '\u{3030}'),
    ('\u{303D}', '\u{303D}'),
    ('\u{3297}', '\u{3297}'),
    ('\u{3299}', '\u{3299}'),
    ('\u{1F004}', '\u{1F004}'),
    ('\u{1F170}', '\u{1F171}'),
    ('\u{1F17E}', '\u{1F17F}'),
    ('\u{1F202}', '\u{1F202}'),
    ('\u{1F21A}', '\u{1F21A}'),
    ('\u{1F22F}', '\u{1F22F}'),
    ('\u{1F237}', '\u{1F237}'),
    ('\u{1F30D}', '\u{1F30F}'),
    ('\u{1F315}', '\u{1F315}'),
    ('\u{1F31C}', '\u{1F31C}'),
    ('\u{1F321}', '\u{1F321}'),
    ('\u{1F324}', '\u{1F32C}'),
    ('\u{1F336}', '\u{1F336}'),
    ('\u{1F378}', '\u{1F378}'),
    ('\u{1F37D}', '\u{1F37D}'),
    ('\u{1F393}', '\u{1F393}'),
    ('\u{1F396}', '\u{1F397}'),
    ('\u{1F399}', '\u{1F39B}'),
    ('\u{1F39E}', '\u{1F39F}'),
    ('\u{1F3A7}', '\u{1F3A7}'),
    ('\u{1F3AC}', '\u{1F3AE}'),
    ('\u{1F3C2}', '\u{1F3C2}'),
    ('\u{1F3C4}', '\u{1F3C4}'),
    ('\u{1F3C6}', '\u{1F3C6}'),
    ('\u{1F3CA}', '\u{1F3CE}'),
    ('\u{1F3D4}', '\u{1F3E0}'),
    ('\u{1F3ED}', '\u{1F3ED}'),
    ('\u{1F3F3}', '\u{1F3F3}'),
    ('\u{1F3F5}', '\u{1F3F5}'),
    ('\u{1F3F7}', '\u{1F3F7}'),
    ('\u{1F408}', '\u{1F408}'),
    ('\u{1F415}', '\u{1F415}'),
    ('\u{1F41F}', '\u{1F41F}'),
    ('\u{1F426}', '\u{1F426}'),
    ('\u{1F43F}', '\u{1F43F}'),
    ('\u{1F441}', '\u{1F442}'),
    ('\u{1F446}', '\u{1F449}'),
    ('\u{1F44D}', '\u{1F44E}'),
    ('\u{1F453}', '\u{1F453}'),
    ('\u{1F46A}', '\u{1F46A}'),
    ('\u{1F47D}', '\u{1F47D}'),
    ('\u{1F4A3}', '\u{1F4A3}'),
    ('\u{1F4B0}', '\u{1F4B0}'),
    ('\u{1F4B3}', '\u{1F4B3}'),
    ('\u{1F4BB}', '\u{1F4BB}'),
    ('\u{1F4BF}', '\u{1F4BF}'),
    ('\u{1F4CB}', '\u{1F4CB}'),
    ('\u{1F4DA}', '\u{1F4DA}'),
    ('\u{1F4DF}', '\u{1F4DF}'),
    ('\u{1F4E4}', '\u{1F4E6}'),
    ('\u{1F4EA}', '\u{1F4ED}'),
    ('\u{1F4F7}', '\u{1F4F7}'),
    ('\u{1F4F9}', '\u{1F4FB}'),
    ('\u{1F4FD}', '\u{1F4FD}'),
    ('\u{1F508}', '\u{1F508}'),
    ('\u{1F50D}', '\u{1F50D}'),
    ('\u{1F512}', '\u{1F513}'),
    ('\u{1F549}', '\u{1F54A}'),
    ('\u{1F550}', '\u{1F567}'),
    ('\u{1F56F}', '\u{1F570}'),
    ('\u{1F573}', '\u{1F579}'),
    ('\u{1F587}', '\u{1F587}'),
    ('\u{1F58A}', '\u{1F58D}'),
    ('\u{1F590}', '\u{1F590}'),
    ('\u{1F5A5}', '\u{1F5A5}'),
    ('\u{1F5A8}', '\u{1F5A8}'),
    ('\u{1F5B1}', '\u{1F5B2}'),
    ('\u{1F5BC}', '\u{1F5BC}'),
    ('\u{1F5C2}', '\u{1F5C4}'),
    ('\u{1F5D1}', '\u{1F5D3}'),
    ('\u{1F5DC}', '\u{1F5DE}'),
    ('\u{1F5E1}', '\u{1F5E1}'),
    ('\u{1F5E3}', '\u{1F5E3}'),
    ('\u{1F5E8}', '\u{1F5E8}'),
    ('\u{1F5EF}', '\u{1F5EF}'),
    ('\u{1F5F3}', '\u{1F5F3}'),
    ('\u{1F5FA}', '\u{1F5FA}'),
    ('\u{1F610}', '\u{1F610}'),
    ('\u{1F687}', '\u{1F687}'),
    ('\u{1F68D}', '\u{1F68D}'),
    ('\u{1F691}', '\u{1F691}'),
    ('\u{1F694}', '\u{1F694}'),
    ('\u{1F698}', '\u{1F698}'),
    ('\u{1F6AD}', '\u{1F6AD}'),
    ('\u{1F6B2}', '\u{1F6B2}'),
    ('\u{1F6B9}', '\u{1F6BA}'),
    ('\u{1F6BC}', '\u{1F6BC}'),
    ('\u{1F6CB}', '\u{1F6CB}'),
    ('\u{1F6CD}', '\u{1F6CF}'),
    ('\u{1F6E0}', '\u{1F6E5}'),
    ('\u{1F6E9}', '\u{1F6E9}'),
    ('\u{1F6F0}', '\u{1F6F0}'),
    ('\u{1F6F3}', '\u{1F6F3}'),
];

/// `Emoji_Modifier_Base=Yes` codepoints, each of which combines with every skin tone.
pub const MODIFIER_BASE_RANGES: &[(char, char)] = &[
    ('\u{261D}', '\u{261D}'),
    ('\u{26F9}', '\u{26F9}'),
    ('\u{270A}', '\u{270D}'),
    ('\u{1F385}', '\u{1F385}'),
    ('\u{1F3C2}', '\u{1F3C4}'),
    ('\u{1F3C7}', '\u{1F3C7}'),
    ('\u{1F3CA}', '\u{1F3CC}'),
    ('\u{1F442}', '\u{1F443}'),
    ('\u{1F446}', '\u{1F450}'),
    ('\u{1F466}', '\u{1F478}'),
    ('\u{1F47C}', '\u{1F47C}'),
    ('\u{1F481}', '\u{1F483}'),
    ('\u{1F485}', '\u{1F487}'),
    ('\u{1F48F}', '\u{1F48F}'),
    ('\u{1F491}', '\u{1F491}'),
    ('\u{1F4AA}', '\u{1F4AA}'),
    ('\u{1F574}', '\u{1F575}'),
    ('\u{1F57A}', '\u{1F57A}'),
    ('\u{1F590}', '\u{1F590}'),
    ('\u{1F595}', '\u{1F596}'),
    ('\u{1F645}', '\u{1F647}'),
    ('\u{1F64B}', '\u{1F64F}'),
    ('\u{1F6A3}', '\u{1F6A3}'),
    ('\u{1F6B4}', '\u{1F6B6}'),
    ('\u{1F6C0}', '\u{1F6C0}'),
    ('\u{1F6CC}', '\u{1F6CC}'),
    ('\u{1F90C}', '\u{1F90C}'),
    ('\u{1F90F}', '\u{1F90F}'),
    ('\u{1F918}', '\u{1F91F}'),
    ('\u{1F926}', '\u{1F926}'),
    ('\u{1F930}', '\u{1F939}'),
    ('\u{1F93C}', '\u{1F93E}'),
    ('\u{1F977}', '\u{1F977}'),
    ('\u{1F9B5}', '\u{1F9B6}'),
    ('\u{1F9B8}', '\u{1F9B9}'),
    ('\u{1F9BB}', '\u{1F9BB}'),
    ('\u{1F9CD}', '\u{1F9CF}'),
    ('\u{1F9D1}', '\u{1F9DD}'),
    ('\u{1FAC3}', '\u{1FAC5}'),
    ('\u{1FAF0}', '\u{1FAF8}'),
];

/// Bases of keycap sequences.
pub const KEYCAP_BASES: &[char] = &['#', '*', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// `RGI_Emoji_Flag_Sequence` region codes. Each pair of ASCII letters maps onto a pair of
/// regional indicators, eg: `CN` is U+1F1E8 U+1F1F3.
pub const RGI_REGION_CODES: &[&str] = &[
    "AC", "AD", "AE", "AF", "AG", "AI", "AL", "AM", "AO", "AQ", "AR", "AS", "AT", "AU",
    "AW", "AX", "AZ", "BA", "BB", "BD", "BE", "BF", "BG", "BH", "BI", "BJ", "BL", "BM",
    "BN", "BO", "BQ", "BR", "BS", "BT", "BV", "BW", "BY", "BZ", "CA", "CC", "CD", "CF",
    "CG", "CH", "CI", "CK", "CL", "CM", "CN", "CO", "CP", "CR", "CU", "CV", "CW", "CX",
    "CY", "CZ", "DE", "DG", "DJ", "DK", "DM", "DO", "DZ", "EA", "EC", "EE", "EG", "EH",
    "ER", "ES", "ET", "EU", "FI", "FJ", "FK", "FM", "FO", "FR", "GA", "GB", "GD", "GE",
    "GF", "GG", "GH", "GI", "GL", "GM", "GN", "GP", "GQ", "GR", "GS", "GT", "GU", "GW",
    "GY", "HK", "HM", "HN", "HR", "HT", "HU", "IC", "ID", "IE", "IL", "IM", "IN", "IO",
    "IQ", "IR", "IS", "IT", "JE", "JM", "JO", "JP", "KE", "KG", "KH", "KI", "KM", "KN",
    "KP", "KR", "KW", "KY", "KZ", "LA", "LB", "LC", "LI", "LK", "LR", "LS", "LT", "LU",
    "LV", "LY", "MA", "MC", "MD", "ME", "MF", "MG", "MH", "MK", "ML", "MM", "MN", "MO",
    "MP", "MQ", "MR", "MS", "MT", "MU", "MV", "MW", "MX", "MY", "MZ", "NA", "NC", "NE",
    "NF", "NG", "NI", "NL", "NO", "NP", "NR", "NU", "NZ", "OM", "PA", "PE", "PF", "PG",
    "PH", "PK", "PL", "PM", "PN", "PR", "PS", "PT", "PW", "PY", "QA", "RE", "RO", "RS",
    "RU", "RW", "SA", "SB", "SC", "SD", "SE", "SG", "SH", "SI", "SJ", "SK", "SL", "SM",
    "SN", "SO", "SR", "SS", "ST", "SV", "SX", "SY", "SZ", "TA", "TC", "TD", "TF", "TG",
    "TH", "TJ", "TK", "TL", "TM", "TN", "TO", "TR", "TT", "TV", "TW", "TZ", "UA", "UG",
    "UM", "UN", "US", "UY", "UZ", "VA", "VC", "VE", "VG", "VI", "VN", "VU", "WF", "WS",
    "XK", "YE", "YT", "ZA", "ZM", "ZW",
];

/// `RGI_Emoji_Tag_Sequence` subdivision codes. Each ASCII character maps onto the tag
/// codepoint `U+E0000 + char`, eg: `gbeng` is England.
pub const RGI_SUBDIVISION_TAGS: &[&str] = &["gbeng", "gbsct", "gbwls"];

// ZWJ building blocks.

pub const MAN: char = '\u{1F468}';
pub const WOMAN: char = '\u{1F469}';
pub const PERSON: char = '\u{1F9D1}';
pub const GIRL: char = '\u{1F467}';
pub const BOY: char = '\u{1F466}';
pub const CHILD: char = '\u{1F9D2}';
pub const RED_HEART: char = '\u{2764}';
pub const KISS_MARK: char = '\u{1F48B}';
pub const HANDSHAKE: char = '\u{1F91D}';
pub const FEMALE_SIGN: char = '\u{2640}';
pub const MALE_SIGN: char = '\u{2642}';
pub const RIGHT_ARROW: char = '\u{27A1}';
pub const RIGHTWARDS_HAND: char = '\u{1FAF1}';
pub const LEFTWARDS_HAND: char = '\u{1FAF2}';

/// Family groupings, written as the members that get joined with U+200D.
pub const FAMILIES: &[&[char]] = &[
    &[MAN, WOMAN, BOY],
    &[MAN, WOMAN, GIRL],
    &[MAN, WOMAN, GIRL, BOY],
    &[MAN, WOMAN, BOY, BOY],
    &[MAN, WOMAN, GIRL, GIRL],
    &[MAN, MAN, BOY],
    &[MAN, MAN, GIRL],
    &[MAN, MAN, GIRL, BOY],
    &[MAN, MAN, BOY, BOY],
    &[MAN, MAN, GIRL, GIRL],
    &[WOMAN, WOMAN, BOY],
    &[WOMAN, WOMAN, GIRL],
    &[WOMAN, WOMAN, GIRL, BOY],
    &[WOMAN, WOMAN, BOY, BOY],
    &[WOMAN, WOMAN, GIRL, GIRL],
    &[MAN, BOY],
    &[MAN, BOY, BOY],
    &[MAN, GIRL],
    &[MAN, GIRL, BOY],
    &[MAN, GIRL, GIRL],
    &[WOMAN, BOY],
    &[WOMAN, BOY, BOY],
    &[WOMAN, GIRL],
    &[WOMAN, GIRL, BOY],
    &[WOMAN, GIRL, GIRL],
    &[PERSON, PERSON, CHILD],
    &[PERSON, PERSON, CHILD, CHILD],
    &[PERSON, CHILD],
    &[PERSON, CHILD, CHILD],
];

/// `(left, right)` pairs for "couple with heart" and "kiss" sequences, which come in an
/// untoned form and a form with a skin tone on each person. The person + person pairs
/// only exist with two different skin tones, since the same tone (and no tone) is
/// spelled with the single codepoints U+1F491 and U+1F48F.
pub const COUPLES: &[(char, char)] = &[(WOMAN, MAN), (MAN, MAN), (WOMAN, WOMAN)];

/// `(left, right)` pairs for "people holding hands" with two different skin tones. The
/// same tone is spelled with the single codepoints U+1F46B, U+1F46C, U+1F46D.
pub const HOLDING_HANDS_MIXED_TONES: &[(char, char)] =
    &[(WOMAN, MAN), (MAN, MAN), (WOMAN, WOMAN)];

/// Objects that follow `person ZWJ` in role sequences, eg: `🧑‍🌾` farmer. Objects
/// flagged `true` take a U+FE0F after them. The flag for the person only roles is in
/// [`PERSON_ONLY_ROLE_OBJECTS`].
pub const ROLE_OBJECTS: &[(char, bool)] = &[
    ('\u{2695}', true),  // health worker
    ('\u{2696}', true),  // judge
    ('\u{2708}', true),  // pilot
    ('\u{1F33E}', false), // farmer
    ('\u{1F373}', false), // cook
    ('\u{1F37C}', false), // feeding baby
    ('\u{1F393}', false), // student
    ('\u{1F3A4}', false), // singer
    ('\u{1F3A8}', false), // artist
    ('\u{1F3EB}', false), // school
    ('\u{1F3ED}', false), // factory worker
    ('\u{1F4BB}', false), // technologist
    ('\u{1F4BC}', false), // office worker
    ('\u{1F527}', false), // mechanic
    ('\u{1F52C}', false), // scientist
    ('\u{1F680}', false), // astronaut
    ('\u{1F692}', false), // firefighter
    ('\u{1F9AF}', false), // with white cane
    ('\u{1F9BC}', false), // in motorized wheelchair
    ('\u{1F9BD}', false), // in manual wheelchair
    ('\u{1F9B0}', false), // red hair
    ('\u{1F9B1}', false), // curly hair
    ('\u{1F9B2}', false), // bald
    ('\u{1F9B3}', false), // white hair
];

/// Role objects that only exist for the gender neutral [`PERSON`], eg: `🧑‍🎄` mx claus.
pub const PERSON_ONLY_ROLE_OBJECTS: &[char] = &['\u{1F384}'];

/// Role objects that also have a "facing right" form, suffixed with `ZWJ 27A1 FE0F`.
pub const DIRECTIONAL_ROLE_OBJECTS: &[char] = &['\u{1F9AF}', '\u{1F9BC}', '\u{1F9BD}'];

/// Bases of "man ..." / "woman ..." activity sequences, eg: `🏃‍♀️` woman running.
/// The flag is `true` when the base takes skin tones.
pub const GENDERED_ACTIVITY_BASES: &[(char, bool)] = &[
    ('\u{26F9}', true),   // bouncing ball
    ('\u{1F3C3}', true),  // running
    ('\u{1F3C4}', true),  // surfing
    ('\u{1F3CA}', true),  // swimming
    ('\u{1F3CB}', true),  // lifting weights
    ('\u{1F3CC}', true),  // golfing
    ('\u{1F46E}', true),  // police officer
    ('\u{1F46F}', false), // with bunny ears
    ('\u{1F470}', true),  // with veil
    ('\u{1F471}', true),  // blond hair
    ('\u{1F473}', true),  // wearing turban
    ('\u{1F477}', true),  // construction worker
    ('\u{1F481}', true),  // tipping hand
    ('\u{1F482}', true),  // guard
    ('\u{1F486}', true),  // getting massage
    ('\u{1F487}', true),  // getting haircut
    ('\u{1F575}', true),  // detective
    ('\u{1F645}', true),  // gesturing no
    ('\u{1F646}', true),  // gesturing ok
    ('\u{1F647}', true),  // bowing
    ('\u{1F64B}', true),  // raising hand
    ('\u{1F64D}', true),  // frowning
    ('\u{1F64E}', true),  // pouting
    ('\u{1F6A3}', true),  // rowing boat
    ('\u{1F6B4}', true),  // biking
    ('\u{1F6B5}', true),  // mountain biking
    ('\u{1F6B6}', true),  // walking
    ('\u{1F926}', true),  // facepalming
    ('\u{1F935}', true),  // in tuxedo
    ('\u{1F937}', true),  // shrugging
    ('\u{1F938}', true),  // cartwheeling
    ('\u{1F939}', true),  // juggling
    ('\u{1F93C}', false), // wrestling
    ('\u{1F93D}', true),  // playing water polo
    ('\u{1F93E}', true),  // playing handball
    ('\u{1F9B8}', true),  // superhero
    ('\u{1F9B9}', true),  // supervillain
    ('\u{1F9CD}', true),  // standing
    ('\u{1F9CE}', true),  // kneeling
    ('\u{1F9CF}', true),  // deaf
    ('\u{1F9D4}', true),  // beard
    ('\u{1F9D6}', true),  // in steamy room
    ('\u{1F9D7}', true),  // climbing
    ('\u{1F9D8}', true),  // in lotus position
    ('\u{1F9D9}', true),  // mage
    ('\u{1F9DA}', true),  // fairy
    ('\u{1F9DB}', true),  // vampire
    ('\u{1F9DC}', true),  // merperson
    ('\u{1F9DD}', true),  // elf
    ('\u{1F9DE}', false), // genie
    ('\u{1F9DF}', false), // zombie
];

/// Activity bases that also have a "facing right" form, with and without a gender sign.
pub const DIRECTIONAL_ACTIVITY_BASES: &[char] = &['\u{1F3C3}', '\u{1F6B6}', '\u{1F9CE}'];

/// Fully qualified ZWJ sequences that don't follow any of the patterns above.
pub const STANDALONE_ZWJ_SEQUENCES: &[&[char]] = &[
    &['\u{1F3F3}', '\u{FE0F}', '\u{200D}', '\u{1F308}'], // rainbow flag
    &['\u{1F3F3}', '\u{FE0F}', '\u{200D}', '\u{26A7}', '\u{FE0F}'], // transgender flag
    &['\u{1F3F4}', '\u{200D}', '\u{2620}', '\u{FE0F}'], // pirate flag
    &['\u{1F415}', '\u{200D}', '\u{1F9BA}'],            // service dog
    &['\u{1F408}', '\u{200D}', '\u{2B1B}'],             // black cat
    &['\u{1F43B}', '\u{200D}', '\u{2744}', '\u{FE0F}'], // polar bear
    &['\u{1F426}', '\u{200D}', '\u{2B1B}'],             // black bird
    &['\u{1F426}', '\u{200D}', '\u{1F525}'],            // phoenix
    &['\u{1F34B}', '\u{200D}', '\u{1F7E9}'],            // lime
    &['\u{1F344}', '\u{200D}', '\u{1F7EB}'],            // brown mushroom
    &['\u{26D3}', '\u{FE0F}', '\u{200D}', '\u{1F4A5}'], // broken chain
    &['\u{1F441}', '\u{FE0F}', '\u{200D}', '\u{1F5E8}', '\u{FE0F}'], // eye in speech bubble
    &['\u{1F62E}', '\u{200D}', '\u{1F4A8}'],            // face exhaling
    &['\u{1F635}', '\u{200D}', '\u{1F4AB}'],            // face with spiral eyes
    &['\u{1F636}', '\u{200D}', '\u{1F32B}', '\u{FE0F}'], // face in clouds
    &['\u{1F642}', '\u{200D}', '\u{2194}', '\u{FE0F}'], // head shaking horizontally
    &['\u{1F642}', '\u{200D}', '\u{2195}', '\u{FE0F}'], // head shaking vertically
    &['\u{2764}', '\u{FE0F}', '\u{200D}', '\u{1F525}'], // heart on fire
    &['\u{2764}', '\u{FE0F}', '\u{200D}', '\u{1FA79}'], // mending heart
];

/// Returns `true` if `it` falls into one of the inclusive `ranges`.
#[must_use]
pub fn in_ranges(ranges: &[(char, char)], it: char) -> bool {
    ranges
        .binary_search_by(|(start, end)| {
            if *end < it {
                std::cmp::Ordering::Less
            } else if *start > it {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted_and_disjoint(ranges: &[(char, char)]) {
        for (start, end) in ranges {
            assert!(start <= end, "{start:?} > {end:?}");
        }
        for pair in ranges.windows(2) {
            assert!(pair[0].1 < pair[1].0, "{:?} overlaps {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_ranges_are_sorted_and_disjoint() {
        assert_sorted_and_disjoint(EMOJI_PRESENTATION_RANGES);
        assert_sorted_and_disjoint(VARIATION_BASE_RANGES);
        assert_sorted_and_disjoint(MODIFIER_BASE_RANGES);
    }

    #[test]
    fn test_in_ranges() {
        assert!(in_ranges(EMOJI_PRESENTATION_RANGES, '\u{26A1}'));
        assert!(in_ranges(EMOJI_PRESENTATION_RANGES, '\u{1F600}'));
        assert!(!in_ranges(EMOJI_PRESENTATION_RANGES, 'a'));
        assert!(!in_ranges(EMOJI_PRESENTATION_RANGES, '\u{1F1E8}'));
        assert!(in_ranges(VARIATION_BASE_RANGES, '\u{00A9}'));
        assert!(in_ranges(MODIFIER_BASE_RANGES, '\u{270D}'));
        assert!(!in_ranges(MODIFIER_BASE_RANGES, '\u{1F600}'));
    }

    #[test]
    fn test_region_and_tag_codes_are_well_formed() {
        assert_eq!(RGI_REGION_CODES.len(), 258);
        for code in RGI_REGION_CODES {
            assert_eq!(code.len(), 2);
            assert!(code.bytes().all(|it| it.is_ascii_uppercase()), "{code}");
        }
        for pair in RGI_REGION_CODES.windows(2) {
            assert!(pair[0] < pair[1], "{} >= {}", pair[0], pair[1]);
        }
        for tag in RGI_SUBDIVISION_TAGS {
            assert!(tag.bytes().all(|it| it.is_ascii_lowercase()), "{tag}");
        }
    }
}
