// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Free functions that run against the process wide [`global_catalog`]. These are the
//! simplest way to use this crate. To use a [`crate::CatalogConfig`] other than the
//! default, call [`crate::try_init_global_catalog`] before any of these, or build your
//! own [`crate::Catalog`] and call the methods of the same name on it.

use super::EmojiToken;
use crate::global_catalog;

/// `true` if `text` holds at least one emoji.
///
/// ```
/// use r3bl_emoji::has_emoji;
///
/// assert!(has_emoji("1\u{20E3}\u{FE0F}"));
/// assert!(!has_emoji("一"));
/// ```
#[must_use]
pub fn has_emoji(text: &str) -> bool { global_catalog().has_emoji(text) }

#[must_use]
pub fn has_emoji_bytes(bytes: &[u8]) -> bool { global_catalog().has_emoji_bytes(bytes) }

/// `text` without any emoji.
///
/// ```
/// use r3bl_emoji::filter_emoji;
///
/// assert_eq!(filter_emoji("1\u{20E3}\u{FE0F}"), "");
/// assert_eq!(filter_emoji("ok 👍🏿!"), "ok !");
/// ```
#[must_use]
pub fn filter_emoji(text: &str) -> String { global_catalog().filter_emoji(text) }

#[must_use]
pub fn filter_emoji_bytes(bytes: &[u8]) -> Vec<u8> {
    global_catalog().filter_emoji_bytes(bytes)
}

/// `text` with each emoji replaced by the output of `transform`.
///
/// ```
/// use r3bl_emoji::replace_emoji;
///
/// assert_eq!(replace_emoji("1\u{20E3}\u{FE0F}234\u{20E3}\u{FE0F}", |_| "#"), "#23#");
/// ```
pub fn replace_emoji<S: AsRef<str>>(text: &str, transform: impl FnMut(&str) -> S) -> String {
    global_catalog().replace_emoji(text, transform)
}

/// Same as [`replace_emoji`], over bytes that may not be valid `UTF-8`.
pub fn replace_emoji_bytes<B: AsRef<[u8]>>(
    bytes: &[u8],
    transform: impl FnMut(&[u8]) -> B,
) -> Vec<u8> {
    global_catalog().replace_emoji_bytes(bytes, transform)
}

/// `text` with each emoji replaced by the output of `transform`, which also sees the
/// position and kind of each token.
///
/// ```
/// use r3bl_emoji::replace_all_emoji_func;
///
/// let it = replace_all_emoji_func("a😀b🇨🇳", |token| format!("[{}:{}]", token.index, token.kind()));
/// assert_eq!(it, "a[0:Basic]b[1:RegionalFlag]");
/// ```
pub fn replace_all_emoji_func<S: AsRef<str>>(
    text: &str,
    transform: impl FnMut(&EmojiToken<'_, '_>) -> S,
) -> String {
    global_catalog().replace_all_emoji_func(text, transform)
}

/// Number of glyphs a reader would count, with each emoji counting as one.
///
/// ```
/// use r3bl_emoji::human_read_len;
///
/// assert_eq!(human_read_len("1\u{20E3}\u{FE0F}23"), 3);
/// assert_eq!(human_read_len("👩‍👩‍👦🇨🇳3"), 3);
/// ```
#[must_use]
pub fn human_read_len(text: &str) -> usize { global_catalog().human_read_len(text) }

#[must_use]
pub fn human_read_len_bytes(bytes: &[u8]) -> usize {
    global_catalog().human_read_len_bytes(bytes)
}

/// The emoji in `text`, in order.
///
/// ```
/// use r3bl_emoji::find_emoji;
///
/// let found: Vec<_> = find_emoji("a😀b🇨🇳").collect();
/// assert_eq!(found, vec!["😀", "🇨🇳"]);
/// ```
pub fn find_emoji(text: &str) -> impl Iterator<Item = &str> {
    global_catalog().find_emoji(text)
}

#[must_use]
pub fn count_emoji(text: &str) -> usize { global_catalog().count_emoji(text) }

/// See [`crate::Catalog::dump`].
#[must_use]
pub fn dump(text: &str) -> String { global_catalog().dump(text) }

#[must_use]
pub fn dump_bytes(bytes: &[u8]) -> String { global_catalog().dump_bytes(bytes) }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_free_functions_match_scenarios() {
        assert!(has_emoji("1\u{20E3}\u{FE0F}"));
        assert!(!has_emoji("一"));
        assert_eq2!(filter_emoji("1\u{20E3}\u{FE0F}"), "");
        assert_eq2!(
            replace_emoji("1\u{20E3}\u{FE0F}234\u{20E3}\u{FE0F}", |_| "#"),
            "#23#"
        );
        assert_eq2!(human_read_len("123"), 3);
        assert_eq2!(human_read_len("1\u{20E3}\u{FE0F}23"), 3);
        assert_eq2!(human_read_len("👩‍👩‍👦🇨🇳3"), 3);
    }

    #[test]
    fn test_replace_with_counter() {
        let mut counter = 0;
        let it = replace_emoji("1\u{20E3}\u{FE0F}234\u{20E3}\u{FE0F}", |_| {
            counter += 1;
            if counter == 1 { "1" } else { "" }
        });
        assert_eq2!(it, "123");
        assert_eq2!(counter, 2);
    }

    #[test]
    fn test_byte_variants() {
        let bytes = [b'x', 0xFF, 0xF0, 0x9F, 0x98, 0x80];
        assert!(has_emoji_bytes(&bytes));
        assert_eq2!(filter_emoji_bytes(&bytes), vec![b'x', 0xFF]);
        assert_eq2!(human_read_len_bytes(&bytes), 3);
        assert_eq2!(count_emoji("x😀"), 1);
        assert!(dump_bytes(&bytes).contains("Span[Basic]"));
        assert!(dump("x😀").contains("Span[plain]"));
    }
}
