// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Write as _;

use crate::{Catalog, Span, SpanIter, SpanKind, fmt_codepoints};

impl Catalog {
    /// A human readable trace of how `text` gets split into spans, one line per span:
    ///
    /// ```text
    /// Span[plain] ┆ byte: [ 0,  2] size: 2 ┆ codepoints: 2 ┆ "ab"
    /// Span[RegionalFlag] ┆ byte: [ 2, 10] size: 8 ┆ codepoints: 2 ┆ 1F1E8 1F1F3 ┆ "🇨🇳"
    /// ```
    ///
    /// Each line is also logged as a [`tracing::debug!`] event. The output reflects the
    /// real spans of [`Self::scan`], it isn't computed separately.
    #[must_use]
    pub fn dump(&self, text: &str) -> String {
        dump_spans(self.scan(text), |span| span.get_str(text).into())
    }

    /// Same as [`Self::dump`], with invalid bytes shown as U+FFFD.
    #[must_use]
    pub fn dump_bytes(&self, bytes: &[u8]) -> String {
        dump_spans(self.scan_bytes(bytes), |span| {
            String::from_utf8_lossy(span.get_bytes(bytes)).into_owned()
        })
    }
}

fn dump_spans(spans: SpanIter<'_, '_>, get_text: impl Fn(&Span<'_>) -> String) -> String {
    let mut acc = String::new();
    for span in spans {
        let mut line = format!("{span:?}");
        if let SpanKind::Emoji(sequence) = span.kind {
            // Writing into a String can't fail.
            _ = write!(line, " ┆ {}", fmt_codepoints(sequence.codepoints()));
        }
        _ = write!(line, " ┆ \"{}\"", escape_controls(&get_text(&span)));

        // % is Display, ? is Debug.
        tracing::debug!(message = "🔎 Emoji scan", span = %line);

        acc.push_str(&line);
        acc.push('\n');
    }
    acc
}

/// Keeps each dump entry on one line. Only control characters are escaped.
fn escape_controls(text: &str) -> String {
    let mut acc = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_control() {
            acc.extend(ch.escape_default());
        } else {
            acc.push(ch);
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::global_catalog;

    #[test]
    fn test_dump() {
        let it = global_catalog().dump("ab🇨🇳");
        assert_eq!(
            it,
            "Span[plain] ┆ byte: [ 0,  2] size: 2 ┆ codepoints: 2 ┆ \"ab\"\n\
             Span[RegionalFlag] ┆ byte: [ 2, 10] size: 8 ┆ codepoints: 2 ┆ 1F1E8 1F1F3 ┆ \"🇨🇳\"\n"
        );
    }

    #[test]
    fn test_dump_absorbed_selector() {
        let it = global_catalog().dump("1\u{20E3}\u{FE0F}");
        assert_eq!(
            it,
            "Span[Keycap] ┆ byte: [ 0,  7] size: 7 ┆ codepoints: 3 ┆ 0031 20E3 ┆ \"1\u{20E3}\u{FE0F}\"\n"
        );
    }

    #[test]
    fn test_dump_escapes_controls() {
        let it = global_catalog().dump("a\nb");
        assert_eq!(
            it,
            "Span[plain] ┆ byte: [ 0,  3] size: 3 ┆ codepoints: 3 ┆ \"a\\nb\"\n"
        );
    }

    #[test]
    fn test_dump_empty_and_invalid() {
        assert_eq!(global_catalog().dump(""), "");
        let it = global_catalog().dump_bytes(&[b'a', 0xFF]);
        assert_eq!(
            it,
            "Span[plain] ┆ byte: [ 0,  2] size: 2 ┆ codepoints: 2 ┆ \"a\u{FFFD}\"\n"
        );
    }
}
