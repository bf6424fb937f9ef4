// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use r3bl_emoji::Catalog;

#[must_use]
pub fn unrecoverable_error_msg() -> &'static str {
    "Could not run emo due to the following problem"
}

#[must_use]
pub fn has_emoji_msg(has_emoji: bool) -> &'static str {
    if has_emoji { "true" } else { "false" }
}

/// One row per [`r3bl_emoji::SequenceKind`], then the totals.
#[must_use]
pub fn catalog_summary_msg(catalog: &Catalog) -> String {
    use std::fmt::Write as _;

    let mut acc = String::new();
    for (kind, count) in catalog.kind_counts() {
        let kind: &'static str = kind.into();
        // Writing to a String can't fail.
        _ = writeln!(acc, "{kind:<20} {count:>6}");
    }
    _ = writeln!(acc, "{:<20} {:>6}", "Total", catalog.len());
    _ = writeln!(
        acc,
        "{:<20} {:>6}",
        "Longest (codepoints)",
        catalog.max_sequence_len()
    );
    acc
}
