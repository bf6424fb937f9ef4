// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use crate::SequenceKind;

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`],
/// which are [`std::error::Error`] wrappers. Use this in binaries and at the application
/// edge, where any error just needs to be reported.
pub type CommonResult<T> = miette::Result<T>;

/// The only way building a [`crate::Catalog`] can fail. A catalog that can't be built is
/// never served: construction refuses to hand out a partially valid catalog.
///
/// | Variant                        | Cause                                                  |
/// | :----------------------------- | :----------------------------------------------------- |
/// | [`EmptySequence`]              | An entry with no codepoints at all                     |
/// | [`DuplicateSequence`]          | Two entries with exactly the same codepoints           |
/// | [`GrammarMismatch`]            | An entry whose codepoints don't fit its declared kind  |
/// | [`GlobalAlreadyInitialized`]   | The global catalog was already built with other config |
///
/// [`EmptySequence`]: Self::EmptySequence
/// [`DuplicateSequence`]: Self::DuplicateSequence
/// [`GrammarMismatch`]: Self::GrammarMismatch
/// [`GlobalAlreadyInitialized`]: Self::GlobalAlreadyInitialized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum CatalogError {
    #[error("🫙 Catalog entry #{index} has no codepoints")]
    #[diagnostic(
        code(r3bl_emoji::catalog::empty_sequence),
        help("Every catalog entry needs at least one codepoint.")
    )]
    EmptySequence { index: usize },

    #[error("👯 Catalog entry [{codepoints}] appears more than once")]
    #[diagnostic(
        code(r3bl_emoji::catalog::duplicate_sequence),
        help("Remove the repeated entry from the catalog data.")
    )]
    DuplicateSequence { codepoints: String },

    #[error("🧩 Catalog entry [{codepoints}] is not a valid {kind} sequence")]
    #[diagnostic(
        code(r3bl_emoji::catalog::grammar_mismatch),
        help("Fix the codepoints or tag the entry with the kind that it actually is.")
    )]
    GrammarMismatch {
        codepoints: String,
        kind: SequenceKind,
    },

    #[error("🔒 The global catalog was already initialized with a different config")]
    #[diagnostic(
        code(r3bl_emoji::catalog::global_already_initialized),
        help(
            "Call `try_init_global_catalog()` once, before the first call to any of \
             the free functions like `has_emoji()`."
        )
    )]
    GlobalAlreadyInitialized,
}

/// Format codepoints the way the Unicode data files do, eg: `1F469 200D 1F466`.
#[must_use]
pub fn fmt_codepoints(codepoints: &[char]) -> String {
    codepoints
        .iter()
        .map(|it| format!("{:04X}", u32::from(*it)))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_fmt_codepoints() {
        assert_eq2!(fmt_codepoints(&['#', '\u{FE0F}', '\u{20E3}']), "0023 FE0F 20E3");
        assert_eq2!(fmt_codepoints(&['\u{1F1E8}', '\u{1F1F3}']), "1F1E8 1F1F3");
        assert_eq2!(fmt_codepoints(&[]), "");
    }

    #[test]
    fn test_error_display() {
        let err = CatalogError::GrammarMismatch {
            codepoints: fmt_codepoints(&['\u{1F1E8}']),
            kind: SequenceKind::RegionalFlag,
        };
        assert_eq2!(
            err.to_string(),
            "🧩 Catalog entry [1F1E8] is not a valid RegionalFlag sequence"
        );

        let err = CatalogError::EmptySequence { index: 3 };
        assert_eq2!(err.to_string(), "🫙 Catalog entry #3 has no codepoints");
    }
}
