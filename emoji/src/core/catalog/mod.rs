// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The emoji sequence catalog: what counts as an emoji.
//!
//! Everything that is policy (which codepoints are emoji on their own, whether text
//! presentation sequences count, etc.) lives here, as catalog contents. The
//! [`crate::PrefixMatcher`] and the [`crate::scan`] machinery on top of it only ever ask
//! one question: "which sequences start with this codepoint, longest first?"

// Attach sources.
pub mod catalog_builder;
pub mod catalog_config;
pub mod catalog_data;
pub mod catalog_impl;
pub mod global_catalog;
pub mod sequence;
pub mod sequence_kind;

// Re-export.
pub use catalog_builder::*;
pub use catalog_config::*;
pub use catalog_impl::*;
pub use global_catalog::*;
pub use sequence::*;
pub use sequence_kind::*;
