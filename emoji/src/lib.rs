// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words keycap keycaps

//! # r3bl_emoji
//!
//! Identify, measure, filter, and rewrite emoji grapheme clusters in arbitrary Unicode
//! text.
//!
//! An emoji that a user perceives as a single glyph can take up many codepoints, and
//! many more bytes in `UTF-8`:
//!
//! | Emoji            | Grammar            | Codepoints | Bytes |
//! | :--------------- | :----------------- | :--------- | :---- |
//! | `😀`             | basic              | 1          | 4     |
//! | `⚡️`             | presentation       | 2          | 6     |
//! | `✍🏿`             | modifier           | 2          | 7     |
//! | `🇨🇳`             | regional flag      | 2          | 8     |
//! | `1️⃣`             | keycap             | 3          | 7     |
//! | `👨‍👩‍👧‍👦`             | ZWJ sequence       | 7          | 25    |
//! | `🏴󠁧󠁢󠁥󠁮󠁧󠁿`             | tag sequence       | 7          | 28    |
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌────────────────┐   ┌────────────┐   ┌───────────────────┐
//! │ Catalog      │──▶│ PrefixMatcher  │──▶│ SpanIter   │──▶│ has_emoji()       │
//! │ (immutable,  │   │ (longest match │   │ (lazy, one │   │ filter_emoji()    │
//! │  indexed by  │   │  at a position)│   │  pass)     │   │ replace_emoji()   │
//! │  first cp)   │   └────────────────┘   └────────────┘   │ human_read_len()  │
//! └──────────────┘                                         │ dump()            │
//!                                                          └───────────────────┘
//! ```
//!
//! - [`Catalog`] is built once from the bundled data (see [`CatalogBuilder`]) and then
//!   only read. It is [`Send`] + [`Sync`] and can be shared by any number of scans.
//! - [`PrefixMatcher`] answers "what is the longest emoji sequence starting here?".
//! - [`SpanIter`] (created by [`scan()`] and [`scan_bytes()`]) walks the input once and
//!   yields [`Span`]s that are either plain runs or emoji tokens, with no gaps and no
//!   overlaps.
//! - The public operations are one pass consumers of the spans.
//!
//! # Example
//!
//! ```
//! use r3bl_emoji::{filter_emoji, has_emoji, human_read_len, replace_emoji};
//!
//! assert!(has_emoji("1\u{FE0F}\u{20E3}"));
//! assert!(!has_emoji("一"));
//! assert_eq!(filter_emoji("1\u{FE0F}\u{20E3}23"), "23");
//! assert_eq!(replace_emoji("1\u{FE0F}\u{20E3}23", |_| "#"), "#23");
//! assert_eq!(human_read_len("👩‍👩‍👦🇨🇳3"), 3);
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod core;

// Re-export.
pub use core::*;
