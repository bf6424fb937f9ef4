// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl-emoji-cmdr
//!
//! The `emo` binary. It runs the public operations of [`r3bl_emoji`] over text that is
//! passed as arguments, or piped in on stdin when there are none.
//!
//! ```sh
//! emo has "hello 👋"                 # true
//! emo filter "1️⃣23"                  # 23
//! emo replace --with "#" "1️⃣23"      # #23
//! emo len "👩‍👩‍👦🇨🇳3"                   # 3
//! emo dump "👨‍👩‍👧‍👦123"                 # one line per span
//! emo catalog                       # entries per sequence kind
//! cat notes.md | emo filter         # stdin, invalid UTF-8 is kept as is
//! ```
//!
//! Global options:
//! - `-l` / `--enable-logging` writes debug logs to `log.txt`.
//! - `--bare-legacy-symbols` treats symbols like `⚡` as emoji even without U+FE0F.
//! - `--no-absorb-trailing-selector` stops a match from extending over a stray U+FE0F.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod emo;

// Re-export.
pub use emo::*;
