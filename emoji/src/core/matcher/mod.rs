// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod prefix_matcher;
pub mod utf8_cursor;

// Re-export.
pub use prefix_matcher::*;
pub use utf8_cursor::*;
