// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod catalog_ops;
pub mod dump;
pub mod emoji_token;
pub mod public_api;

// Re-export.
pub use emoji_token::*;
pub use public_api::*;
